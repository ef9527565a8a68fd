//! Voxflow Core
//!
//! Core types for the Voxflow transcription node.
//!
//! This crate contains:
//! - Domain types: upload jobs, job states, transcription payloads
//! - DTOs: wire-format request/response shapes for the transcription API

pub mod domain;
pub mod dto;
