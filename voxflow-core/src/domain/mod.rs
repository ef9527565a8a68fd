//! Core domain types
//!
//! These types represent the transcription job lifecycle as the node sees
//! it: an upload handshake produces a job, and status polls observe that
//! job until it reaches a terminal state.

pub mod job;
pub mod transcription;
