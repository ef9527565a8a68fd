//! Wire-format DTOs for the transcription API
//!
//! Request and response bodies exchanged with the service. The service
//! uses camelCase field names and an in-body `success` flag rather than
//! relying solely on HTTP status codes.

pub mod job;
pub mod upload;
