//! Transcription payload types
//!
//! The service returns Whisper-style transcripts. These types pass the
//! payload through verbatim; the node never interprets segment contents.

use serde::{Deserialize, Serialize};

/// A completed transcript: full text plus per-segment detail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcription {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub segments: Vec<TranscriptionSegment>,
}

/// One Whisper segment, opaque to the node
///
/// Field names match the service's wire format (snake_case) and are
/// serialized back out unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionSegment {
    pub id: i64,
    pub seek: i64,
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub tokens: Vec<i64>,
    pub temperature: f64,
    pub avg_logprob: f64,
    pub compression_ratio: f64,
    pub no_speech_prob: f64,
}
