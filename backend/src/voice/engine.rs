//! Speech engine seam
//!
//! Defines the trait the voice adapter drives and a null implementation for
//! deployments without an audio backend.

use crate::voice::error::VoiceError;
use async_trait::async_trait;

/// Text-to-speech and speech-to-text backend
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Synthesize `text` as audio, returning when playback completes
    async fn synthesize(&self, text: &str) -> Result<(), VoiceError>;

    /// Capture audio until an end-of-utterance heuristic fires and convert
    /// it to text
    ///
    /// Blocks the calling thread; the adapter marshals this onto the
    /// blocking pool.
    fn transcribe(&self) -> Result<String, VoiceError>;
}

/// Engine used when no audio backend is configured
///
/// Synthesis silently succeeds; transcription reports the service as
/// unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeechEngine;

#[async_trait]
impl SpeechEngine for NullSpeechEngine {
    async fn synthesize(&self, _text: &str) -> Result<(), VoiceError> {
        Ok(())
    }

    fn transcribe(&self) -> Result<String, VoiceError> {
        Err(VoiceError::ServiceUnavailable(
            "no transcription backend configured".to_string(),
        ))
    }
}
