//! Voice-specific error types
//!
//! Failures in the voice path are reported to the user and yield no input;
//! they never terminate the session.

use thiserror::Error;

/// Errors that can occur in the voice input/output path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    /// Captured audio could not be transcribed
    #[error("Sorry, I couldn't understand that")]
    Unrecognized,

    /// The backing transcription service could not be reached
    #[error("Sorry, the speech service is down: {0}")]
    ServiceUnavailable(String),
}
