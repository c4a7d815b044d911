//! Voice input/output
//!
//! The speech backends are external collaborators; this module defines the
//! engine seam, the voice error taxonomy, and the adapter that owns the
//! speech-output lifecycle.

pub mod engine;
pub mod error;
pub mod output;

pub use engine::{NullSpeechEngine, SpeechEngine};
pub use error::VoiceError;
pub use output::VoiceAdapter;
