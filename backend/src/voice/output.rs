//! Voice I/O adapter
//!
//! Wraps a [`SpeechEngine`] with the widget's speech lifecycle: synthesis is
//! fire-and-forget on its own task, a replacement `speak` aborts the prior
//! task best-effort, and capture is marshalled onto the blocking pool.

use crate::voice::engine::SpeechEngine;
use crate::voice::error::VoiceError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Adapter around the speech backends
pub struct VoiceAdapter {
    engine: Arc<dyn SpeechEngine>,
    /// Set while a synthesis task is running; cleared by the task itself.
    /// A replacement `speak` racing the old task's clear can leave this
    /// transiently stale; consequences are cosmetic.
    speech_in_progress: Arc<AtomicBool>,
    current: Mutex<Option<JoinHandle<()>>>,
}

impl VoiceAdapter {
    /// Create an adapter over the given engine
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            speech_in_progress: Arc::new(AtomicBool::new(false)),
            current: Mutex::new(None),
        }
    }

    /// Whether a synthesis task is currently running
    pub fn speech_in_progress(&self) -> bool {
        self.speech_in_progress.load(Ordering::SeqCst)
    }

    /// Speak `text` without blocking the caller
    ///
    /// Any still-running synthesis is aborted (best-effort) before the new
    /// task starts. The task sets the in-progress flag, synthesizes, and
    /// clears the flag on its way out. The caller gets no completion signal.
    pub async fn speak(&self, text: String) {
        let mut current = self.current.lock().await;
        if let Some(handle) = current.take() {
            if !handle.is_finished() {
                debug!("Aborting in-progress speech before starting new synthesis");
                handle.abort();
                self.speech_in_progress.store(false, Ordering::SeqCst);
            }
        }

        let engine = self.engine.clone();
        let flag = self.speech_in_progress.clone();
        *current = Some(tokio::spawn(async move {
            flag.store(true, Ordering::SeqCst);
            if let Err(e) = engine.synthesize(&text).await {
                warn!(error = %e, "Speech synthesis failed");
            }
            flag.store(false, Ordering::SeqCst);
        }));
    }

    /// Stop any ongoing speech and clear the in-progress flag
    pub async fn stop(&self) {
        let mut current = self.current.lock().await;
        if let Some(handle) = current.take() {
            handle.abort();
        }
        self.speech_in_progress.store(false, Ordering::SeqCst);
    }

    /// Capture one utterance and convert it to text
    ///
    /// Blocks (on the blocking pool) until the engine's end-of-utterance
    /// heuristic fires. There is no cancellation token: once started, the
    /// capture runs to completion or error.
    pub async fn listen(&self) -> Result<String, VoiceError> {
        let engine = self.engine.clone();
        tokio::task::spawn_blocking(move || engine.transcribe())
            .await
            .map_err(|e| VoiceError::ServiceUnavailable(e.to_string()))?
    }
}
