//! Shared application state.

use std::sync::Arc;

use crate::field::FieldSynthesizer;

/// State shared by all handlers.
///
/// The synthesizer is immutable, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub synth: Arc<FieldSynthesizer>,
}

impl AppState {
    pub fn new(synth: FieldSynthesizer) -> Self {
        Self {
            synth: Arc::new(synth),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FieldSynthesizer::default())
    }
}
