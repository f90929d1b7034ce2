// Application state module
// Shared, read-only runtime state handed to every connection

use std::sync::atomic::AtomicUsize;

use super::types::Config;
use crate::translator::Translator;

/// Application state
pub struct AppState {
    pub config: Config,
    pub translator: Translator,
    pub active_connections: AtomicUsize,
}

impl AppState {
    /// Build state from configuration, seeding the translator as configured
    pub fn new(config: &Config) -> Self {
        let translator = match config.translator.seed {
            Some(seed) => Translator::with_seed(seed),
            None => Translator::from_entropy(),
        };

        Self {
            config: config.clone(),
            translator: translator.with_max_identifiers(config.translator.max_identifiers),
            active_connections: AtomicUsize::new(0),
        }
    }
}
