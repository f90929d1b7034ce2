//! Identifier translation
//!
//! Maps each incoming identifier to a freshly drawn random `u64`, rendered in
//! base 10. No mapping survives the call: the same identifier gets a new value
//! every time.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::TranslateError;

/// Identifier -> replacement value
pub type Mapping = HashMap<String, String>;

/// Owns the PRNG shared by every request
pub struct Translator {
    rng: Mutex<StdRng>,
    max_identifiers: Option<usize>,
}

impl Translator {
    /// Seed from OS entropy, once per process
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic generator, same seed gives the same sequence
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            max_identifiers: None,
        }
    }

    #[must_use]
    pub fn with_max_identifiers(mut self, limit: Option<usize>) -> Self {
        self.max_identifiers = limit;
        self
    }

    /// Translate a batch of identifiers.
    ///
    /// Duplicates collapse into one key, the last drawn value wins.
    pub fn translate(&self, ids: Vec<String>) -> Result<Mapping, TranslateError> {
        if let Some(limit) = self.max_identifiers {
            if ids.len() > limit {
                return Err(TranslateError::TooManyIdentifiers {
                    count: ids.len(),
                    limit,
                });
            }
        }

        let values = self.draw(ids.len());
        Ok(ids
            .into_iter()
            .zip(values)
            .map(|(id, value)| (id, value.to_string()))
            .collect())
    }

    /// Draw `count` values; the lock is released before any formatting
    fn draw(&self, count: usize) -> Vec<u64> {
        // A poisoned lock still holds a usable generator
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        (0..count).map(|_| rng.gen()).collect()
    }

    /// Decode, translate and encode a raw request body
    pub fn translate_body(&self, body: &[u8]) -> Result<String, TranslateError> {
        let ids = decode_identifiers(body)?;
        let mapping = self.translate(ids)?;
        encode_mapping(&mapping)
    }
}

/// Parse a body as a JSON array of strings
pub fn decode_identifiers(body: &[u8]) -> Result<Vec<String>, TranslateError> {
    serde_json::from_slice(body).map_err(TranslateError::Decode)
}

pub fn encode_mapping(mapping: &Mapping) -> Result<String, TranslateError> {
    serde_json::to_string(mapping).map_err(TranslateError::Encode)
}
