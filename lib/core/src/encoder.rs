//! Fitted categorical encoders.
//!
//! Each encoder is a bijection between a closed vocabulary of string
//! labels and the contiguous code range `[0, k)`. The vocabulary is fixed
//! at training time; encoding an unseen string has no defined code and is
//! surfaced as an error by the pipeline, never substituted.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fitted encoders keyed by feature name.
pub type EncoderSet = HashMap<String, CategoricalEncoder>;

/// A fitted string↔code bijection for one categorical feature.
///
/// Only the ordered class list is serialized; the lookup index is rebuilt
/// on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategoricalEncoder {
    classes: Vec<String>,
    index: AHashMap<String, u32>,
}

impl CategoricalEncoder {
    /// Build an encoder from an already-ordered class list. Class order
    /// defines the codes: `classes[i]` encodes to `i`.
    #[must_use]
    pub fn new(classes: Vec<String>) -> Self {
        let index = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i as u32))
            .collect();
        Self { classes, index }
    }

    /// Fit an encoder on observed values: sorted, deduplicated vocabulary,
    /// the same class order a training-time label encoder produces.
    #[must_use]
    pub fn fit<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = values.into_iter().map(Into::into).collect();
        classes.sort_unstable();
        classes.dedup();
        Self::new(classes)
    }

    /// Number of classes in the vocabulary.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The ordered vocabulary.
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// First vocabulary entry, used when deriving default values.
    #[must_use]
    pub fn first_class(&self) -> Option<&str> {
        self.classes.first().map(String::as_str)
    }

    /// Code for a label, or `None` if the label is out of vocabulary.
    pub fn encode(&self, label: &str) -> Option<u32> {
        self.index.get(label).copied()
    }

    /// Label for a code, or `None` if the code is out of range.
    pub fn decode(&self, code: u32) -> Option<&str> {
        self.classes.get(code as usize).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }
}

impl From<Vec<String>> for CategoricalEncoder {
    fn from(classes: Vec<String>) -> Self {
        Self::new(classes)
    }
}

impl From<CategoricalEncoder> for Vec<String> {
    fn from(encoder: CategoricalEncoder) -> Self {
        encoder.classes
    }
}
