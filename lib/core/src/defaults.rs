//! Default values for schema slots the front-end does not collect.
//!
//! The model needs every feature internally; non-collected slots are
//! filled from this table. Which value stands in for a slot is
//! configuration, not pipeline behavior: numerics come from
//! [`DefaultsConfig`], categoricals from the first vocabulary entry of the
//! slot's fitted encoder unless overridden. Overrides are still subject to
//! vocabulary checking in the encode stage.

use crate::encoder::EncoderSet;
use crate::record::FeatureValue;
use crate::schema::{FeatureKind, FeatureSchema};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configured fallback values for non-collected slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Fixed constants for numeric slots, keyed by feature name.
    pub numeric: HashMap<String, f32>,

    /// Overrides for categorical slots, keyed by feature name. Slots
    /// without an override fall back to the first vocabulary entry.
    pub categorical: HashMap<String, String>,
}

impl DefaultsConfig {
    /// The defaults the shopping-trends model was shipped with.
    #[must_use]
    pub fn shopping_trends() -> Self {
        let numeric = HashMap::from([
            ("Review Rating".to_string(), 3.5),
            ("Previous Purchases".to_string(), 1.0),
        ]);
        Self {
            numeric,
            categorical: HashMap::new(),
        }
    }
}

/// Resolved per-slot fallback values, fixed once the artifacts are loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultValueTable {
    values: HashMap<String, FeatureValue>,
}

impl DefaultValueTable {
    /// Derive the table for a schema: configured constants for numeric
    /// slots, override or first vocabulary entry for categorical slots.
    /// Slots with no derivable default are simply absent; assembly reports
    /// them if neither the user nor this table covers them.
    #[must_use]
    pub fn derive(schema: &FeatureSchema, encoders: &EncoderSet, config: &DefaultsConfig) -> Self {
        let mut values = HashMap::new();

        for slot in schema.slots() {
            match slot.kind {
                FeatureKind::Numeric => {
                    if let Some(n) = config.numeric.get(&slot.name) {
                        values.insert(slot.name.clone(), FeatureValue::Number(*n));
                    }
                }
                FeatureKind::Categorical => {
                    let label = config
                        .categorical
                        .get(&slot.name)
                        .map(String::as_str)
                        .or_else(|| encoders.get(&slot.name).and_then(|e| e.first_class()));
                    if let Some(label) = label {
                        values.insert(slot.name.clone(), FeatureValue::from(label));
                    }
                }
            }
        }

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
