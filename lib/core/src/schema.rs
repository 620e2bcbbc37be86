//! Feature schema: the fixed, ordered layout the classifier was trained on.
//!
//! The slot order is part of the fitted artifacts. Every request is
//! projected onto exactly this order before scaling and prediction; a
//! mismatch is a hard error downstream, never silently reordered.

use crate::encoder::EncoderSet;
use serde::{Deserialize, Serialize};

/// Whether a feature slot holds a category label or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    Categorical,
    Numeric,
}

/// One named position in the model's input vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSlot {
    pub name: String,
    pub kind: FeatureKind,
}

impl FeatureSlot {
    pub fn categorical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FeatureKind::Categorical,
        }
    }

    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FeatureKind::Numeric,
        }
    }
}

/// The ordered list of feature slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    slots: Vec<FeatureSlot>,
}

impl FeatureSchema {
    pub fn new(slots: Vec<FeatureSlot>) -> Self {
        Self { slots }
    }

    /// Build a schema from the training-time feature order. A slot is
    /// categorical iff a fitted encoder exists under its name.
    pub fn from_order<I, S>(order: I, encoders: &EncoderSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = order
            .into_iter()
            .map(|name| {
                let name = name.into();
                let kind = if encoders.contains_key(&name) {
                    FeatureKind::Categorical
                } else {
                    FeatureKind::Numeric
                };
                FeatureSlot { name, kind }
            })
            .collect();
        Self { slots }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[FeatureSlot] {
        &self.slots
    }

    /// Slot names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|s| s.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&FeatureSlot> {
        self.slots.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::CategoricalEncoder;

    #[test]
    fn test_from_order_kinds() {
        let mut encoders = EncoderSet::new();
        encoders.insert(
            "Gender".to_string(),
            CategoricalEncoder::fit(["Male", "Female"]),
        );

        let schema = FeatureSchema::from_order(["Age", "Gender"], &encoders);
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.slots()[0].kind, FeatureKind::Numeric);
        assert_eq!(schema.slots()[1].kind, FeatureKind::Categorical);
    }

    #[test]
    fn test_order_preserved() {
        let encoders = EncoderSet::new();
        let schema = FeatureSchema::from_order(["b", "a", "c"], &encoders);
        let names: Vec<_> = schema.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
