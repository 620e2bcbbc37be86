use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw feature value as supplied by the caller or the default table,
/// before any encoding or scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f32),
    Text(String),
}

impl FeatureValue {
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(s) => Some(s),
            FeatureValue::Number(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f32> {
        match self {
            FeatureValue::Number(n) => Some(*n),
            FeatureValue::Text(_) => None,
        }
    }
}

impl From<f32> for FeatureValue {
    fn from(n: f32) -> Self {
        FeatureValue::Number(n)
    }
}

impl From<u32> for FeatureValue {
    fn from(n: u32) -> Self {
        FeatureValue::Number(n as f32)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Text(s.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        FeatureValue::Text(s)
    }
}

/// One request's raw features, keyed by feature name.
///
/// Built fresh per prediction request from the user-supplied subset plus
/// defaults; never reused or cached across requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    values: HashMap<String, FeatureValue>,
}

impl FeatureRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FeatureValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style insert, convenient for request construction.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.insert(name, value);
        self
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

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, FeatureValue)> for FeatureRecord {
    fn from_iter<T: IntoIterator<Item = (String, FeatureValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
