//! Feature assembly: merging user inputs with defaults.
//!
//! One assembler serves every front-end variant; which slots are
//! user-sourced is configuration ([`CollectedFields`]), not a separate
//! code path per form.

use crate::defaults::DefaultValueTable;
use crate::record::FeatureRecord;
use crate::schema::FeatureSchema;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// The schema slots a front-end collects from the user. Purely
/// descriptive: the assembler accepts any user-supplied slot and this set
/// tells a form which widgets to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectedFields {
    names: Vec<String>,
}

impl CollectedFields {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The reduced form: the five key details the shipped front-end asks
    /// for, everything else defaulted.
    #[must_use]
    pub fn minimal() -> Self {
        Self::new([
            "Age",
            "Gender",
            "Category",
            "Purchase Amount (USD)",
            "Payment Method",
        ])
    }

    /// The full form: every schema slot is user-sourced.
    #[must_use]
    pub fn all(schema: &FeatureSchema) -> Self {
        Self::new(schema.names())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Merge user inputs over defaults into a record with exactly one value
/// per schema slot. User-supplied values always win; extra user keys not
/// in the schema are not carried over. A slot covered by neither source
/// fails with [`Error::MissingFeature`].
pub fn assemble(
    user_inputs: &FeatureRecord,
    schema: &FeatureSchema,
    defaults: &DefaultValueTable,
) -> Result<FeatureRecord> {
    let mut record = FeatureRecord::new();

    for slot in schema.slots() {
        let value = user_inputs
            .get(&slot.name)
            .or_else(|| defaults.get(&slot.name))
            .ok_or_else(|| Error::MissingFeature(slot.name.clone()))?;
        record.insert(slot.name.clone(), value.clone());
    }

    Ok(record)
}
