//! The request-scoped inference pipeline.
//!
//! One request flows assemble → encode → scale → predict → decode; the
//! first failing stage short-circuits the rest. [`Predictor`] owns the
//! immutable artifact set and is shared read-only across requests.

use crate::assemble::assemble;
use crate::classifier::Classifier;
use crate::defaults::{DefaultValueTable, DefaultsConfig};
use crate::encoder::{CategoricalEncoder, EncoderSet};
use crate::record::{FeatureRecord, FeatureValue};
use crate::response::{Prediction, PredictionResponse};
use crate::scaler::StandardScaler;
use crate::schema::FeatureSchema;
use crate::{Error, Result, Vector};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Encode a complete record into a numeric vector in schema order.
///
/// Text values require a fitted encoder and an in-vocabulary label; there
/// is no silent substitution for unseen categories. Numbers pass through.
/// Keys outside the schema are dropped by the projection.
pub fn encode(
    record: &FeatureRecord,
    encoders: &EncoderSet,
    schema: &FeatureSchema,
) -> Result<Vector> {
    let missing: Vec<String> = schema
        .names()
        .filter(|name| !record.contains(name))
        .map(String::from)
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingFeatures(missing));
    }

    let mut data = Vec::with_capacity(schema.len());
    for slot in schema.slots() {
        let value = record
            .get(&slot.name)
            .ok_or_else(|| Error::MissingFeature(slot.name.clone()))?;

        match value {
            FeatureValue::Number(n) => data.push(*n),
            FeatureValue::Text(label) => {
                let encoder = encoders
                    .get(&slot.name)
                    .ok_or_else(|| Error::UnknownEncoder(slot.name.clone()))?;
                let code = encoder.encode(label).ok_or_else(|| Error::OutOfVocabulary {
                    field: slot.name.clone(),
                    value: label.clone(),
                })?;
                data.push(code as f32);
            }
        }
    }

    Ok(Vector::new(data))
}

/// Configuration for wiring loaded artifacts into a [`Predictor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Encoder-set entry that decodes the predicted class back to its
    /// label. Not a feature; removed from the feature encoders at
    /// construction.
    pub target_field: String,

    /// Fallback values for non-collected slots.
    pub defaults: DefaultsConfig,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            target_field: "Subscription Status".to_string(),
            defaults: DefaultsConfig::shopping_trends(),
        }
    }
}

/// The loaded artifact set plus the per-request pipeline.
///
/// Immutable after construction; safe to share across concurrent requests
/// without locking. The probability capability of the classifier is
/// resolved here, once, not re-probed per request.
pub struct Predictor {
    schema: FeatureSchema,
    encoders: EncoderSet,
    scaler: StandardScaler,
    classifier: Box<dyn Classifier>,
    defaults: DefaultValueTable,
    target: Option<CategoricalEncoder>,
    has_probabilities: bool,
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("schema", &self.schema)
            .field("encoders", &self.encoders)
            .field("scaler", &self.scaler)
            .field("classifier", &"<dyn Classifier>")
            .field("defaults", &self.defaults)
            .field("target", &self.target)
            .field("has_probabilities", &self.has_probabilities)
            .finish()
    }
}

impl Predictor {
    pub fn new(
        schema: FeatureSchema,
        mut encoders: EncoderSet,
        scaler: StandardScaler,
        classifier: Box<dyn Classifier>,
        config: PredictorConfig,
    ) -> Result<Self> {
        if scaler.dim() != schema.len() {
            return Err(Error::InvalidConfig(format!(
                "scaler fitted on {} columns but schema has {} slots",
                scaler.dim(),
                schema.len()
            )));
        }
        if classifier.input_dim() != schema.len() {
            return Err(Error::InvalidConfig(format!(
                "classifier expects {} features but schema has {} slots",
                classifier.input_dim(),
                schema.len()
            )));
        }

        let target = encoders.remove(&config.target_field);
        let defaults = DefaultValueTable::derive(&schema, &encoders, &config.defaults);
        let has_probabilities = classifier.supports_probabilities();

        Ok(Self {
            schema,
            encoders,
            scaler,
            classifier,
            defaults,
            target,
            has_probabilities,
        })
    }

    #[inline]
    #[must_use]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    #[inline]
    #[must_use]
    pub fn defaults(&self) -> &DefaultValueTable {
        &self.defaults
    }

    /// Whether predictions carry a confidence score.
    #[inline]
    #[must_use]
    pub fn supports_confidence(&self) -> bool {
        self.has_probabilities
    }

    /// Run the full pipeline for one request.
    pub fn predict(&self, user_inputs: &FeatureRecord) -> Result<Prediction> {
        let record = assemble(user_inputs, &self.schema, &self.defaults)?;
        let encoded = encode(&record, &self.encoders, &self.schema)?;
        let scaled = self.scaler.transform(&encoded)?;
        let class = self.classifier.predict(&scaled)?;

        // Confidence is best-effort: absent when the model has no
        // probability capability or the estimate fails, never an error.
        let confidence = if self.has_probabilities {
            self.classifier
                .probabilities(&scaled)
                .and_then(|probs| probs.into_iter().map(OrderedFloat).max())
                .map(|p| p.0)
        } else {
            None
        };

        let label = match &self.target {
            Some(encoder) => encoder
                .decode(class)
                .map(String::from)
                .unwrap_or_else(|| class.to_string()),
            None => class.to_string(),
        };

        Ok(Prediction { label, confidence })
    }

    /// Run the pipeline and fold any per-request error into the structured
    /// response shape, keeping failures at the pipeline boundary.
    pub fn respond(&self, user_inputs: &FeatureRecord) -> PredictionResponse {
        self.predict(user_inputs).into()
    }
}
