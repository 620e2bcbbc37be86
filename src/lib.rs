//! # shoptrend
//!
//! Subscription-status predictor for shopping-trends data.
//!
//! shoptrend wraps a set of fitted artifacts (a KNN classifier, a
//! standard scaler, per-column label encoders, and the training-time
//! feature order) behind a single-request inference pipeline: the caller
//! supplies a handful of fields, the rest are filled from defaults, and
//! the pipeline reproduces the training-time preprocessing before
//! predicting.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install shoptrend
//! shoptrend --artifact-dir ./artifacts --age 30 --gender Female \
//!     --category Apparel --amount 50.0 --payment-method "Credit Card"
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use shoptrend::prelude::*;
//!
//! // Load the fitted artifacts once at startup (fail fast on any problem)
//! let bundle = ArtifactBundle::load("./artifacts").unwrap();
//! let predictor = bundle.into_predictor(PredictorConfig::default()).unwrap();
//!
//! // Each request owns its record; the predictor is shared read-only
//! let inputs = FeatureRecord::new()
//!     .with("Age", 30u32)
//!     .with("Gender", "Female")
//!     .with("Category", "Apparel")
//!     .with("Purchase Amount (USD)", 50.0f32)
//!     .with("Payment Method", "Credit Card");
//!
//! let response = predictor.respond(&inputs);
//! ```
//!
//! ## Crate Structure
//!
//! shoptrend is composed of two member crates:
//!
//! - [`shoptrend-core`](https://docs.rs/shoptrend-core) - Pipeline data structures and inference (schema, encoders, scaler, KNN, predictor)
//! - [`shoptrend-artifacts`](https://docs.rs/shoptrend-artifacts) - Artifact persistence (bincode load/save, fail-fast errors)

// Re-export core types
pub use shoptrend_core::{
    assemble, encode, CategoricalEncoder, Classifier, CollectedFields, DefaultValueTable,
    DefaultsConfig, EncoderSet, Error, FeatureKind, FeatureRecord, FeatureSchema, FeatureSlot,
    FeatureValue, KnnClassifier, Prediction, PredictionResponse, Predictor, PredictorConfig,
    Result, StandardScaler, Vector,
};

// Re-export artifact handling
pub use shoptrend_artifacts::{ArtifactBundle, ArtifactError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArtifactBundle, ArtifactError, CategoricalEncoder, Classifier, CollectedFields,
        DefaultValueTable, DefaultsConfig, EncoderSet, Error, FeatureRecord, FeatureSchema,
        FeatureValue, KnnClassifier, Prediction, PredictionResponse, Predictor, PredictorConfig,
        Result, StandardScaler, Vector,
    };
}
