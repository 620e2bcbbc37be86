//! # shoptrend Artifacts
//!
//! Persistence layer for the shoptrend subscription predictor.
//!
//! The offline training process exports four fitted artifacts; this crate
//! loads them back as one [`ArtifactBundle`] at startup:
//!
//! - `knn_model.bin` - the fitted [`KnnClassifier`](shoptrend_core::KnnClassifier)
//! - `scaler.bin` - the fitted [`StandardScaler`](shoptrend_core::StandardScaler)
//! - `label_encoders.bin` - the fitted [`EncoderSet`](shoptrend_core::EncoderSet)
//! - `feature_order.bin` - the training-time feature order
//!
//! Loading is fail-fast: any missing or corrupt file yields an
//! [`ArtifactError`] naming the artifact, and no partial bundle is ever
//! handed out.

pub mod bundle;

pub use bundle::{
    ArtifactBundle, ArtifactError, Result, CLASSIFIER_FILE, ENCODERS_FILE, FEATURE_ORDER_FILE,
    SCALER_FILE,
};
