//! # shoptrend Core
//!
//! Core library for the shoptrend subscription predictor.
//!
//! This crate provides the inference-time pipeline around a set of fitted
//! artifacts:
//!
//! - [`FeatureSchema`] - The fixed, ordered feature layout from training
//! - [`CategoricalEncoder`] - Closed-vocabulary string↔code bijections
//! - [`StandardScaler`] - Fitted per-column standardization
//! - [`KnnClassifier`] - Brute-force k-nearest-neighbor classification
//! - [`Predictor`] - assemble → encode → scale → predict → decode
//!
//! ## Example
//!
//! ```rust
//! use shoptrend_core::{
//!     CategoricalEncoder, DefaultsConfig, EncoderSet, FeatureRecord, FeatureSchema,
//!     KnnClassifier, Predictor, PredictorConfig, StandardScaler, Vector,
//! };
//!
//! let mut encoders = EncoderSet::new();
//! encoders.insert("Gender".into(), CategoricalEncoder::fit(["Male", "Female"]));
//! encoders.insert("Subscription Status".into(), CategoricalEncoder::fit(["Yes", "No"]));
//!
//! let schema = FeatureSchema::from_order(["Age", "Gender"], &encoders);
//! let scaler = StandardScaler::new(vec![40.0, 0.5], vec![15.0, 0.5]).unwrap();
//! let classifier = KnnClassifier::new(
//!     1,
//!     vec![Vector::new(vec![-1.0, -1.0]), Vector::new(vec![1.0, 1.0])],
//!     vec![1, 0],
//! )
//! .unwrap();
//!
//! let predictor = Predictor::new(
//!     schema,
//!     encoders,
//!     scaler,
//!     Box::new(classifier),
//!     PredictorConfig {
//!         target_field: "Subscription Status".into(),
//!         defaults: DefaultsConfig::default(),
//!     },
//! )
//! .unwrap();
//!
//! let inputs = FeatureRecord::new().with("Age", 25u32).with("Gender", "Female");
//! let prediction = predictor.predict(&inputs).unwrap();
//! assert!(prediction.confidence.is_some());
//! ```

pub mod assemble;
pub mod classifier;
pub mod defaults;
pub mod encoder;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod response;
pub mod scaler;
pub mod schema;
pub mod vector;

pub use assemble::{assemble, CollectedFields};
pub use classifier::{Classifier, KnnClassifier};
pub use defaults::{DefaultValueTable, DefaultsConfig};
pub use encoder::{CategoricalEncoder, EncoderSet};
pub use error::{Error, Result};
pub use pipeline::{encode, Predictor, PredictorConfig};
pub use record::{FeatureRecord, FeatureValue};
pub use response::{Prediction, PredictionResponse};
pub use scaler::StandardScaler;
pub use schema::{FeatureKind, FeatureSchema, FeatureSlot};
pub use vector::Vector;
