//! Loading and saving the four fitted artifacts.
//!
//! The artifact directory is read exactly once at startup. A missing or
//! undecodable file is reported with enough detail to tell the two causes
//! apart, and the host must refuse to serve predictions after either.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shoptrend_core::{
    EncoderSet, FeatureSchema, KnnClassifier, Predictor, PredictorConfig, StandardScaler,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Fitted classifier artifact file name.
pub const CLASSIFIER_FILE: &str = "knn_model.bin";
/// Fitted scaler artifact file name.
pub const SCALER_FILE: &str = "scaler.bin";
/// Fitted encoder-set artifact file name.
pub const ENCODERS_FILE: &str = "label_encoders.bin";
/// Training-time feature order artifact file name.
pub const FEATURE_ORDER_FILE: &str = "feature_order.bin";

pub type Result<T> = std::result::Result<T, ArtifactError>;

/// Startup-fatal artifact failures. `NotFound` and `Corrupt` are kept
/// apart so the report tells the operator whether to restore a file or
/// re-export it.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact not found: {name} (expected at {})", path.display())]
    NotFound { name: &'static str, path: PathBuf },

    #[error("Artifact corrupt or incompatible: {name}: {reason}")]
    Corrupt { name: &'static str, reason: String },

    #[error("IO error on artifact {name}: {source}")]
    Io {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl ArtifactError {
    /// The artifact file the failure refers to.
    #[must_use]
    pub fn artifact(&self) -> &'static str {
        match self {
            ArtifactError::NotFound { name, .. }
            | ArtifactError::Corrupt { name, .. }
            | ArtifactError::Io { name, .. } => name,
        }
    }
}

/// The four fitted collaborators the pipeline consumes, as produced by
/// the offline training process.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactBundle {
    pub classifier: KnnClassifier,
    pub scaler: StandardScaler,
    pub encoders: EncoderSet,
    pub feature_order: Vec<String>,
}

impl ArtifactBundle {
    /// Load all four artifacts from a directory. Fails on the first
    /// missing or undecodable file; no partial bundle is ever returned.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let classifier = load_artifact::<KnnClassifier>(dir, CLASSIFIER_FILE)?;
        let scaler = load_artifact::<StandardScaler>(dir, SCALER_FILE)?;
        let encoders = load_artifact::<EncoderSet>(dir, ENCODERS_FILE)?;
        let feature_order = load_artifact::<Vec<String>>(dir, FEATURE_ORDER_FILE)?;

        info!(
            dir = %dir.display(),
            features = feature_order.len(),
            encoders = encoders.len(),
            "artifacts loaded"
        );

        Ok(Self {
            classifier,
            scaler,
            encoders,
            feature_order,
        })
    }

    /// Write all four artifacts into a directory, atomically per file.
    /// This is the output side of the training collaborator and the test
    /// fixture builder; the serving path never writes.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|source| ArtifactError::Io {
            name: "artifact directory",
            source,
        })?;

        save_artifact(dir, CLASSIFIER_FILE, &self.classifier)?;
        save_artifact(dir, SCALER_FILE, &self.scaler)?;
        save_artifact(dir, ENCODERS_FILE, &self.encoders)?;
        save_artifact(dir, FEATURE_ORDER_FILE, &self.feature_order)?;
        Ok(())
    }

    /// Derive the typed feature schema from the feature order and the
    /// encoder set.
    #[must_use]
    pub fn schema(&self) -> FeatureSchema {
        FeatureSchema::from_order(self.feature_order.iter().cloned(), &self.encoders)
    }

    /// Wire the bundle into a ready predictor.
    pub fn into_predictor(self, config: PredictorConfig) -> shoptrend_core::Result<Predictor> {
        let schema = self.schema();
        Predictor::new(
            schema,
            self.encoders,
            self.scaler,
            Box::new(self.classifier),
            config,
        )
    }
}

fn load_artifact<T: DeserializeOwned>(dir: &Path, name: &'static str) -> Result<T> {
    let path = dir.join(name);
    if !path.exists() {
        return Err(ArtifactError::NotFound { name, path });
    }

    let bytes = std::fs::read(&path).map_err(|source| ArtifactError::Io { name, source })?;
    let artifact = bincode::deserialize(&bytes).map_err(|e| ArtifactError::Corrupt {
        name,
        reason: e.to_string(),
    })?;

    debug!(artifact = name, bytes = bytes.len(), "artifact loaded");
    Ok(artifact)
}

fn save_artifact<T: Serialize>(dir: &Path, name: &'static str, artifact: &T) -> Result<()> {
    let data = bincode::serialize(artifact).map_err(|e| ArtifactError::Corrupt {
        name,
        reason: e.to_string(),
    })?;

    // Write to a temporary file first, then rename into place.
    let path = dir.join(name);
    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, &data).map_err(|source| ArtifactError::Io { name, source })?;
    std::fs::rename(&temp_path, &path).map_err(|source| ArtifactError::Io { name, source })?;

    debug!(artifact = name, bytes = data.len(), "artifact saved");
    Ok(())
}
