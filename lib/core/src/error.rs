use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Per-request pipeline errors. All of these are deterministic given the
/// same input and artifacts, so none of them is worth retrying.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing value for feature: {0}")]
    MissingFeature(String),

    #[error("Features missing from assembled record: {}", .0.join(", "))]
    MissingFeatures(Vec<String>),

    #[error("No encoder for feature: {0}")]
    UnknownEncoder(String),

    #[error("Value not in vocabulary for feature '{field}': {value}")]
    OutOfVocabulary { field: String, value: String },

    #[error("Shape mismatch: expected {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Prediction failed: {0}")]
    Prediction(String),
}

impl Error {
    /// Stable machine-readable kind, used as `errorKind` in responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingFeature(_) | Error::MissingFeatures(_) => "missing_feature",
            Error::UnknownEncoder(_) => "unknown_encoder",
            Error::OutOfVocabulary { .. } => "out_of_vocabulary",
            Error::ShapeMismatch { .. } => "shape_mismatch",
            Error::InvalidConfig(_) => "invalid_config",
            Error::Prediction(_) => "prediction_error",
        }
    }
}
