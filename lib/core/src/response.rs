//! The result shape handed back to the front-end.
//!
//! A request yields either a prediction or a structured error, never
//! both. The caller decides how to render either side.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Successful outcome of one prediction request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Human-readable class label (decoded, or the raw class code's
    /// string form when no decoder is available).
    pub label: String,

    /// Maximum per-class probability estimate, when the classifier
    /// supports estimates. Absent otherwise, never reported as zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

/// Wire-shaped outcome: prediction on success, `{errorKind, message}` on
/// failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Success(Prediction),
    #[serde(rename_all = "camelCase")]
    Failure {
        error_kind: &'static str,
        message: String,
    },
}

impl PredictionResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, PredictionResponse::Success(_))
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match self {
            PredictionResponse::Success(p) => Some(p),
            PredictionResponse::Failure { .. } => None,
        }
    }
}

impl From<Result<Prediction, Error>> for PredictionResponse {
    fn from(result: Result<Prediction, Error>) -> Self {
        match result {
            Ok(prediction) => PredictionResponse::Success(prediction),
            Err(err) => PredictionResponse::Failure {
                error_kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_wire_shape() {
        let response = PredictionResponse::Success(Prediction {
            label: "Yes".to_string(),
            confidence: Some(0.78),
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"label": "Yes", "confidence": 0.78}));
    }

    #[test]
    fn test_absent_confidence_is_omitted_not_zero() {
        let response = PredictionResponse::Success(Prediction {
            label: "No".to_string(),
            confidence: None,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"label": "No"}));
    }

    #[test]
    fn test_failure_wire_shape() {
        let err = Error::OutOfVocabulary {
            field: "Category".to_string(),
            value: "Spaceships".to_string(),
        };
        let response: PredictionResponse = Err::<Prediction, _>(err).into();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errorKind"], "out_of_vocabulary");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("Spaceships"));
        assert!(json.get("label").is_none());
    }
}
