//! Point-prediction interface and the fitted KNN implementation.
//!
//! The probability capability is optional and declared by the trait, so a
//! host can resolve it once when the model is loaded instead of probing on
//! every request. A model without the capability still predicts; the
//! confidence is simply absent.

use crate::{Error, Result, Vector};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// An opaque fitted model mapping a fixed-length numeric vector to a class
/// code, optionally exposing per-class probability estimates.
pub trait Classifier: Send + Sync {
    /// Number of input features the model expects.
    fn input_dim(&self) -> usize;

    /// Predict the class code for a single input vector.
    fn predict(&self, input: &Vector) -> Result<u32>;

    /// Per-class probability estimates for a single input, if the model
    /// supports them. `None` on unsupported models or failed estimation.
    fn probabilities(&self, input: &Vector) -> Option<Vec<f32>> {
        let _ = input;
        None
    }

    /// Whether `probabilities` returns estimates for valid inputs.
    fn supports_probabilities(&self) -> bool {
        false
    }
}

/// Brute-force k-nearest-neighbor classifier over the fitted training set.
///
/// Euclidean distance, uniform weights, majority vote. Distance ties are
/// broken by training-point index and vote ties toward the lowest class
/// code, so prediction is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnnClassifier {
    k: usize,
    points: Vec<Vector>,
    labels: Vec<u32>,
    n_classes: usize,
}

impl KnnClassifier {
    pub fn new(k: usize, points: Vec<Vector>, labels: Vec<u32>) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidConfig("k must be at least 1".to_string()));
        }
        if points.is_empty() {
            return Err(Error::InvalidConfig(
                "classifier has no training points".to_string(),
            ));
        }
        if points.len() != labels.len() {
            return Err(Error::InvalidConfig(format!(
                "{} training points but {} labels",
                points.len(),
                labels.len()
            )));
        }
        if k > points.len() {
            return Err(Error::InvalidConfig(format!(
                "k = {} exceeds training set size {}",
                k,
                points.len()
            )));
        }
        let dim = points[0].dim();
        if points.iter().any(|p| p.dim() != dim) {
            return Err(Error::InvalidConfig(
                "training points have inconsistent dimensions".to_string(),
            ));
        }

        let n_classes = labels.iter().max().copied().unwrap_or(0) as usize + 1;
        Ok(Self {
            k,
            points,
            labels,
            n_classes,
        })
    }

    #[inline]
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Class-vote counts among the k nearest training points.
    fn vote_counts(&self, input: &Vector) -> Result<Vec<usize>> {
        if input.dim() != self.input_dim() {
            return Err(Error::ShapeMismatch {
                expected: self.input_dim(),
                actual: input.dim(),
            });
        }

        let mut distances: Vec<(OrderedFloat<f32>, usize)> = self
            .points
            .par_iter()
            .enumerate()
            .map(|(i, p)| (OrderedFloat(input.l2_distance(p)), i))
            .collect();
        distances.sort_unstable();

        let mut counts = vec![0usize; self.n_classes];
        for (_, i) in distances.iter().take(self.k) {
            counts[self.labels[*i] as usize] += 1;
        }
        Ok(counts)
    }
}

impl Classifier for KnnClassifier {
    fn input_dim(&self) -> usize {
        self.points[0].dim()
    }

    fn predict(&self, input: &Vector) -> Result<u32> {
        let counts = self.vote_counts(input)?;

        // First maximum wins, so vote ties resolve to the lowest class.
        let mut best = 0usize;
        for (class, count) in counts.iter().enumerate() {
            if *count > counts[best] {
                best = class;
            }
        }
        Ok(best as u32)
    }

    fn probabilities(&self, input: &Vector) -> Option<Vec<f32>> {
        let counts = self.vote_counts(input).ok()?;
        let k = self.k as f32;
        Some(counts.iter().map(|c| *c as f32 / k).collect())
    }

    fn supports_probabilities(&self) -> bool {
        true
    }
}
