//! Fitted numeric standardization.
//!
//! Applies the per-column `(x - mean) / scale` transform the classifier
//! was trained against. Columns must arrive in the schema order the scaler
//! was fitted on; only the column count is checkable here, and a mismatch
//! is fatal for the request.

use crate::{Error, Result, Vector};
use serde::{Deserialize, Serialize};

/// Per-column center/scale parameters fitted at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f32>,
    scales: Vec<f32>,
}

impl StandardScaler {
    pub fn new(means: Vec<f32>, scales: Vec<f32>) -> Result<Self> {
        if means.len() != scales.len() {
            return Err(Error::InvalidConfig(format!(
                "scaler has {} means but {} scales",
                means.len(),
                scales.len()
            )));
        }
        if scales.iter().any(|s| *s == 0.0) {
            return Err(Error::InvalidConfig(
                "scaler has a zero scale column".to_string(),
            ));
        }
        Ok(Self { means, scales })
    }

    /// Fit on training rows: column means and population standard
    /// deviations, with zero-variance columns clamped to scale 1.0.
    pub fn fit(rows: &[Vec<f32>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::InvalidConfig(
                "cannot fit scaler on zero rows".to_string(),
            ));
        };
        let dim = first.len();
        if rows.iter().any(|r| r.len() != dim) {
            return Err(Error::InvalidConfig(
                "training rows have inconsistent widths".to_string(),
            ));
        }

        let n = rows.len() as f32;
        let mut means = vec![0.0f32; dim];
        for row in rows {
            for (m, x) in means.iter_mut().zip(row) {
                *m += x;
            }
        }
        for m in &mut means {
            *m /= n;
        }

        let mut scales = vec![0.0f32; dim];
        for row in rows {
            for ((s, m), x) in scales.iter_mut().zip(&means).zip(row) {
                let d = x - m;
                *s += d * d;
            }
        }
        for s in &mut scales {
            *s = (*s / n).sqrt();
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Self::new(means, scales)
    }

    /// Number of columns the scaler was fitted on.
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.means.len()
    }

    /// Apply the fitted transform to a full ordered vector.
    pub fn transform(&self, vector: &Vector) -> Result<Vector> {
        if vector.dim() != self.dim() {
            return Err(Error::ShapeMismatch {
                expected: self.dim(),
                actual: vector.dim(),
            });
        }

        let scaled = vector
            .as_slice()
            .iter()
            .zip(self.means.iter().zip(&self.scales))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect();
        Ok(Vector::new(scaled))
    }
}
