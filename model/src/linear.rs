use ndarray::{Array1, ArrayView1};

use crate::{FEATURES, FeatureVector, ModelErr, Result};

/// An opaque prediction capability over a fixed-order feature vector.
///
/// The rest of the system only ever sees this one method, so tests can swap in
/// a deterministic stub for the trained weights.
pub trait Predictor {
    /// Maps a feature vector to the model's scalar output.
    ///
    /// # Errors
    /// Returns a `ModelErr` if the forward computation fails.
    fn predict(&self, features: &FeatureVector) -> Result<f32>;
}

/// The trained regression model: `weights · x + intercept`.
#[derive(Debug, Clone)]
pub struct LinearModel {
    weights: Array1<f32>,
    intercept: f32,
}

impl LinearModel {
    /// Creates a new `LinearModel`.
    ///
    /// # Arguments
    /// * `weights` - One weight per feature, in assembly order.
    /// * `intercept` - The fitted bias term.
    ///
    /// # Errors
    /// Returns `ModelErr::SizeMismatch` unless exactly one weight per feature
    /// is given.
    pub fn new(weights: Vec<f32>, intercept: f32) -> Result<Self> {
        if weights.len() != FEATURES {
            return Err(ModelErr::SizeMismatch {
                what: "weights",
                got: weights.len(),
                expected: FEATURES,
            });
        }

        Ok(Self {
            weights: Array1::from(weights),
            intercept,
        })
    }

    /// The number of parameters in the model.
    pub fn size(&self) -> usize {
        self.weights.len()
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f32> {
        let x = ArrayView1::from(features.as_slice());
        let y = self.weights.dot(&x) + self.intercept;

        if !y.is_finite() {
            return Err(ModelErr::NonFiniteOutput);
        }

        Ok(y)
    }
}
