use model::{EncoderSet, FeatureVector, Predictor};

use crate::{
    EstimateRequest, Result,
    request::{AREA, BEDROOMS, WASHROOMS},
};

/// The inference endpoint: encodes the categorical inputs against the fitted
/// vocabularies, assembles the fixed-order feature vector and runs one
/// forward pass.
///
/// Holds the process-wide read-only state (model and encoders), injected once
/// at startup. Estimation is a pure function of the request and that state.
pub struct Estimator {
    model: Box<dyn Predictor + Send + Sync>,
    encoders: EncoderSet,
}

impl Estimator {
    /// Creates a new `Estimator`.
    ///
    /// # Arguments
    /// * `model` - The trained prediction capability.
    /// * `encoders` - The label encoders fitted alongside the model.
    pub fn new(model: Box<dyn Predictor + Send + Sync>, encoders: EncoderSet) -> Self {
        Self { model, encoders }
    }

    /// The fitted encoders, for rendering the form vocabularies.
    pub fn encoders(&self) -> &EncoderSet {
        &self.encoders
    }

    /// Produces the monthly rent estimate for one request.
    ///
    /// The model output is truncated toward zero, then clamped at zero
    /// rupees.
    ///
    /// # Errors
    /// `OutOfBounds` for a numeric field outside its form range, `Model` for
    /// an unknown category or a failed forward pass. Unknown categories are
    /// rejected before the model is ever invoked.
    pub fn estimate(&self, req: &EstimateRequest) -> Result<u64> {
        BEDROOMS.check(req.bedrooms)?;
        WASHROOMS.check(req.washrooms)?;
        AREA.check(req.area)?;

        let furnishing = self.encoders.furnishing.encode(&req.furnishing)?;
        let tennants = self.encoders.tennants.encode(&req.tennants)?;
        let locality = self.encoders.locality.encode(&req.locality)?;

        let features = FeatureVector::assemble(
            req.bedrooms as f32,
            req.washrooms as f32,
            furnishing as f32,
            tennants as f32,
            req.area as f32,
            locality as f32,
        );

        let rent = self.model.predict(&features)?;
        Ok(rent.trunc().max(0.0) as u64)
    }
}
