/// The number of features the model was trained against.
pub const FEATURES: usize = 6;

/// The fixed-order numeric input the model accepts.
///
/// The trained model has no notion of field names, only positions. The single
/// constructor takes every field by name so the order is pinned in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f32; FEATURES]);

impl FeatureVector {
    /// Assembles the vector in the order the model was fit against:
    /// `[bedrooms, washrooms, furnishing_code, tennants_code, area, locality_code]`.
    pub fn assemble(
        bedrooms: f32,
        washrooms: f32,
        furnishing_code: f32,
        tennants_code: f32,
        area: f32,
        locality_code: f32,
    ) -> Self {
        Self([
            bedrooms,
            washrooms,
            furnishing_code,
            tennants_code,
            area,
            locality_code,
        ])
    }

    /// The vector as a flat slice, in assembly order.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}
