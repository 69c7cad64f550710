//! The trained rent model and the fixed vocabularies it was fit against.

pub mod encoder;
pub mod error;
pub mod features;
pub mod linear;

pub use encoder::{EncoderSet, LabelEncoder};
pub use error::{ModelErr, Result};
pub use features::{FEATURES, FeatureVector};
pub use linear::{LinearModel, Predictor};
