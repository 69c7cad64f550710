//! The inference endpoint core: six raw fields in, one rupee amount out.

pub mod error;
mod request;
mod service;

pub use error::{EstimateErr, Result};
pub use request::{AREA, BEDROOMS, EstimateRequest, Field, WASHROOMS};
pub use service::Estimator;
