use std::{
    error::Error,
    fmt::{self, Display},
};

use model::ModelErr;

/// The result type used in the entire estimator module.
pub type Result<T> = std::result::Result<T, EstimateErr>;

/// The estimator module's error type.
#[derive(Debug)]
pub enum EstimateErr {
    OutOfBounds {
        field: &'static str,
        got: u32,
        min: u32,
        max: u32,
    },
    Model(ModelErr),
}

impl Display for EstimateErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateErr::OutOfBounds {
                field,
                got,
                min,
                max,
            } => write!(f, "{field} must be between {min} and {max}, got {got}"),
            EstimateErr::Model(e) => write!(f, "{e}"),
        }
    }
}

impl Error for EstimateErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EstimateErr::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelErr> for EstimateErr {
    fn from(value: ModelErr) -> Self {
        Self::Model(value)
    }
}
