use serde::Deserialize;

use crate::{EstimateErr, Result};

/// A bounded numeric form field.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

/// Bounds and defaults of the numeric fields, as presented by the form.
pub const BEDROOMS: Field = Field {
    name: "bedrooms",
    min: 1,
    max: 6,
    default: 2,
};

pub const WASHROOMS: Field = Field {
    name: "washrooms",
    min: 1,
    max: 5,
    default: 2,
};

pub const AREA: Field = Field {
    name: "area",
    min: 300,
    max: 5000,
    default: 1200,
};

impl Field {
    /// Checks that `got` lies inside the field's closed range.
    pub(crate) fn check(&self, got: u32) -> Result<()> {
        if got < self.min || got > self.max {
            return Err(EstimateErr::OutOfBounds {
                field: self.name,
                got,
                min: self.min,
                max: self.max,
            });
        }

        Ok(())
    }
}

/// One estimate request, exactly as posted by the page.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequest {
    pub bedrooms: u32,
    pub washrooms: u32,
    pub area: u32,
    pub furnishing: String,
    pub tennants: String,
    pub locality: String,
}
