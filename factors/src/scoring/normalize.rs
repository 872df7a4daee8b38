//! Inverse-linear normalization
//!
//! Every raw factor goes through the same transform:
//!
//! `invlinear(x) = scale / (slope * max(x, 0) + offset)`
//!
//! With the defaults (all 1) this is `1 / (1 + x)`: zero maps to 1 and
//! larger raw values decay toward 0.

use crate::error::{AppError, FactorResult};

pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_SLOPE: f64 = 1.0;
pub const DEFAULT_OFFSET: f64 = 1.0;

/// Shared normalization applied to every factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvLinear {
    scale: f64,
    slope: f64,
    offset: f64,
}

impl Default for InvLinear {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            slope: DEFAULT_SLOPE,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl InvLinear {
    /// Parameters must be finite and strictly positive so the output stays in `(0, scale / offset]`
    pub fn new(scale: f64, slope: f64, offset: f64) -> FactorResult<Self> {
        for (name, value) in [("scale", scale), ("slope", slope), ("offset", offset)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::InvalidParameter(format!(
                    "invlinear {name} must be finite and > 0, got {value}"
                )));
            }
        }

        Ok(Self {
            scale,
            slope,
            offset,
        })
    }

    pub fn apply(&self, value: f64) -> f64 {
        invlinear(value, self.scale, self.slope, self.offset)
    }
}

/// Negative inputs are treated as zero.
pub fn invlinear(value: f64, scale: f64, slope: f64, offset: f64) -> f64 {
    scale / (slope * value.max(0.0) + offset)
}
