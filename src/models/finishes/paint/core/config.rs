use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Coverage ratio used when none is configured.
pub const DEFAULT_COVERAGE_RATIO: f64 = 11.0;

/// Ratio converting square metres of paintable area into litres for one coat.
///
/// The paintable area is multiplied by this ratio.
/// The value must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CoverageRatio(Constrained<f64, StrictlyPositive>);

impl CoverageRatio {
    /// Create a [`CoverageRatio`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(value)?))
    }
}

impl Default for CoverageRatio {
    fn default() -> Self {
        Self(Constrained::new_unchecked(DEFAULT_COVERAGE_RATIO))
    }
}

impl Deref for CoverageRatio {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Configuration for paint estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaintConfig {
    /// Factor the paintable area is multiplied by to get litres for one coat.
    pub coverage: CoverageRatio,
}
