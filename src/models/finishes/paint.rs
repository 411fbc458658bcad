//! Paint quantity model.
//!
//! [`PaintModel`] is the [`twine_core::Model`] adapter. The computation lives
//! in the internal `core` module, whose public items are re-exported here.

pub(crate) mod core;

pub use self::core::{
    CoverageRatio, DEFAULT_COVERAGE_RATIO, PaintConfig, PaintRequirement, Room, estimate,
    required_amount_of_paint, required_amount_of_paint_with,
};

use std::convert::Infallible;

use twine_core::Model;

/// A room and the number of coats to apply to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintJob {
    pub room: Room,
    pub coats: u32,
}

/// Estimates the paint required for a [`PaintJob`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintModel {
    config: PaintConfig,
}

impl PaintModel {
    #[must_use]
    pub fn new(config: PaintConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PaintConfig {
        &self.config
    }
}

impl Model for PaintModel {
    type Input = PaintJob;
    type Output = PaintRequirement;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(estimate(&input.room, input.coats, &self.config))
    }
}
