//! Results of a paint estimate.

use uom::si::{
    f64::{Area, Volume},
    volume::liter,
};

/// Intermediate areas and the paint volume for one estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintRequirement {
    /// Sum of all wall areas.
    pub wall_area: Area,

    /// Sum of all unpaintable areas.
    pub unpaintable_area: Area,

    /// Area left to paint after removing cutouts, with negative values clamped to zero.
    ///
    /// `NaN` passes through unchanged.
    pub paintable_area: Area,

    /// Whether the cutouts exceeded the walls and the area was clamped to zero.
    pub clamped: bool,

    /// Litres needed for a single coat.
    pub litres_per_coat: f64,

    /// Number of coats applied.
    pub coats: u32,

    /// Litres needed for all coats.
    pub total_litres: f64,
}

impl PaintRequirement {
    /// Returns [`Self::total_litres`] as a volume.
    #[must_use]
    pub fn volume(&self) -> Volume {
        Volume::new::<liter>(self.total_litres)
    }
}
