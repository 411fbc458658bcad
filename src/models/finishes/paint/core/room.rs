use uom::{ConstZero, si::f64::Area};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative},
    geometry::{Surface, total_area},
};

/// The surfaces of a room that matter for painting.
///
/// Unpaintable surfaces are assumed to lie within the walls. This is not
/// checked; only their total areas are compared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Room {
    /// Surfaces to be painted.
    pub walls: Vec<Surface>,

    /// Doors, windows, and other cutouts that are left unpainted.
    pub unpaintable: Vec<Surface>,
}

impl Room {
    /// Creates a room from its walls and unpaintable cutouts.
    #[must_use]
    pub fn new(walls: Vec<Surface>, unpaintable: Vec<Surface>) -> Self {
        Self { walls, unpaintable }
    }

    /// Total area of all walls.
    #[must_use]
    pub fn wall_area(&self) -> Area {
        total_area(&self.walls)
    }

    /// Total area of all unpaintable cutouts.
    #[must_use]
    pub fn unpaintable_area(&self) -> Area {
        total_area(&self.unpaintable)
    }

    /// Wall area minus unpaintable area, clamped at zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] if any surface dimension makes
    /// the area `NaN`.
    ///
    /// [`ConstraintError::NotANumber`]: crate::support::constraint::ConstraintError::NotANumber
    pub fn paintable_area(&self) -> ConstraintResult<Constrained<Area, NonNegative>> {
        NonNegative::new(clamp_at_zero(self.wall_area() - self.unpaintable_area()))
    }
}

/// Replaces a negative area with zero.
///
/// `NaN` passes through unchanged.
pub(super) fn clamp_at_zero(area: Area) -> Area {
    if area < Area::ZERO { Area::ZERO } else { area }
}
