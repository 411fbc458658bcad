//! Planar geometry for building surfaces.
//!
//! Surfaces are axis-aligned rectangles described only by their dimensions.
//! Position is never tracked, so containment of one surface within another
//! cannot be checked here.

use uom::{
    ConstZero,
    si::{
        f64::{Area, Length},
        length::meter,
    },
};

use crate::support::constraint::{ConstraintResult, NonNegative};

/// A rectangular surface such as a wall, door, or window.
///
/// The unchecked constructors accept any dimensions, including negative ones,
/// which then contribute a negative area. Use [`Surface::checked`] when the
/// dimensions come from an untrusted source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Horizontal extent.
    pub width: Length,

    /// Vertical extent.
    pub height: Length,
}

impl Surface {
    /// Creates a surface from its width and height.
    #[must_use]
    pub fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    /// Creates a surface from a width and height given in metres.
    ///
    /// ```
    /// use paint_models::support::geometry::Surface;
    /// use uom::si::area::square_meter;
    ///
    /// let door = Surface::from_metres(0.9, 2.0);
    /// assert_eq!(door.area().get::<square_meter>(), 0.9 * 2.0);
    /// ```
    #[must_use]
    pub fn from_metres(width: f64, height: f64) -> Self {
        Self::new(Length::new::<meter>(width), Length::new::<meter>(height))
    }

    /// Creates a surface, rejecting negative or `NaN` dimensions.
    ///
    /// Zero-sized surfaces are allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is negative or not a number.
    pub fn checked(width: Length, height: Length) -> ConstraintResult<Self> {
        let width = NonNegative::new(width)?.into_inner();
        let height = NonNegative::new(height)?.into_inner();
        Ok(Self::new(width, height))
    }

    /// Returns `width * height`.
    #[must_use]
    pub fn area(&self) -> Area {
        self.width * self.height
    }
}

/// Sums the areas of `surfaces`, starting from zero.
///
/// An empty iterator yields zero area.
pub fn total_area<'a>(surfaces: impl IntoIterator<Item = &'a Surface>) -> Area {
    surfaces
        .into_iter()
        .fold(Area::ZERO, |total, surface| total + surface.area())
}
