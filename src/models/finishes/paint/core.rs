//! Paint volume estimates for rooms.
//!
//! The estimate works on area totals only: wall areas are summed, cutout
//! areas are summed and subtracted, and the remainder is clamped at zero
//! before the coverage ratio and coat count are applied.

mod config;
mod results;
mod room;

pub use config::{CoverageRatio, DEFAULT_COVERAGE_RATIO, PaintConfig};
pub use results::PaintRequirement;
pub use room::Room;

use tracing::debug;
use uom::{
    ConstZero,
    si::{area::square_meter, f64::Area},
};

use crate::support::geometry::{Surface, total_area};

use room::clamp_at_zero;

/// Returns the litres of paint needed to cover `walls` minus `unpaintable`
/// with `coats` coats, using the default coverage ratio.
///
/// Empty inputs yield zero, as does any case where the unpaintable area is at
/// least the wall area.
///
/// ```
/// use paint_models::models::finishes::paint::required_amount_of_paint;
/// use paint_models::support::geometry::Surface;
///
/// let walls = [Surface::from_metres(5.0, 2.0)];
/// let cutouts = [Surface::from_metres(10.0, 10.0)];
/// assert_eq!(required_amount_of_paint(&walls, &cutouts, 5), 0.0);
/// ```
#[must_use]
pub fn required_amount_of_paint(walls: &[Surface], unpaintable: &[Surface], coats: u32) -> f64 {
    required_amount_of_paint_with(walls, unpaintable, coats, &PaintConfig::default())
}

/// Same as [`required_amount_of_paint`] with an explicit configuration.
#[must_use]
pub fn required_amount_of_paint_with(
    walls: &[Surface],
    unpaintable: &[Surface],
    coats: u32,
    config: &PaintConfig,
) -> f64 {
    evaluate(walls, unpaintable, coats, config).total_litres
}

/// Estimates the paint for `room`, keeping the intermediate areas.
#[must_use]
pub fn estimate(room: &Room, coats: u32, config: &PaintConfig) -> PaintRequirement {
    evaluate(&room.walls, &room.unpaintable, coats, config)
}

fn evaluate(
    walls: &[Surface],
    unpaintable: &[Surface],
    coats: u32,
    config: &PaintConfig,
) -> PaintRequirement {
    let wall_area = total_area(walls);
    let unpaintable_area = total_area(unpaintable);

    let net_area = wall_area - unpaintable_area;
    let clamped = net_area < Area::ZERO;
    let paintable_area = clamp_at_zero(net_area);
    if clamped {
        debug!(
            wall_m2 = wall_area.get::<square_meter>(),
            unpaintable_m2 = unpaintable_area.get::<square_meter>(),
            "unpaintable area exceeds wall area, clamping to zero"
        );
    }

    let litres_per_coat = paintable_area.get::<square_meter>() * *config.coverage;
    let total_litres = litres_per_coat * f64::from(coats);

    PaintRequirement {
        wall_area,
        unpaintable_area,
        paintable_area,
        clamped,
        litres_per_coat,
        coats,
        total_litres,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume::liter;

    fn demo_walls() -> Vec<Surface> {
        [
            (10.0, 10.0),
            (10.0, 10.0),
            (20.0, 50.0),
            (10.0, 10.0),
            (10.0, 10.0),
            (10.0, 10.0),
        ]
        .into_iter()
        .map(|(w, h)| Surface::from_metres(w, h))
        .collect()
    }

    fn demo_unpaintable() -> Vec<Surface> {
        vec![
            Surface::from_metres(10.0, 50.0),
            Surface::from_metres(10.0, 50.0),
        ]
    }

    #[test]
    fn demo_room_needs_16500_litres() {
        let litres = required_amount_of_paint(&demo_walls(), &demo_unpaintable(), 3);
        assert_eq!(litres, 16500.0);
    }

    #[test]
    fn demo_room_intermediates() {
        let room = Room::new(demo_walls(), demo_unpaintable());
        let result = estimate(&room, 3, &PaintConfig::default());

        assert_eq!(result.wall_area.get::<square_meter>(), 1500.0);
        assert_eq!(result.unpaintable_area.get::<square_meter>(), 1000.0);
        assert_eq!(result.paintable_area.get::<square_meter>(), 500.0);
        assert!(!result.clamped);
        assert_eq!(result.litres_per_coat, 5500.0);
        assert_eq!(result.coats, 3);
        assert_eq!(result.total_litres, 16500.0);
        assert_relative_eq!(result.volume().get::<liter>(), 16500.0, max_relative = 1e-12);
    }

    #[test]
    fn single_wall_single_coat() {
        let walls = [Surface::from_metres(5.0, 2.0)];
        assert_eq!(required_amount_of_paint(&walls, &[], 1), 110.0);
    }

    #[test]
    fn cutouts_larger_than_walls_clamp_to_zero() {
        let walls = [Surface::from_metres(5.0, 2.0)];
        let cutouts = [Surface::from_metres(10.0, 10.0)];

        let room = Room::new(walls.to_vec(), cutouts.to_vec());
        for coats in [0, 1, 5, u32::MAX] {
            assert_eq!(required_amount_of_paint(&walls, &cutouts, coats), 0.0);

            let result = estimate(&room, coats, &PaintConfig::default());
            assert!(result.clamped);
            assert_eq!(result.paintable_area, Area::ZERO);
            assert_eq!(result.total_litres, 0.0);
        }
    }

    #[test]
    fn equal_areas_give_zero_without_clamping() {
        let walls = [Surface::from_metres(4.0, 3.0)];
        let cutouts = [Surface::from_metres(6.0, 2.0)];

        let room = Room::new(walls.to_vec(), cutouts.to_vec());
        for coats in [0, 1, 7, u32::MAX] {
            let result = estimate(&room, coats, &PaintConfig::default());
            assert!(!result.clamped);
            assert_eq!(result.total_litres, 0.0);
        }
    }

    #[test]
    fn empty_inputs_need_no_paint() {
        for coats in [0, 1, 2, 10, u32::MAX] {
            assert_eq!(required_amount_of_paint(&[], &[], coats), 0.0);
        }
    }

    #[test]
    fn zero_coats_need_no_paint() {
        assert_eq!(required_amount_of_paint(&demo_walls(), &[], 0), 0.0);
    }

    #[test]
    fn linear_in_coats() {
        let walls = [
            Surface::from_metres(3.7, 2.4),
            Surface::from_metres(4.1, 2.4),
        ];
        let cutouts = [Surface::from_metres(0.8, 2.1)];

        let one = required_amount_of_paint(&walls, &cutouts, 1);
        for coats in 0..=6 {
            let many = required_amount_of_paint(&walls, &cutouts, coats);
            assert_eq!(many, f64::from(coats) * one);
        }
    }

    #[test]
    fn monotonic_in_wall_and_cutout_dimensions() {
        let cutouts = [Surface::from_metres(1.0, 2.0)];
        let mut previous = 0.0;
        for width in [0.0, 0.5, 1.0, 2.0, 4.0, 8.0] {
            let walls = [Surface::from_metres(width, 2.5)];
            let litres = required_amount_of_paint(&walls, &cutouts, 2);
            assert!(litres >= previous);
            assert!(litres >= 0.0);
            previous = litres;
        }

        let walls = [Surface::from_metres(4.0, 2.5)];
        let mut previous = f64::INFINITY;
        for height in [0.0, 1.0, 2.0, 5.0, 10.0, 20.0] {
            let cutouts = [Surface::from_metres(1.0, height)];
            let litres = required_amount_of_paint(&walls, &cutouts, 2);
            assert!(litres <= previous);
            assert!(litres >= 0.0);
            previous = litres;
        }
        assert_eq!(previous, 0.0);
    }

    #[test]
    fn custom_coverage_ratio() {
        let config = PaintConfig {
            coverage: CoverageRatio::new(0.1).unwrap(),
        };
        let walls = [Surface::from_metres(5.0, 2.0)];

        let litres = required_amount_of_paint_with(&walls, &[], 2, &config);
        assert_relative_eq!(litres, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn nan_area_passes_through_unclamped() {
        let walls = [Surface::from_metres(f64::NAN, 2.0)];
        let room = Room::new(walls.to_vec(), Vec::new());

        let result = estimate(&room, 3, &PaintConfig::default());
        assert!(!result.clamped);
        assert!(result.total_litres.is_nan());
        assert!(room.paintable_area().is_err());
    }

    #[test]
    fn negative_dimensions_are_not_rejected() {
        let walls = [
            Surface::from_metres(5.0, 2.0),
            Surface::from_metres(-1.0, 2.0),
        ];
        assert_eq!(required_amount_of_paint(&walls, &[], 1), 88.0);
    }
}
