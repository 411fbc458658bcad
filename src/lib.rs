//! # Paint Models
//!
//! Models for estimating how much paint a room needs, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use paint_models::models::finishes::paint::required_amount_of_paint;
//! use paint_models::support::geometry::Surface;
//!
//! let walls = [Surface::from_metres(5.0, 2.0)];
//! let litres = required_amount_of_paint(&walls, &[], 1);
//! assert_eq!(litres, 110.0);
//! ```
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
