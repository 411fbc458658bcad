//! Surface finishing models.
//!
//! This module contains models for coatings applied to building surfaces.

pub mod paint;
