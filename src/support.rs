//! Supporting utilities used by models.
//!
//! These APIs are public but not stable.

pub mod constraint;
pub mod geometry;
