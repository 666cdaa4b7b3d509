//! Closed-form geometry for a wall-mounted hanger bracket.
//!
//! The bracket is a circular cross section of diameter `D` swept along a
//! centerline made of two straight arms joined by a filleted bend of radius
//! `r`. For a fixed material volume the diameter is determined by the bend
//! radius, which makes `r` the single free design parameter.

pub mod cubic;
mod geometry;

pub use geometry::{GeometryError, HangerGeometry};
