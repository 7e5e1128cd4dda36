/*!
portalslice2d
=============

**portalslice2d** slices rigid, pixel-aligned rectangular solids across pairs of
oriented 2D portals.

A [`SlicedSolidBody`](body::SlicedSolidBody) is a single collision box that, whenever it
straddles one or more portals, is cut along each portal's line into independent
[`SlicedCollider`](shape::SlicedCollider) pieces. Every piece is re-anchored at the
partner portal, re-oriented by a fixed rotation/reflection, and carries its own riders.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod body;
pub mod bounding_volume;
pub mod portal;
pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
///
/// Geometry lives on an integer pixel grid with `y` pointing down. Only velocities and
/// sub-pixel positions are continuous.
pub mod math {
    pub use na::{Matrix2, Point2, Vector2};

    /// The scalar type used for continuous quantities.
    pub type Real = f32;

    /// The scalar type of the pixel grid.
    pub type Int = i32;

    /// A pixel-grid point.
    pub type Point = Point2<Int>;

    /// A pixel-grid vector. Also used for unit directions.
    pub type Vector = Vector2<Int>;

    /// A continuous vector (lift speeds, sub-pixel positions, movement remainders).
    pub type RealVector = Vector2<Real>;

    /// A signed permutation matrix: one of the eight rotations/reflections of the grid.
    pub type Matrix = Matrix2<Int>;

    /// The dimension of the space.
    pub const DIM: usize = 2;
}
