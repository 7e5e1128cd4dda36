use crate::bounding_volume::Aabb;
use crate::math::{Int, Matrix, Point, RealVector, Vector};
use crate::shape::{CutFlags, Hitbox};

/// One rectangular piece of a [`SlicedSolidBody`](crate::body::SlicedSolidBody).
///
/// A piece is self-describing: its world-space box does not depend on the position of the
/// body owning it, because a piece relocated through a portal can end up anywhere in the
/// scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlicedCollider {
    /// The world-space box covered by this piece.
    pub aabb: Aabb,
    /// The direction this piece is moving along, used to decide which portals it may enter.
    pub move_speed: Vector,
    /// The displacement of this piece during the current frame, in world space.
    pub push_move: Vector,
    /// The lift speed given to the actors carried by this piece, in world space.
    pub lift_speed: RealVector,
    /// The rotation/reflection mapping the body's local frame to this piece's world frame.
    pub orientation: Matrix,
    /// The edges of this piece lying on a portal line.
    pub cut: CutFlags,
}

impl SlicedCollider {
    /// Creates a piece covering `aabb`, at rest, with no cut edge.
    pub fn new(aabb: Aabb) -> Self {
        SlicedCollider {
            aabb,
            move_speed: Vector::zeros(),
            push_move: Vector::zeros(),
            lift_speed: RealVector::zeros(),
            orientation: Matrix::identity(),
            cut: CutFlags::empty(),
        }
    }

    /// The top-left pixel of this piece, in world space.
    #[inline]
    pub fn world_position(&self) -> Point {
        self.aabb.mins
    }

    /// The width of this piece.
    #[inline]
    pub fn width(&self) -> Int {
        self.aabb.width()
    }

    /// The height of this piece.
    #[inline]
    pub fn height(&self) -> Int {
        self.aabb.height()
    }

    /// The number of pixels covered by this piece.
    #[inline]
    pub fn area(&self) -> i64 {
        self.aabb.area()
    }

    /// The offset of this piece from a body sitting at `body_position`.
    #[inline]
    pub fn local_position(&self, body_position: &Point) -> Vector {
        self.aabb.mins - body_position
    }

    /// This piece as a hitbox of a body sitting at `body_position`.
    pub fn hitbox(&self, body_position: &Point) -> Hitbox {
        Hitbox::with_position(
            self.width(),
            self.height(),
            self.local_position(body_position),
        )
    }

    /// The box this piece covered before this frame's displacement.
    #[inline]
    pub fn previous_aabb(&self) -> Aabb {
        self.aabb.translated(&-self.push_move)
    }
}
