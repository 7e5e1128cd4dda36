use crate::bounding_volume::Aabb;
use crate::math::{Int, Matrix, Point, Real, RealVector, Vector};
use crate::portal::{portal_transform, PortalDesc};
use crate::query::Slice;
use crate::shape::{CutFlags, Facing, SlicedCollider};

/// One end of a [`PortalPair`](crate::portal::PortalPair).
///
/// A portal is a thin, axis-aligned gateway. Bodies moving along its facing through its line
/// (the anchor) come out of its partner. The partner itself is owned by the enclosing pair
/// and reached through [`PortalRef`](crate::portal::PortalRef).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SinglePortal {
    facing: Facing,
    aabb: Aabb,
    anchor: Int,
    span: (Int, Int),
    to_partner: Matrix,
}

impl SinglePortal {
    pub(crate) fn new(desc: &PortalDesc, partner_facing: Facing) -> Self {
        let facing = desc.facing;
        let aabb = desc.aabb();
        let axis = facing.axis();
        let anchor = if facing.sign() > 0 {
            aabb.maxs[axis]
        } else {
            aabb.mins[axis]
        };

        SinglePortal {
            facing,
            aabb,
            anchor,
            span: aabb.interval(1 - axis),
            to_partner: portal_transform(facing, partner_facing),
        }
    }

    /// The direction a body travels along to enter this portal.
    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Does this portal lie along a horizontal line?
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.facing.is_horizontal()
    }

    /// The rectangle covered by this portal.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// The coordinate, along the facing axis, of the line bodies are cut along.
    ///
    /// This is the face of the portal rectangle on its facing side, so a body has to sink
    /// through the whole thickness of the portal before being cut.
    #[inline]
    pub fn anchor_point(&self) -> Int {
        self.anchor
    }

    /// The half-open range covered by this portal along its line.
    #[inline]
    pub fn span(&self) -> (Int, Int) {
        self.span
    }

    /// The rotation/reflection carrying a body from this portal out of its partner.
    #[inline]
    pub fn to_partner_transform(&self) -> &Matrix {
        &self.to_partner
    }

    /// The unit direction a body must move along to enter this portal.
    #[inline]
    pub fn required_speed(&self) -> Vector {
        self.facing.direction()
    }

    /// The unit direction of a body coming out of this portal.
    #[inline]
    pub fn exit_speed(&self) -> Vector {
        -self.required_speed()
    }

    /// Can `piece`, moving along `speed`, enter this portal?
    ///
    /// The whole extent of the piece across the portal axis must lie within the portal span,
    /// and it must move towards the portal.
    pub fn check_solid_access(&self, piece: &SlicedCollider, speed: &Vector) -> bool {
        let (min, max) = piece.aabb.interval(1 - self.facing.axis());
        self.span.0 <= min && max <= self.span.1 && speed.dot(&self.required_speed()) > 0
    }

    /// If `piece` already lies entirely past the portal line, returns how deep its trailing
    /// edge went past it.
    pub fn collider_behind_self(&self, piece: &SlicedCollider) -> Option<Int> {
        let axis = self.facing.axis();
        let depth = if self.facing.sign() > 0 {
            piece.aabb.mins[axis] - self.anchor
        } else {
            self.anchor - piece.aabb.maxs[axis]
        };

        (depth >= 0).then_some(depth)
    }

    /// Cuts `piece` along the portal line.
    ///
    /// `piece` keeps the part in front of the portal; the part that went past the line is
    /// returned. Nothing happens if the line does not cross the piece.
    pub fn slice(&self, piece: &mut SlicedCollider) -> Option<Slice<SlicedCollider>> {
        if self.is_horizontal() {
            piece.slice_horizontally(self.anchor, self.facing)
        } else {
            piece.slice_vertically(self.anchor, self.facing)
        }
    }

    // The middle of the portal span on its line, with doubled coordinates so it stays
    // integral for odd lengths.
    fn doubled_center(&self) -> Vector {
        let mut center = Vector::zeros();
        center[self.facing.axis()] = self.anchor * 2;
        center[1 - self.facing.axis()] = self.span.0 + self.span.1;
        center
    }

    /// Maps a pixel corner located relative to this portal onto the same location relative
    /// to `partner`.
    ///
    /// A point at depth `d` past this portal's line ends up at depth `d` in front of the
    /// partner line, and the portal spans map onto each other.
    pub fn map_point(&self, partner: &SinglePortal, point: &Point) -> Point {
        let doubled =
            partner.doubled_center() + self.to_partner * (point.coords * 2 - self.doubled_center());
        Point::from(doubled / 2)
    }

    /// Maps a continuous position, see [`SinglePortal::map_point`].
    pub fn map_position(&self, partner: &SinglePortal, position: &RealVector) -> RealVector {
        let m = self.to_partner.map(|e| e as Real);
        let from = self.doubled_center().map(|e| e as Real) / 2.0;
        let to = partner.doubled_center().map(|e| e as Real) / 2.0;
        to + m * (position - from)
    }

    /// Maps a box, see [`SinglePortal::map_point`].
    pub fn map_aabb(&self, partner: &SinglePortal, aabb: &Aabb) -> Aabb {
        Aabb::from_corners(
            self.map_point(partner, &aabb.mins),
            self.map_point(partner, &aabb.maxs),
        )
    }

    /// Relocates a piece cut off by this portal in front of `partner`.
    ///
    /// The piece is re-anchored on the partner line, and everything directional it carries
    /// (push, lift speed, orientation, cut flags) goes through the portal transform. Its
    /// freshly cut edge now lies on the partner line and it moves away from the partner.
    pub fn move_sliced_part_to_partner(
        &self,
        partner: &SinglePortal,
        mut piece: SlicedCollider,
    ) -> SlicedCollider {
        let m = &self.to_partner;
        piece.aabb = self.map_aabb(partner, &piece.aabb);
        piece.cut = piece.cut.transformed(m) | CutFlags::from_side(partner.facing);
        piece.move_speed = partner.exit_speed();
        piece.push_move = m * piece.push_move;
        piece.lift_speed = m.map(|e| e as Real) * piece.lift_speed;
        piece.orientation = m * piece.orientation;
        piece
    }
}
