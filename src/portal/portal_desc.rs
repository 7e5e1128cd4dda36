use crate::bounding_volume::Aabb;
use crate::math::{Int, Point};
use crate::shape::Facing;

/// A portal as authored in map data.
///
/// The portal is a thin rectangle whose top-left pixel is `position`. It extends `length`
/// pixels along its line and `thickness` pixels across it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PortalDesc {
    /// The direction a body travels along to enter the portal.
    pub facing: Facing,
    /// The top-left pixel of the portal rectangle.
    pub position: Point,
    /// The size of the portal along its line.
    pub length: Int,
    /// The size of the portal across its line.
    pub thickness: Int,
}

impl PortalDesc {
    /// Describes a portal from its authored rectangle.
    pub fn new(facing: Facing, position: Point, length: Int, thickness: Int) -> Self {
        PortalDesc {
            facing,
            position,
            length,
            thickness,
        }
    }

    /// Describes a portal by the line bodies get cut along.
    ///
    /// `anchor` is the coordinate of that line along the facing axis and `span_start` the
    /// first pixel of the portal along the line. The rectangle of the portal is placed so
    /// that its face on the `facing` side lies on the line.
    pub fn from_anchor(
        facing: Facing,
        anchor: Int,
        span_start: Int,
        length: Int,
        thickness: Int,
    ) -> Self {
        let near = if facing.sign() > 0 {
            anchor - thickness
        } else {
            anchor
        };

        let position = if facing.is_horizontal() {
            Point::new(span_start, near)
        } else {
            Point::new(near, span_start)
        };

        PortalDesc::new(facing, position, length, thickness)
    }

    /// The rectangle covered by the portal.
    pub fn aabb(&self) -> Aabb {
        if self.facing.is_horizontal() {
            Aabb::with_size(self.position, self.length, self.thickness)
        } else {
            Aabb::with_size(self.position, self.thickness, self.length)
        }
    }
}
