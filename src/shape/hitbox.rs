use crate::bounding_volume::Aabb;
use crate::math::{Int, Matrix, Point, Vector};

/// A rectangular collision shape attached to an entity.
///
/// The box is expressed in the entity's local frame: `position` is the offset of its
/// top-left pixel from the entity origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hitbox {
    /// The offset of the top-left pixel from the entity origin.
    pub position: Vector,
    /// The width of the box.
    pub width: Int,
    /// The height of the box.
    pub height: Int,
}

impl Hitbox {
    /// Creates a hitbox of the given size at the entity origin.
    #[inline]
    pub fn new(width: Int, height: Int) -> Hitbox {
        Hitbox::with_position(width, height, Vector::zeros())
    }

    /// Creates a hitbox of the given size, offset from the entity origin.
    #[inline]
    pub fn with_position(width: Int, height: Int, position: Vector) -> Hitbox {
        Hitbox {
            position,
            width,
            height,
        }
    }

    /// The world-space box covered by this hitbox when its entity sits at `origin`.
    #[inline]
    pub fn aabb_at(&self, origin: &Point) -> Aabb {
        Aabb::with_size(origin + self.position, self.width, self.height)
    }

    /// The world-space box covered by this hitbox when its entity sits at `origin` and is
    /// rotated/reflected by `orientation` around that origin.
    pub fn oriented_aabb_at(&self, origin: &Point, orientation: &Matrix) -> Aabb {
        let a = orientation * self.position;
        let b = orientation * (self.position + Vector::new(self.width, self.height));
        Aabb::from_corners(origin + a, origin + b)
    }
}
