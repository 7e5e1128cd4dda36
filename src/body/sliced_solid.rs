use crate::bounding_volume::Aabb;
use crate::math::{Matrix, Point, Real, RealVector, Vector};
use crate::portal::PortalId;
use crate::shape::{Facing, Hitbox, SlicedCollider};

/// A rigid rectangular solid that gets sliced by the portals it goes through.
///
/// The body keeps its canonical hitbox, fixed at construction, and derives from it the list
/// of pieces currently making up its collision shape. That list is thrown away and rebuilt
/// from scratch every time the body moves.
#[derive(Clone, Debug)]
pub struct SlicedSolidBody {
    pub(crate) original_collider: Hitbox,
    pub(crate) colliders: Vec<SlicedCollider>,
    pub(crate) position: Point,
    pub(crate) remainder: RealVector,
    pub(crate) current_portal_start: Option<PortalId>,
    pub(crate) move_transform: Matrix,
    pub(crate) move_speed: Vector,
    pub(crate) lift_speed: RealVector,
}

impl SlicedSolidBody {
    /// Creates a body at `position` whose whole shape is `hitbox`.
    ///
    /// The body starts as a single piece; it is sliced the first time it moves.
    pub fn new(position: Point, hitbox: Hitbox) -> Self {
        let mut result = SlicedSolidBody {
            original_collider: hitbox,
            colliders: Vec::new(),
            position,
            remainder: RealVector::zeros(),
            current_portal_start: None,
            move_transform: Matrix::identity(),
            move_speed: Vector::zeros(),
            lift_speed: RealVector::zeros(),
        };
        result.colliders.push(result.whole_piece());
        result
    }

    /// The canonical shape of this body, in its own frame.
    #[inline]
    pub fn original_collider(&self) -> &Hitbox {
        &self.original_collider
    }

    /// The pieces currently making up this body.
    #[inline]
    pub fn colliders(&self) -> &[SlicedCollider] {
        &self.colliders
    }

    /// The pixel position of this body.
    ///
    /// This is where the body would be without any portal. It follows the body through a
    /// portal only once the body went through entirely.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The continuous position of this body, including the sub-pixel movement remainder.
    #[inline]
    pub fn fake_position(&self) -> RealVector {
        self.position.coords.map(|e| e as Real) + self.remainder
    }

    /// The portal this body is currently going through, if any.
    #[inline]
    pub fn current_portal_start(&self) -> Option<PortalId> {
        self.current_portal_start
    }

    /// The composition of every portal transform this body went through.
    #[inline]
    pub fn move_transform(&self) -> &Matrix {
        &self.move_transform
    }

    /// The speed given to the actors carried by this body during its last move, in world
    /// space.
    #[inline]
    pub fn lift_speed(&self) -> RealVector {
        self.lift_speed
    }

    /// The pieces of this body as hitboxes relative to its position.
    pub fn hitboxes(&self) -> Vec<Hitbox> {
        self.colliders
            .iter()
            .map(|piece| piece.hitbox(&self.position))
            .collect()
    }

    /// The smallest box containing every piece of this body.
    pub fn bounds(&self) -> Aabb {
        let mut result = Aabb::new_invalid();
        for piece in &self.colliders {
            result.merge(&piece.aabb);
        }
        result
    }

    /// The first piece of this body intersecting `aabb`.
    pub fn collide_first(&self, aabb: &Aabb) -> Option<&SlicedCollider> {
        self.colliders
            .iter()
            .find(|piece| piece.aabb.intersects(aabb))
    }

    /// Does any piece of this body intersect `aabb`?
    #[inline]
    pub fn collide_check(&self, aabb: &Aabb) -> bool {
        self.collide_first(aabb).is_some()
    }

    /// Is a box `actor` standing on an uncut top edge of one of the pieces?
    pub fn is_ridden_by(&self, actor: &Aabb) -> bool {
        self.colliders.iter().any(|piece| {
            !piece.cut.is_cut(Facing::Up) && piece.aabb.is_flush_against(actor, Facing::Up)
        })
    }

    // The canonical shape at the current position, oriented by the move transform.
    pub(crate) fn whole_piece(&self) -> SlicedCollider {
        let mut piece = SlicedCollider::new(
            self.original_collider
                .oriented_aabb_at(&self.position, &self.move_transform),
        );
        piece.orientation = self.move_transform;
        piece
    }
}
