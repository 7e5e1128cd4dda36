//! Shapes making up a sliced solid.

pub use self::cut_flags::CutFlags;
pub use self::facing::Facing;
pub use self::hitbox::Hitbox;
pub use self::sliced_collider::SlicedCollider;

mod cut_flags;
mod facing;
mod hitbox;
mod sliced_collider;
