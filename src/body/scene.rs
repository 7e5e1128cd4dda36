use crate::bounding_volume::Aabb;
use crate::math::{Int, Real, RealVector};
use crate::portal::PortalSet;
use crate::shape::Facing;
use core::fmt::Debug;
use core::hash::Hash;

/// The host game scene, as seen by a [`SlicedSolidBody`](crate::body::SlicedSolidBody).
///
/// The body never reaches into the host's entities directly: everything it needs to slice
/// itself and carry actors around goes through this trait.
///
/// While a body carries actors, the body itself must not be considered collidable by the
/// host: [`Scene::move_actor_exact`] only checks the other solids of the scene.
pub trait Scene {
    /// A handle to an actor of the scene.
    type Actor: Copy + Eq + Hash + Debug;

    /// The portals of the scene.
    fn portals(&self) -> &PortalSet;

    /// The duration of the current frame, in seconds.
    fn delta_time(&self) -> Real;

    /// Every actor that may be pushed or carried, in a deterministic order.
    fn actors(&self) -> Vec<Self::Actor>;

    /// The world-space box covered by `actor`.
    fn actor_aabb(&self, actor: Self::Actor) -> Aabb;

    /// Is `actor` riding the solid box `solid`?
    ///
    /// By default an actor rides a solid it stands on.
    fn is_riding(&self, actor: Self::Actor, solid: &Aabb) -> bool {
        solid.is_flush_against(&self.actor_aabb(actor), Facing::Up)
    }

    /// Moves `actor` by `amount` pixels along `axis`, one pixel at a time, stopping at the
    /// first solid in the way.
    ///
    /// Returns `true` if the move was blocked.
    fn move_actor_exact(&mut self, actor: Self::Actor, axis: usize, amount: Int) -> bool;

    /// Sets the speed inherited by `actor` from the solid carrying it.
    fn set_actor_lift_speed(&mut self, actor: Self::Actor, lift_speed: RealVector);

    /// Called when `actor` got pushed along `axis` into another solid.
    fn squish_actor(&mut self, _actor: Self::Actor, _axis: usize) {}
}
