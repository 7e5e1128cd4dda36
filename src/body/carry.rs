use crate::body::{Scene, SlicedSolidBody};
use crate::bounding_volume::Aabb;
use crate::math::{Vector, DIM};
use crate::shape::SlicedCollider;
use crate::utils::HashSet;

impl SlicedSolidBody {
    /// Pushes and carries the actors around every piece, as if each piece had moved on its
    /// own by its push move.
    ///
    /// Pieces are processed in order, each one horizontally then vertically. An actor is
    /// affected by at most one piece per axis, and never by a piece it rests against through
    /// a cut edge.
    pub fn fake_collider_move<S: Scene>(&self, scene: &mut S) {
        let actors = scene.actors();
        let mut affected: [HashSet<S::Actor>; DIM] = [HashSet::default(), HashSet::default()];

        for piece in &self.colliders {
            let mut from = piece.previous_aabb();
            let sides = piece.cut.sides();
            let exempt: HashSet<S::Actor> = actors
                .iter()
                .copied()
                .filter(|actor| {
                    let aabb = scene.actor_aabb(*actor);
                    sides.iter().any(|side| from.is_flush_against(&aabb, *side))
                })
                .collect();

            for (axis, affected) in affected.iter_mut().enumerate() {
                from = carry_along(scene, &actors, piece, from, axis, &exempt, affected);
            }
        }
    }
}

// Moves a piece from `from` along `axis` and returns where it ends up.
fn carry_along<S: Scene>(
    scene: &mut S,
    actors: &[S::Actor],
    piece: &SlicedCollider,
    from: Aabb,
    axis: usize,
    exempt: &HashSet<S::Actor>,
    affected: &mut HashSet<S::Actor>,
) -> Aabb {
    let amount = piece.push_move[axis];
    if amount == 0 {
        return from;
    }

    let mut shift = Vector::zeros();
    shift[axis] = amount;
    let to = from.translated(&shift);

    let candidates: Vec<S::Actor> = actors
        .iter()
        .copied()
        .filter(|actor| !exempt.contains(actor) && !affected.contains(actor))
        .collect();
    let riders: HashSet<S::Actor> = candidates
        .iter()
        .copied()
        .filter(|actor| scene.is_riding(*actor, &from))
        .collect();

    for actor in candidates {
        let aabb = scene.actor_aabb(actor);

        if to.intersects(&aabb) {
            let push = if amount > 0 {
                to.maxs[axis] - aabb.mins[axis]
            } else {
                to.mins[axis] - aabb.maxs[axis]
            };

            scene.set_actor_lift_speed(actor, piece.lift_speed);
            if scene.move_actor_exact(actor, axis, push) {
                log::trace!("Actor {:?} squished along axis {}.", actor, axis);
                scene.squish_actor(actor, axis);
            }
        } else if riders.contains(&actor) {
            scene.set_actor_lift_speed(actor, piece.lift_speed);
            let _ = scene.move_actor_exact(actor, axis, amount);
        } else {
            continue;
        }

        let _ = affected.insert(actor);
    }

    to
}
