use crate::body::{Scene, SlicedSolidBody};
use crate::math::{Int, Real, RealVector, Vector};
use crate::shape::CutFlags;
use crate::utils;

impl SlicedSolidBody {
    /// Moves this body by `amount`, expressed in its own frame.
    ///
    /// The amount goes through every portal transform the body went through, so a body that
    /// came out of a portal rotated keeps moving the way it looks like it moves.
    pub fn move_by<S: Scene>(&mut self, scene: &mut S, amount: RealVector) {
        let world = self.move_transform.map(|e| e as Real) * amount;
        self.move_world(scene, world);
    }

    /// Moves this body horizontally in its own frame.
    pub fn move_h<S: Scene>(&mut self, scene: &mut S, amount: Real) {
        self.move_by(scene, RealVector::new(amount, 0.0));
    }

    /// Moves this body vertically in its own frame.
    pub fn move_v<S: Scene>(&mut self, scene: &mut S, amount: Real) {
        self.move_by(scene, RealVector::new(0.0, amount));
    }

    /// Moves this body so its continuous position reaches `target`, in world space.
    pub fn move_to<S: Scene>(&mut self, scene: &mut S, target: RealVector) {
        let amount = target - self.fake_position();
        self.move_world(scene, amount);
    }

    /// Moves this body by `amount`, expressed in world space.
    ///
    /// Sub-pixel amounts accumulate until they add up to a whole pixel. Whenever the body
    /// moves by at least one pixel, its pieces are rebuilt and the actors around them get
    /// pushed or carried.
    pub fn move_world<S: Scene>(&mut self, scene: &mut S, amount: RealVector) {
        self.move_speed = utils::sign(&amount);

        let dt = scene.delta_time();
        self.lift_speed = if dt > 0.0 {
            amount / dt
        } else {
            RealVector::zeros()
        };

        self.remainder += amount;
        let delta: Vector = self.remainder.map(|e| e.round_ties_even() as Int);

        if delta == Vector::zeros() {
            return;
        }

        self.remainder -= delta.map(|e| e as Real);
        self.position += delta;

        self.generate_new_colliders(scene.portals(), delta, None, CutFlags::empty());
        self.fake_collider_move(scene);
    }
}
