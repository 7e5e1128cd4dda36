use crate::body::SlicedSolidBody;
use crate::math::{Real, Vector};
use crate::portal::{PortalId, PortalSet};
use crate::shape::{CutFlags, SlicedCollider};
use smallvec::SmallVec;

/// Slices `pieces[index]` against every portal of `portals`, in enumeration order.
///
/// Each portal the piece may enter cuts it at most once. The far part is relocated in front
/// of the partner portal, appended to `pieces`, and sliced in turn, so a single piece can
/// chain through several portals. Returns the portals that cut `pieces[index]` itself.
pub(crate) fn portal_iteration(
    portals: &PortalSet,
    pieces: &mut Vec<SlicedCollider>,
    index: usize,
) -> SmallVec<[PortalId; 2]> {
    let mut cuts = SmallVec::new();

    for portal in portals.iter() {
        let speed = pieces[index].move_speed;

        if !portal.portal().check_solid_access(&pieces[index], &speed) {
            continue;
        }

        if let Some(slice) = portal.portal().slice(&mut pieces[index]) {
            let far = portal.move_sliced_part_to_partner(slice.far);
            log::trace!(
                "Piece {} cut by portal {:?} (kept part shifted by {:?}), far part relocated to {:?}.",
                index,
                portal.id(),
                slice.offset,
                far.aabb
            );

            cuts.push(portal.id());
            pieces.push(far);
            let far_index = pieces.len() - 1;
            let _ = portal_iteration(portals, pieces, far_index);
        }
    }

    cuts
}

impl SlicedSolidBody {
    /// Rebuilds the pieces of this body from scratch.
    ///
    /// `push` is the world-space displacement of the body during this frame and `cut` the
    /// cut flags inherited by the whole body. If `override_speed` is set, it replaces the
    /// current move speed and the body is no longer considered to be going through a portal.
    ///
    /// If the body went entirely through the portal it was straddling, the body itself is
    /// moved in front of the partner portal before being sliced again.
    pub fn generate_new_colliders(
        &mut self,
        portals: &PortalSet,
        push: Vector,
        override_speed: Option<Vector>,
        cut: CutFlags,
    ) {
        if let Some(speed) = override_speed {
            self.move_speed = speed;
            self.current_portal_start = None;
        }

        let mut start = self.whole_piece();
        start.move_speed = self.move_speed;
        start.lift_speed = self.lift_speed;
        start.push_move = push;
        start.cut = cut;

        let straddled = self.current_portal_start.and_then(|id| {
            let found = portals.get(id);
            if found.is_none() {
                log::debug!("Portal {:?} no longer exists, dropping it.", id);
            }
            found
        });

        if straddled.is_none() {
            self.current_portal_start = None;
        }

        if let Some(portal) = straddled {
            let required = portal.portal().required_speed();
            if start.move_speed.dot(&required) == 0 {
                // Moving along the portal line: keep sinking into it.
                start.move_speed += required;
            }

            if portal
                .portal()
                .check_solid_access(&start, &start.move_speed)
            {
                if let Some(depth) = portal.portal().collider_behind_self(&start) {
                    let m = *portal.portal().to_partner_transform();
                    let m_real = m.map(|e| e as Real);

                    self.position = portal.map_point(&self.position);
                    self.remainder = m_real * self.remainder;
                    self.move_transform = m * self.move_transform;
                    self.lift_speed = m_real * self.lift_speed;
                    log::debug!(
                        "Went through portal {:?} ({} pixels past its line), now at {:?}.",
                        portal.id(),
                        depth,
                        self.position
                    );

                    self.generate_new_colliders(
                        portals,
                        m * push,
                        Some(portal.partner().exit_speed()),
                        cut.transformed(&m),
                    );
                    return;
                }
            }
        }

        let mut pieces = vec![start];
        let cuts = portal_iteration(portals, &mut pieces, 0);

        match straddled {
            Some(portal) if !cuts.contains(&portal.id()) => {
                let mut retreat = start;
                retreat.move_speed = -start.move_speed;
                let mut retreat_pieces = vec![retreat];
                let retreat_cuts = portal_iteration(portals, &mut retreat_pieces, 0);

                if retreat_cuts.contains(&portal.id()) {
                    log::debug!("Moving back out of portal {:?}.", portal.id());
                    pieces = retreat_pieces;
                } else {
                    log::debug!("Left portal {:?}.", portal.id());
                    self.current_portal_start = cuts.first().copied();
                }
            }
            Some(_) => {}
            None => {
                if let Some(id) = cuts.first() {
                    log::debug!("Started going through portal {:?}.", id);
                }
                self.current_portal_start = cuts.first().copied();
            }
        }

        self.colliders = pieces;
        self.move_speed = Vector::zeros();
    }
}
