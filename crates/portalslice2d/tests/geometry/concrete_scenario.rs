use crate::common::{assert_disjoint, portals, total_area, TestScene};
use portalslice2d::body::SlicedSolidBody;
use portalslice2d::bounding_volume::Aabb;
use portalslice2d::math::{Matrix, Point, Vector};
use portalslice2d::portal::{PortalDesc, PortalEnd, PortalId};
use portalslice2d::shape::{CutFlags, Facing, Hitbox};

fn scene() -> TestScene {
    TestScene::new(portals(&[(
        PortalDesc::from_anchor(Facing::Right, 100, 0, 16, 8),
        PortalDesc::from_anchor(Facing::Left, 300, 0, 16, 8),
    )]))
}

#[test]
fn body_straddling_a_portal_is_cut_in_two() {
    let mut scene = scene();
    let mut body = SlicedSolidBody::new(Point::new(87, 0), Hitbox::new(24, 16));
    body.move_h(&mut scene, 1.0);

    let pieces = body.colliders();
    assert_eq!(pieces.len(), 2);

    assert_eq!(pieces[0].aabb, Aabb::new(Point::new(88, 0), Point::new(100, 16)));
    assert_eq!(pieces[0].cut, CutFlags::RIGHT);
    assert_eq!(pieces[0].move_speed, Vector::new(1, 0));

    assert_eq!(pieces[1].aabb, Aabb::new(Point::new(300, 0), Point::new(312, 16)));
    assert_eq!(pieces[1].cut, CutFlags::LEFT);
    assert_eq!(pieces[1].move_speed, Vector::new(1, 0));
    assert_eq!(pieces[1].orientation, Matrix::identity());

    let aabbs: Vec<_> = pieces.iter().map(|piece| piece.aabb).collect();
    assert_eq!(total_area(aabbs.iter().copied()), 24 * 16);
    assert_disjoint(&aabbs);

    assert_eq!(
        body.current_portal_start(),
        Some(PortalId {
            pair: 0,
            end: PortalEnd::A
        })
    );
    assert_eq!(body.position(), Point::new(88, 0));
    assert_eq!(body.original_collider(), &Hitbox::new(24, 16));
}

#[test]
fn sliced_body_answers_collision_queries_piecewise() {
    let mut scene = scene();
    let mut body = SlicedSolidBody::new(Point::new(87, 0), Hitbox::new(24, 16));
    body.move_h(&mut scene, 1.0);

    // The original footprint past the portal line is empty.
    assert!(!body.collide_check(&Aabb::with_size(Point::new(100, 0), 12, 16)));
    assert!(body.collide_check(&Aabb::with_size(Point::new(310, 4), 4, 4)));
    assert_eq!(
        body.collide_first(&Aabb::with_size(Point::new(310, 4), 4, 4))
            .map(|piece| piece.cut),
        Some(CutFlags::LEFT)
    );
    assert_eq!(body.bounds(), Aabb::new(Point::new(88, 0), Point::new(312, 16)));

    let hitboxes = body.hitboxes();
    assert_eq!(hitboxes[0], Hitbox::with_position(12, 16, Vector::new(0, 0)));
    assert_eq!(hitboxes[1], Hitbox::with_position(12, 16, Vector::new(212, 0)));

    // Both tops are intact, the cut sides are not.
    assert!(body.is_ridden_by(&Aabb::with_size(Point::new(90, -8), 4, 8)));
    assert!(body.is_ridden_by(&Aabb::with_size(Point::new(305, -8), 4, 8)));
    assert!(!body.is_ridden_by(&Aabb::with_size(Point::new(150, -8), 4, 8)));
}

#[test]
fn body_away_from_portals_stays_whole() {
    let mut scene = scene();
    let mut body = SlicedSolidBody::new(Point::new(20, 0), Hitbox::new(24, 16));
    body.move_h(&mut scene, 3.0);

    assert_eq!(body.colliders().len(), 1);
    assert_eq!(
        body.colliders()[0].aabb,
        Hitbox::new(24, 16).aabb_at(&Point::new(23, 0))
    );
    assert_eq!(body.colliders()[0].cut, CutFlags::empty());
    assert_eq!(body.current_portal_start(), None);
}

#[test]
fn body_wider_than_the_portal_is_never_cut() {
    let mut scene = scene();
    let mut body = SlicedSolidBody::new(Point::new(87, -2), Hitbox::new(24, 18));
    body.move_h(&mut scene, 1.0);

    assert_eq!(body.colliders().len(), 1);
    assert_eq!(
        body.colliders()[0].aabb,
        Aabb::with_size(Point::new(88, -2), 24, 18)
    );
}

#[test]
fn body_moving_away_from_the_portal_is_never_cut() {
    let mut scene = scene();
    let mut body = SlicedSolidBody::new(Point::new(89, 0), Hitbox::new(24, 16));
    body.move_h(&mut scene, -1.0);

    assert_eq!(body.colliders().len(), 1);
    assert_eq!(body.current_portal_start(), None);
}
