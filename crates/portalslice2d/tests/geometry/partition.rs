use crate::common::{assert_disjoint, portals, total_area, TestScene};
use portalslice2d::body::SlicedSolidBody;
use portalslice2d::math::{Int, Point, RealVector};
use portalslice2d::portal::PortalDesc;
use portalslice2d::shape::{Facing, Hitbox};

fn range(rng: &mut oorandom::Rand32, min: Int, max: Int) -> Int {
    min + rng.rand_range(0..(max - min) as u32) as Int
}

#[test]
fn pieces_always_partition_the_body() {
    // Entry portals sit close to each other, exits are far away from everything.
    let scene_portals = portals(&[
        (
            PortalDesc::from_anchor(Facing::Right, 100, 0, 32, 4),
            PortalDesc::from_anchor(Facing::Up, 1000, 600, 32, 4),
        ),
        (
            PortalDesc::from_anchor(Facing::Down, 100, 60, 32, 4),
            PortalDesc::from_anchor(Facing::Down, 2000, 2000, 32, 4),
        ),
        (
            PortalDesc::from_anchor(Facing::Left, 40, 40, 32, 4),
            PortalDesc::from_anchor(Facing::Right, 3000, 0, 32, 4),
        ),
    ]);
    let mut scene = TestScene::new(scene_portals);
    let mut rng = oorandom::Rand32::new(42);
    let directions = [
        RealVector::new(1.0, 0.0),
        RealVector::new(-1.0, 0.0),
        RealVector::new(0.0, 1.0),
        RealVector::new(0.0, -1.0),
    ];

    for _ in 0..2000 {
        let width = range(&mut rng, 1, 33);
        let height = range(&mut rng, 1, 33);
        let position = Point::new(range(&mut rng, 0, 140), range(&mut rng, 0, 140));
        let direction = directions[rng.rand_range(0..4) as usize];

        let mut body = SlicedSolidBody::new(position, Hitbox::new(width, height));
        body.move_by(&mut scene, direction);

        let aabbs: Vec<_> = body.colliders().iter().map(|piece| piece.aabb).collect();
        assert_eq!(
            total_area(aabbs.iter().copied()),
            i64::from(width * height),
            "{:?} {}x{} moving {:?}",
            position,
            width,
            height,
            direction
        );
        assert_disjoint(&aabbs);

        for piece in body.colliders() {
            assert!(!piece.aabb.is_empty());
            // A single step from a fresh body cuts at most once.
            let expected_cuts = if aabbs.len() == 1 { 0 } else { 1 };
            assert_eq!(piece.cut.sides().len(), expected_cuts);
        }
    }
}

#[test]
fn pieces_keep_partitioning_the_body_while_moving() {
    let mut scene = TestScene::new(portals(&[(
        PortalDesc::from_anchor(Facing::Right, 100, 0, 16, 8),
        PortalDesc::from_anchor(Facing::Down, 300, 500, 16, 8),
    )]));
    let mut body = SlicedSolidBody::new(Point::new(60, 0), Hitbox::new(24, 16));

    for _ in 0..100 {
        body.move_h(&mut scene, 0.75);
        let aabbs: Vec<_> = body.colliders().iter().map(|piece| piece.aabb).collect();
        assert_eq!(total_area(aabbs.iter().copied()), 24 * 16);
        assert_disjoint(&aabbs);
    }
}
