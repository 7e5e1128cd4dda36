use crate::common::{portals, TestScene};
use portalslice2d::body::SlicedSolidBody;
use portalslice2d::bounding_volume::Aabb;
use portalslice2d::math::{Matrix, Point, RealVector, Vector};
use portalslice2d::portal::{PortalDesc, PortalEnd, PortalPair, PortalSet};
use portalslice2d::shape::{CutFlags, Facing, Hitbox};

fn scene() -> TestScene {
    TestScene::new(portals(&[(
        PortalDesc::from_anchor(Facing::Right, 100, 0, 16, 8),
        PortalDesc::from_anchor(Facing::Up, 50, 200, 16, 8),
    )]))
}

#[test]
fn far_part_comes_out_rotated() {
    let mut scene = scene();
    let mut body = SlicedSolidBody::new(Point::new(87, 0), Hitbox::new(24, 16));
    body.move_h(&mut scene, 1.0);

    let pieces = body.colliders();
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0].aabb, Aabb::new(Point::new(88, 0), Point::new(100, 16)));

    let far = &pieces[1];
    assert_eq!(far.aabb, Aabb::new(Point::new(200, 50), Point::new(216, 62)));
    assert_eq!(far.cut, CutFlags::TOP);
    assert_eq!(far.move_speed, Vector::new(0, 1));
    assert_eq!(far.push_move, Vector::new(0, 1));
    assert_eq!(far.orientation, Matrix::new(0, 1, 1, 0));
    approx::assert_relative_eq!(
        far.lift_speed,
        RealVector::new(0.0, 60.0),
        epsilon = 1.0e-3
    );
    assert_eq!(far.area() + pieces[0].area(), 24 * 16);
}

#[test]
fn body_keeps_its_orientation_once_through() {
    let mut scene = scene();
    let mut body = SlicedSolidBody::new(Point::new(87, 0), Hitbox::new(24, 16));

    for _ in 0..13 {
        body.move_h(&mut scene, 1.0);
    }

    assert_eq!(body.position(), Point::new(200, 50));
    assert_eq!(body.move_transform(), &Matrix::new(0, 1, 1, 0));
    assert_eq!(body.colliders().len(), 1);
    assert_eq!(
        body.colliders()[0].aabb,
        Aabb::new(Point::new(200, 50), Point::new(216, 74))
    );

    // Moving "right" in the body frame now moves it down the world.
    body.move_h(&mut scene, 1.0);
    assert_eq!(body.position(), Point::new(200, 51));
}

#[test]
fn mapping_through_a_pair_and_back_is_the_identity() {
    let facings = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    for fa in facings {
        for fb in facings {
            let pair = PortalPair::new(
                PortalDesc::from_anchor(fa, 40, -7, 13, 4),
                PortalDesc::from_anchor(fb, 300, 25, 13, 6),
            )
            .unwrap();
            let a = pair.portal(PortalEnd::A);
            let b = pair.portal(PortalEnd::B);

            assert_eq!(
                a.to_partner_transform() * b.to_partner_transform(),
                Matrix::identity()
            );
            assert_eq!(
                a.to_partner_transform() * fa.direction(),
                -fb.direction()
            );

            for point in [Point::new(3, -4), Point::new(41, 6), Point::new(-12, 0)] {
                assert_eq!(b.map_point(a, &a.map_point(b, &point)), point);
            }
        }
    }
}

#[test]
fn continuous_map_agrees_with_the_pixel_map() {
    let facings = [Facing::Up, Facing::Down, Facing::Left, Facing::Right];

    for fa in facings {
        for fb in facings {
            let pair = PortalPair::new(
                PortalDesc::from_anchor(fa, 40, -7, 13, 4),
                PortalDesc::from_anchor(fb, 300, 25, 13, 6),
            )
            .unwrap();
            let set: PortalSet = [pair].into_iter().collect();

            for portal in set.iter() {
                for point in [Point::new(3, -4), Point::new(41, 6), Point::new(-12, 0)] {
                    let mapped = portal.map_point(&point).coords.map(|e| e as f32);
                    let continuous = portal.map_position(&point.coords.map(|e| e as f32));
                    approx::assert_relative_eq!(continuous, mapped, epsilon = 1.0e-4);
                }
            }

            let a = pair.portal(PortalEnd::A);
            let b = pair.portal(PortalEnd::B);
            for position in [RealVector::new(104.25, 3.5), RealVector::new(-0.75, 12.125)] {
                let there = a.map_position(b, &position);
                approx::assert_relative_eq!(
                    b.map_position(a, &there),
                    position,
                    epsilon = 1.0e-4
                );
            }
        }
    }
}
