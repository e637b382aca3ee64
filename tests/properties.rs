#![allow(clippy::unwrap_used)]

use std::f64::consts::FRAC_PI_2;

use approx::assert_abs_diff_eq;
use plangeo::geometry::{
    Aabb, Axis, Bezier, Circle, Ellipse, Intersection, Line, Path, PointExt, Polyline, Relation,
    SegPath, Segment, SegmentKind, TextCodec, Winding,
};
use plangeo::math::Point2;

fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

fn polyline(coords: &[(f64, f64)]) -> Polyline {
    Polyline::new(pts(coords))
}

#[test]
fn degenerate_segment_meets_itself_at_its_point() {
    let p = Point2::new(3.5, -2.0);
    let s = Segment::new(p, p);
    assert_eq!(s.intersect(&s), Intersection::Points(vec![p]));
}

#[test]
fn single_point_polygon_is_on_its_point() {
    for p in pts(&[(0.0, 0.0), (-7.25, 3.0), (1e6, -1e6)]) {
        assert_eq!(Polyline::new(vec![p]).relation_with_pt(&p), Relation::On);
    }
}

#[test]
fn hull_of_trivial_inputs() {
    assert!(Polyline::default().convex_hull().is_empty());
    let single = polyline(&[(4.0, 2.0)]);
    assert_eq!(single.convex_hull(), single);
}

#[test]
fn hull_of_collinear_points_folds_back() {
    let hull = polyline(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]).convex_hull();
    let expected = polyline(&[(2.0, 0.0), (3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    assert!(hull.is_same(&expected), "got {hull:?}");
}

#[test]
fn hull_of_triangle_runs_counter_clockwise() {
    let hull = polyline(&[(0.0, 0.0), (5.0, 5.0), (3.0, -1.0)]).convex_hull();
    let expected = polyline(&[(0.0, 0.0), (3.0, -1.0), (5.0, 5.0), (0.0, 0.0)]);
    assert!(hull.is_same(&expected), "got {hull:?}");
    assert_eq!(hull.winding(), Some(Winding::CounterClockwise));
}

#[test]
fn hull_of_two_points() {
    let pair = polyline(&[(1.0, 0.0), (2.0, 0.0)]).convex_hull();
    assert!(pair.is_same(&polyline(&[(1.0, 0.0), (2.0, 0.0), (1.0, 0.0)])), "got {pair:?}");
    let twice = polyline(&[(1.0, 0.0), (1.0, 0.0)]).convex_hull();
    assert!(twice.is_same(&polyline(&[(1.0, 0.0), (1.0, 0.0)])), "got {twice:?}");
}

#[test]
fn hull_keeps_repeated_pivot() {
    let hull = polyline(&[
        (0.0, 0.0),
        (-1.0, -2.0),
        (-3.0, -6.0),
        (1.0, 3.0),
        (-3.0, -6.0),
        (0.0, 1.0),
        (-1.0, 4.0),
    ])
    .convex_hull();
    let expected = polyline(&[
        (-3.0, -6.0),
        (-3.0, -6.0),
        (-1.0, -2.0),
        (0.0, 0.0),
        (1.0, 3.0),
        (-1.0, 4.0),
        (-3.0, -6.0),
    ]);
    assert!(hull.is_same(&expected), "got {hull:?}");
}

#[test]
fn hull_of_scattered_points_with_duplicates() {
    let hull = polyline(&[
        (10.0, 4.0),
        (3.0, 4.0),
        (12.0, 6.0),
        (3.0, 3.0),
        (3.0, 3.0),
        (6.0, 4.0),
        (12.0, 3.0),
        (10.0, 7.0),
        (3.0, 3.0),
        (8.0, 6.0),
        (10.0, 4.0),
        (6.0, 7.0),
        (4.0, 2.0),
        (5.0, 5.0),
    ])
    .convex_hull();
    let expected = polyline(&[
        (10.0, 7.0),
        (6.0, 7.0),
        (3.0, 4.0),
        (3.0, 3.0),
        (4.0, 2.0),
        (12.0, 3.0),
        (12.0, 6.0),
        (10.0, 7.0),
    ]);
    assert!(hull.is_same(&expected), "got {hull:?}");
}

#[test]
fn hull_keeps_collinear_boundary_points() {
    let hull = polyline(&[
        (-1.0, 6.0),
        (20.0, 2.0),
        (20.0, 3.0),
        (19.0, 10.0),
        (-1.0, 6.0),
        (18.0, 0.0),
        (19.0, 10.0),
        (20.0, 1.0),
        (17.0, 11.0),
        (20.0, 4.0),
        (10.0, 13.0),
        (-2.0, 3.0),
        (-5.0, 12.0),
        (-5.0, -1.0),
        (-4.0, -3.0),
        (15.0, -2.0),
        (18.0, 0.0),
        (-4.0, 12.0),
        (7.0, 8.0),
        (14.0, 12.0),
        (6.0, 2.0),
        (6.0, -2.0),
        (20.0, 4.0),
        (3.0, -2.0),
        (3.0, 3.0),
        (-5.0, 12.0),
        (-5.0, 12.0),
        (-1.0, -2.0),
        (19.0, -0.5),
        (3.0, 10.0),
    ])
    .convex_hull();
    let expected = polyline(&[
        (20.0, 1.0),
        (20.0, 2.0),
        (20.0, 3.0),
        (20.0, 4.0),
        (19.0, 10.0),
        (17.0, 11.0),
        (14.0, 12.0),
        (10.0, 13.0),
        (-5.0, 12.0),
        (-5.0, -1.0),
        (-4.0, -3.0),
        (15.0, -2.0),
        (19.0, -0.5),
        (20.0, 1.0),
    ]);
    assert!(hull.is_same(&expected), "got {hull:?}");
    assert_eq!(hull.winding(), Some(Winding::CounterClockwise));
}

#[test]
fn quadrilateral_point_classification() {
    let quad = polyline(&[(0.0, 0.0), (1.0, 0.0), (1.0, 7.0), (-1.0, 6.0)]);
    let cases = [
        ((0.0, 0.0), Relation::On),
        ((1.0, 0.0), Relation::On),
        ((0.0, 6.5), Relation::On),
        ((1.0, 3.0), Relation::On),
        ((0.0, 6.0), Relation::In),
        ((0.5, 2.0), Relation::In),
        ((2.0, 0.0), Relation::Out),
        ((0.0, 6.6), Relation::Out),
        ((-5.0, -5.0), Relation::Out),
        ((-1.0, 7.0), Relation::Out),
    ];
    for ((x, y), expected) in cases {
        assert_eq!(quad.relation_with_pt(&Point2::new(x, y)), expected, "({x}, {y})");
        let reversed = quad.reversed();
        assert_eq!(reversed.relation_with_pt(&Point2::new(x, y)), expected, "({x}, {y})");
    }
}

#[test]
fn concave_polygon_with_repeated_vertices() {
    let polygon = polyline(&[
        (12.0, 5.0),
        (10.0, 8.0),
        (10.0, 8.0),
        (10.0, 7.0),
        (6.0, 15.0),
        (0.0, 12.0),
        (-2.0, 5.0),
        (-3.0, 5.0),
        (-3.0, 5.0),
        (-1.0, -1.0),
        (1.0, 3.0),
        (5.0, 5.0),
        (4.0, -3.0),
        (8.0, 0.0),
        (10.0, 2.0),
        (14.0, 5.0),
        (13.0, 5.0),
        (12.0, 5.0),
    ]);
    let cases = [
        ((12.0, 5.0), Relation::On),
        ((-2.0, 5.0), Relation::On),
        ((-3.0, 5.0), Relation::On),
        ((6.0, 15.0), Relation::On),
        ((9.0, 1.0), Relation::On),
        ((-2.0, 2.0), Relation::On),
        ((0.0, 5.0), Relation::In),
        ((10.0, 5.0), Relation::In),
        ((-2.0, 3.0), Relation::In),
        ((2.0, 9.0), Relation::In),
        ((8.0, 10.0), Relation::In),
        ((-4.0, 5.0), Relation::Out),
        ((16.0, 5.0), Relation::Out),
        ((12.5, 0.0), Relation::Out),
        ((0.0, -1.0), Relation::Out),
        ((-1.0, -3.0), Relation::Out),
        ((9.9, 7.5), Relation::Out),
        ((8.0, 15.0), Relation::Out),
    ];
    for ((x, y), expected) in cases {
        assert_eq!(polygon.relation_with_pt(&Point2::new(x, y)), expected, "({x}, {y})");
    }
}

#[test]
fn text_forms_round_trip() {
    let p = Point2::new(-1.5, 2.25);
    assert!(Point2::decode(&p.encode()).unwrap().approx_eq(&p));

    let segment = Segment::new(Point2::new(0.1, 0.2), Point2::new(-3.0, 4.5));
    assert_eq!(Segment::decode(&segment.encode()).unwrap(), segment);

    let line = Line::from_points(&Point2::new(1.0, 1.0), &Point2::new(4.0, -2.0)).unwrap();
    assert_eq!(Line::decode(&line.encode()).unwrap(), line);

    let circle = Circle::new(Point2::new(2.0, -1.0), 0.75).unwrap();
    assert_eq!(Circle::decode(&circle.encode()).unwrap(), circle);

    let ellipse = Ellipse::from_foci(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0), 3.0).unwrap();
    assert_eq!(Ellipse::decode(&ellipse.encode()).unwrap(), ellipse);

    let bezier = Bezier::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 2.0),
        Point2::new(3.0, 2.0),
        Point2::new(4.0, 0.0),
    );
    assert_eq!(Bezier::decode(&bezier.encode()).unwrap(), bezier);

    let ring = polyline(&[(0.0, 0.0), (2.0, 0.0), (2.0, 1.5), (0.0, 0.0)]);
    assert_eq!(Polyline::decode(&ring.encode()).unwrap(), ring);

    let path = Path::new(vec![
        SegPath::Segment(Segment::new(Point2::new(4.0, 0.0), Point2::new(6.0, 1.0))),
        SegPath::Bezier(Bezier::from_segment(&Segment::new(
            Point2::new(6.0, 1.0),
            Point2::new(6.0, 5.0),
        ))),
    ])
    .unwrap();
    let decoded = Path::decode(&path.encode()).unwrap();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded.segments(), path.segments());
    for t in [0.0, 0.5, 1.0, 1.5, 2.0] {
        assert_abs_diff_eq!(
            decoded.point_at(t).unwrap(),
            path.point_at(t).unwrap(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn malformed_text_is_rejected() {
    assert!(Segment::decode("((0, 0), (1").is_err());
    assert!(Circle::decode("((0, 0), -1)").is_err());
    assert!(Path::decode("(5 ((0, 0), (1, 1)))").is_err());
}

#[test]
fn simplification_is_idempotent() {
    let wavy = polyline(&[
        (0.0, 0.0),
        (1.0, 0.05),
        (2.0, -0.04),
        (3.0, 1.0),
        (4.0, 1.02),
        (5.0, 0.98),
        (6.0, 3.0),
        (7.0, 3.01),
    ]);
    for tol in [0.01, 0.1, 0.5, 2.0] {
        let once = wavy.simplified(tol);
        assert_eq!(once.simplified(tol), once, "tol {tol}");
        assert_eq!(once.points.first(), wavy.points.first());
        assert_eq!(once.points.last(), wavy.points.last());
    }
}

#[test]
fn bezier_hits_its_end_control_points_exactly() {
    let bezier = Bezier::new(
        Point2::new(0.1, 0.7),
        Point2::new(-3.3, 9.1),
        Point2::new(4.4, -2.2),
        Point2::new(1.0 / 3.0, 2.0 / 7.0),
    );
    assert_eq!(bezier.point_at(0.0), bezier.points[0]);
    assert_eq!(bezier.point_at(1.0), bezier.points[3]);
}

#[test]
fn box_containment_is_symmetric() {
    let outer = Aabb::new(0.0, 10.0, 0.0, 10.0);
    let inner = Aabb::new(2.0, 4.0, 3.0, 9.0);
    assert_eq!(inner.relation_with_aabb(&outer), Relation::Contain);
    assert_eq!(outer.relation_with_aabb(&inner), Relation::Contained);
    assert_eq!(outer.relation_with_aabb(&outer), Relation::Overlap);

    let apart = Aabb::new(20.0, 21.0, 0.0, 1.0);
    assert_eq!(outer.relation_with_aabb(&apart), Relation::Disjoint);
    assert_eq!(apart.relation_with_aabb(&outer), Relation::Disjoint);
    assert_eq!(outer.relation_with_aabb(&Aabb::EMPTY), Relation::Disjoint);
}

#[test]
fn rotated_rectangle_path_keeps_its_corners() {
    let rect = Aabb::new(0.0, 2.0, 0.0, 1.0);
    let path = Path::from_aabb(&rect, SegmentKind::Segment, Winding::CounterClockwise);
    assert!(path.is_polyline());
    let turned = path.rotate(FRAC_PI_2, &Point2::origin()).unwrap();
    let bounds = turned.aabb().unwrap();
    assert!(bounds.approx_eq(&Aabb::new(-1.0, 0.0, 0.0, 2.0)), "got {bounds:?}");
    let mirrored = turned.reflect(&Axis::Y).unwrap();
    assert!(mirrored.aabb().unwrap().approx_eq(&Aabb::new(0.0, 1.0, 0.0, 2.0)));
}
