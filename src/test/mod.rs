use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{triangulation::enclosure_corners, Triangulator, TriangulatorError, Vec2};

fn triangle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> [Vec2; 3] {
    [
        Vec2::new(a.0, a.1),
        Vec2::new(b.0, b.1),
        Vec2::new(c.0, c.1),
    ]
}

fn scatter(seed: u64, count: usize) -> Vec<Vec2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Vec2::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

#[test]
fn unit_square_sequence() {
    let mut triangulator = Triangulator::new();
    triangulator.add_points([
        Vec2::new(0., 0.),
        Vec2::new(1., 0.),
        Vec2::new(0., 1.),
        Vec2::new(1., 1.),
    ]);
    let triangles = triangulator.triangulate().unwrap();
    let expected = vec![
        triangle((1., 1.), (1., 0.), (0., 1.)),
        triangle((2., -1.), (0., 0.), (1., 0.)),
        triangle((0., 0.), (1., 0.), (0., 1.)),
        triangle((0., 0.), (1., 0.), (0., 1.)),
        triangle((0., 1.), (0., 0.), (1., 0.)),
        triangle((1., 0.), (0., 1.), (1., 1.)),
        triangle((1., 0.), (0., 1.), (0., 0.)),
        triangle((0., 1.), (1., 1.), (-1., -1.)),
        triangle((0., 0.), (1., 0.), (0., 1.)),
        triangle((1., 1.), (-1., -1.), (-1., 2.)),
        triangle((-1., -1.), (-1., 2.), (2., -1.)),
        triangle((-1., 2.), (2., -1.), (0., 0.)),
    ];
    assert_eq!(triangles, expected);
}

#[test]
fn unit_square_report() {
    let mut triangulator = Triangulator::new();
    triangulator.add_points([
        Vec2::new(0., 0.),
        Vec2::new(1., 0.),
        Vec2::new(0., 1.),
        Vec2::new(1., 1.),
    ]);
    let report = triangulator.triangulate_with(|_| {}).unwrap();
    assert_eq!(report.triangles, 12);
    assert_eq!(report.degenerate_triangles, 0);
    assert_eq!(report.stuck_chains, 0);
}

#[test]
fn single_point_emits_nothing() {
    let mut triangulator = Triangulator::new();
    triangulator.add_point(Vec2::new(5., 5.));
    let mut triangles = Vec::new();
    let report = triangulator
        .triangulate_with(|t| triangles.push(t))
        .unwrap();
    assert!(triangles.is_empty());
    assert_eq!(report.triangles, 0);
    // The degenerate enclosure collapses onto the point; every ready chain
    // resolves to three coincident vertices and is skipped.
    assert_eq!(report.degenerate_triangles, 6);
    assert_eq!(report.stuck_chains, 0);
}

#[test]
fn empty_input_is_incomplete() {
    let triangulator = Triangulator::new();
    assert!(matches!(
        triangulator.triangulate(),
        Err(TriangulatorError::Incomplete)
    ));
}

#[test]
fn three_points_emit_directly() {
    let mut triangulator = Triangulator::new();
    triangulator.add_points([Vec2::new(0., 0.), Vec2::new(2., 0.), Vec2::new(0., 2.)]);
    let triangles = triangulator.triangulate().unwrap();
    assert_eq!(triangles.len(), 10);
    // Emitted by the first refinement and, at outer position 3, by a walk that
    // closes at exactly three vertices without entering the refiner.
    let direct = triangle((0., 0.), (2., 0.), (0., 2.));
    assert_eq!(triangles[0], direct);
    assert_eq!(triangles[6], direct);
}

#[test]
fn vertices_come_from_inputs_or_corners() {
    let points = scatter(7, 20);
    let corners = enclosure_corners(&points);
    let mut triangulator = Triangulator::new();
    triangulator.add_points(points.clone());
    let triangles = triangulator.triangulate().unwrap();
    assert!(!triangles.is_empty());
    for triangle in &triangles {
        for vertex in triangle {
            assert!(
                points.contains(vertex) || corners.contains(vertex),
                "fabricated vertex {vertex:?}"
            );
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let mut triangulator = Triangulator::new();
    triangulator.add_points(scatter(42, 16));
    let first = triangulator.triangulate().unwrap();
    let second = triangulator.triangulate().unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn input_order_changes_the_decomposition() {
    let points = scatter(11, 12);
    let mut forward = Triangulator::new();
    forward.add_points(points.clone());
    let mut reversed = Triangulator::new();
    reversed.add_points(points.into_iter().rev());
    // Order-dependent by design; both runs still only draw from the same
    // vertex set, checked elsewhere.
    assert_ne!(
        forward.triangulate().unwrap(),
        reversed.triangulate().unwrap()
    );
}
