use snafu::Snafu;

use crate::{
    boundary::{Boundary, Chain},
    vec2::Vec2,
};

const EPSILON: f32 = 1e-7;

/// Decomposes a scattered 2D point set into triangles by ear collapse over an
/// enclosing super-triangle boundary.
///
/// The decomposition is deterministic and order-dependent: the same point
/// sequence always yields the same triangle sequence. It makes no geometric
/// optimality claim (no circumcircle or orientation test); emitted triangles
/// may overlap or repeat.
#[derive(Default)]
pub struct Triangulator {
    points: Vec<Vec2>,
}

impl Triangulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, point: Vec2) {
        self.points.push(point);
    }

    pub fn add_points<I: IntoIterator<Item = Vec2>>(&mut self, points: I) {
        self.points.extend(points);
    }

    /// Runs the decomposition, handing each triangle to `on_triangle` in
    /// discovery order. Every emitted vertex is one of the input points or one
    /// of the three synthetic enclosure corners.
    pub fn triangulate_with<F>(
        &self,
        on_triangle: F,
    ) -> Result<TriangulationReport, TriangulatorError>
    where
        F: FnMut([Vec2; 3]),
    {
        if self.points.is_empty() {
            return Err(TriangulatorError::Incomplete);
        }
        Ok(Collapser::new(&self.points, on_triangle).run())
    }

    /// Collecting convenience over [`Self::triangulate_with`].
    pub fn triangulate(&self) -> Result<Vec<[Vec2; 3]>, TriangulatorError> {
        let mut triangles = Vec::new();
        self.triangulate_with(|triangle| triangles.push(triangle))?;
        Ok(triangles)
    }
}

#[derive(Debug, Snafu)]
pub enum TriangulatorError {
    /// The triangulator was run without any input points.
    Incomplete,
}

/// Per-run counters. The algorithm is best-effort on degenerate input; the
/// counters make every skipped emission observable instead of silent.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriangulationReport {
    /// Triangles handed to the callback.
    pub triangles: usize,
    /// Ready chains dropped because their triangle had no usable area
    /// (coincident or collinear vertices).
    pub degenerate_triangles: usize,
    /// Chains abandoned because no ear could be taken from them: a collapsed
    /// head slot, all references equal, or a collapse target no slot holds.
    pub stuck_chains: usize,
}

/// Corners of a triangle derived from the input bounding box, appended to the
/// point buffer behind the inputs. The corner layout is fixed: box min corner
/// pushed out, then the tall corner above it, then the wide corner beside it.
pub(crate) fn enclosure_corners(points: &[Vec2]) -> [Vec2; 3] {
    let mut min = Vec2::new(f32::MAX, f32::MAX);
    let mut max = Vec2::new(f32::MIN, f32::MIN);
    for point in points {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }
    let dx = max.x - min.x;
    let dy = max.y - min.y;
    [
        Vec2::new(min.x - dx, min.y - dy),
        Vec2::new(min.x - dx, max.y + dy),
        Vec2::new(max.x + dx, min.y - dy),
    ]
}

/// One triangulation run: the frozen point buffer (inputs plus enclosure
/// corners), the emission callback, and the running report. The live boundary
/// is owned by [`Collapser::run`] and threaded through the collapse calls.
struct Collapser<F> {
    points: Vec<Vec2>,
    on_triangle: F,
    report: TriangulationReport,
}

impl<F: FnMut([Vec2; 3])> Collapser<F> {
    fn new(input: &[Vec2], on_triangle: F) -> Self {
        let mut points = input.to_vec();
        points.extend(enclosure_corners(input));
        Self {
            points,
            on_triangle,
            report: TriangulationReport::default(),
        }
    }

    /// One pass over the initial boundary. Each position seeds two chains
    /// through the same collapse procedure: the walk of the live (possibly
    /// already mutated) boundary from that position, and the position's fixed
    /// three-vertex neighborhood in the initial boundary.
    fn run(mut self) -> TriangulationReport {
        let mut live = Boundary::new(self.points.len());
        let len = live.len();
        for position in 0..len {
            let next = (position + 1) % len;
            let prev = (position + len - 1) % len;
            let walked = live.walk(position);
            self.collapse_chain(&mut live, walked);
            self.collapse_chain(&mut live, Chain::local(prev, position, next));
        }
        self.report
    }

    fn collapse_chain(&mut self, live: &mut Boundary, mut chain: Chain) {
        if chain.len() > 3 {
            chain.pop();
            self.refine(live, chain);
        } else if chain.len() == 3 {
            self.emit(&chain);
        }
        // Shorter chains were already consumed through this vertex.
    }

    /// Ear collapse, one vertex per step. The first step mutates the live
    /// boundary; later generations work on compacted copies, so the outer pass
    /// sees exactly one collapse per seed chain.
    fn refine(&mut self, live: &mut Boundary, seed: Chain) {
        let mut state = self.collapse_step(live, seed);
        while let Some((mut structure, chain)) = state {
            state = self.collapse_step(&mut structure, chain);
        }
    }

    /// Collapses the chain head out of `structure`, relinks and compacts, then
    /// either emits a terminal triangle, abandons the chain, or returns the
    /// next generation to keep collapsing.
    fn collapse_step(
        &mut self,
        structure: &mut Boundary,
        chain: Chain,
    ) -> Option<(Boundary, Chain)> {
        let Some(head) = chain.head() else {
            self.report.stuck_chains += 1;
            return None;
        };
        let Some(opposite) = chain.opposite(head) else {
            self.report.stuck_chains += 1;
            return None;
        };
        if !structure.collapse(head) {
            self.report.stuck_chains += 1;
            return None;
        }
        structure.relink(head, opposite);
        let compacted = structure.compact();
        if compacted.len() < 3 {
            return None;
        }
        let mut next = compacted.walk(opposite);
        if next.len() > 3 {
            next.pop();
            return Some((compacted, next));
        }
        if next.len() == 3 {
            self.emit(&next);
        }
        None
    }

    fn emit(&mut self, chain: &Chain) {
        let Some(refs) = chain.resolve() else {
            self.report.stuck_chains += 1;
            return;
        };
        let [a, b, c] = refs.map(|reference| self.points[reference]);
        let area = (b - a).cross(c - a);
        // A NaN area from a degenerate enclosure is filtered as well.
        if area.abs() <= EPSILON || area.is_nan() {
            self.report.degenerate_triangles += 1;
            return;
        }
        self.report.triangles += 1;
        (self.on_triangle)([a, b, c]);
    }
}
