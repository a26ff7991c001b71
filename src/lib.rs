mod boundary;
mod triangulation;
mod vec2;

pub use {
    triangulation::{TriangulationReport, Triangulator, TriangulatorError},
    vec2::Vec2,
};

#[cfg(test)]
mod test;
