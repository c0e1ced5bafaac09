//! Error taxonomy shared by the generator and the solver.

use thiserror::Error;

use crate::geom::Point;

/// Failures reported by maze construction and solving.
///
/// Out-of-range cell access is not represented here: it is a contract
/// violation and panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: both must be odd and at least 3")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("{role} position {pos} is not an open chamber inside the maze")]
    InvalidEndpoint { role: Endpoint, pos: Point },
    #[error("no path from {start} to {end}")]
    NoPath { start: Point, end: Point },
}

/// Which end of a solve request an [`MazeError::InvalidEndpoint`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}
