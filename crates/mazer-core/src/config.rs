//! Maze run configuration.

use crate::error::{Endpoint, MazeError};
use crate::geom::Point;
use crate::grid::Dimensions;

/// Default side length, matching the classic 33×33 layout.
pub const DEFAULT_SIDE: i32 = 33;

/// Everything needed to generate and solve one maze.
///
/// `start` and `end` default to the bottom-left and top-right chambers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    /// RNG seed; `None` draws a fresh one per run.
    pub seed: Option<u64>,
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDE,
            height: DEFAULT_SIDE,
            seed: None,
            start: None,
            end: None,
        }
    }
}

impl MazeConfig {
    /// A config of the given size with everything else defaulted.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Validated dimensions.
    pub fn dims(&self) -> Result<Dimensions, MazeError> {
        Dimensions::new(self.width, self.height)
    }

    /// The solve start, defaulting to `(1, height - 2)`.
    pub fn start(&self, dims: Dimensions) -> Point {
        self.start.unwrap_or_else(|| dims.default_start())
    }

    /// The solve end, defaulting to `(width - 2, 1)`.
    pub fn end(&self, dims: Dimensions) -> Point {
        self.end.unwrap_or_else(|| dims.default_end())
    }

    /// Check dimensions and endpoints before any work starts.
    ///
    /// Endpoints must be chambers inside the outer wall, since every chamber
    /// of a finished maze is open.
    pub fn validate(&self) -> Result<ValidConfig, MazeError> {
        let dims = self.dims()?;
        let interior = dims.interior();
        let check = |role: Endpoint, pos: Point| {
            if pos.is_odd() && interior.contains(pos) {
                Ok(pos)
            } else {
                Err(MazeError::InvalidEndpoint { role, pos })
            }
        };
        Ok(ValidConfig {
            dims,
            start: check(Endpoint::Start, self.start(dims))?,
            end: check(Endpoint::End, self.end(dims))?,
            seed: self.seed,
        })
    }
}

/// A [`MazeConfig`] that passed [`MazeConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidConfig {
    pub dims: Dimensions,
    pub start: Point,
    pub end: Point,
    pub seed: Option<u64>,
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: MazeConfig = serde_json::from_str(r#"{"width": 11, "seed": 5}"#).unwrap();
        assert_eq!(cfg.width, 11);
        assert_eq!(cfg.height, DEFAULT_SIDE);
        assert_eq!(cfg.seed, Some(5));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(serde_json::from_str::<MazeConfig>(r#"{"depth": 3}"#).is_err());
    }
}
