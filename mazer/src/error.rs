use std::io;
use std::path::PathBuf;

use mazer_core::MazeError;
use thiserror::Error;

/// Failures of a full generate-dump-solve run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write maze to {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Point;

    #[test]
    fn maze_errors_pass_through_unchanged() {
        let err: AppError = MazeError::NoPath {
            start: Point::new(1, 1),
            end: Point::new(3, 3),
        }
        .into();
        assert_eq!(err.to_string(), "no path from (1, 1) to (3, 3)");
    }

    #[test]
    fn output_errors_name_the_file() {
        let err = AppError::WriteOutput {
            path: PathBuf::from("out/maze.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write maze to out/maze.txt: denied");
    }
}
