//! Application configuration: maze parameters plus rendering and output
//! settings, loaded from TOML.
//!
//! ```toml
//! [maze]
//! width = 41
//! height = 21
//! seed = 7
//! start = { x = 1, y = 19 }
//!
//! [render]
//! cell_width = 2
//! generate_delay_ms = 5
//!
//! [output]
//! path = "maze.txt"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use mazer_core::MazeConfig;
use mazer_crossterm::{Delays, Glyphs};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default dump file, written next to where the program runs.
pub const DEFAULT_OUTPUT: &str = "maze_output.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub maze: MazeConfig,
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// How the maze is drawn, on screen and in the dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Animate on the terminal; when off, the finished maze is printed once.
    pub animate: bool,
    /// Columns per cell.
    pub cell_width: usize,
    /// Rows per cell.
    pub cell_height: u16,
    pub wall_char: char,
    /// Pause after each cell opened during generation.
    pub generate_delay_ms: u64,
    /// Pause after each solver move.
    pub solve_delay_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            animate: true,
            cell_width: 3,
            cell_height: 1,
            wall_char: '#',
            generate_delay_ms: 0,
            solve_delay_ms: 0,
        }
    }
}

impl RenderConfig {
    pub fn glyphs(&self) -> Glyphs {
        Glyphs::new(self.cell_width, self.cell_height, self.wall_char)
    }

    pub fn delays(&self) -> Delays {
        Delays::from_millis(self.generate_delay_ms, self.solve_delay_ms)
    }
}

/// Where the generated maze is dumped before solving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl AppConfig {
    /// Parse a config from TOML text. Missing sections and keys keep their
    /// defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|source| AppError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| AppError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
