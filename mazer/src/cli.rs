//! Command-line flags. Every flag overrides the matching config value.

use std::path::PathBuf;

use clap::Parser;
use mazer_core::Point;

use crate::config::AppConfig;
use crate::error::AppError;

/// Generate a perfect maze with hunt-and-kill, then solve it depth-first.
#[derive(Parser, Debug, Default)]
#[command(name = "mazer", version, about, long_about = None)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maze width in cells (odd, at least 3)
    #[arg(long)]
    pub width: Option<i32>,

    /// Maze height in cells (odd, at least 3)
    #[arg(long)]
    pub height: Option<i32>,

    /// Random seed; the same seed gives the same maze
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Solve start as `x,y`
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,

    /// Solve end as `x,y`
    #[arg(long, value_parser = parse_point)]
    pub end: Option<Point>,

    /// File the generated maze is written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Don't write the maze to a file
    #[arg(long)]
    pub no_output: bool,

    /// Print the result instead of animating on the terminal
    #[arg(long)]
    pub headless: bool,

    /// Pause after each carved cell, in milliseconds
    #[arg(long)]
    pub generate_delay_ms: Option<u64>,

    /// Pause after each solver move, in milliseconds
    #[arg(long)]
    pub solve_delay_ms: Option<u64>,

    /// Columns per cell
    #[arg(long)]
    pub cell_width: Option<usize>,

    /// Rows per cell
    #[arg(long)]
    pub cell_height: Option<u16>,

    /// Character walls are drawn with
    #[arg(long)]
    pub wall_char: Option<char>,
}

impl Cli {
    /// The config file (or defaults) with the flags applied on top.
    pub fn resolve(&self) -> Result<AppConfig, AppError> {
        let base = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Overlay the given flags onto `cfg`.
    pub fn apply(&self, mut cfg: AppConfig) -> AppConfig {
        let maze = &mut cfg.maze;
        if let Some(w) = self.width {
            maze.width = w;
        }
        if let Some(h) = self.height {
            maze.height = h;
        }
        maze.seed = self.seed.or(maze.seed);
        maze.start = self.start.or(maze.start);
        maze.end = self.end.or(maze.end);

        let render = &mut cfg.render;
        if self.headless {
            render.animate = false;
        }
        if let Some(ms) = self.generate_delay_ms {
            render.generate_delay_ms = ms;
        }
        if let Some(ms) = self.solve_delay_ms {
            render.solve_delay_ms = ms;
        }
        if let Some(w) = self.cell_width {
            render.cell_width = w;
        }
        if let Some(h) = self.cell_height {
            render.cell_height = h;
        }
        if let Some(c) = self.wall_char {
            render.wall_char = c;
        }

        if let Some(path) = &self.output {
            cfg.output.path = path.clone();
        }
        if self.no_output {
            cfg.output.enabled = false;
        }
        cfg
    }
}

/// Parse `x,y` into a point.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("3,5"), Ok(Point::new(3, 5)));
        assert_eq!(parse_point(" 1 , 31 "), Ok(Point::new(1, 31)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "mazer",
            "--width",
            "21",
            "--seed",
            "9",
            "--end",
            "19,1",
            "--headless",
            "--no-output",
            "--solve-delay-ms",
            "40",
            "--wall-char",
            "@",
        ])
        .unwrap();
        let mut base = AppConfig::default();
        base.maze.height = 11;
        base.maze.seed = Some(1);
        let cfg = cli.apply(base);

        assert_eq!(cfg.maze.width, 21);
        assert_eq!(cfg.maze.height, 11);
        assert_eq!(cfg.maze.seed, Some(9));
        assert_eq!(cfg.maze.end, Some(Point::new(19, 1)));
        assert!(!cfg.render.animate);
        assert_eq!(cfg.render.solve_delay_ms, 40);
        assert_eq!(cfg.render.wall_char, '@');
        assert!(!cfg.output.enabled);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::try_parse_from(["mazer"]).unwrap();
        let mut base = AppConfig::default();
        base.maze.seed = Some(4);
        base.output.path = PathBuf::from("elsewhere.txt");
        assert_eq!(cli.apply(base.clone()), base);
    }

    #[test]
    fn rejects_malformed_point() {
        assert!(Cli::try_parse_from(["mazer", "--start", "1;2"]).is_err());
    }
}
