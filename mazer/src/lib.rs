//! mazer: generate a hunt-and-kill maze, dump it to a file, and watch a
//! depth-first walker solve it on the terminal.
//!
//! The binary is a thin shell over [`run`]: flags from [`Cli`] are layered
//! onto an [`AppConfig`], and [`run_on`] drives generation and solving with
//! an optional [`mazer_crossterm::TerminalRenderer`] as the observer.

pub mod cli;
pub mod config;
pub mod error;
pub mod run;

pub use cli::Cli;
pub use config::{AppConfig, OutputConfig, RenderConfig};
pub use error::AppError;
pub use run::{Report, dump, run, run_on, saved_message};
