use clap::Parser;
use mazer_crossterm::{TerminalRenderer, solution_lines};

use mazer_lib::{Cli, run, run_on, saved_message};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("MAZER_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("MAZER_LOG")
            .write_style("MAZER_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let cli = Cli::parse();
    let cfg = cli.resolve()?;
    log::debug!("resolved config: {cfg:?}");

    let report = if cfg.render.animate {
        let mut term = TerminalRenderer::stdout(cfg.render.glyphs(), cfg.render.delays());
        run_on(&cfg, Some(&mut term))?
    } else {
        let report = run(&cfg)?;
        if let Some(path) = &report.output {
            println!("{}", saved_message(path));
        }
        for line in solution_lines(&report.grid, &cfg.render.glyphs(), &report.solution.path) {
            println!("{line}");
        }
        report
    };

    if let Some(e) = &report.render_error {
        eprintln!("warning: terminal drawing stopped early: {e}");
    }
    println!("{report}");
    Ok(())
}
