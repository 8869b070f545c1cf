use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;

use dense_grid::Grid;
use dense_grid_cli::cli::build_cli;
use dense_grid_cli::selfcheck::input::SelfCheckConfig;
use dense_grid_cli::selfcheck::runner;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DENSE_GRID_LOG", "error,dense_grid=info"))
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", sub_m)) => handle_check(sub_m),
        Some(("show", sub_m)) => handle_show(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_check(matches: &ArgMatches) -> Result<()> {
    let config = SelfCheckConfig::from_arguments(matches)?;

    if matches.get_one::<std::path::PathBuf>("config").is_none() {
        let default_json = serde_json::to_string_pretty(&config).unwrap_or_default();
        eprintln!("[dense-grid] No config provided; using:\n{}", default_json);
    }

    log::info!(
        "[dense-grid] Checking a {}x{} grid, {} round(s)",
        config.rows,
        config.cols,
        config.repeat
    );

    match runner::run_self_check(&config) {
        Ok(report) => {
            println!(
                "Self-check passed: {} round(s), {} checks, {} cells",
                report.rounds, report.checks, report.cells
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Self-check failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_show(matches: &ArgMatches) -> Result<()> {
    let rows = *matches.get_one::<usize>("rows").unwrap_or(&0);
    let cols = *matches.get_one::<usize>("cols").unwrap_or(&0);
    let value = *matches.get_one::<f32>("value").unwrap_or(&0.0);

    let grid = Grid::try_from_elem(rows, cols, value)?;
    log::debug!("[dense-grid] Showing grid of shape {:?}", grid.shape());
    println!("{}", grid);
    Ok(())
}
