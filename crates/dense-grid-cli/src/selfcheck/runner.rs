use anyhow::{ensure, Result};
use dense_grid::Grid;

use crate::selfcheck::input::SelfCheckConfig;

/// Summary of a successful self-check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub rounds: usize,
    pub checks: usize,
    pub cells: usize,
}

/// Run the grid contract checks `config.repeat` times.
pub fn run_self_check(config: &SelfCheckConfig) -> Result<CheckReport> {
    config.validate()?;

    let mut checks = 0;
    for round in 0..config.repeat {
        checks += check_round(config)?;
        log::debug!("Self-check round {} passed", round + 1);
    }

    Ok(CheckReport {
        rounds: config.repeat,
        checks,
        cells: config.rows * config.cols,
    })
}

fn check_round(config: &SelfCheckConfig) -> Result<usize> {
    let (rows, cols) = (config.rows, config.cols);
    let mut checks = 0;

    let mut grid = Grid::try_from_elem(rows, cols, config.initial)?;
    ensure!(
        grid.shape() == (rows, cols),
        "constructed grid has shape {:?}, expected ({}, {})",
        grid.shape(),
        rows,
        cols
    );
    checks += 1;

    // A 0-column grid can still report `usize::MAX` rows; it has no cells to visit.
    let (visit_rows, visit_cols) = if grid.is_empty() {
        (0, 0)
    } else {
        grid.shape()
    };

    for y in 0..visit_rows {
        for x in 0..visit_cols {
            ensure!(
                grid[y][x] == config.initial,
                "cell ({}, {}) reads {} after construction, expected {}",
                y,
                x,
                grid[y][x],
                config.initial
            );
        }
    }
    checks += 1;

    for y in 0..visit_rows {
        for x in 0..visit_cols {
            grid[y][x] = config.fill;
        }
    }
    for y in 0..visit_rows {
        for x in 0..visit_cols {
            ensure!(
                grid[(y, x)] == config.fill,
                "cell ({}, {}) reads {} through two-index access, expected {}",
                y,
                x,
                grid[(y, x)],
                config.fill
            );
        }
    }
    checks += 1;

    let mut copy = grid.clone();
    if !copy.is_empty() {
        copy[0][0] = config.initial;
        ensure!(
            grid[(0, 0)] == config.fill,
            "writing to a copy changed the original grid"
        );
    }
    checks += 1;

    let mut moved = grid.take();
    ensure!(
        moved.shape() == (rows, cols) && grid.shape() == (0, 0) && grid.is_empty(),
        "move left shapes {:?} and {:?}",
        moved.shape(),
        grid.shape()
    );
    checks += 1;

    moved.fill(config.initial);
    ensure!(
        moved.shape() == (rows, cols) && moved.iter().all(|&v| v == config.initial),
        "fill assignment did not overwrite every cell in place"
    );
    grid.move_from(&mut moved);
    ensure!(
        grid.shape() == (rows, cols) && moved.is_empty(),
        "move assignment did not transfer the buffer"
    );
    checks += 1;

    let single = Grid::single(config.fill);
    ensure!(
        single.shape() == (1, 1) && single[(0, 0)] == config.fill,
        "single-value grid is not 1x1"
    );
    checks += 1;

    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes() {
        let report = run_self_check(&SelfCheckConfig::default()).unwrap();
        assert_eq!(report.rounds, 1);
        assert_eq!(report.cells, 6);
        assert_eq!(report.checks, 7);
    }

    #[test]
    fn empty_grid_passes() {
        let config = SelfCheckConfig {
            rows: 0,
            cols: 5,
            ..SelfCheckConfig::default()
        };
        assert!(run_self_check(&config).is_ok());
    }

    #[test]
    fn zero_width_grid_with_max_rows_finishes() {
        let config = SelfCheckConfig {
            rows: usize::MAX,
            cols: 0,
            ..SelfCheckConfig::default()
        };
        let report = run_self_check(&config).unwrap();
        assert_eq!(report.cells, 0);
    }

    #[test]
    fn oversized_grid_is_an_error() {
        let config = SelfCheckConfig {
            rows: 1 << 62,
            cols: 1,
            ..SelfCheckConfig::default()
        };
        let err = run_self_check(&config).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn zero_repeat_is_rejected() {
        let config = SelfCheckConfig {
            repeat: 0,
            ..SelfCheckConfig::default()
        };
        assert!(run_self_check(&config).is_err());
    }
}
