use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parameters for the grid self-check routine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfCheckConfig {
    pub rows: usize,
    pub cols: usize,
    /// Value every cell is constructed with.
    pub initial: f32,
    /// Value written through the row views and then read back.
    pub fill: f32,
    pub repeat: usize,
}

impl Default for SelfCheckConfig {
    fn default() -> Self {
        SelfCheckConfig {
            rows: 3,
            cols: 2,
            initial: 0.0,
            fill: 1.0,
            repeat: 1,
        }
    }
}

/// Load a self-check configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SelfCheckConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: SelfCheckConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

impl SelfCheckConfig {
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(config_path) => load_config(config_path)?,
            None => SelfCheckConfig::default(),
        };

        // Apply CLI overrides
        if let Some(rows) = matches.get_one::<usize>("rows") {
            config.rows = *rows;
        }
        if let Some(cols) = matches.get_one::<usize>("cols") {
            config.cols = *cols;
        }
        if let Some(initial) = matches.get_one::<f32>("initial") {
            config.initial = *initial;
        }
        if let Some(fill) = matches.get_one::<f32>("fill") {
            config.fill = *fill;
        }
        if let Some(repeat) = matches.get_one::<usize>("repeat") {
            config.repeat = *repeat;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.repeat == 0 {
            anyhow::bail!("repeat must be at least 1");
        }
        if !self.initial.is_finite() || !self.fill.is_finite() {
            anyhow::bail!(
                "initial and fill values must be finite, got {} and {}",
                self.initial,
                self.fill
            );
        }
        Ok(())
    }
}
