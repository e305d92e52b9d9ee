use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use smy_engine::DEFAULT_MODEL_IRRADIANCE_SINCE;

use crate::cli::CommonArgs;

/// Top-level smy configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SmyConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Year selection settings.
    #[serde(default)]
    pub synthesis: SynthesisToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            report: None,
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisToml {
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    #[serde(default = "default_true")]
    pub use_estimated_irradiance: bool,
    #[serde(default = "default_model_irradiance_since")]
    pub model_irradiance_since: i32,
}

impl Default for SynthesisToml {
    fn default() -> Self {
        Self {
            start_year: None,
            end_year: None,
            use_estimated_irradiance: true,
            model_irradiance_since: default_model_irradiance_since(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_model_irradiance_since() -> i32 {
    DEFAULT_MODEL_IRRADIANCE_SINCE
}

impl SmyConfig {
    /// Load the config file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Apply command-line overrides on top of the file settings.
    pub fn apply_overrides(&mut self, args: &CommonArgs) {
        if let Some(ref input) = args.input {
            self.io.input = Some(input.clone());
        }
        if let Some(ref report) = args.report {
            self.io.report = Some(report.clone());
        }
        if let Some(year) = args.start_year {
            self.synthesis.start_year = Some(year);
        }
        if let Some(year) = args.end_year {
            self.synthesis.end_year = Some(year);
        }
        if args.disable_est {
            self.synthesis.use_estimated_irradiance = false;
        }
    }
}
