//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use smy_engine::SynthesisConfig;
use smy_io::{Compression, WriterConfig};

use crate::config::{IoConfig, SynthesisToml};

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Builds a [`SynthesisConfig`] from the TOML synthesis configuration.
///
/// Both candidate-range bounds must be set, either in the file or on the
/// command line.
pub fn build_synthesis_config(synthesis: &SynthesisToml) -> Result<SynthesisConfig> {
    let Some(start) = synthesis.start_year else {
        bail!("no start year: set [synthesis].start_year in config or use --start-year");
    };
    let Some(end) = synthesis.end_year else {
        bail!("no end year: set [synthesis].end_year in config or use --end-year");
    };
    let cfg = SynthesisConfig::new(start, end)
        .with_use_estimated_irradiance(synthesis.use_estimated_irradiance)
        .with_model_irradiance_since(synthesis.model_irradiance_since);
    cfg.validate().context("invalid [synthesis] configuration")?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoConfig) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    Ok(WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesis(start: Option<i32>, end: Option<i32>) -> SynthesisToml {
        SynthesisToml {
            start_year: start,
            end_year: end,
            ..SynthesisToml::default()
        }
    }

    #[test]
    fn compression_names_are_case_insensitive() {
        assert_eq!(parse_compression("ZSTD").unwrap(), Compression::Zstd);
        assert_eq!(parse_compression("none").unwrap(), Compression::None);
        assert!(parse_compression("lz4").is_err());
    }

    #[test]
    fn synthesis_config_carries_every_field() {
        let mut toml = synthesis(Some(2011), Some(2020));
        toml.use_estimated_irradiance = false;
        toml.model_irradiance_since = 2015;
        let cfg = build_synthesis_config(&toml).unwrap();
        assert_eq!(cfg.start_year(), 2011);
        assert_eq!(cfg.end_year(), 2020);
        assert!(!cfg.use_estimated_irradiance());
        assert_eq!(cfg.model_irradiance_since(), 2015);
    }

    #[test]
    fn missing_years_are_reported() {
        let err = build_synthesis_config(&synthesis(None, Some(2020))).unwrap_err();
        assert!(err.to_string().contains("--start-year"));
        let err = build_synthesis_config(&synthesis(Some(2011), None)).unwrap_err();
        assert!(err.to_string().contains("--end-year"));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert!(build_synthesis_config(&synthesis(Some(2020), Some(2011))).is_err());
    }

    #[test]
    fn writer_config_from_io() {
        let io = IoConfig {
            compression: "zstd".to_string(),
            row_group_size: 8760,
            ..IoConfig::default()
        };
        let cfg = build_writer_config(&io).unwrap();
        assert_eq!(cfg.compression(), Compression::Zstd);
        assert_eq!(cfg.row_group_size(), 8760);
    }
}
