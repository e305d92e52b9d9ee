//! Synthesize command: select representative years and write the standard year.

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span};

use smy_engine::synthesize;
use smy_io::{SynthesisReport, read_parquet, write_parquet, write_report};

use crate::cli::SynthesizeArgs;
use crate::config::SmyConfig;
use crate::convert;

/// Run the full synthesis pipeline.
pub fn run(args: SynthesizeArgs) -> Result<()> {
    let _cmd = info_span!("synthesize").entered();

    // 1. Load config and apply overrides
    let mut config = SmyConfig::load(args.common.config.as_deref())?;
    config.apply_overrides(&args.common);
    if let Some(output) = args.output {
        config.io.output = Some(output);
    }

    let input =
        config.io.input.as_ref().ok_or_else(|| {
            anyhow!("no input path: set [io].input in config or use --input")
        })?;
    let output = config.io.output.as_ref().ok_or_else(|| {
        anyhow!("no output path: set [io].output in config or use --output")
    })?;
    let synthesis_cfg = convert::build_synthesis_config(&config.synthesis)?;
    let writer_cfg = convert::build_writer_config(&config.io)?;

    // 2. Read the hourly record
    info!(path = %input.display(), "reading hourly series");
    let series = read_parquet(input)
        .with_context(|| format!("failed to read Parquet: {}", input.display()))?;

    // 3. Classify, select, assemble
    let year = synthesize(&series, &synthesis_cfg).context("synthesis failed")?;
    for month in &year.months {
        debug!(
            month = %month.month,
            year = month.year,
            decision = ?month.decision,
            "representative year"
        );
    }
    info!(
        years = ?year.years.as_array(),
        smoothed_boundaries = year.plan.len(),
        "standard year synthesized"
    );

    // 4. Write outputs
    write_parquet(output, &year.series, &writer_cfg)
        .with_context(|| format!("failed to write Parquet: {}", output.display()))?;
    info!(path = %output.display(), "parquet output written");

    if let Some(ref report_path) = config.io.report {
        write_report(report_path, &SynthesisReport::from_synthesized(&year))
            .with_context(|| format!("failed to write report: {}", report_path.display()))?;
    }

    Ok(())
}
