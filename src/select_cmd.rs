//! Select command: classify and pick representative years without assembly.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use smy_engine::{Decision, MonthSelection, select_years};
use smy_io::{SynthesisReport, read_parquet, write_report};

use crate::cli::SelectArgs;
use crate::config::SmyConfig;
use crate::convert;

/// Run classification and selection, printing one line per month.
pub fn run(args: SelectArgs) -> Result<()> {
    let _cmd = info_span!("select").entered();

    let mut config = SmyConfig::load(args.common.config.as_deref())?;
    config.apply_overrides(&args.common);

    let input =
        config.io.input.as_ref().ok_or_else(|| {
            anyhow!("no input path: set [io].input in config or use --input")
        })?;
    let synthesis_cfg = convert::build_synthesis_config(&config.synthesis)?;

    info!(path = %input.display(), "reading hourly series");
    let series = read_parquet(input)
        .with_context(|| format!("failed to read Parquet: {}", input.display()))?;

    let selection = select_years(&series, &synthesis_cfg).context("year selection failed")?;

    println!("month  year  decision");
    for month in &selection.selection.months {
        println!("{}", format_month(month));
    }

    if let Some(ref report_path) = config.io.report {
        write_report(report_path, &SynthesisReport::from_selection(&selection))
            .with_context(|| format!("failed to write report: {}", report_path.display()))?;
    }

    Ok(())
}

fn format_month(month: &MonthSelection) -> String {
    let decision = match month.decision {
        Decision::Cascade(criterion) => format!("cascade ({criterion})"),
        Decision::MinTemperatureDeviation => "min temperature deviation".to_string(),
        Decision::ClosestToCentreYear => "closest to centre year".to_string(),
        Decision::EarliestYear => "earliest year".to_string(),
    };
    format!("{:<6} {:<5} {decision}", month.month.to_string(), month.year)
}
