use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Standard meteorological year synthesis.
#[derive(Parser)]
#[command(
    name = "smy",
    version,
    about = "Synthesize a standard meteorological year from multi-year hourly records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Select representative years and write the synthesized year.
    Synthesize(SynthesizeArgs),
    /// Select representative years only and print them.
    Select(SelectArgs),
}

/// Options shared by every subcommand; each overrides the config file.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override input Parquet path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override JSON report path from config.
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// Override first candidate year from config.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Override last candidate year from config.
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Classify on model irradiance instead of the estimated record.
    #[arg(long)]
    pub disable_est: bool,
}

/// Arguments for the `synthesize` subcommand.
#[derive(clap::Args)]
pub struct SynthesizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `select` subcommand.
#[derive(clap::Args)]
pub struct SelectArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
