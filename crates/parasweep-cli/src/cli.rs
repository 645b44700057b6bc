//! CLI argument definitions for the parametric sweep tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use parasweep_model::OperationKind;

#[derive(Parser)]
#[command(
    name = "parasweep",
    version,
    about = "Parametrically drive named model parameters across ranges",
    long_about = "Sweep one or more named numeric parameters of a design model across\n\
                  ranges, recomputing at each combination and optionally exporting an\n\
                  artifact per combination under a deterministic filename."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a sweep against a design model JSON file.
    Sweep(SweepArgs),

    /// Enumerate the combinations and artifact stems a sweep would visit.
    Plan(PlanArgs),

    /// Validate a CSV parameter source row by row.
    Check(CheckArgs),
}

/// Where the parameter specs come from: a single set of range flags or a
/// CSV file of `name,start,end,step` rows.
#[derive(Args)]
pub struct ParamSelection {
    /// Sweep a single named parameter (requires --start/--end/--step).
    #[arg(
        long,
        value_name = "NAME",
        conflicts_with = "csv",
        requires = "start",
        requires = "end",
        requires = "step"
    )]
    pub param: Option<String>,

    /// Start value for --param.
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// End value for --param.
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Step value for --param (always positive; direction is derived).
    #[arg(long, value_name = "VALUE")]
    pub step: Option<f64>,

    /// CSV file of parameter rows, outer-to-inner sweep order.
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SweepArgs {
    /// Path to the design model JSON file.
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    #[command(flatten)]
    pub selection: ParamSelection,

    /// Operation to perform at each combination.
    #[arg(long, value_enum, default_value = "loop-only")]
    pub operation: OperationArg,

    /// Existing directory to receive exported artifacts.
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Export one STL file per solid body instead of one per combination.
    #[arg(long = "per-body")]
    pub per_body: bool,

    /// Leave parameters at their final swept values instead of restoring.
    #[arg(long = "no-restore")]
    pub no_restore: bool,

    /// Write the model state back to MODEL after the sweep.
    #[arg(long)]
    pub save: bool,
}

#[derive(Parser)]
pub struct PlanArgs {
    #[command(flatten)]
    pub selection: ParamSelection,

    /// Maximum combinations to list (0 for all).
    #[arg(long, default_value_t = 100)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV parameter source to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OperationArg {
    LoopOnly,
    F3d,
    Iges,
    Sat,
    Smt,
    Step,
    Stl,
}

impl OperationArg {
    pub fn kind(self) -> OperationKind {
        match self {
            OperationArg::LoopOnly => OperationKind::LoopOnly,
            OperationArg::F3d => OperationKind::ExportFusionArchive,
            OperationArg::Iges => OperationKind::ExportIges,
            OperationArg::Sat => OperationKind::ExportSat,
            OperationArg::Smt => OperationKind::ExportSmt,
            OperationArg::Step => OperationKind::ExportStep,
            OperationArg::Stl => OperationKind::ExportStl,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
