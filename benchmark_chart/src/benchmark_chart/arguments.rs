//!
//! The benchmark chart arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark chart arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input files.
    /// If only one path is provided and it is a directory, all Markdown reports under it are taken.
    pub input_paths: Vec<PathBuf>,

    /// Output format: `chart` or `json`.
    #[arg(long = "output-format", default_value_t = benchmark_chart::OutputFormat::Chart)]
    pub output_format: benchmark_chart::OutputFormat,

    /// Value axis scale: `linear`, `log10`, or `log2`.
    #[arg(long, default_value_t = benchmark_chart::ScaleType::Linear)]
    pub scale: benchmark_chart::ScaleType,

    /// Displayed measurements: `duration`, `allocation`, or `both`.
    #[arg(long, default_value_t = benchmark_chart::DisplayMode::Duration)]
    pub display: benchmark_chart::DisplayMode,

    /// Color theme of the chart: `dark` or `light`.
    #[arg(long, default_value_t = benchmark_chart::Theme::Dark)]
    pub theme: benchmark_chart::Theme,

    /// Shows only the methods whose name matches the regular expression.
    #[arg(long)]
    pub filter: Option<String>,

    /// Output file, or output directory when several input files are provided.
    #[arg(long = "output-path")]
    pub output_path: PathBuf,
}
