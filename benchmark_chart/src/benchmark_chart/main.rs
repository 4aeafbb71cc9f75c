//!
//! The benchmark chart binary.
//!

pub(crate) mod arguments;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let input_paths: Vec<PathBuf> = if arguments.input_paths.len() == 1
        && arguments.input_paths[0].is_dir()
    {
        let resolution_pattern = format!("{}/**/*.md", arguments.input_paths[0].to_string_lossy());
        glob::glob(resolution_pattern.as_str())?
            .filter_map(Result::ok)
            .collect()
    } else if arguments.input_paths.is_empty() {
        anyhow::bail!(
            "No input files provided. Pass one or more report paths, or a directory with Markdown reports."
        );
    } else {
        arguments.input_paths
    };

    let settings = benchmark_chart::Settings::new(
        arguments.scale,
        arguments.display,
        arguments.theme,
        match arguments.filter {
            Some(ref pattern) => Some(regex::Regex::new(pattern.as_str())?),
            None => None,
        },
    );

    let mut benchmarks: Vec<(PathBuf, Option<benchmark_chart::Benchmark>)> = Vec::new();
    for path in input_paths.into_iter() {
        let report = match benchmark_chart::Report::try_from(path.as_path()) {
            Ok(report) => report,
            Err(benchmark_chart::InputError::EmptyFile { path }) => {
                if !arguments.quiet {
                    eprintln!("Warning: Input file {path:?} is empty and will be skipped.");
                }
                continue;
            }
            Err(error) => Err(error)?,
        };
        let benchmark = benchmark_chart::Benchmark::from_report(&report);
        if !arguments.quiet {
            match benchmark {
                Some(ref benchmark) => println!(
                    "{} {path:?}: {} methods, {} categories{}",
                    "LOADED".green(),
                    benchmark.methods.len(),
                    benchmark.categories.len(),
                    if benchmark.has_allocations() {
                        ", with allocations"
                    } else {
                        ""
                    },
                ),
                None => println!(
                    "{} {path:?}: no benchmark table recognized",
                    "SKIPPED".bright_black(),
                ),
            }
        }
        benchmarks.push((path, benchmark));
    }
    if benchmarks.is_empty() {
        anyhow::bail!("No usable input files found.");
    }

    let output: benchmark_chart::Output = if benchmarks.len() == 1 {
        let (_path, benchmark) = benchmarks.remove(0);
        (benchmark, &settings, arguments.output_format).try_into()?
    } else {
        let files = benchmarks
            .into_iter()
            .map(|(path, benchmark)| {
                let stem = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().to_string())
                    .unwrap_or_else(|| "benchmark".to_owned());
                match arguments.output_format {
                    benchmark_chart::OutputFormat::Chart => benchmark_chart::File::new(
                        stem,
                        benchmark_chart::Chart::build(benchmark.as_ref(), &settings),
                    ),
                    benchmark_chart::OutputFormat::Json => {
                        benchmark_chart::File::new(stem, benchmark)
                    }
                }
            })
            .collect();
        benchmark_chart::Output::MultipleFiles(files)
    };
    output.write_to_file(arguments.output_path)?;

    Ok(())
}
