//!
//! The tool output.
//!

pub mod chart;
pub mod file;
pub mod format;
pub mod json;

use std::path::PathBuf;

use crate::model::benchmark::Benchmark;

use self::chart::settings::Settings;
use self::chart::Chart;
use self::file::File;
use self::format::Format;
use self::json::Json;

///
/// The tool output.
///
pub enum Output {
    /// The output is a single unnamed file.
    SingleFile(String),
    /// The output is structured as a file tree, relative to some
    /// user-provided output directory.
    MultipleFiles(Vec<File>),
}

impl Output {
    ///
    /// Writes the output to the file system.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
            Output::MultipleFiles(files) => {
                if !files.is_empty() {
                    std::fs::create_dir_all(&path)?;
                }
                for File {
                    path: relative_path,
                    content,
                } in files
                {
                    let file_path = path.join(relative_path);
                    std::fs::write(file_path.as_path(), content).map_err(|error| {
                        anyhow::anyhow!("Output file {file_path:?} writing: {error}")
                    })?;
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<(Option<Benchmark>, &Settings, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from(
        (benchmark, settings, output_format): (Option<Benchmark>, &Settings, Format),
    ) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Chart => Chart::build(benchmark.as_ref(), settings).into(),
            Format::Json => Json::from(benchmark.as_ref()).into(),
        })
    }
}

impl From<Chart> for Output {
    fn from(chart: Chart) -> Self {
        let content = serde_json::to_string_pretty(&chart).expect("Always valid");
        Output::SingleFile(content)
    }
}

impl From<Json> for Output {
    fn from(json: Json) -> Self {
        Output::SingleFile(json.content)
    }
}
