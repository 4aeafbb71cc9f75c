//!
//! The native JSON output.
//!

use crate::model::benchmark::Benchmark;

///
/// Native JSON format that corresponds to the inner data model of the tool.
///
/// An unrecognized benchmark serializes to `null`, telling the consumer to clear
/// whatever it currently shows.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<Option<&Benchmark>> for Json {
    fn from(benchmark: Option<&Benchmark>) -> Self {
        let content = serde_json::to_string_pretty(&benchmark).expect("Always valid");
        Self { content }
    }
}
