//!
//! The benchmark chart library.
//!

pub mod input;
pub mod model;
pub mod output;

pub use crate::input::error::Error as InputError;
pub use crate::input::row::Row;
pub use crate::input::Report;
pub use crate::model::benchmark::columns::Columns;
pub use crate::model::benchmark::measure::Measure;
pub use crate::model::benchmark::method::result::Result as MethodResult;
pub use crate::model::benchmark::method::Method;
pub use crate::model::benchmark::unit::Unit;
pub use crate::model::benchmark::Benchmark;
pub use crate::output::chart::settings::display_mode::DisplayMode;
pub use crate::output::chart::settings::scale_type::ScaleType;
pub use crate::output::chart::settings::theme::Theme;
pub use crate::output::chart::settings::Settings;
pub use crate::output::chart::Chart;
pub use crate::output::file::File;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::json::Json;
pub use crate::output::Output;
