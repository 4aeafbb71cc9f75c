//!
//! The bar chart configuration.
//!

pub mod data;
pub mod options;
pub mod palette;
pub mod settings;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::model::benchmark::method::Method;
use crate::model::benchmark::Benchmark;

use self::data::dataset::Dataset;
use self::data::Data;
use self::options::plugins::subtitle::Subtitle;
use self::options::plugins::Plugins;
use self::options::scales::axis::Axis;
use self::options::scales::Scales;
use self::options::Options;
use self::palette::Palette;
use self::settings::display_mode::DisplayMode;
use self::settings::Settings;

///
/// The bar chart configuration.
///
/// Serializes into the document a Chart.js-compatible renderer creates its chart
/// from.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Chart {
    /// The chart kind identifier.
    pub r#type: &'static str,
    /// The labels and series.
    pub data: Data,
    /// The behavior and appearance options.
    pub options: Options,
}

impl Chart {
    /// The chart kind identifier.
    pub const TYPE: &'static str = "bar";

    /// The duration series draw order.
    pub const ORDER_DURATION: u8 = 1;
    /// The allocation series draw order. Drawn in front of the duration series.
    pub const ORDER_ALLOCATION: u8 = 0;

    ///
    /// Builds the chart configuration for a benchmark.
    ///
    /// `None` produces the cleared configuration with empty labels, series, and
    /// axis titles, so a consumer can always apply the latest document. The theme
    /// and scale settings apply either way.
    ///
    pub fn build(benchmark: Option<&Benchmark>, settings: &Settings) -> Self {
        let mut data = Data::default();
        let mut x_title = String::new();
        let mut y_title = String::new();

        if let Some(benchmark) = benchmark {
            data.labels = benchmark.categories.clone();
            x_title = benchmark.categories_title.clone();
            y_title = match settings.display {
                DisplayMode::Allocation => benchmark.allocation_unit.long.clone(),
                DisplayMode::Duration | DisplayMode::Both => {
                    benchmark.duration_unit.long.clone()
                }
            };

            let category_indexes: HashMap<&str, usize> = benchmark
                .categories
                .iter()
                .enumerate()
                .map(|(index, category)| (category.as_str(), index))
                .collect();
            let methods: Vec<&Method> = benchmark
                .methods
                .iter()
                .filter(|method| settings.matches(method.name.as_str()))
                .collect();

            let mut palette = Palette::default();
            if settings.display.shows_duration() {
                for method in methods.iter() {
                    let mut values = vec![None; benchmark.categories.len()];
                    for result in method.results.iter() {
                        if let Some(index) = category_indexes.get(result.category.as_str()) {
                            values[*index] = Some(result.duration.value);
                        }
                    }
                    data.datasets.push(Dataset::new(
                        method.name.clone(),
                        values,
                        palette.next_color().to_owned(),
                        Self::ORDER_DURATION,
                    ));
                }
            }
            if settings.display.shows_allocation() {
                for method in methods.iter() {
                    if method.results.iter().all(|result| result.allocation.is_none()) {
                        continue;
                    }
                    let mut values = vec![None; benchmark.categories.len()];
                    for result in method.results.iter() {
                        if let (Some(index), Some(allocation)) = (
                            category_indexes.get(result.category.as_str()),
                            result.allocation.as_ref(),
                        ) {
                            values[*index] = Some(allocation.value);
                        }
                    }
                    data.datasets.push(Dataset::new(
                        method.name.clone(),
                        values,
                        palette.next_color().to_owned(),
                        Self::ORDER_ALLOCATION,
                    ));
                }
            }
        }

        Self {
            r#type: Self::TYPE,
            data,
            options: Options {
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    subtitle: Subtitle::new(settings.theme.credit_color()),
                },
                scales: Scales {
                    x: Axis::new(None, x_title, settings.theme.grid_color()),
                    y: Axis::new(
                        Some(settings.scale.type_id()),
                        y_title,
                        settings.theme.grid_color(),
                    ),
                },
            },
        }
    }
}
