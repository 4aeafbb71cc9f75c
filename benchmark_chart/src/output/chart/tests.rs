//!
//! The chart configuration tests.
//!

use crate::input::Report;
use crate::model::benchmark::Benchmark;

use super::palette::Palette;
use super::settings::display_mode::DisplayMode;
use super::settings::scale_type::ScaleType;
use super::settings::theme::Theme;
use super::settings::Settings;
use super::Chart;

fn normalize(text: &str) -> Benchmark {
    Benchmark::from_report(&Report::from_text(text)).expect("Always valid")
}

const SIMPLE_TABLE: &str = r#"
| Method | N | Mean |
|------- |-- |-----:|
| Foo    | 1 | 1.0 us |
| Foo    | 2 | 2.0 us |
| Bar    | 1 | 3.0 us |
"#;

const ALLOCATING_TABLE: &str = r#"
| Method | N | Mean    | Allocated |
|------- |-- |--------:|----------:|
| Foo    | 1 | 1.0 us  | 128 B     |
| Foo    | 2 | 2.0 us  | 256 B     |
| Bar    | 1 | 3.0 us  | 512 B     |
| Bar    | 2 | 4.0 us  | 640 B     |
"#;

#[test]
fn ok_labels_and_series() {
    let benchmark = normalize(SIMPLE_TABLE);
    let settings = Settings::default();
    let result = Chart::build(Some(&benchmark), &settings);
    assert_eq!(result.r#type, "bar");
    assert_eq!(result.data.labels, vec!["1".to_owned(), "2".to_owned()]);
    assert_eq!(result.data.datasets.len(), 2);
    assert_eq!(result.data.datasets[0].label, "Foo");
    assert_eq!(result.data.datasets[0].data, vec![Some(1.0), Some(2.0)]);
    assert_eq!(result.data.datasets[0].background_color, Palette::COLORS[0]);
    assert_eq!(result.data.datasets[0].order, Chart::ORDER_DURATION);
    assert_eq!(result.data.datasets[1].label, "Bar");
    assert_eq!(result.data.datasets[1].background_color, Palette::COLORS[1]);
    assert_eq!(result.options.scales.x.title.text, "N");
    assert_eq!(result.options.scales.y.title.text, "Microseconds");
}

#[test]
fn ok_missing_category_is_a_gap() {
    let benchmark = normalize(SIMPLE_TABLE);
    let settings = Settings::default();
    let result = Chart::build(Some(&benchmark), &settings);
    assert_eq!(result.data.datasets[1].data, vec![Some(3.0), None]);
}

#[test]
fn ok_palette_wraps_around() {
    let input = r#"
| Method | N | Mean |
|------- |-- |-----:|
| M0     | 1 | 1.0 us |
| M1     | 1 | 1.0 us |
| M2     | 1 | 1.0 us |
| M3     | 1 | 1.0 us |
| M4     | 1 | 1.0 us |
| M5     | 1 | 1.0 us |
| M6     | 1 | 1.0 us |
| M7     | 1 | 1.0 us |
| M8     | 1 | 1.0 us |
"#;
    let benchmark = normalize(input);
    let settings = Settings::default();
    let result = Chart::build(Some(&benchmark), &settings);
    assert_eq!(result.data.datasets.len(), 9);
    assert_eq!(result.data.datasets[7].background_color, Palette::COLORS[7]);
    assert_eq!(result.data.datasets[8].background_color, Palette::COLORS[0]);
}

#[test]
fn ok_display_both_appends_allocation_series() {
    let benchmark = normalize(ALLOCATING_TABLE);
    let settings = Settings::new(ScaleType::Linear, DisplayMode::Both, Theme::Dark, None);
    let result = Chart::build(Some(&benchmark), &settings);
    assert_eq!(result.data.datasets.len(), 4);
    assert_eq!(result.data.datasets[0].order, Chart::ORDER_DURATION);
    assert_eq!(result.data.datasets[1].order, Chart::ORDER_DURATION);
    assert_eq!(result.data.datasets[2].label, "Foo");
    assert_eq!(result.data.datasets[2].order, Chart::ORDER_ALLOCATION);
    assert_eq!(result.data.datasets[2].data, vec![Some(128.0), Some(256.0)]);
    assert_eq!(result.data.datasets[2].background_color, Palette::COLORS[2]);
    assert_eq!(result.data.datasets[3].background_color, Palette::COLORS[3]);
    assert_eq!(result.options.scales.y.title.text, "Microseconds");
}

#[test]
fn ok_display_allocation_only() {
    let benchmark = normalize(ALLOCATING_TABLE);
    let settings = Settings::new(
        ScaleType::Linear,
        DisplayMode::Allocation,
        Theme::Dark,
        None,
    );
    let result = Chart::build(Some(&benchmark), &settings);
    assert_eq!(result.data.datasets.len(), 2);
    assert_eq!(result.data.datasets[0].order, Chart::ORDER_ALLOCATION);
    assert_eq!(result.data.datasets[0].background_color, Palette::COLORS[0]);
    assert_eq!(result.options.scales.y.title.text, "Bytes");
}

#[test]
fn ok_allocation_series_skip_methods_without_any() {
    let input = r#"
| Method | N | Mean    | Allocated |
|------- |-- |--------:|----------:|
| Foo    | 1 | 1.0 us  | 128 B     |
| Bar    | 1 | 2.0 us  |
"#;
    let benchmark = normalize(input);
    let settings = Settings::new(ScaleType::Linear, DisplayMode::Both, Theme::Dark, None);
    let result = Chart::build(Some(&benchmark), &settings);
    let labels: Vec<&str> = result
        .data
        .datasets
        .iter()
        .map(|dataset| dataset.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Foo", "Bar", "Foo"]);
}

#[test]
fn ok_theme_colors() {
    let benchmark = normalize(SIMPLE_TABLE);
    let dark = Chart::build(Some(&benchmark), &Settings::default());
    assert_eq!(dark.options.scales.y.grid.color, "#66666638");
    assert_eq!(dark.options.plugins.subtitle.color, "#66666675");

    let settings = Settings::new(
        ScaleType::Linear,
        DisplayMode::Duration,
        Theme::Light,
        None,
    );
    let light = Chart::build(Some(&benchmark), &settings);
    assert_eq!(light.options.scales.y.grid.color, "#0000001a");
    assert_eq!(light.options.scales.x.grid.color, "#0000001a");
    assert_eq!(light.options.plugins.subtitle.color, "#00000040");
    assert_eq!(light.data, dark.data);
}

#[test]
fn ok_scale_types() {
    let benchmark = normalize(SIMPLE_TABLE);
    for (scale, expected) in [
        (ScaleType::Linear, "linear"),
        (ScaleType::Log10, "logarithmic"),
        (ScaleType::Log2, "log2"),
    ] {
        let settings = Settings::new(scale, DisplayMode::Duration, Theme::Dark, None);
        let result = Chart::build(Some(&benchmark), &settings);
        assert_eq!(result.options.scales.y.r#type, Some(expected));
        assert_eq!(result.options.scales.x.r#type, None);
    }
}

#[test]
fn ok_cleared_when_no_benchmark() {
    let settings = Settings::default();
    let result = Chart::build(None, &settings);
    assert_eq!(result.r#type, "bar");
    assert!(result.data.labels.is_empty());
    assert!(result.data.datasets.is_empty());
    assert_eq!(result.options.scales.x.title.text, "");
    assert_eq!(result.options.scales.y.title.text, "");
    assert_eq!(result.options.scales.y.r#type, Some("linear"));
    assert_eq!(result.options.plugins.subtitle.color, "#66666675");
}

#[test]
fn ok_filter_limits_series_not_labels() {
    let benchmark = normalize(SIMPLE_TABLE);
    let filter = regex::Regex::new("^Foo$").expect("Always valid");
    let settings = Settings::new(
        ScaleType::Linear,
        DisplayMode::Duration,
        Theme::Dark,
        Some(filter),
    );
    let result = Chart::build(Some(&benchmark), &settings);
    assert_eq!(result.data.datasets.len(), 1);
    assert_eq!(result.data.datasets[0].label, "Foo");
    assert_eq!(result.data.labels, vec!["1".to_owned(), "2".to_owned()]);
}

#[test]
fn ok_nan_serializes_as_null() {
    let input = r#"
| Method | N | Mean |
|------- |-- |-----:|
| Foo    | 1 | NA   |
"#;
    let benchmark = normalize(input);
    let settings = Settings::default();
    let chart = Chart::build(Some(&benchmark), &settings);
    let result = serde_json::to_value(&chart).expect("Always valid");
    assert_eq!(
        result["data"]["datasets"][0]["data"][0],
        serde_json::Value::Null
    );
}

#[test]
fn ok_wire_field_names() {
    let benchmark = normalize(SIMPLE_TABLE);
    let settings = Settings::default();
    let chart = Chart::build(Some(&benchmark), &settings);
    let result = serde_json::to_value(&chart).expect("Always valid");
    assert_eq!(result["type"], "bar");
    assert_eq!(result["options"]["maintainAspectRatio"], false);
    assert_eq!(result["options"]["plugins"]["subtitle"]["fullSize"], false);
    assert_eq!(
        result["options"]["plugins"]["subtitle"]["text"],
        "Made with benchmark-chart"
    );
    assert_eq!(result["options"]["scales"]["y"]["type"], "linear");
    assert_eq!(result["options"]["scales"]["y"]["title"]["color"], "#606060");
    assert!(result["data"]["datasets"][0]["backgroundColor"].is_string());
    assert!(result["options"]["scales"]["x"].get("type").is_none());
}
