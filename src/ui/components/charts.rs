#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::ThemePalette;
use crate::usecase::services::charts::{Chart, ChartKind};

/// Pixel box a chart is drawn into; margins leave room for axis text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 760.0,
            height: 320.0,
            margin_left: 90.0,
            margin_right: 20.0,
            margin_top: 20.0,
            margin_bottom: 40.0,
        }
    }
}

impl PlotArea {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    /// Vertical pixel for `value` with `range` mapped onto the plot height.
    pub fn y_for(&self, value: f64, range: (f64, f64)) -> f64 {
        let (min, max) = range;
        let span = if max - min > 0.0 { max - min } else { 1.0 };
        self.margin_top + (max - value) / span * self.plot_height()
    }

    pub fn category_width(&self, categories: usize) -> f64 {
        if categories == 0 {
            0.0
        } else {
            self.plot_width() / categories as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePath {
    pub color: String,
    pub points: Vec<(f64, f64)>,
}

/// Share of each category slot filled by its bar group.
const GROUP_FILL: f64 = 0.8;

/// Bars grow up or down from the zero line.
pub fn bar_layout(chart: &Chart, area: &PlotArea) -> Vec<BarRect> {
    let categories = chart.categories.len();
    let series_count = chart.series.len();
    if categories == 0 || series_count == 0 {
        return Vec::new();
    }

    let range = chart.value_range();
    let slot = area.category_width(categories);
    let bar_width = slot * GROUP_FILL / series_count as f64;
    let zero_y = area.y_for(0.0, range);

    let mut bars = Vec::with_capacity(categories * series_count);
    for category_idx in 0..categories {
        let group_left =
            area.margin_left + category_idx as f64 * slot + slot * (1.0 - GROUP_FILL) / 2.0;
        for (series_idx, series) in chart.series.iter().enumerate() {
            let value = series.values.get(category_idx).copied().unwrap_or(0.0);
            let value_y = area.y_for(value, range);
            bars.push(BarRect {
                x: group_left + series_idx as f64 * bar_width,
                y: value_y.min(zero_y),
                width: bar_width,
                height: (value_y - zero_y).abs(),
                color: series.color.clone(),
            });
        }
    }
    bars
}

/// One polyline per series, points centred on their category.
pub fn line_layout(chart: &Chart, area: &PlotArea) -> Vec<LinePath> {
    let range = chart.value_range();
    let slot = area.category_width(chart.categories.len());
    chart
        .series
        .iter()
        .map(|series| LinePath {
            color: series.color.clone(),
            points: series
                .values
                .iter()
                .take(chart.categories.len())
                .enumerate()
                .map(|(idx, value)| {
                    (
                        area.margin_left + (idx as f64 + 0.5) * slot,
                        area.y_for(*value, range),
                    )
                })
                .collect(),
        })
        .collect()
}

pub fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn axis_tick(value: f64) -> String {
    format!("{value:.0}")
}

#[component]
pub fn ChartView(chart: Chart, palette: ThemePalette) -> Element {
    let area = PlotArea::default();
    let range = chart.value_range();
    let zero_y = area.y_for(0.0, range);
    let top_label = axis_tick(range.1);
    let bottom_label = axis_tick(range.0);
    let label_x = area.margin_left - 8.0;
    let plot_right = area.width - area.margin_right;
    let plot_bottom = area.height - area.margin_bottom;
    let top_y = area.margin_top + 4.0;
    let bottom_y = plot_bottom;
    let category_y = plot_bottom + 18.0;
    let slot = area.category_width(chart.categories.len());
    let width = area.width;
    let height = area.height;
    let foreground = palette.foreground.clone();
    let accent = palette.accent.clone();
    let plot_left = area.margin_left;
    let title = chart.title.clone();
    let axis_caption = format!("{} × {}", chart.x_label, chart.y_label);

    let bars = if chart.kind == ChartKind::GroupedBar {
        bar_layout(&chart, &area)
    } else {
        Vec::new()
    };
    let lines = if chart.kind == ChartKind::Line {
        line_layout(&chart, &area)
    } else {
        Vec::new()
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px;",
            h3 { style: "color: {accent}; margin: 0;", "{title}" }
            div {
                style: "display: flex; gap: 14px; flex-wrap: wrap; font-size: 12px;",
                {chart.series.iter().map(|series| {
                    let name = series.name.clone();
                    let color = series.color.clone();
                    rsx!(
                        span {
                            style: "display: inline-flex; align-items: center; gap: 6px;",
                            span { style: "display: inline-block; width: 12px; height: 12px; background: {color};" }
                            "{name}"
                        }
                    )
                })}
            }
            svg {
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                line {
                    x1: "{plot_left}",
                    y1: "{zero_y}",
                    x2: "{plot_right}",
                    y2: "{zero_y}",
                    stroke: "{foreground}",
                    stroke_width: "1",
                }
                text {
                    x: "{label_x}",
                    y: "{top_y}",
                    fill: "{foreground}",
                    font_size: "11",
                    text_anchor: "end",
                    "{top_label}"
                }
                text {
                    x: "{label_x}",
                    y: "{bottom_y}",
                    fill: "{foreground}",
                    font_size: "11",
                    text_anchor: "end",
                    "{bottom_label}"
                }
                {bars.iter().map(|bar| {
                    let (x, y, w, h, color) = (bar.x, bar.y, bar.width, bar.height, bar.color.clone());
                    rsx!(
                        rect { x: "{x:.2}", y: "{y:.2}", width: "{w:.2}", height: "{h:.2}", fill: "{color}" }
                    )
                })}
                {lines.iter().map(|path| {
                    let points = polyline_points(&path.points);
                    let color = path.color.clone();
                    rsx!(
                        polyline { points: "{points}", fill: "none", stroke: "{color}", stroke_width: "2" }
                    )
                })}
                {lines.iter().flat_map(|path| {
                    let color = path.color.clone();
                    path.points.iter().map(move |(x, y)| {
                        let (x, y, color) = (*x, *y, color.clone());
                        rsx!(
                            circle { cx: "{x:.2}", cy: "{y:.2}", r: "4", fill: "{color}" }
                        )
                    })
                })}
                {chart.categories.iter().enumerate().map(|(idx, name)| {
                    let x = area.margin_left + (idx as f64 + 0.5) * slot;
                    let name = name.clone();
                    let fill = foreground.clone();
                    rsx!(
                        text { x: "{x:.2}", y: "{category_y}", fill: "{fill}", font_size: "12", text_anchor: "middle", "{name}" }
                    )
                })}
            }
            span { style: "font-size: 11px;", "{axis_caption}" }
        }
    }
}
