// Geometry of the bar chart, kept apart from rendering so it can be tested.
use shared::models::ProjectionSeries;
use shared::utils::number_format::{format_currency, format_grouped, Grouping};

pub const CHART_WIDTH: f64 = 720.0;

const MARGIN_LEFT: f64 = 84.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 40.0;
const BAR_FILL_RATIO: f64 = 0.7;
const TARGET_TICKS: f64 = 5.0;
const MAX_YEAR_LABELS: usize = 20;
const MAX_TICK_DECIMALS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarShape {
    pub year: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    /// Long series only label every n-th year under the axis.
    pub show_year_label: bool,
    pub tooltip: String,
    pub tooltip_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub y: f64,
    /// Baseline of the label, centred on the grid line.
    pub label_y: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotArea,
    pub axis_max: f64,
    pub ticks: Vec<AxisTick>,
    pub bars: Vec<BarShape>,
}

/// Smallest 1/2/2.5/5 x 10^n step giving at most `TARGET_TICKS` intervals up to `max`.
pub fn nice_step(max: f64) -> f64 {
    if !(max > 0.0) || !max.is_finite() {
        return 1.0;
    }
    let raw = max / TARGET_TICKS;
    let magnitude = 10f64.powf(raw.log10().floor());
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|step| *step >= raw)
        .unwrap_or(10.0 * magnitude)
}

/// Decimals needed to print every multiple of `step` exactly (0.25 -> 2, 2.5 -> 1, 500 -> 0).
pub fn step_decimals(step: f64) -> usize {
    (0..=MAX_TICK_DECIMALS)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() <= 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(MAX_TICK_DECIMALS) as usize
}

impl ChartLayout {
    pub fn compute(
        series: &ProjectionSeries,
        height: f64,
        currency: &str,
        grouping: Grouping,
    ) -> Self {
        let plot = PlotArea {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            right: CHART_WIDTH - MARGIN_RIGHT,
            bottom: (height - MARGIN_BOTTOM).max(MARGIN_TOP + 1.0),
        };

        let max_value = series.max_value().unwrap_or(0.0);
        let step = nice_step(max_value);
        let decimals = step_decimals(step);
        let intervals = (max_value / step).ceil().max(1.0);
        let axis_max = step * intervals;
        let scale = |value: f64| value.max(0.0) / axis_max * plot.height();

        let ticks = (0..=intervals as u32)
            .map(|i| {
                let value = step * i as f64;
                let y = plot.bottom - scale(value);
                AxisTick {
                    y,
                    label_y: y + 4.0,
                    label: format_grouped(value, decimals, grouping),
                }
            })
            .collect();

        let count = series.len();
        let slot = if count == 0 { 0.0 } else { plot.width() / count as f64 };
        let bar_width = slot * BAR_FILL_RATIO;
        let label_every = count.div_ceil(MAX_YEAR_LABELS).max(1);
        let bars = series
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x = plot.left + slot * i as f64 + (slot - bar_width) / 2.0;
                let bar_height = scale(point.value);
                let y = plot.bottom - bar_height;
                let value_text = format_currency(point.value, currency, grouping);
                BarShape {
                    year: point.year,
                    x,
                    y,
                    width: bar_width,
                    height: bar_height,
                    center_x: x + bar_width / 2.0,
                    show_year_label: (i + 1) % label_every == 0,
                    tooltip: format!("Year {}: {}", point.year, value_text),
                    tooltip_y: y - 8.0,
                }
            })
            .collect();

        Self { plot, axis_max, ticks, bars }
    }
}
