// Year-by-year bar chart rendered as SVG
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::ProjectionSeries;
use shared::utils::number_format::{format_grouped, Grouping};

use super::layout::{ChartLayout, CHART_WIDTH};

#[component]
pub fn BarChart(
    title: String,
    series: ProjectionSeries,
    currency: String,
    grouping: Grouping,
    color: String,
    height: u32,
) -> Element {
    let layout = ChartLayout::compute(&series, height as f64, &currency, grouping);
    let plot = layout.plot;
    let tick_label_x = plot.left - 8.0;
    let year_label_y = plot.bottom + 20.0;
    let year_axis_y = plot.bottom + 36.0;
    let year_axis_x = plot.left + plot.width() / 2.0;
    let shown_years = format_grouped(series.len() as f64, 0, grouping);

    rsx! {
        div {
            class: "chart",
            div { class: "chart-title", "{title}" }
            if series.is_empty() {
                div { class: "chart-empty", "Duration is under one year, nothing to chart." }
            } else {
                svg {
                    view_box: "0 0 {CHART_WIDTH} {height}",
                    width: "100%",
                    height: "{height}",
                    text { x: "4", y: "16", class: "axis-label", "Value ({currency})" }
                    for (index, tick) in layout.ticks.iter().enumerate() {
                        g {
                            key: "{index}",
                            line {
                                class: "grid-line",
                                x1: "{plot.left}",
                                x2: "{plot.right}",
                                y1: "{tick.y}",
                                y2: "{tick.y}",
                            }
                            text {
                                class: "axis-label",
                                x: "{tick_label_x}",
                                y: "{tick.label_y}",
                                text_anchor: "end",
                                "{tick.label}"
                            }
                        }
                    }
                    for bar in layout.bars.iter() {
                        g {
                            key: "{bar.year}",
                            class: "bar-group",
                            rect {
                                x: "{bar.x}",
                                y: "{bar.y}",
                                width: "{bar.width}",
                                height: "{bar.height}",
                                fill: "{color}",
                            }
                            if bar.show_year_label {
                                text {
                                    class: "axis-label",
                                    x: "{bar.center_x}",
                                    y: "{year_label_y}",
                                    text_anchor: "middle",
                                    "{bar.year}"
                                }
                            }
                            text {
                                class: "bar-tooltip",
                                x: "{bar.center_x}",
                                y: "{bar.tooltip_y}",
                                text_anchor: "middle",
                                "{bar.tooltip}"
                            }
                        }
                    }
                    text {
                        class: "axis-label",
                        x: "{year_axis_x}",
                        y: "{year_axis_y}",
                        text_anchor: "middle",
                        "Year"
                    }
                }
                if series.truncated {
                    div { class: "chart-empty", "Showing the first {shown_years} years." }
                }
            }
        }
    }
}
