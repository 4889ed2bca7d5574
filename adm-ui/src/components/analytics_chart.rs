//! The analytics chart widget: a titled card around one of four chart
//! kinds.
//!
//! The widget is a pure function of its props -- no state, no I/O. All
//! geometry comes from `adm-charts`; when a layout function returns `None`
//! the chart area degrades to the "no data" placeholder. Nothing in here
//! panics on malformed input.

use adm_charts::bar::{bar_layout, MIN_BAR_HEIGHT_PX};
use adm_charts::line::{line_layout, GRID_ROWS, LINE_COLOR, VIEW_HEIGHT, VIEW_WIDTH};
use adm_charts::pie::{pie_layout, slice_color};
use adm_model::{format_value, ChartDatum, ChartKind};
use dioxus::prelude::*;

/// Shown in the chart area when there is nothing renderable.
pub const NO_DATA_MESSAGE: &str = "No data to display";

/// Props for AnalyticsChart.
#[derive(Props, Clone, PartialEq)]
pub struct AnalyticsChartProps {
    /// Card heading.
    pub title: String,
    /// Ordered chart data; order is display order.
    #[props(default)]
    pub data: Vec<ChartDatum>,
    /// Which rendering branch to use.
    #[props(default)]
    pub kind: ChartKind,
    /// Chart area height in pixels.
    #[props(default = 200)]
    pub height: u32,
    /// Extra class names for the outer card.
    #[props(default)]
    pub class: String,
}

/// A self-contained chart card: heading, chart area of the requested
/// height, and (for pie/donut) a legend.
#[component]
pub fn AnalyticsChart(props: AnalyticsChartProps) -> Element {
    let body = match props.kind {
        ChartKind::Bar => bar_chart(&props.data),
        ChartKind::Line => line_chart(&props.data),
        ChartKind::Pie | ChartKind::Donut => pie_chart(&props.data),
    };

    rsx! {
        div {
            class: "{props.class}",
            style: "background: #fff; border-radius: 12px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12); border: 1px solid #e0e0e0; padding: 16px;",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 16px; color: #263238;",
                "{props.title}"
            }
            div {
                style: "height: {props.height}px; position: relative;",
                {body}
            }
            if props.kind.is_radial() {
                ChartLegend { data: props.data.clone() }
            }
        }
    }
}

fn placeholder() -> Element {
    rsx! {
        div {
            style: "height: 100%; display: flex; align-items: center; justify-content: center; font-size: 13px; color: #9e9e9e;",
            "{NO_DATA_MESSAGE}"
        }
    }
}

fn bar_chart(data: &[ChartDatum]) -> Element {
    let Some(layout) = bar_layout(data) else {
        return placeholder();
    };

    let label_style = if layout.rotate_labels {
        "margin-top: 6px; text-align: center; transform: rotate(-45deg); transform-origin: bottom left; white-space: nowrap;"
    } else {
        "margin-top: 6px; text-align: center;"
    };

    let columns: Vec<_> = layout
        .columns
        .iter()
        .map(|col| {
            let bar_style = format!(
                "width: 100%; border-radius: 4px 4px 0 0; background: {}; height: {}%; min-height: {}px;",
                col.color, col.height_pct, MIN_BAR_HEIGHT_PX
            );
            (bar_style, col.clone())
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; align-items: flex-end; justify-content: space-between; gap: 6px; height: 100%; overflow-x: auto; padding-bottom: 24px;",
            for (index, (bar_style, col)) in columns.into_iter().enumerate() {
                div {
                    key: "{index}",
                    style: "flex: 1; min-width: 40px; display: flex; flex-direction: column; justify-content: flex-end; height: 100%;",
                    div { style: "{bar_style}" }
                    div {
                        style: "{label_style}",
                        div {
                            style: "font-size: 11px; font-weight: 600; color: #444;",
                            "{col.value_label}"
                        }
                        div {
                            style: "font-size: 11px; color: #777;",
                            "{col.label}"
                        }
                    }
                }
            }
        }
    }
}

fn line_chart(data: &[ChartDatum]) -> Element {
    let Some(layout) = line_layout(data) else {
        return placeholder();
    };

    rsx! {
        svg {
            style: "width: 100%; height: 100%;",
            view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
            for row in GRID_ROWS {
                line {
                    key: "{row}",
                    x1: "0",
                    y1: "{row}",
                    x2: "{VIEW_WIDTH}",
                    y2: "{row}",
                    stroke: "#e5e7eb",
                    stroke_width: "1",
                }
            }
            if let Some(area) = layout.area_path.as_ref() {
                path { d: "{area}", fill: "{LINE_COLOR}", opacity: "0.15" }
            }
            path {
                d: "{layout.line_path}",
                stroke: "{LINE_COLOR}",
                stroke_width: "2",
                fill: "none",
            }
            for (index, point) in layout.points.iter().enumerate() {
                circle {
                    key: "{index}",
                    cx: "{point.x}",
                    cy: "{point.y}",
                    r: "4",
                    fill: "{LINE_COLOR}",
                }
            }
        }
    }
}

fn pie_chart(data: &[ChartDatum]) -> Element {
    let Some(layout) = pie_layout(data) else {
        return placeholder();
    };
    let total = format_value(layout.total);

    rsx! {
        div {
            style: "position: relative; height: 100%; display: flex; align-items: center; justify-content: center;",
            svg {
                style: "width: 100%; height: 100%;",
                view_box: "0 0 200 200",
                for (index, slice) in layout.slices.iter().enumerate() {
                    path { key: "{index}", d: "{slice.path}", fill: "{slice.color}" }
                }
            }
            div {
                style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; pointer-events: none;",
                div {
                    style: "text-align: center;",
                    div {
                        style: "font-size: 24px; font-weight: 700; color: #37474f;",
                        "{total}"
                    }
                    div {
                        style: "font-size: 12px; color: #666;",
                        "Total"
                    }
                }
            }
        }
    }
}

/// Props for ChartLegend.
#[derive(Props, Clone, PartialEq)]
struct ChartLegendProps {
    data: Vec<ChartDatum>,
}

/// Legend enumerating every datum with its resolved color. Rendered below
/// pie/donut charts only.
#[component]
fn ChartLegend(props: ChartLegendProps) -> Element {
    let entries: Vec<(String, String)> = props
        .data
        .iter()
        .enumerate()
        .map(|(index, datum)| (slice_color(index, datum), datum.label.clone()))
        .collect();

    rsx! {
        div {
            style: "margin-top: 12px; display: flex; flex-wrap: wrap; gap: 12px; justify-content: center;",
            for (index, (color, label)) in entries.into_iter().enumerate() {
                div {
                    key: "{index}",
                    style: "display: flex; align-items: center; gap: 6px;",
                    span {
                        style: "width: 10px; height: 10px; border-radius: 50%; flex-shrink: 0; background: {color};",
                    }
                    span {
                        style: "font-size: 12px; color: #666;",
                        "{label}"
                    }
                }
            }
        }
    }
}
