//! Chart Component
//!
//! Revenue and appointment charts drawn on an HTML5 Canvas.

use leptos::*;
use salon_booking::dashboard::SeriesData;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Line for continuous values, bars for counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Canvas chart for one labelled series
#[component]
pub fn Chart(
    #[prop(into)]
    series: Signal<Option<SeriesData>>,
    kind: ChartKind,
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let data = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, data.as_ref(), kind, color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="320"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Axis bounds for a series, padded so the line never touches the edges
fn value_range(series: &SeriesData, kind: ChartKind) -> (f64, f64) {
    let mut min = series.values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = series.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Bars grow from zero
    if kind == ChartKind::Bar {
        min = min.min(0.0);
    }

    let span = max - min;
    let padding = if span > 0.0 { span * 0.1 } else { 1.0 };
    if kind == ChartKind::Line {
        min -= padding;
    }
    max += padding;

    if min == max {
        min -= 1.0;
        max += 1.0;
    }
    (min, max)
}

/// Draw the chart on canvas
fn draw_chart(
    canvas: &HtmlCanvasElement,
    series: Option<&SeriesData>,
    kind: ChartKind,
    color: &str,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let series = match series {
        Some(series) if !series.is_empty() => series,
        _ => {
            ctx.set_fill_style(&"#6b7280".into());
            ctx.set_font("16px sans-serif");
            let _ = ctx.fill_text("No data available", width / 2.0 - 60.0, height / 2.0);
            return;
        }
    };

    let (min, max) = value_range(series, kind);
    let scale_y = |value: f64| margin_top + ((max - value) / (max - min)) * chart_height;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let points: Vec<(&str, f64)> = series.points().collect();
    let slot = chart_width / points.len() as f64;
    let center_x = |i: usize| margin_left + slot * (i as f64 + 0.5);

    match kind {
        ChartKind::Line => {
            ctx.set_stroke_style(&color.into());
            ctx.set_line_width(2.0);
            ctx.begin_path();
            for (i, (_, value)) in points.iter().enumerate() {
                let (x, y) = (center_x(i), scale_y(*value));
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();

            ctx.set_fill_style(&color.into());
            for (i, (_, value)) in points.iter().enumerate() {
                ctx.begin_path();
                let _ = ctx.arc(center_x(i), scale_y(*value), 3.0, 0.0, std::f64::consts::PI * 2.0);
                ctx.fill();
            }
        }
        ChartKind::Bar => {
            let bar_width = slot * 0.6;
            let baseline = scale_y(0.0_f64.max(min));
            ctx.set_fill_style(&color.into());
            for (i, (_, value)) in points.iter().enumerate() {
                let top = scale_y(*value);
                ctx.fill_rect(center_x(i) - bar_width / 2.0, top, bar_width, baseline - top);
            }
        }
    }

    // X-axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for (i, (label, _)) in points.iter().enumerate() {
        let _ = ctx.fill_text(label, center_x(i) - 12.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> SeriesData {
        SeriesData {
            labels: values.iter().map(|v| v.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_bar_range_starts_at_zero() {
        let (min, max) = value_range(&series(&[10.0, 20.0]), ChartKind::Bar);
        assert_eq!(min, 0.0);
        assert!(max > 20.0);
    }

    #[test]
    fn test_line_range_padded() {
        let (min, max) = value_range(&series(&[100.0, 200.0]), ChartKind::Line);
        assert_eq!(min, 90.0);
        assert_eq!(max, 210.0);
    }

    #[test]
    fn test_flat_series_has_span() {
        let (min, max) = value_range(&series(&[5.0, 5.0]), ChartKind::Line);
        assert!(max > min);
    }
}
