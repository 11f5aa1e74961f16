//! Minimal canvas charts for the dashboard and metrics screens: grouped
//! bars or poly-lines over a labelled x axis.  No external chart library –
//! the 2d context does everything needed here.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

pub struct Series {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bars,
    Lines,
}

const MARGIN_LEFT: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 28.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_RIGHT: f64 = 12.0;

pub fn draw(
    document: &Document,
    canvas_id: &str,
    labels: &[String],
    series: &[Series],
    kind: ChartKind,
) -> Result<(), JsValue> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("chart canvas not found"))?
        .dyn_into()?;
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    context.set_fill_style_str("#ffffff");
    context.fill_rect(0.0, 0.0, width, height);

    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(1.0_f64, f64::max);

    // Horizontal gridlines with scale labels.
    context.set_font("10px Arial");
    for step in 0..=4 {
        let frac = step as f64 / 4.0;
        let y = MARGIN_TOP + plot_h * (1.0 - frac);
        context.set_stroke_style_str("#f1f5f9");
        context.begin_path();
        context.move_to(MARGIN_LEFT, y);
        context.line_to(width - MARGIN_RIGHT, y);
        context.stroke();
        context.set_fill_style_str("#94a3b8");
        let _ = context.fill_text(&format!("{:.0}", max * frac), 4.0, y + 3.0);
    }

    let slots = labels.len().max(1) as f64;
    let slot_w = plot_w / slots;

    match kind {
        ChartKind::Bars => {
            let bar_w = (slot_w * 0.7) / series.len().max(1) as f64;
            for (series_idx, s) in series.iter().enumerate() {
                context.set_fill_style_str(s.color);
                for (i, value) in s.values.iter().enumerate() {
                    let h = plot_h * (value / max);
                    let x = MARGIN_LEFT
                        + slot_w * i as f64
                        + slot_w * 0.15
                        + bar_w * series_idx as f64;
                    let y = MARGIN_TOP + plot_h - h;
                    context.fill_rect(x, y, bar_w - 2.0, h);
                }
            }
        }
        ChartKind::Lines => {
            for s in series {
                context.set_stroke_style_str(s.color);
                context.set_line_width(2.0);
                context.begin_path();
                for (i, value) in s.values.iter().enumerate() {
                    let x = MARGIN_LEFT + slot_w * i as f64 + slot_w / 2.0;
                    let y = MARGIN_TOP + plot_h * (1.0 - value / max);
                    if i == 0 {
                        context.move_to(x, y);
                    } else {
                        context.line_to(x, y);
                    }
                }
                context.stroke();
            }
        }
    }

    // X labels.
    context.set_fill_style_str("#94a3b8");
    for (i, label) in labels.iter().enumerate() {
        let x = MARGIN_LEFT + slot_w * i as f64 + slot_w * 0.2;
        let _ = context.fill_text(label, x, height - 10.0);
    }

    // Legend.
    let mut legend_x = MARGIN_LEFT;
    for s in series {
        context.set_fill_style_str(s.color);
        context.fill_rect(legend_x, 2.0, 8.0, 8.0);
        context.set_fill_style_str("#475569");
        let _ = context.fill_text(s.name, legend_x + 12.0, 10.0);
        legend_x += 12.0 + 7.0 * s.name.len() as f64 + 16.0;
    }

    Ok(())
}
