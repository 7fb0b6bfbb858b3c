// src/plot_functions/scatter.rs

use plotters::chart::ChartBuilder;
use plotters::element::Circle;
use plotters::style::colors::WHITE;
use plotters::style::Color;

use std::error::Error;

use crate::constants::{COLOR_SCATTER, SCATTER_ALPHA, SCATTER_MARKER_RADIUS};
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_TICK_LABEL};
use crate::labels::full_label;
use crate::plot_framework::calculate_range;
use crate::types::{FigureArea, HaloChart};
use crate::units::QuantityArray;

/// Creates a scatter of x against y: one small translucent marker per halo,
/// axis labels carrying the quantity names and units.
///
/// Pairs with a non-finite coordinate are dropped. Empty input yields an
/// empty chart with fallback axis ranges.
pub fn scatter_x_against_y<'a, 'b>(
    area: &FigureArea<'b>,
    x: &QuantityArray,
    y: &QuantityArray,
) -> Result<HaloChart<'a, 'b>, Box<dyn Error>> {
    if x.len() != y.len() {
        return Err(format!(
            "Mismatched quantity lengths for scatter: x has {}, y has {}",
            x.len(),
            y.len()
        )
        .into());
    }

    let points: Vec<(f64, f64)> = x
        .values
        .iter()
        .zip(y.values.iter())
        .filter(|(&px, &py)| px.is_finite() && py.is_finite())
        .map(|(&px, &py)| (px, py))
        .collect();

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(px, py) in &points {
        x_min = x_min.min(px);
        x_max = x_max.max(px);
        y_min = y_min.min(py);
        y_max = y_max.max(py);
    }

    let (x_range, y_range) = if points.is_empty() {
        (0.0..1.0, 0.0..1.0)
    } else {
        let (x_lo, x_hi) = calculate_range(x_min, x_max);
        let (y_lo, y_hi) = calculate_range(y_min, y_max);
        (x_lo..x_hi, y_lo..y_hi)
    };

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(full_label(x))
        .y_desc(full_label(y))
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .axis_desc_style(FONT_TUPLE_AXIS_LABEL)
        .label_style(FONT_TUPLE_TICK_LABEL)
        .draw()?;

    let marker_style = COLOR_SCATTER.mix(SCATTER_ALPHA).filled();
    chart.draw_series(
        points
            .into_iter()
            .map(|point| Circle::new(point, SCATTER_MARKER_RADIUS, marker_style)),
    )?;

    Ok(chart)
}

// src/plot_functions/scatter.rs
