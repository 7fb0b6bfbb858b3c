// src/plot_functions/mass_function.rs

use plotters::chart::ChartBuilder;
use plotters::element::ErrorBar;
use plotters::series::LineSeries;
use plotters::style::colors::WHITE;
use plotters::style::Color;

use std::error::Error;

use crate::binning::MassFunctionLine;
use crate::constants::{COLOR_MASS_FUNCTION, ERROR_BAR_CAP_WIDTH, LINE_WIDTH_PLOT};
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_TICK_LABEL};
use crate::labels::{full_label, mass_function_label};
use crate::plot_framework::calculate_range;
use crate::types::{FigureArea, HaloChart};
use crate::units::QuantityArray;

/// Creates a plot of x as a mass function: the binned line with vertical
/// error bars, x label from the quantity, y label from the mass-function
/// unit.
pub fn mass_function<'a, 'b>(
    area: &FigureArea<'b>,
    x: &QuantityArray,
    line: &MassFunctionLine,
) -> Result<HaloChart<'a, 'b>, Box<dyn Error>> {
    if line.centers.len() != line.values.len() || line.centers.len() != line.errors.len() {
        return Err(format!(
            "Mismatched mass-function component lengths: {} centers, {} values, {} errors",
            line.centers.len(),
            line.values.len(),
            line.errors.len()
        )
        .into());
    }

    let samples: Vec<(f64, f64, f64)> = line
        .centers
        .iter()
        .zip(line.values.iter())
        .zip(line.errors.iter())
        .map(|((&center, &value), &error)| (center, value, error))
        .filter(|(c, v, e)| c.is_finite() && v.is_finite() && e.is_finite())
        .collect();
    if samples.is_empty() {
        return Err("Mass-function line holds no finite samples".into());
    }

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(center, value, error) in &samples {
        x_min = x_min.min(center);
        x_max = x_max.max(center);
        y_min = y_min.min(value - error);
        y_max = y_max.max(value + error);
    }
    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(full_label(x))
        .y_desc(mass_function_label("M", &line.unit))
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .axis_desc_style(FONT_TUPLE_AXIS_LABEL)
        .label_style(FONT_TUPLE_TICK_LABEL)
        .draw()?;

    chart.draw_series(LineSeries::new(
        samples.iter().map(|&(center, value, _)| (center, value)),
        COLOR_MASS_FUNCTION.stroke_width(LINE_WIDTH_PLOT),
    ))?;
    chart.draw_series(samples.iter().map(|&(center, value, error)| {
        ErrorBar::new_vertical(
            center,
            value - error,
            value,
            value + error,
            COLOR_MASS_FUNCTION.filled(),
            ERROR_BAR_CAP_WIDTH,
        )
    }))?;

    Ok(chart)
}

// src/plot_functions/mass_function.rs
