// src/plot_functions/histogram.rs

use plotters::chart::ChartBuilder;
use plotters::element::{Rectangle, Text};
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, FontTransform, IntoFont, RGBColor};

use std::error::Error;

use crate::binning::histogram2d;
use crate::constants::{
    COLORBAR_GAP_PX, COLORBAR_MARGIN_PX, COLORBAR_SEGMENTS, COLORBAR_WIDTH_PX,
};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_COLORBAR_TICK, FONT_TUPLE_TICK_LABEL,
};
use crate::labels::full_label;
use crate::types::{FigureArea, HaloChart};
use crate::units::QuantityArray;

/// Maps a bin count onto the Viridis scale, logarithmically normalised
/// between the smallest and largest occupied-bin counts.
fn count_to_color(count: f64, log_min: f64, log_max: f64) -> RGBColor {
    let span = (log_max - log_min).max(1e-9);
    let t = ((count.log10() - log_min) / span).clamp(0.0, 1.0);
    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// Creates a plot of x against y with a 2D count histogram as a filled
/// rectangle mesh over the bin grid, logarithmically colour-mapped.
/// Zero-count cells are left unpainted. A colour bar in the right margin
/// shows the decade scale of halo counts.
pub fn histogram_x_against_y<'a, 'b>(
    area: &FigureArea<'b>,
    x: &QuantityArray,
    y: &QuantityArray,
    x_bins: &[f64],
    y_bins: &[f64],
) -> Result<HaloChart<'a, 'b>, Box<dyn Error>> {
    let counts = histogram2d(&x.values, &y.values, x_bins, y_bins)?;

    // Logarithmic colour normalisation over the occupied bins.
    let mut min_positive = f64::INFINITY;
    let mut max_count = 0.0f64;
    for &count in counts.iter() {
        if count > 0.0 {
            min_positive = min_positive.min(count);
            max_count = max_count.max(count);
        }
    }
    let occupied = max_count > 0.0;
    let (log_min, log_max) = if occupied {
        (min_positive.log10(), max_count.log10())
    } else {
        (0.0, 1.0)
    };

    let x_range = x_bins[0]..x_bins[x_bins.len() - 1];
    let y_range = y_bins[0]..y_bins[y_bins.len() - 1];

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .margin_right(COLORBAR_MARGIN_PX)
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

    let mut cells = Vec::new();
    for i in 0..x_bins.len() - 1 {
        for j in 0..y_bins.len() - 1 {
            let count = counts[[i, j]];
            if count > 0.0 {
                cells.push(Rectangle::new(
                    [(x_bins[i], y_bins[j]), (x_bins[i + 1], y_bins[j + 1])],
                    count_to_color(count, log_min, log_max).filled(),
                ));
            }
        }
    }
    chart.draw_series(cells)?;

    if occupied {
        draw_colour_bar(area, &chart, log_min, log_max)?;
    }

    Ok(chart)
}

/// Vertical colour bar in the reserved right margin: gradient strip, decade
/// tick labels, and a rotated count label. Spans the plot area vertically.
fn draw_colour_bar(
    area: &FigureArea<'_>,
    chart: &HaloChart<'_, '_>,
    log_min: f64,
    log_max: f64,
) -> Result<(), Box<dyn Error>> {
    let (_, plot_y_px) = chart.plotting_area().get_pixel_range();
    let (area_width, _) = area.dim_in_pixel();

    let x0 = area_width as i32 - COLORBAR_MARGIN_PX + COLORBAR_GAP_PX;
    let x1 = x0 + COLORBAR_WIDTH_PX;
    let top = plot_y_px.start;
    let bottom = plot_y_px.end;
    let height = f64::from((bottom - top).max(1));

    // Gradient strip, minimum count at the bottom.
    for segment in 0..COLORBAR_SEGMENTS {
        let t0 = segment as f64 / COLORBAR_SEGMENTS as f64;
        let t1 = (segment + 1) as f64 / COLORBAR_SEGMENTS as f64;
        let value = 10f64.powf(log_min + 0.5 * (t0 + t1) * (log_max - log_min));
        let y0 = bottom - (t1 * height) as i32;
        let y1 = bottom - (t0 * height) as i32;
        area.draw(&Rectangle::new(
            [(x0, y0), (x1, y1)],
            count_to_color(value, log_min, log_max).filled(),
        ))?;
    }
    area.draw(&Rectangle::new(
        [(x0, top), (x1, bottom)],
        BLACK.stroke_width(1),
    ))?;

    // Decade ticks.
    let span = (log_max - log_min).max(1e-9);
    let tick_style = FONT_TUPLE_COLORBAR_TICK
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let first_decade = log_min.ceil() as i64;
    let last_decade = log_max.floor() as i64;
    for decade in first_decade..=last_decade {
        let t = (decade as f64 - log_min) / span;
        let y = bottom - (t * height) as i32;
        area.draw(&Text::new(
            format!("10^{decade}"),
            (x1 + 4, y),
            tick_style.clone(),
        ))?;
    }

    let label_style = FONT_TUPLE_AXIS_LABEL
        .into_font()
        .transform(FontTransform::Rotate270)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(
        "Number of haloes".to_string(),
        (area_width as i32 - 12, (top + bottom) / 2),
        label_style,
    ))?;
    Ok(())
}
