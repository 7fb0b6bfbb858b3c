// src/plot_framework.rs

use plotters::chart::SeriesLabelPosition;
use plotters::element::Text;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont};

use std::error::Error;

use crate::catalogue::Catalogue;
use crate::constants::{
    ANCHOR_CENTER_FRACTION, ANCHOR_HIGH_FRACTION, ANCHOR_LOW_FRACTION, ANNOTATION_LINE_SPACING_PX,
    DEGENERATE_RANGE_PADDING, FONT_SIZE_ANNOTATION, FONT_SIZE_MESSAGE, LEGEND_BACKGROUND_ALPHA,
    RANGE_PADDING_FRACTION,
};
use crate::font_config::{FONT_FAMILY_SYSTEM, FONT_TUPLE_LEGEND};
use crate::types::{FigureArea, HaloChart};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        DEGENERATE_RANGE_PADDING
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Lower,
    Center,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

/// A parsed location string such as "upper left" or "center".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub vertical: VerticalAnchor,
    pub horizontal: HorizontalAnchor,
}

/// Parses a matplotlib-style location string: the nine "lower|center|upper" x
/// "left|center|right" combinations, plus the single-word forms "right" and
/// "center".
pub fn parse_location(loc: &str) -> Result<Location, Box<dyn Error>> {
    let unknown = || -> Box<dyn Error> {
        format!("Unknown location string '{loc}'. Choose e.g. 'lower right'").into()
    };

    let mut words = loc.split_whitespace();
    let (first, second) = match (words.next(), words.next(), words.next()) {
        (Some(first), Some(second), None) => (first, second),
        (Some(only), None, None) => match only {
            "right" => return Ok(Location {
                vertical: VerticalAnchor::Center,
                horizontal: HorizontalAnchor::Right,
            }),
            "center" => return Ok(Location {
                vertical: VerticalAnchor::Center,
                horizontal: HorizontalAnchor::Center,
            }),
            _ => return Err(unknown()),
        },
        _ => return Err(unknown()),
    };

    let vertical = match first {
        "lower" => VerticalAnchor::Lower,
        "center" => VerticalAnchor::Center,
        "upper" => VerticalAnchor::Upper,
        _ => return Err(unknown()),
    };
    let horizontal = match second {
        "left" => HorizontalAnchor::Left,
        "center" => HorizontalAnchor::Center,
        "right" => HorizontalAnchor::Right,
        _ => return Err(unknown()),
    };
    Ok(Location {
        vertical,
        horizontal,
    })
}

/// Maps a parsed location onto the plotters legend position.
pub fn legend_position(location: Location) -> SeriesLabelPosition {
    use HorizontalAnchor as H;
    use VerticalAnchor as V;
    match (location.vertical, location.horizontal) {
        (V::Upper, H::Left) => SeriesLabelPosition::UpperLeft,
        (V::Upper, H::Center) => SeriesLabelPosition::UpperMiddle,
        (V::Upper, H::Right) => SeriesLabelPosition::UpperRight,
        (V::Center, H::Left) => SeriesLabelPosition::MiddleLeft,
        (V::Center, H::Center) => SeriesLabelPosition::MiddleMiddle,
        (V::Center, H::Right) => SeriesLabelPosition::MiddleRight,
        (V::Lower, H::Left) => SeriesLabelPosition::LowerLeft,
        (V::Lower, H::Center) => SeriesLabelPosition::LowerMiddle,
        (V::Lower, H::Right) => SeriesLabelPosition::LowerRight,
    }
}

/// Fractional (x, y) anchor within the plot area, measured from the
/// lower-left corner.
pub fn anchor_fractions(location: Location) -> (f64, f64) {
    let x = match location.horizontal {
        HorizontalAnchor::Left => ANCHOR_LOW_FRACTION,
        HorizontalAnchor::Center => ANCHOR_CENTER_FRACTION,
        HorizontalAnchor::Right => ANCHOR_HIGH_FRACTION,
    };
    let y = match location.vertical {
        VerticalAnchor::Lower => ANCHOR_LOW_FRACTION,
        VerticalAnchor::Center => ANCHOR_CENTER_FRACTION,
        VerticalAnchor::Upper => ANCHOR_HIGH_FRACTION,
    };
    (x, y)
}

/// Text alignment matching an anchor, so placed text grows into the plot.
pub fn text_anchor_pos(location: Location) -> Pos {
    let h_pos = match location.horizontal {
        HorizontalAnchor::Left => HPos::Left,
        HorizontalAnchor::Center => HPos::Center,
        HorizontalAnchor::Right => HPos::Right,
    };
    let v_pos = match location.vertical {
        VerticalAnchor::Lower => VPos::Bottom,
        VerticalAnchor::Center => VPos::Center,
        VerticalAnchor::Upper => VPos::Top,
    };
    Pos::new(h_pos, v_pos)
}

/// Placement choices for `decorate_axes`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxesDecoration {
    pub legend_loc: String,
    pub redshift_loc: String,
    pub comment_loc: String,
    pub comment: Option<String>,
}

impl Default for AxesDecoration {
    fn default() -> Self {
        Self {
            legend_loc: "upper left".to_string(),
            redshift_loc: "lower right".to_string(),
            comment_loc: "lower left".to_string(),
            comment: None,
        }
    }
}

/// Decorates a chart with the series legend, the catalogue
/// redshift/scale-factor annotation, and an optional free-text comment.
///
/// All three location strings are validated before anything is drawn.
pub fn decorate_axes<'a>(
    chart: &mut HaloChart<'a, 'a>,
    catalogue: &Catalogue,
    decoration: &AxesDecoration,
) -> Result<(), Box<dyn Error>> {
    let legend_loc = parse_location(&decoration.legend_loc)?;
    let redshift_loc = parse_location(&decoration.redshift_loc)?;
    let comment_loc = parse_location(&decoration.comment_loc)?;

    chart
        .configure_series_labels()
        .position(legend_position(legend_loc))
        .background_style(WHITE.mix(LEGEND_BACKGROUND_ALPHA))
        .border_style(BLACK)
        .label_font(FONT_TUPLE_LEGEND)
        .draw()?;

    draw_anchored_text(chart, &catalogue.annotation_text(), redshift_loc)?;
    if let Some(comment) = &decoration.comment {
        draw_anchored_text(chart, comment, comment_loc)?;
    }
    Ok(())
}

/// Draws multi-line text at a fractional anchor of the plot area, stacking
/// lines toward the plot interior.
fn draw_anchored_text(
    chart: &HaloChart<'_, '_>,
    text: &str,
    location: Location,
) -> Result<(), Box<dyn Error>> {
    let plot_area = chart.plotting_area();
    let x_range = plot_area.get_x_range();
    let y_range = plot_area.get_y_range();
    let (_, height_px) = plot_area.dim_in_pixel();

    let (x_frac, y_frac) = anchor_fractions(location);
    let line_step = f64::from(FONT_SIZE_ANNOTATION + ANNOTATION_LINE_SPACING_PX)
        / f64::from(height_px.max(1));
    let style = (FONT_FAMILY_SYSTEM, FONT_SIZE_ANNOTATION)
        .into_font()
        .color(&BLACK)
        .pos(text_anchor_pos(location));

    let lines: Vec<&str> = text.lines().collect();
    let count = lines.len();
    let x = x_range.start + x_frac * (x_range.end - x_range.start);
    for (index, line) in lines.into_iter().enumerate() {
        // The block hangs below an upper anchor, sits on top of a lower
        // anchor, and is centred on a center anchor.
        let frac = match location.vertical {
            VerticalAnchor::Upper => y_frac - index as f64 * line_step,
            VerticalAnchor::Lower => y_frac + (count - 1 - index) as f64 * line_step,
            VerticalAnchor::Center => {
                y_frac + ((count - 1) as f64 / 2.0 - index as f64) * line_step
            }
        };
        let y = y_range.start + frac * (y_range.end - y_range.start);
        plot_area.draw(&Text::new(line.to_string(), (x, y), style.clone()))?;
    }
    Ok(())
}

/// Draw a "data unavailable" message on a figure area in place of a chart.
pub fn draw_empty_message(
    area: &FigureArea<'_>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = area.dim_in_pixel();
    let style = (FONT_FAMILY_SYSTEM, FONT_SIZE_MESSAGE)
        .into_font()
        .color(&RED)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(
        format!("{plot_type} data unavailable: {reason}"),
        (width as i32 / 2, height as i32 / 2),
        style,
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_padding() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert_eq!(min, -1.5);
        assert_eq!(max, 11.5);
    }

    #[test]
    fn test_calculate_range_degenerate() {
        let (min, max) = calculate_range(3.0, 3.0);
        assert_eq!(min, 2.5);
        assert_eq!(max, 3.5);
    }

    #[test]
    fn test_calculate_range_swapped_inputs() {
        let (min, max) = calculate_range(10.0, 0.0);
        assert_eq!(min, -1.5);
        assert_eq!(max, 11.5);
    }

    #[test]
    fn test_parse_location_two_words() {
        let loc = parse_location("upper left").unwrap();
        assert_eq!(loc.vertical, VerticalAnchor::Upper);
        assert_eq!(loc.horizontal, HorizontalAnchor::Left);

        let loc = parse_location("lower right").unwrap();
        assert_eq!(loc.vertical, VerticalAnchor::Lower);
        assert_eq!(loc.horizontal, HorizontalAnchor::Right);

        let loc = parse_location("center center").unwrap();
        assert_eq!(loc.vertical, VerticalAnchor::Center);
        assert_eq!(loc.horizontal, HorizontalAnchor::Center);
    }

    #[test]
    fn test_parse_location_single_words() {
        let loc = parse_location("right").unwrap();
        assert_eq!(loc.vertical, VerticalAnchor::Center);
        assert_eq!(loc.horizontal, HorizontalAnchor::Right);

        let loc = parse_location("center").unwrap();
        assert_eq!(loc.vertical, VerticalAnchor::Center);
        assert_eq!(loc.horizontal, HorizontalAnchor::Center);
    }

    #[test]
    fn test_parse_location_rejects_unknown() {
        for bad in ["top left", "lower rigth", "left", "", "lower right here"] {
            let err = parse_location(bad).unwrap_err();
            assert!(
                err.to_string().contains("Unknown location string"),
                "unexpected error for '{bad}': {err}"
            );
        }
    }

    #[test]
    fn test_legend_position_mapping() {
        assert!(matches!(
            legend_position(parse_location("upper left").unwrap()),
            SeriesLabelPosition::UpperLeft
        ));
        assert!(matches!(
            legend_position(parse_location("lower center").unwrap()),
            SeriesLabelPosition::LowerMiddle
        ));
        assert!(matches!(
            legend_position(parse_location("right").unwrap()),
            SeriesLabelPosition::MiddleRight
        ));
    }

    #[test]
    fn test_anchor_fractions() {
        assert_eq!(
            anchor_fractions(parse_location("lower left").unwrap()),
            (0.05, 0.05)
        );
        assert_eq!(
            anchor_fractions(parse_location("upper right").unwrap()),
            (0.95, 0.95)
        );
        assert_eq!(anchor_fractions(parse_location("center").unwrap()), (0.5, 0.5));
    }
}
