// src/constants.rs

use plotters::style::RGBColor;

// Figure dimensions.
pub const FIGURE_WIDTH: u32 = 800;
pub const FIGURE_HEIGHT: u32 = 600;

// Axis range padding: fraction of the data span, plus a fixed fallback
// padding for degenerate (near-zero width) ranges.
pub const RANGE_PADDING_FRACTION: f64 = 0.15;
pub const DEGENERATE_RANGE_PADDING: f64 = 0.5;

// Fractional anchors within the plot area for placed text. Location strings
// ("lower right" etc.) map onto these.
pub const ANCHOR_LOW_FRACTION: f64 = 0.05;
pub const ANCHOR_CENTER_FRACTION: f64 = 0.5;
pub const ANCHOR_HIGH_FRACTION: f64 = 0.95;

// --- Plot Color Assignments ---
pub const COLOR_SCATTER: RGBColor = RGBColor(31, 119, 180);
pub const COLOR_MASS_FUNCTION: RGBColor = RGBColor(31, 119, 180);

// Scatter marker styling.
pub const SCATTER_MARKER_RADIUS: i32 = 1;
pub const SCATTER_ALPHA: f64 = 0.5;

// Stroke widths for lines.
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Cap width of mass-function error bars, in pixels.
pub const ERROR_BAR_CAP_WIDTH: u32 = 6;

// Legend background opacity.
pub const LEGEND_BACKGROUND_ALPHA: f64 = 0.8;

// --- 2D Histogram / Colour Bar Constants ---
// The colour bar lives in the reserved right margin of the histogram chart:
// a gradient strip, decade tick labels, and a rotated quantity label.
pub const COLORBAR_MARGIN_PX: i32 = 90;
pub const COLORBAR_GAP_PX: i32 = 10;
pub const COLORBAR_WIDTH_PX: i32 = 18;
pub const COLORBAR_SEGMENTS: usize = 64;

// Font sizes, consumed by font_config.
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_TICK_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_ANNOTATION: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;
pub const FONT_SIZE_COLORBAR_TICK: i32 = 12;

// Vertical spacing between stacked annotation lines, in pixels.
pub const ANNOTATION_LINE_SPACING_PX: i32 = 6;

// src/constants.rs
