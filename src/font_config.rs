// src/font_config.rs

// Global font style constants for plot rendering.
// All font styles are centralized here to ensure consistency across the
// entire project and make it easy to update the font configuration later.

use crate::constants::{
    FONT_SIZE_ANNOTATION, FONT_SIZE_AXIS_LABEL, FONT_SIZE_COLORBAR_TICK, FONT_SIZE_LEGEND,
    FONT_SIZE_MESSAGE, FONT_SIZE_TICK_LABEL,
};

/// Font family for all rendered text. When plotters renders with
/// "sans-serif", it resolves a system font.
pub const FONT_FAMILY_SYSTEM: &str = "sans-serif";

// Tuple representations for use with plotters' IntoTextStyle trait.
// Convenient for direct use with methods like `.label_style()` and
// `.axis_desc_style()`.
pub const FONT_TUPLE_AXIS_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_AXIS_LABEL);
pub const FONT_TUPLE_TICK_LABEL: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_TICK_LABEL);
pub const FONT_TUPLE_LEGEND: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_LEGEND);
pub const FONT_TUPLE_ANNOTATION: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_ANNOTATION);
pub const FONT_TUPLE_MESSAGE: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_MESSAGE);
pub const FONT_TUPLE_COLORBAR_TICK: (&str, i32) = (FONT_FAMILY_SYSTEM, FONT_SIZE_COLORBAR_TICK);
