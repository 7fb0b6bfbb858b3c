// src/types.rs
// Type aliases to reduce complexity warnings

use plotters::backend::BitMapBackend;
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;

/// The root drawing surface a figure is rendered onto. The caller owns the
/// backend (and therefore the output file or buffer); plot functions only
/// draw onto it.
pub type FigureArea<'b> = DrawingArea<BitMapBackend<'b>, Shift>;

/// A live 2D chart over a figure area. Returned by every plot function so
/// the caller can decorate the axes before presenting.
pub type HaloChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;
