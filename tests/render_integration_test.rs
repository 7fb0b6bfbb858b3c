// tests/render_integration_test.rs
//
// Renders each figure kind into an in-memory bitmap and checks that pixels
// were actually painted, without touching the filesystem.

use ndarray::Array1;
use plotters::backend::BitMapBackend;
use plotters::drawing::IntoDrawingArea;
use plotters::style::colors::WHITE;

use haloplot::binning::{linear_bin_edges, log10_bin_edges, MassFunctionLine};
use haloplot::catalogue::Catalogue;
use haloplot::constants::{FIGURE_HEIGHT, FIGURE_WIDTH};
use haloplot::plot_framework::{decorate_axes, draw_empty_message, AxesDecoration};
use haloplot::plot_functions::histogram::histogram_x_against_y;
use haloplot::plot_functions::mass_function::mass_function;
use haloplot::plot_functions::scatter::scatter_x_against_y;
use haloplot::units::QuantityArray;

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

fn rgb_buffer() -> Vec<u8> {
    vec![0u8; (WIDTH * HEIGHT * 3) as usize]
}

fn painted_pixels(buffer: &[u8]) -> usize {
    buffer
        .chunks(3)
        .filter(|px| px.iter().any(|&channel| channel != 255))
        .count()
}

fn coloured_pixels(buffer: &[u8]) -> usize {
    buffer
        .chunks(3)
        .filter(|px| px[0] != px[1] || px[1] != px[2])
        .count()
}

fn sample_quantities(count: usize) -> (QuantityArray, QuantityArray) {
    let x = QuantityArray::new(Array1::linspace(1.0, 100.0, count), "Halo Mass", "Msun");
    let y = QuantityArray::new(Array1::linspace(0.1, 10.0, count), "Halo Radius", "Mpc");
    (x, y)
}

#[test]
fn scatter_renders_and_decorates() {
    let (x, y) = sample_quantities(200);
    let catalogue = Catalogue::new(0.5, 2.0 / 3.0);

    let mut buffer = rgb_buffer();
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        let mut chart = scatter_x_against_y(&root, &x, &y).unwrap();
        let decoration = AxesDecoration {
            comment: Some("central haloes only".to_string()),
            ..AxesDecoration::default()
        };
        decorate_axes(&mut chart, &catalogue, &decoration).unwrap();
        root.present().unwrap();
    }
    assert!(painted_pixels(&buffer) > 100);
}

#[test]
fn scatter_rejects_mismatched_lengths() {
    let x = QuantityArray::new(Array1::linspace(0.0, 1.0, 5), "Halo Mass", "Msun");
    let y = QuantityArray::new(Array1::linspace(0.0, 1.0, 6), "Halo Radius", "Mpc");

    let mut buffer = rgb_buffer();
    let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
    let err = scatter_x_against_y(&root, &x, &y).err().unwrap();
    assert!(err.to_string().contains("Mismatched quantity lengths"));
}

#[test]
fn scatter_accepts_empty_input() {
    let x = QuantityArray::new(Array1::zeros(0), "Halo Mass", "Msun");
    let y = QuantityArray::new(Array1::zeros(0), "Halo Radius", "Mpc");

    let mut buffer = rgb_buffer();
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        scatter_x_against_y(&root, &x, &y).unwrap();
        root.present().unwrap();
    }
    // Axes and mesh still render around the empty data set.
    assert!(painted_pixels(&buffer) > 0);
}

#[test]
fn histogram_paints_colour_mapped_cells() {
    let (x, y) = sample_quantities(500);
    let x_bins = linear_bin_edges(0.0, 110.0, 20).unwrap();
    let y_bins = linear_bin_edges(0.0, 11.0, 20).unwrap();

    // Render at the crate's default figure size.
    let mut buffer = vec![0u8; (FIGURE_WIDTH * FIGURE_HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (FIGURE_WIDTH, FIGURE_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE).unwrap();
        histogram_x_against_y(&root, &x, &y, &x_bins, &y_bins).unwrap();
        root.present().unwrap();
    }
    // Viridis cells and the colour bar are chromatic, not grayscale.
    assert!(coloured_pixels(&buffer) > 50);
}

#[test]
fn mass_function_renders_error_bars() {
    let masses = QuantityArray::new(
        Array1::from_iter((0..300).map(|i| 10f64.powf(10.0 + (i % 30) as f64 / 10.0))),
        "Halo Mass",
        "Msun",
    );
    let edges = log10_bin_edges(1e10, 1e13, 10).unwrap();
    let line = MassFunctionLine::from_masses(&masses, &edges, 100.0_f64.powi(3), "1/Mpc^3").unwrap();
    let catalogue = Catalogue::new(0.0, 1.0);

    let mut buffer = rgb_buffer();
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        let mut chart = mass_function(&root, &masses, &line).unwrap();
        decorate_axes(&mut chart, &catalogue, &AxesDecoration::default()).unwrap();
        root.present().unwrap();
    }
    assert!(painted_pixels(&buffer) > 100);
}

#[test]
fn decorate_rejects_unknown_legend_location() {
    let (x, y) = sample_quantities(10);
    let catalogue = Catalogue::new(0.0, 1.0);

    let mut buffer = rgb_buffer();
    let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).unwrap();
    let mut chart = scatter_x_against_y(&root, &x, &y).unwrap();
    let decoration = AxesDecoration {
        legend_loc: "top left".to_string(),
        ..AxesDecoration::default()
    };
    let err = decorate_axes(&mut chart, &catalogue, &decoration).unwrap_err();
    assert!(err.to_string().contains("Unknown location string 'top left'"));
}

#[test]
fn empty_message_paints_text() {
    let mut buffer = rgb_buffer();
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).unwrap();
        draw_empty_message(&root, "Scatter", "No haloes in selection").unwrap();
        root.present().unwrap();
    }
    assert!(painted_pixels(&buffer) > 10);
}
