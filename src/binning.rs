// src/binning.rs

use ndarray::{Array1, Array2};
use std::error::Error;

use crate::units::QuantityArray;

/// `count + 1` ascending, evenly spaced bin edges over `[min, max]`.
pub fn linear_bin_edges(min: f64, max: f64, count: usize) -> Result<Vec<f64>, Box<dyn Error>> {
    if count == 0 {
        return Err("Bin count must be at least 1".into());
    }
    if !(min.is_finite() && max.is_finite()) || min >= max {
        return Err(format!("Invalid bin range {min}..{max}. Expected finite min < max").into());
    }
    let step = (max - min) / count as f64;
    let mut edges: Vec<f64> = (0..count).map(|i| min + i as f64 * step).collect();
    edges.push(max);
    Ok(edges)
}

/// `count + 1` ascending bin edges evenly spaced in log10 over `[min, max]`.
/// Both bounds must be positive.
pub fn log10_bin_edges(min: f64, max: f64, count: usize) -> Result<Vec<f64>, Box<dyn Error>> {
    if min <= 0.0 || max <= 0.0 {
        return Err(format!(
            "Logarithmic bin edges need positive bounds, got {min}..{max}"
        )
        .into());
    }
    let edges = linear_bin_edges(min.log10(), max.log10(), count)?;
    Ok(edges.into_iter().map(|e| 10f64.powf(e)).collect())
}

/// Arithmetic midpoints of consecutive edges.
pub fn bin_centers(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect()
}

/// Midpoints of consecutive edges in log10 space. Edges must be positive.
pub fn log_bin_centers(edges: &[f64]) -> Vec<f64> {
    edges
        .windows(2)
        .map(|w| 10f64.powf(0.5 * (w[0].log10() + w[1].log10())))
        .collect()
}

fn validate_edges(edges: &[f64], axis: &str) -> Result<(), Box<dyn Error>> {
    if edges.len() < 2 {
        return Err(format!(
            "Need at least 2 {axis} bin edges, got {}",
            edges.len()
        )
        .into());
    }
    if edges.windows(2).any(|w| !(w[0] < w[1])) {
        return Err(format!("{axis} bin edges must be strictly ascending").into());
    }
    Ok(())
}

/// Bin index for a value, half-open bins with the rightmost edge inclusive.
/// Out-of-range and non-finite values fall outside every bin.
fn find_bin(edges: &[f64], value: f64) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let last = edges.len() - 1;
    if value < edges[0] || value > edges[last] {
        return None;
    }
    if value == edges[last] {
        return Some(last - 1);
    }
    Some(edges.partition_point(|&e| e <= value) - 1)
}

/// 1D histogram counts over the given edges.
pub fn histogram1d(values: &Array1<f64>, edges: &[f64]) -> Result<Array1<f64>, Box<dyn Error>> {
    validate_edges(edges, "x")?;
    let mut counts = Array1::<f64>::zeros(edges.len() - 1);
    for &v in values.iter() {
        if let Some(bin) = find_bin(edges, v) {
            counts[bin] += 1.0;
        }
    }
    Ok(counts)
}

/// 2D histogram counts, shape `(x bins, y bins)`. Sample pairs where either
/// coordinate falls outside its bin range (or is non-finite) are dropped
/// together.
pub fn histogram2d(
    x: &Array1<f64>,
    y: &Array1<f64>,
    x_edges: &[f64],
    y_edges: &[f64],
) -> Result<Array2<f64>, Box<dyn Error>> {
    if x.len() != y.len() {
        return Err(format!(
            "Mismatched sample lengths for 2D histogram: x has {}, y has {}",
            x.len(),
            y.len()
        )
        .into());
    }
    validate_edges(x_edges, "x")?;
    validate_edges(y_edges, "y")?;

    let mut counts = Array2::<f64>::zeros((x_edges.len() - 1, y_edges.len() - 1));
    for (&xv, &yv) in x.iter().zip(y.iter()) {
        if let (Some(i), Some(j)) = (find_bin(x_edges, xv), find_bin(y_edges, yv)) {
            counts[[i, j]] += 1.0;
        }
    }
    Ok(counts)
}

/// A binned mass function: bin centers, the mass-function value per bin, and
/// the statistical error per bin, with the unit of the values.
#[derive(Debug, Clone, PartialEq)]
pub struct MassFunctionLine {
    pub centers: Array1<f64>,
    pub values: Array1<f64>,
    pub errors: Array1<f64>,
    pub unit: String,
}

impl MassFunctionLine {
    pub fn new(
        centers: Array1<f64>,
        values: Array1<f64>,
        errors: Array1<f64>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            centers,
            values,
            errors,
            unit: unit.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Builds the line by histogramming halo masses over the given edges and
    /// normalising counts by the comoving box volume and the log10 bin
    /// width, with sqrt(N) count errors. Zero-count bins carry zero value
    /// and error.
    ///
    /// `unit` is the unit of the resulting values, the inverse of the box
    /// volume unit (e.g. "1/Mpc^3").
    pub fn from_masses(
        masses: &QuantityArray,
        edges: &[f64],
        box_volume: f64,
        unit: impl Into<String>,
    ) -> Result<Self, Box<dyn Error>> {
        if !(box_volume.is_finite() && box_volume > 0.0) {
            return Err(format!("Box volume must be positive, got {box_volume}").into());
        }
        if edges.first().is_some_and(|&e| e <= 0.0) {
            return Err("Mass function bin edges must be positive".into());
        }
        validate_edges(edges, "mass")?;

        let counts = histogram1d(&masses.values, edges)?;
        let centers = Array1::from_vec(log_bin_centers(edges));
        let mut values = Array1::<f64>::zeros(counts.len());
        let mut errors = Array1::<f64>::zeros(counts.len());
        for (bin, w) in edges.windows(2).enumerate() {
            let dlog10 = w[1].log10() - w[0].log10();
            let norm = box_volume * dlog10;
            values[bin] = counts[bin] / norm;
            errors[bin] = counts[bin].sqrt() / norm;
        }
        Ok(Self::new(centers, values, errors, unit))
    }
}
