// src/units.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

/// A numeric array tagged with a quantity name and a physical unit symbol.
///
/// The unit is carried for axis labelling only; no unit arithmetic or
/// conversion happens here. An empty unit string marks a dimensionless
/// quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityArray {
    pub values: Array1<f64>,
    pub name: String,
    pub unit: String,
}

impl QuantityArray {
    pub fn new(
        values: Array1<f64>,
        name: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            values,
            name: name.into(),
            unit: unit.into(),
        }
    }

    /// A quantity with no physical unit attached.
    pub fn dimensionless(values: Array1<f64>, name: impl Into<String>) -> Self {
        Self::new(values, name, "")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_empty()
    }

    /// Minimum and maximum over the finite values, or `None` when no finite
    /// value exists.
    pub fn finite_min_max(&self) -> Option<(f64, f64)> {
        let finite = Array1::from_iter(self.values.iter().copied().filter(|v| v.is_finite()));
        let min = *finite.min().ok()?;
        let max = *finite.max().ok()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_finite_min_max_skips_non_finite() {
        let q = QuantityArray::new(
            array![1.0, f64::NAN, -3.0, f64::INFINITY, 2.5],
            "Halo Mass",
            "Msun",
        );
        assert_eq!(q.finite_min_max(), Some((-3.0, 2.5)));
    }

    #[test]
    fn test_finite_min_max_empty() {
        let q = QuantityArray::dimensionless(array![], "Concentration");
        assert_eq!(q.finite_min_max(), None);

        let all_nan = QuantityArray::dimensionless(array![f64::NAN, f64::NAN], "Concentration");
        assert_eq!(all_nan.finite_min_max(), None);
    }

    #[test]
    fn test_dimensionless_flag() {
        let q = QuantityArray::dimensionless(array![1.0], "Spin Parameter");
        assert!(q.is_dimensionless());
        let q = QuantityArray::new(array![1.0], "Radius", "Mpc");
        assert!(!q.is_dimensionless());
    }
}
