// src/labels.rs

use crate::units::QuantityArray;

/// Full axis label for a quantity: `"<name> [<unit>]"`.
///
/// Dimensionless quantities get the bare name; unnamed quantities get just
/// the bracketed unit.
pub fn full_label(quantity: &QuantityArray) -> String {
    match (quantity.name.is_empty(), quantity.is_dimensionless()) {
        (false, false) => format!("{} [{}]", quantity.name, quantity.unit),
        (false, true) => quantity.name.clone(),
        (true, false) => format!("[{}]", quantity.unit),
        (true, true) => String::new(),
    }
}

/// Y-axis label for a mass-function plot, e.g.
/// `"Mass Function dn(M)/dlog10(M) [1/Mpc^3]"`.
pub fn mass_function_label(sub_label: &str, unit: &str) -> String {
    let core = format!("Mass Function dn({0})/dlog10({0})", sub_label);
    if unit.is_empty() {
        core
    } else {
        format!("{core} [{unit}]")
    }
}
