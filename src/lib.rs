// src/lib.rs - Library interface for internal module access

pub mod binning;
pub mod catalogue;
pub mod constants;
pub mod font_config;
pub mod labels;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;
pub mod units;

// Expose crate version derived from vergen-generated env vars at compile time.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
