//! Demo host for the accessor toolkit.
//!
//! Wraps a configured [`DataArray`] in the [`accessors::data_array_accessor`]
//! namespace and evaluates every registered accessor path once.

pub mod accessors;
pub mod config;
pub mod data;

pub use crate::data::DataArray;

use crate::config::SampleConfig;
use tracing::{debug, info};
use xacc::prelude::*;

/// Results of one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub mean: Option<f64>,
    pub range: Option<f64>,
    pub scaled: DataArray,
    pub scaled_mean: Option<f64>,
}

/// Runs every accessor on the configured sample.
///
/// # Errors
/// Returns the first accessor failure.
pub fn run(sample: &SampleConfig) -> Result<Report, NamespaceError> {
    let accessor = accessors::data_array_accessor()?;
    debug!(members = ?accessor.names(), "Accessor ready");

    let data = DataArray::new(sample.values.clone(), sample.unit.clone());
    info!(data = %data, "Wrapping sample");
    let array = accessor.bind(Value::opaque(data));

    let mean = array.call(["stats", "mean"], Args::new())?.as_float();
    let range = array.call(["stats", "spread", "range"], Args::new())?.as_float();

    let scaled = array.call(
        ["units", "scale"],
        Args::new().arg(sample.factor).kwarg("unit", sample.target_unit.as_str()),
    )?;
    let scaled_array = accessor.bind(scaled.clone());
    let scaled_mean = scaled_array.call(["stats", "mean"], Args::new())?.as_float();

    let scaled = scaled.downcast_ref::<DataArray>().cloned().ok_or_else(|| {
        NamespaceError::from(AttrError::from("units.scale did not return a DataArray"))
    })?;

    info!(?mean, ?range, "Statistics");
    info!(scaled = %scaled, ?scaled_mean, "Scaled sample");

    Ok(Report { mean, range, scaled, scaled_mean })
}
