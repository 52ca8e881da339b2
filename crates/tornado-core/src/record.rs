// File: crates/tornado-core/src/record.rs
// Summary: Sales record model; one row per item in the rendered chart.

use crate::error::DataError;

/// One row of the forecast-vs-actual table.
///
/// `difference` is trusted as supplied by the caller; the renderer does not
/// re-derive it from the two volumes.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesRecord {
    /// Category label shown on the y axis.
    pub item: String,
    /// Predicted volume, non-negative.
    pub forecast_volume: f64,
    /// Observed volume, non-negative.
    pub actual_volume: f64,
    /// Drives color intensity and the row sort order.
    pub accuracy: f64,
    /// Signed forecast minus actual, precomputed upstream.
    pub difference: f64,
    /// Region attribute coloring the item label.
    pub region: String,
}

impl SalesRecord {
    /// Construct a record enforcing the field invariants: all numeric fields
    /// finite, both volumes non-negative.
    pub fn try_new(
        item: impl Into<String>,
        forecast_volume: f64,
        actual_volume: f64,
        accuracy: f64,
        difference: f64,
        region: impl Into<String>,
    ) -> Result<Self, DataError> {
        let record = Self {
            item: item.into(),
            forecast_volume,
            actual_volume,
            accuracy,
            difference,
            region: region.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the field invariants on an already-built record.
    pub fn validate(&self) -> Result<(), DataError> {
        let finite = |value: f64, field: &'static str| -> Result<(), DataError> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(DataError::NonFinite { item: self.item.clone(), field })
            }
        };
        finite(self.forecast_volume, "forecast_volume")?;
        finite(self.actual_volume, "actual_volume")?;
        finite(self.accuracy, "accuracy")?;
        finite(self.difference, "difference")?;

        if self.forecast_volume < 0.0 {
            return Err(DataError::NegativeVolume { item: self.item.clone(), field: "forecast_volume" });
        }
        if self.actual_volume < 0.0 {
            return Err(DataError::NegativeVolume { item: self.item.clone(), field: "actual_volume" });
        }
        Ok(())
    }
}
