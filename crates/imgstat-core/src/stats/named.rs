//! Running statistics with a display name and units
//!
//! [`NamedRunningStatistic`] is the unit of telemetry reporting. Its CSV
//! form is one line per statistic under the header returned by
//! [`NamedRunningStatistic::csv_header`].

use super::running::{RunningStatistic, VarianceKind};

const CSV_HEADER: &str = "Name, Units, numSamples, avg, min, max, stdev";

/// A [`RunningStatistic`] labelled with a name and units.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRunningStatistic {
    name: String,
    units: String,
    statistic: RunningStatistic,
}

impl NamedRunningStatistic {
    /// Create an empty statistic.
    pub fn new(name: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: units.into(),
            statistic: RunningStatistic::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    /// The underlying accumulator.
    pub fn statistic(&self) -> &RunningStatistic {
        &self.statistic
    }

    pub fn push_sample(&mut self, value: f64) {
        self.statistic.push_sample(value);
    }

    pub fn reset(&mut self) {
        self.statistic.reset();
    }

    /// Column header matching [`to_csv_row`](Self::to_csv_row).
    pub fn csv_header() -> &'static str {
        CSV_HEADER
    }

    /// Format as one CSV row, without a trailing newline.
    ///
    /// The standard deviation uses [`VarianceKind::Sample`].
    pub fn to_csv_row(&self) -> String {
        let s = &self.statistic;
        format!(
            "{}, {}, {}, {:.6}, {:.6}, {:.6}, {:.6}",
            self.name,
            self.units,
            s.num_samples(),
            s.average(),
            s.minimum(),
            s.maximum(),
            s.stdev(VarianceKind::Sample)
        )
    }
}
