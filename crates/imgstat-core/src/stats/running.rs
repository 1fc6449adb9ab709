//! Incremental single-stream statistics
//!
//! [`RunningStatistic`] keeps count, extrema, sum, mean and Welford's M2
//! term for a stream of `f64` samples in O(1) memory. No sample history is
//! retained.

/// Which variance estimator to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarianceKind {
    /// Divide by `n`: the samples are the whole population.
    Population,
    /// Divide by `n - 1` (Bessel-corrected): the samples are a subset of a
    /// larger population, e.g. benchmark runs.
    #[default]
    Sample,
}

/// Running count, min, max, sum, mean and variance of a scalar stream.
///
/// # Example
///
/// ```
/// use imgstat_core::{RunningStatistic, VarianceKind};
///
/// let stat: RunningStatistic = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
///     .into_iter()
///     .collect();
/// assert!((stat.average() - 5.0).abs() < 1e-12);
/// assert!((stat.stdev(VarianceKind::Population) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunningStatistic {
    sample_count: u64,
    most_recent_sample: f64,
    minimum: f64,
    maximum: f64,
    sum: f64,
    mean: f64,
    /// Welford's M2: sum of squared deviations from the running mean.
    variance_accumulator: f64,
}

impl RunningStatistic {
    /// Create an empty statistic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all samples.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add one sample.
    ///
    /// NaN and infinite samples are accepted and propagate through the
    /// running values per IEEE 754.
    pub fn push_sample(&mut self, value: f64) {
        self.sample_count += 1;
        self.most_recent_sample = value;
        self.sum += value;

        if self.sample_count == 1 {
            self.minimum = value;
            self.maximum = value;
            self.mean = value;
            return;
        }

        if value < self.minimum {
            self.minimum = value;
        }
        if value > self.maximum {
            self.maximum = value;
        }

        let new_mean = self.mean + (value - self.mean) / self.sample_count as f64;
        self.variance_accumulator += (value - self.mean) * (value - new_mean);
        self.mean = new_mean;
    }

    /// Variance of the samples seen so far.
    ///
    /// Returns 0 while fewer than two samples have been pushed.
    pub fn variance(&self, kind: VarianceKind) -> f64 {
        if self.sample_count <= 1 {
            return 0.0;
        }
        let divisor = match kind {
            VarianceKind::Population => self.sample_count,
            VarianceKind::Sample => self.sample_count - 1,
        };
        self.variance_accumulator / divisor as f64
    }

    /// Standard deviation, `sqrt(variance(kind))`.
    pub fn stdev(&self, kind: VarianceKind) -> f64 {
        self.variance(kind).sqrt()
    }

    /// Number of samples pushed since the last reset.
    pub fn num_samples(&self) -> u64 {
        self.sample_count
    }

    pub fn most_recent_sample(&self) -> f64 {
        self.most_recent_sample
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Running mean.
    pub fn average(&self) -> f64 {
        self.mean
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }
}

impl Extend<f64> for RunningStatistic {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push_sample(value);
        }
    }
}

impl FromIterator<f64> for RunningStatistic {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stat = Self::new();
        stat.extend(iter);
        stat
    }
}
