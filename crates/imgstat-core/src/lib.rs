//! imgstat Core - Image histograms and running statistics
//!
//! This crate provides two independent engines:
//!
//! - [`compute_histogram`] - per-channel 256-level histograms of raw 8-bit
//!   pixel buffers, with mean, standard deviation and median for each of
//!   Red, Green, Blue, Alpha and Luminosity, plus RGB aggregates
//! - [`RunningStatistic`] - O(1)-memory Welford accumulator for scalar
//!   streams, with [`NamedRunningStatistic`] and [`StatisticsManager`]
//!   for telemetry reporting
//!
//! Neither engine performs I/O. Pixel buffers are borrowed, and results are
//! plain values owned by the caller.
//!
//! # Features
//!
//! - `parallel` (default) - split large histogram scans across the rayon
//!   thread pool

pub mod error;
pub mod format;
pub mod histogram;
pub mod stats;

pub use error::{Error, Result};
pub use format::PixelFormat;
pub use histogram::{
    BucketLayer, Channel, ChannelHistogram, ChannelStats, DEFAULT_PARALLEL_THRESHOLD, DrawLayout,
    DrawMode, DrawSelection, HistogramOptions, ImageHistogram, LuminosityWeighting, NUM_CHANNELS,
    NUM_COLOR_LEVELS, compute_histogram, compute_histogram_with,
};
pub use stats::{NamedRunningStatistic, RunningStatistic, StatisticsManager, VarianceKind};
