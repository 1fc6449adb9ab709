//! Per-channel intensity histograms of 8-bit pixel buffers
//!
//! - [`compute_histogram`] / [`compute_histogram_with`] - scan a buffer
//! - [`ImageHistogram`] - bucket arrays and statistics for every [`Channel`]
//! - [`DrawMode`] - select what a renderer should show

mod channel;
mod compute;
mod draw_mode;
mod options;
mod parallel;

pub use channel::{Channel, ChannelHistogram, ChannelStats, NUM_CHANNELS};
pub use compute::{ImageHistogram, compute_histogram, compute_histogram_with};
pub use draw_mode::{BucketLayer, DrawLayout, DrawMode, DrawSelection};
pub use options::{DEFAULT_PARALLEL_THRESHOLD, HistogramOptions, LuminosityWeighting};

/// Number of discrete levels per 8-bit channel, one bucket each.
pub const NUM_COLOR_LEVELS: usize = 256;
