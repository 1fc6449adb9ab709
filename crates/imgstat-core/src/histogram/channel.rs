//! Per-channel bucket arrays and their summary statistics

use super::NUM_COLOR_LEVELS;

/// Number of logical channels tracked per image.
pub const NUM_CHANNELS: usize = 5;

/// A logical histogram channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
    /// Derived from R, G, B by the configured
    /// [`LuminosityWeighting`](super::LuminosityWeighting).
    Luminosity = 4,
}

impl Channel {
    /// All channels in index order.
    pub const ALL: [Channel; NUM_CHANNELS] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Alpha,
        Channel::Luminosity,
    ];

    /// The color channels averaged into aggregate statistics.
    pub const RGB: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel in per-channel arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
            Channel::Alpha => "Alpha",
            Channel::Luminosity => "Luminosity",
        }
    }
}

/// Mean, standard deviation and median of one channel, in level units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelStats {
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Lower median level.
    pub median: f64,
}

impl ChannelStats {
    /// Element-wise arithmetic mean of several stats.
    ///
    /// This averages the summaries; it does not pool the underlying
    /// samples. Returns all zeros for an empty slice.
    pub fn average_of(stats: &[ChannelStats]) -> ChannelStats {
        if stats.is_empty() {
            return ChannelStats::default();
        }
        let n = stats.len() as f64;
        let (mean, std_dev, median) = stats.iter().fold((0.0, 0.0, 0.0), |acc, s| {
            (acc.0 + s.mean, acc.1 + s.std_dev, acc.2 + s.median)
        });
        ChannelStats {
            mean: mean / n,
            std_dev: std_dev / n,
            median: median / n,
        }
    }
}

/// Bucket counts for one channel plus the statistics derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelHistogram {
    buckets: [u64; NUM_COLOR_LEVELS],
    max_bucket_count: u64,
    stats: ChannelStats,
    present: bool,
}

impl ChannelHistogram {
    /// Build a channel from finished bucket counts.
    ///
    /// Mean and variance come from exact integer moments of the buckets,
    /// so the result does not depend on the order pixels were counted in.
    /// `present` is false for a channel the pixel format does not carry;
    /// such a channel is expected to have all-zero buckets.
    pub fn from_buckets(buckets: [u64; NUM_COLOR_LEVELS], present: bool) -> Self {
        let max_bucket_count = buckets.iter().copied().max().unwrap_or(0);
        let stats = bucket_stats(&buckets);
        Self {
            buckets,
            max_bucket_count,
            stats,
            present,
        }
    }

    /// Occurrence count per level.
    pub fn buckets(&self) -> &[u64; NUM_COLOR_LEVELS] {
        &self.buckets
    }

    /// Largest single bucket; the normalization for bar heights.
    pub fn max_bucket_count(&self) -> u64 {
        self.max_bucket_count
    }

    pub fn stats(&self) -> ChannelStats {
        self.stats
    }

    /// Whether the source pixel format carries this channel.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Sum of all buckets.
    pub fn total_count(&self) -> u64 {
        self.buckets.iter().sum()
    }
}

fn bucket_stats(buckets: &[u64; NUM_COLOR_LEVELS]) -> ChannelStats {
    let mut n = 0u128;
    let mut sum = 0u128;
    let mut sum_sq = 0u128;
    for (level, &count) in buckets.iter().enumerate() {
        let level = level as u128;
        let count = count as u128;
        n += count;
        sum += level * count;
        sum_sq += level * level * count;
    }
    if n == 0 {
        return ChannelStats::default();
    }

    let n_f = n as f64;
    let mean = sum as f64 / n_f;
    // Cancellation can push this slightly below zero.
    let variance = (sum_sq as f64 / n_f - mean * mean).max(0.0);

    ChannelStats {
        mean,
        std_dev: variance.sqrt(),
        median: median_level(buckets, n) as f64,
    }
}

/// Smallest level whose cumulative count reaches half of `total`.
fn median_level(buckets: &[u64; NUM_COLOR_LEVELS], total: u128) -> usize {
    let mut cumulative = 0u128;
    for (level, &count) in buckets.iter().enumerate() {
        cumulative += count as u128;
        if 2 * cumulative >= total {
            return level;
        }
    }
    NUM_COLOR_LEVELS - 1
}
