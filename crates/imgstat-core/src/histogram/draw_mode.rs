//! Draw-mode selection
//!
//! Maps a [`DrawMode`] to the bucket arrays and statistics a renderer
//! should show. Selection is a pure lookup into an [`ImageHistogram`];
//! nothing is recomputed.

use super::NUM_COLOR_LEVELS;
use super::channel::{Channel, ChannelStats};
use super::compute::ImageHistogram;

/// Which channel(s) to display, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawMode {
    #[default]
    Luminosity,
    /// Red, green and blue drawn on top of each other
    OverlappedRgb,
    /// Red, green and blue side by side, one third of the width each
    SplitRgb,
    Red,
    Green,
    Blue,
    Alpha,
}

/// How the layers of a [`DrawSelection`] are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawLayout {
    /// One channel fills the plot
    Single,
    /// All layers share the plot area
    Overlapped,
    /// Layers are placed next to each other
    Split,
}

impl DrawMode {
    /// Every mode, in display order.
    pub const ALL: [DrawMode; 7] = [
        DrawMode::Luminosity,
        DrawMode::OverlappedRgb,
        DrawMode::SplitRgb,
        DrawMode::Red,
        DrawMode::Green,
        DrawMode::Blue,
        DrawMode::Alpha,
    ];

    /// The single channel this mode shows, or `None` for combined RGB modes.
    pub fn channel(self) -> Option<Channel> {
        match self {
            DrawMode::Luminosity => Some(Channel::Luminosity),
            DrawMode::Red => Some(Channel::Red),
            DrawMode::Green => Some(Channel::Green),
            DrawMode::Blue => Some(Channel::Blue),
            DrawMode::Alpha => Some(Channel::Alpha),
            DrawMode::OverlappedRgb | DrawMode::SplitRgb => None,
        }
    }

    pub fn layout(self) -> DrawLayout {
        match self {
            DrawMode::OverlappedRgb => DrawLayout::Overlapped,
            DrawMode::SplitRgb => DrawLayout::Split,
            _ => DrawLayout::Single,
        }
    }

    /// Display name for mode pickers.
    pub fn label(self) -> &'static str {
        match self {
            DrawMode::Luminosity => "Luminosity",
            DrawMode::OverlappedRgb => "Overlapped RGB",
            DrawMode::SplitRgb => "Split RGB",
            DrawMode::Red => "Red",
            DrawMode::Green => "Green",
            DrawMode::Blue => "Blue",
            DrawMode::Alpha => "Alpha",
        }
    }
}

/// One channel's bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketLayer<'a> {
    pub channel: Channel,
    pub buckets: &'a [u64; NUM_COLOR_LEVELS],
    /// Largest bucket of this channel alone
    pub max_count: u64,
}

/// Bars to draw for one [`DrawMode`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSelection<'a> {
    pub layout: DrawLayout,
    pub layers: Vec<BucketLayer<'a>>,
}

impl DrawSelection<'_> {
    /// Largest bucket over all layers.
    ///
    /// Overlapped layers should share this normalization so their bar
    /// heights are comparable.
    pub fn max_count(&self) -> u64 {
        self.layers.iter().map(|l| l.max_count).max().unwrap_or(0)
    }
}

impl ImageHistogram {
    /// Bucket arrays and their maxima for `mode`.
    ///
    /// Combined RGB modes yield Red, Green, Blue layers in that order.
    pub fn buckets_for_mode(&self, mode: DrawMode) -> DrawSelection<'_> {
        let layer = |channel: Channel| {
            let hist = self.channel(channel);
            BucketLayer {
                channel,
                buckets: hist.buckets(),
                max_count: hist.max_bucket_count(),
            }
        };
        let layers = match mode.channel() {
            Some(channel) => vec![layer(channel)],
            None => Channel::RGB.into_iter().map(layer).collect(),
        };
        DrawSelection {
            layout: mode.layout(),
            layers,
        }
    }

    /// Statistics to print for `mode`.
    ///
    /// Combined RGB modes report [`average`](ImageHistogram::average).
    pub fn stats_for_mode(&self, mode: DrawMode) -> ChannelStats {
        match mode.channel() {
            Some(channel) => self.channel(channel).stats(),
            None => self.average(),
        }
    }
}
