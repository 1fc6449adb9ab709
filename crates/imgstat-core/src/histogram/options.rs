//! Histogram computation options

use crate::error::{Error, Result};

/// Minimum pixel count at which the scan is split across worker threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 30_000;

/// How the luminosity channel is derived from R, G, B.
///
/// Both weightings map gray pixels (`r == g == b == v`) to `v` and always
/// produce a level in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LuminosityWeighting {
    /// Integer Rec. 601 luma: `(77 r + 150 g + 29 b) >> 8`
    #[default]
    Rec601,
    /// Unweighted mean: `(r + g + b) / 3`
    Average,
}

impl LuminosityWeighting {
    /// Luminosity level of one pixel.
    #[inline]
    pub fn luminance(self, r: u8, g: u8, b: u8) -> u8 {
        let (r, g, b) = (r as u32, g as u32, b as u32);
        let level = match self {
            LuminosityWeighting::Rec601 => (77 * r + 150 * g + 29 * b) >> 8,
            LuminosityWeighting::Average => (r + g + b) / 3,
        };
        level as u8
    }
}

/// Options for [`compute_histogram_with`](super::compute_histogram_with)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramOptions {
    /// Weighting for the luminosity channel
    pub luminosity: LuminosityWeighting,
    /// Scan in parallel when the image has at least this many pixels.
    /// Use `usize::MAX` to always scan sequentially.
    pub parallel_threshold: usize,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            luminosity: LuminosityWeighting::Rec601,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl HistogramOptions {
    /// Options that never use worker threads.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(Error::InvalidParameter(
                "parallel_threshold must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
