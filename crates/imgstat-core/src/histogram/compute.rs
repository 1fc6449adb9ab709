//! Histogram computation from raw pixel buffers
//!
//! One scan over the buffer fills a 256-bucket array for each of the five
//! [`Channel`]s. Mean, standard deviation and median are then derived from
//! the buckets alone, so no per-pixel floating point accumulation is
//! involved and a parallel scan yields exactly the sequential result.
//!
//! The median is the lower median of the 8-bit levels. It is exact for
//! 8-bit input; deeper formats would need a sort instead.

use std::ops::Index;

use super::NUM_COLOR_LEVELS;
use super::channel::{Channel, ChannelHistogram, ChannelStats, NUM_CHANNELS};
use super::options::HistogramOptions;
use super::parallel::fold_reduce_blocks;
use crate::error::{Error, Result};
use crate::format::PixelFormat;

/// Pixels folded into one accumulator before merging.
const PIXELS_PER_BLOCK: usize = 16 * 1024;

type ChannelBuckets = [[u64; NUM_COLOR_LEVELS]; NUM_CHANNELS];

/// Histograms and statistics for every channel of one image.
///
/// Created by [`compute_histogram`]. A new value is produced on every call;
/// nothing is carried over between images.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHistogram {
    width: u32,
    height: u32,
    format: PixelFormat,
    channels: [ChannelHistogram; NUM_CHANNELS],
    average: ChannelStats,
}

impl ImageHistogram {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Number of pixels scanned, `width * height`.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn channel(&self, channel: Channel) -> &ChannelHistogram {
        &self.channels[channel.index()]
    }

    /// Iterate over `(channel, histogram)` pairs in [`Channel::ALL`] order.
    pub fn channels(&self) -> impl Iterator<Item = (Channel, &ChannelHistogram)> {
        Channel::ALL.into_iter().zip(self.channels.iter())
    }

    /// Element-wise mean of the Red, Green and Blue statistics.
    ///
    /// Alpha and luminosity are not included. Each field is the average of
    /// the three per-channel values, not a statistic of the pooled samples.
    pub fn average(&self) -> ChannelStats {
        self.average
    }
}

impl Index<Channel> for ImageHistogram {
    type Output = ChannelHistogram;

    fn index(&self, channel: Channel) -> &ChannelHistogram {
        self.channel(channel)
    }
}

/// Compute the histogram of a pixel buffer with default options.
///
/// # Arguments
///
/// * `buffer` - Tightly packed pixels, `width * height * bytes_per_pixel` bytes
/// * `width`, `height` - Image size in pixels
/// * `format` - Layout of each pixel
///
/// # Errors
///
/// Fails before scanning with an invalid-argument error if the buffer
/// length does not match the size and format.
///
/// # Example
///
/// ```
/// use imgstat_core::{Channel, PixelFormat, compute_histogram};
///
/// let pixels = [0u8, 0, 0, 255, 255, 255, 255, 255];
/// let hist = compute_histogram(&pixels, 2, 1, PixelFormat::Rgba32).unwrap();
/// assert_eq!(hist[Channel::Red].buckets()[0], 1);
/// assert_eq!(hist[Channel::Red].stats().mean, 127.5);
/// ```
pub fn compute_histogram(
    buffer: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
) -> Result<ImageHistogram> {
    compute_histogram_with(buffer, width, height, format, &HistogramOptions::default())
}

/// Compute the histogram of a pixel buffer.
///
/// See [`compute_histogram`].
///
/// # Errors
///
/// In addition to the buffer checks, returns [`Error::InvalidParameter`]
/// if `options.parallel_threshold` is 0.
pub fn compute_histogram_with(
    buffer: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
    options: &HistogramOptions,
) -> Result<ImageHistogram> {
    options.validate()?;
    let pixel_count = validate_buffer(buffer, width, height, format)?;

    let parallel = cfg!(feature = "parallel") && pixel_count >= options.parallel_threshold;
    tracing::debug!(
        "computing histogram: {}x{} {:?}, parallel={}",
        width,
        height,
        format,
        parallel
    );

    let bpp = format.bytes_per_pixel();
    let has_alpha = format.has_alpha();
    let weighting = options.luminosity;

    let buckets = fold_reduce_blocks(
        buffer,
        bpp * PIXELS_PER_BLOCK,
        parallel,
        empty_buckets,
        |mut acc, block| {
            for pixel in block.chunks_exact(bpp) {
                let (r, g, b, a) = format.decode(pixel);
                acc[Channel::Red.index()][r as usize] += 1;
                acc[Channel::Green.index()][g as usize] += 1;
                acc[Channel::Blue.index()][b as usize] += 1;
                if has_alpha {
                    acc[Channel::Alpha.index()][a as usize] += 1;
                }
                acc[Channel::Luminosity.index()][weighting.luminance(r, g, b) as usize] += 1;
            }
            acc
        },
        merge_buckets,
    );

    let channels = Channel::ALL.map(|ch| {
        let present = ch != Channel::Alpha || has_alpha;
        ChannelHistogram::from_buckets(buckets[ch.index()], present)
    });
    let rgb_stats = Channel::RGB.map(|ch| channels[ch.index()].stats());
    let average = ChannelStats::average_of(&rgb_stats);

    Ok(ImageHistogram {
        width,
        height,
        format,
        channels,
        average,
    })
}

/// Check the buffer against the image size, returning the pixel count.
fn validate_buffer(buffer: &[u8], width: u32, height: u32, format: PixelFormat) -> Result<usize> {
    if (width == 0 || height == 0) && !buffer.is_empty() {
        tracing::warn!(
            "rejecting {} byte buffer for empty {}x{} image",
            buffer.len(),
            width,
            height
        );
        return Err(Error::InvalidDimension { width, height });
    }

    let expected = format
        .buffer_len(width, height)
        .ok_or(Error::InvalidDimension { width, height })?;
    if buffer.len() != expected {
        tracing::warn!(
            "buffer size mismatch for {}x{} {:?}: expected {}, got {}",
            width,
            height,
            format,
            expected,
            buffer.len()
        );
        return Err(Error::BufferSizeMismatch {
            expected,
            actual: buffer.len(),
        });
    }

    Ok(expected / format.bytes_per_pixel())
}

fn empty_buckets() -> ChannelBuckets {
    [[0; NUM_COLOR_LEVELS]; NUM_CHANNELS]
}

fn merge_buckets(mut a: ChannelBuckets, b: ChannelBuckets) -> ChannelBuckets {
    for (dst, src) in a.iter_mut().zip(b.iter()) {
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d += s;
        }
    }
    a
}
