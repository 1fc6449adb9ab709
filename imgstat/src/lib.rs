//! imgstat - Image histograms and running statistics for Rust
//!
//! # Overview
//!
//! - Per-channel 256-level histograms (red, green, blue, alpha and
//!   luminosity) of raw 8-bit pixel buffers, with mean, standard deviation
//!   and median for each channel
//! - Draw-mode selection of the bucket arrays a renderer should show
//! - Welford running statistics, named statistics and a keyed registry
//!   with CSV export
//!
//! # Example
//!
//! ```
//! use imgstat::{Channel, PixelFormat, compute_histogram};
//!
//! // 2x2 RGBA: black, white, white, black
//! let buf = [
//!     0u8, 0, 0, 255, 255, 255, 255, 255, //
//!     255, 255, 255, 255, 0, 0, 0, 255,
//! ];
//! let hist = compute_histogram(&buf, 2, 2, PixelFormat::Rgba32).unwrap();
//! assert_eq!(hist[Channel::Red].buckets()[0], 2);
//! assert_eq!(hist[Channel::Red].buckets()[255], 2);
//! assert_eq!(hist[Channel::Alpha].buckets()[255], 4);
//! assert_eq!(hist[Channel::Red].stats().mean, 127.5);
//! ```

pub use imgstat_core::*;
