//! Histogram engine regression test
//!
//! Checks bucket totals, statistic ranges, max-bucket consistency and
//! determinism across pixel formats and synthetic images.

use imgstat_core::{
    Channel, Error, HistogramOptions, ImageHistogram, LuminosityWeighting, NUM_COLOR_LEVELS,
    PixelFormat, compute_histogram, compute_histogram_with,
};
use imgstat_test::RegParams;
use imgstat_test::synth::{
    make_checkerboard, make_gradient_gray, make_noise, make_uniform, pack_pixels,
};

const FORMATS: [PixelFormat; 3] = [PixelFormat::Gray8, PixelFormat::Rgb24, PixelFormat::Rgba32];

/// Record the invariants every histogram must satisfy.
fn check_invariants(rp: &mut RegParams, hist: &ImageHistogram) {
    let n = hist.pixel_count();
    for (channel, ch) in hist.channels() {
        let expected_total = if ch.is_present() { n } else { 0 };
        rp.compare_values(expected_total as f64, ch.total_count() as f64, 0.0);

        let max = ch.buckets().iter().copied().max().unwrap_or(0);
        rp.compare_values(max as f64, ch.max_bucket_count() as f64, 0.0);

        let stats = ch.stats();
        for value in [stats.mean, stats.median] {
            if !(0.0..=255.0).contains(&value) {
                rp.compare_values(127.5, value, 127.5);
            }
        }
        if stats.std_dev < 0.0 {
            rp.compare_values(0.0, stats.std_dev, 0.0);
        }
        if channel == Channel::Alpha {
            rp.compare_values(
                hist.format().has_alpha() as u8 as f64,
                ch.is_present() as u8 as f64,
                0.0,
            );
        }
    }
}

#[test]
fn histogram_reg_black_white_rgba() {
    let mut rp = RegParams::new("histogram_bw");

    let black = [0, 0, 0, 255];
    let white = [255, 255, 255, 255];
    let buf = pack_pixels(&[black, white, black, white], PixelFormat::Rgba32);
    let hist = compute_histogram(&buf, 2, 2, PixelFormat::Rgba32).unwrap();

    let mut expected = [0u64; NUM_COLOR_LEVELS];
    expected[0] = 2;
    expected[255] = 2;
    for channel in Channel::RGB {
        let ch = &hist[channel];
        rp.compare_buckets(&expected, ch.buckets());
        rp.compare_values(127.5, ch.stats().mean, 0.0);
        rp.compare_values(127.5, ch.stats().std_dev, 0.0);
        // Lower median
        rp.compare_values(0.0, ch.stats().median, 0.0);
    }
    rp.compare_values(127.5, hist.average().mean, 0.0);
    rp.compare_values(127.5, hist.average().std_dev, 0.0);
    rp.compare_values(0.0, hist.average().median, 0.0);
    check_invariants(&mut rp, &hist);

    assert!(rp.cleanup(), "histogram_bw regression test failed");
}

#[test]
fn histogram_reg_all_black_rgb() {
    let mut rp = RegParams::new("histogram_black");

    let buf = make_uniform(4, 4, PixelFormat::Rgb24, [0, 0, 0, 0]);
    let hist = compute_histogram(&buf, 4, 4, PixelFormat::Rgb24).unwrap();

    let mut expected = [0u64; NUM_COLOR_LEVELS];
    expected[0] = 16;
    for channel in [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Luminosity,
    ] {
        let ch = &hist[channel];
        rp.compare_buckets(&expected, ch.buckets());
        rp.compare_values(0.0, ch.stats().mean, 0.0);
        rp.compare_values(0.0, ch.stats().std_dev, 0.0);
        rp.compare_values(0.0, ch.stats().median, 0.0);
    }
    rp.compare_buckets(&[0u64; NUM_COLOR_LEVELS], hist[Channel::Alpha].buckets());
    check_invariants(&mut rp, &hist);

    assert!(rp.cleanup(), "histogram_black regression test failed");
}

#[test]
fn histogram_reg_synthetic_images() {
    let mut rp = RegParams::new("histogram_synth");

    for format in FORMATS {
        let buf = make_checkerboard(40, 30, 5, format, [10, 20, 30, 40], [200, 210, 220, 230]);
        let hist = compute_histogram(&buf, 40, 30, format).unwrap();
        check_invariants(&mut rp, &hist);
        // 8x6 cells, half of each color
        rp.compare_values(600.0, hist[Channel::Red].buckets()[10] as f64, 0.0);
        rp.compare_values(600.0, hist[Channel::Red].buckets()[200] as f64, 0.0);
        rp.compare_values(105.0, hist[Channel::Red].stats().mean, 1e-9);
        rp.compare_values(95.0, hist[Channel::Red].stats().std_dev, 1e-9);

        let buf = make_noise(97, 61, format, 7);
        let hist = compute_histogram(&buf, 97, 61, format).unwrap();
        check_invariants(&mut rp, &hist);
        // Uniform noise sits near the middle of the range
        rp.compare_values(127.5, hist[Channel::Red].stats().mean, 5.0);
        rp.compare_values(127.5, hist[Channel::Red].stats().median, 8.0);
        rp.compare_values(73.9, hist[Channel::Red].stats().std_dev, 3.0);
    }

    let buf = make_gradient_gray(256, 4);
    let hist = compute_histogram(&buf, 256, 4, PixelFormat::Gray8).unwrap();
    check_invariants(&mut rp, &hist);
    rp.compare_values(127.0, hist[Channel::Luminosity].stats().median, 1.0);

    assert!(rp.cleanup(), "histogram_synth regression test failed");
}

#[test]
fn histogram_reg_idempotent_and_parallel() {
    let mut rp = RegParams::new("histogram_determinism");

    let (w, h) = (512, 384);
    let buf = make_noise(w, h, PixelFormat::Rgba32, 2024);

    let first = compute_histogram(&buf, w, h, PixelFormat::Rgba32).unwrap();
    let second = compute_histogram(&buf, w, h, PixelFormat::Rgba32).unwrap();
    rp.compare_values(1.0, (first == second) as u8 as f64, 0.0);

    let opts = HistogramOptions::sequential();
    let sequential = compute_histogram_with(&buf, w, h, PixelFormat::Rgba32, &opts).unwrap();
    for channel in Channel::ALL {
        rp.compare_buckets(sequential[channel].buckets(), first[channel].buckets());
        rp.compare_values(
            sequential[channel].stats().mean,
            first[channel].stats().mean,
            0.0,
        );
        rp.compare_values(
            sequential[channel].stats().std_dev,
            first[channel].stats().std_dev,
            0.0,
        );
    }

    assert!(rp.cleanup(), "histogram_determinism regression test failed");
}

#[test]
fn histogram_reg_luminosity() {
    let mut rp = RegParams::new("histogram_luminosity");

    let pixels = [
        [255, 0, 0, 255],
        [0, 255, 0, 255],
        [0, 0, 255, 255],
        [90, 90, 90, 255],
    ];
    let buf = pack_pixels(&pixels, PixelFormat::Rgba32);

    let hist = compute_histogram(&buf, 4, 1, PixelFormat::Rgba32).unwrap();
    let lum = hist[Channel::Luminosity].buckets();
    for level in [76, 149, 28, 90] {
        rp.compare_values(1.0, lum[level] as f64, 0.0);
    }

    let opts = HistogramOptions {
        luminosity: LuminosityWeighting::Average,
        ..Default::default()
    };
    let hist = compute_histogram_with(&buf, 4, 1, PixelFormat::Rgba32, &opts).unwrap();
    let lum = hist[Channel::Luminosity].buckets();
    rp.compare_values(3.0, lum[85] as f64, 0.0);
    rp.compare_values(1.0, lum[90] as f64, 0.0);

    assert!(rp.cleanup(), "histogram_luminosity regression test failed");
}

#[test]
fn histogram_reg_invalid_input() {
    let mut rp = RegParams::new("histogram_invalid");

    let cases: [(&[u8], u32, u32, PixelFormat); 6] = [
        (&[0; 11], 2, 2, PixelFormat::Rgb24),
        (&[0; 17], 2, 2, PixelFormat::Rgba32),
        (&[0; 3], 0, 3, PixelFormat::Gray8),
        (&[0; 3], 3, 0, PixelFormat::Gray8),
        (&[], u32::MAX, u32::MAX, PixelFormat::Rgba32),
        (&[], 1, 1, PixelFormat::Gray8),
    ];
    for (buf, w, h, format) in cases {
        let result = compute_histogram(buf, w, h, format);
        let rejected = matches!(&result, Err(e) if e.is_invalid_argument());
        rp.compare_values(1.0, rejected as u8 as f64, 0.0);
    }

    // Size that overflows the byte count
    let overflow = compute_histogram(&[], u32::MAX, u32::MAX, PixelFormat::Rgba32);
    let is_dimension_error = matches!(overflow, Err(Error::InvalidDimension { .. }));
    rp.compare_values(1.0, is_dimension_error as u8 as f64, 0.0);

    // Empty buffer for a non-empty image
    let empty = compute_histogram(&[], 1, 1, PixelFormat::Gray8);
    let is_size_error = matches!(
        empty,
        Err(Error::BufferSizeMismatch {
            expected: 1,
            actual: 0
        })
    );
    rp.compare_values(1.0, is_size_error as u8 as f64, 0.0);

    let bad_tag = PixelFormat::try_from(16u32);
    rp.compare_values(1.0, bad_tag.is_err() as u8 as f64, 0.0);

    assert!(rp.cleanup(), "histogram_invalid regression test failed");
}
