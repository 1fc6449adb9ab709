//! Synthetic pixel buffers for histogram tests
//!
//! Every generator returns a tightly packed buffer in the requested
//! [`PixelFormat`]. Colors are given as `[r, g, b, a]`; gray buffers take
//! the red component, RGB buffers drop alpha.

use imgstat_core::PixelFormat;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Pack one RGBA color into `format`, appending to `out`.
fn push_pixel(out: &mut Vec<u8>, format: PixelFormat, [r, g, b, a]: [u8; 4]) {
    match format {
        PixelFormat::Gray8 => out.push(r),
        PixelFormat::Rgb24 => out.extend_from_slice(&[r, g, b]),
        PixelFormat::Rgba32 => out.extend_from_slice(&[r, g, b, a]),
    }
}

/// Pack a list of RGBA pixels into `format`.
pub fn pack_pixels(pixels: &[[u8; 4]], format: PixelFormat) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixels.len() * format.bytes_per_pixel());
    for &px in pixels {
        push_pixel(&mut out, format, px);
    }
    out
}

/// Every pixel set to `color`.
pub fn make_uniform(width: u32, height: u32, format: PixelFormat, color: [u8; 4]) -> Vec<u8> {
    let n = width as usize * height as usize;
    pack_pixels(&vec![color; n], format)
}

/// Horizontal 8-bit ramp, 0 at the left edge rising towards 255.
pub fn make_gradient_gray(width: u32, height: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for _ in 0..height {
        for x in 0..width {
            out.push(((x as f32 / width as f32) * 255.0) as u8);
        }
    }
    out
}

/// Alternating `dark` / `light` squares of `cell` pixels.
pub fn make_checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    format: PixelFormat,
    dark: [u8; 4],
    light: [u8; 4],
) -> Vec<u8> {
    let cell = cell.max(1);
    let mut out = Vec::with_capacity(width as usize * height as usize * format.bytes_per_pixel());
    for y in 0..height {
        for x in 0..width {
            let color = if (x / cell + y / cell) % 2 == 0 {
                dark
            } else {
                light
            };
            push_pixel(&mut out, format, color);
        }
    }
    out
}

/// Uniformly random bytes, reproducible for a given `seed`.
pub fn make_noise(width: u32, height: u32, format: PixelFormat, seed: u64) -> Vec<u8> {
    let len = width as usize * height as usize * format.bytes_per_pixel();
    let mut out = vec![0u8; len];
    StdRng::seed_from_u64(seed).fill_bytes(&mut out);
    out
}
