// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Separable Gaussian blur with an explicit kernel size.
//
// `imageproc::filter::gaussian_blur_f32` derives the kernel extent from sigma
// and replicates edge pixels. The sketch needs a caller-chosen kernel side with
// a fixed sigma and mirrored borders, so the convolution is done here.

use image::{GrayImage, Luma};

/// Build a normalised 1-D Gaussian kernel with `size` taps.
///
/// Tap `i` has weight `exp(-(i - c)^2 / (2 sigma^2))` with `c = (size - 1) / 2`,
/// scaled so that all weights sum to 1.
pub fn gaussian_kernel(size: usize, sigma: f64) -> Vec<f64> {
    let center = (size as f64 - 1.0) / 2.0;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f64> = (0..size)
        .map(|i| {
            let d = i as f64 - center;
            (-(d * d) / denom).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    if sum > 0.0 {
        for w in &mut kernel {
            *w /= sum;
        }
    }
    kernel
}

/// Map an out-of-bounds coordinate back into `0..len` by mirroring without
/// repeating the edge pixel (`gfedcb|abcdefgh|gfedcba`).
///
/// Kernels wider than the image bounce between both edges until they land.
fn reflect_101(mut i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Blur a single-channel image with a square `size` x `size` Gaussian kernel.
///
/// Runs as two 1-D passes (horizontal then vertical) accumulated in `f64`,
/// rounding half-to-even once at the end. `size` should be odd; an even size
/// still produces a well-defined result with its centre between two taps.
pub fn gaussian_blur(image: &GrayImage, size: u32, sigma: f64) -> GrayImage {
    let (width, height) = image.dimensions();
    let (w, h) = (width as usize, height as usize);
    if w == 0 || h == 0 {
        return image.clone();
    }

    let kernel = gaussian_kernel(size.max(1) as usize, sigma);
    let half = (kernel.len() / 2) as isize;
    let src = image.as_raw();

    // Horizontal pass.
    let mut temp = vec![0.0f64; w * h];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            let mut sum = 0.0;
            for (k, &weight) in kernel.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - half, w);
                sum += f64::from(row[sx]) * weight;
            }
            temp[y * w + x] = sum;
        }
    }

    // Vertical pass.
    let mut out = vec![0.0f64; w * h];
    for y in 0..h {
        for (k, &weight) in kernel.iter().enumerate() {
            let sy = reflect_101(y as isize + k as isize - half, h);
            let src_row = &temp[sy * w..(sy + 1) * w];
            let dst_row = &mut out[y * w..(y + 1) * w];
            for (dst, &val) in dst_row.iter_mut().zip(src_row) {
                *dst += val * weight;
            }
        }
    }

    GrayImage::from_fn(width, height, |x, y| {
        let v = out[y as usize * w + x as usize];
        Luma([v.round_ties_even().clamp(0.0, 255.0) as u8])
    })
}
