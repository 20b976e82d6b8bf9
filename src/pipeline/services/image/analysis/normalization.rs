//! Contrast-limited adaptive histogram equalization on the L* channel.

use super::color::{lab_to_rgb, rgb_to_lab};
use image::{Rgb, RgbImage};

const BINS: usize = 256;

#[derive(Debug, Clone, Copy)]
pub struct LightingNormalizer {
    clip_limit: f64,
    grid: u32,
}

impl Default for LightingNormalizer {
    fn default() -> Self {
        Self {
            clip_limit: 2.0,
            grid: 8,
        }
    }
}

impl LightingNormalizer {
    /// Equalize lightness tile by tile, leaving a* and b* untouched.
    pub fn normalize(&self, image: &RgbImage) -> RgbImage {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return image.clone();
        }

        let labs: Vec<[f64; 3]> = image
            .pixels()
            .map(|pixel| rgb_to_lab(pixel.0.map(f64::from)))
            .collect();
        let levels: Vec<usize> = labs.iter().map(|lab| lightness_bin(lab[0])).collect();

        let tile_w = width.div_ceil(self.grid);
        let tile_h = height.div_ceil(self.grid);
        let tiles_x = width.div_ceil(tile_w);
        let tiles_y = height.div_ceil(tile_h);

        let mut luts = Vec::with_capacity((tiles_x * tiles_y) as usize);
        for ty in 0..tiles_y {
            for tx in 0..tiles_x {
                let mut histogram = [0usize; BINS];
                let x_end = ((tx + 1) * tile_w).min(width);
                let y_end = ((ty + 1) * tile_h).min(height);
                for y in ty * tile_h..y_end {
                    for x in tx * tile_w..x_end {
                        histogram[levels[(y * width + x) as usize]] += 1;
                    }
                }
                luts.push(self.tile_lut(&histogram));
            }
        }

        let mut out = RgbImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let index = (y * width + x) as usize;
                let level = levels[index];

                // bilinear blend between the four surrounding tile centres
                let fx = (f64::from(x) + 0.5) / f64::from(tile_w) - 0.5;
                let fy = (f64::from(y) + 0.5) / f64::from(tile_h) - 0.5;
                let x0 = fx.floor().clamp(0.0, f64::from(tiles_x - 1)) as u32;
                let y0 = fy.floor().clamp(0.0, f64::from(tiles_y - 1)) as u32;
                let x1 = (x0 + 1).min(tiles_x - 1);
                let y1 = (y0 + 1).min(tiles_y - 1);
                let wx = (fx - f64::from(x0)).clamp(0.0, 1.0);
                let wy = (fy - f64::from(y0)).clamp(0.0, 1.0);

                let lut = |tx: u32, ty: u32| luts[(ty * tiles_x + tx) as usize][level];
                let top = lut(x0, y0) * (1.0 - wx) + lut(x1, y0) * wx;
                let bottom = lut(x0, y1) * (1.0 - wx) + lut(x1, y1) * wx;
                let mapped = top * (1.0 - wy) + bottom * wy;

                let [_, a, b] = labs[index];
                let lightness = mapped / (BINS - 1) as f64 * 100.0;
                out.put_pixel(x, y, Rgb(lab_to_rgb([lightness, a, b])));
            }
        }

        out
    }

    /// Clipped, redistributed cumulative histogram mapped back onto the bin range.
    fn tile_lut(&self, histogram: &[usize; BINS]) -> [f64; BINS] {
        let total: usize = histogram.iter().sum();
        let mut lut = [0.0; BINS];
        if total == 0 {
            return lut;
        }

        let clip = ((self.clip_limit * total as f64 / BINS as f64).max(1.0)) as usize;
        let mut clipped = [0usize; BINS];
        let mut excess = 0usize;
        for (bin, &count) in histogram.iter().enumerate() {
            clipped[bin] = count.min(clip);
            excess += count.saturating_sub(clip);
        }
        let share = excess / BINS;
        let remainder = excess % BINS;
        for (bin, count) in clipped.iter_mut().enumerate() {
            *count += share + usize::from(bin < remainder);
        }

        let mut cumulative = 0usize;
        for (bin, count) in clipped.iter().enumerate() {
            cumulative += count;
            lut[bin] = cumulative as f64 * (BINS - 1) as f64 / total as f64;
        }
        lut
    }
}

fn lightness_bin(lightness: f64) -> usize {
    ((lightness.clamp(0.0, 100.0) / 100.0) * (BINS - 1) as f64).round() as usize
}
