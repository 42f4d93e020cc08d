//! Procedural brush-tip bitmap for the stamp style.
//!
//! The stamp keeps a master tip image whose alpha channel defines the tip
//! silhouette (a soft round dab with a Gaussian edge falloff). Recoloring
//! rewrites RGB in place and leaves alpha untouched, so the silhouette and
//! its antialiased edge survive any number of recolors. Resizing is a cached
//! bilinear rescale of the master, so repeated strokes never resample.

use crate::draw::color::Color;
use image::{Rgba, RgbaImage, imageops};

/// Side length of the master tip image; covers the maximum brush size.
const MASTER_SIZE: u32 = 64;

/// A pre-rendered, tinted brush tip.
pub struct Stamp {
    master: RgbaImage,
    scaled: RgbaImage,
}

impl Stamp {
    /// Builds a tip tinted with `color` and scaled for brush `size`.
    ///
    /// `size` is the brush radius; the rendered tip is a `2*size` square.
    pub fn new(color: Color, size: i32) -> Self {
        let master = soft_dab(MASTER_SIZE, color);
        let scaled = rescale(&master, size);
        Self { master, scaled }
    }

    /// The tip bitmap at the current brush size.
    pub fn current(&self) -> &RgbaImage {
        &self.scaled
    }

    /// Replaces every pixel's RGB with `color`, preserving alpha.
    pub fn retint(&mut self, color: Color) {
        for image in [&mut self.master, &mut self.scaled] {
            for pixel in image.pixels_mut() {
                *pixel = Rgba([color.r, color.g, color.b, pixel.0[3]]);
            }
        }
    }

    /// Re-derives the cached scaled tip for a new brush size.
    pub fn rescale(&mut self, size: i32) {
        self.scaled = rescale(&self.master, size);
    }
}

fn rescale(master: &RgbaImage, size: i32) -> RgbaImage {
    let side = (2 * size.max(1)) as u32;
    imageops::resize(master, side, side, imageops::FilterType::Triangle)
}

/// Renders the master tip: a filled disc with a Gaussian alpha falloff at
/// the rim, peak opacity at the center.
fn soft_dab(side: u32, color: Color) -> RgbaImage {
    let mut image = RgbaImage::new(side, side);
    let center = (side as f32 - 1.0) / 2.0;
    let radius = side as f32 / 2.0;
    let core = radius * 0.7;
    let sigma = (radius - core).max(1.0) * 0.5;
    let s2 = 2.0 * sigma * sigma;
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let dist = (dx * dx + dy * dy).sqrt();
        let alpha = if dist <= core {
            1.0
        } else if dist >= radius {
            0.0
        } else {
            let edge = dist - core;
            (-(edge * edge) / s2).exp()
        };
        *pixel = Rgba([color.r, color.g, color.b, (alpha * 255.0) as u8]);
    }
    image
}
