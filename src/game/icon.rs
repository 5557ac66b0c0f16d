//! Item icon bitmaps
//!
//! The station never loads textures itself. It asks an `IconSampler` for the
//! per-pixel colors of an item's icon and turns each pixel into a particle.

use macroquad::prelude::{Color, Image};
use super::item::ItemKind;

/// Edge length of icons on the object sheet
pub const ICON_SIZE: usize = 16;

/// Row-major grid of pixel colors
#[derive(Debug, Clone, PartialEq)]
pub struct IconBitmap {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl IconBitmap {
    /// Build a bitmap from row-major pixels. Returns None if the pixel count does not match.
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    /// Bitmap filled with a single color
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Copy the pixels of a decoded image
    pub fn from_image(image: &Image) -> Self {
        let width = image.width();
        let height = image.height();
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(image.get_pixel(x as u32, y as u32));
            }
        }
        Self { width, height, pixels }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterate `(x, y, color)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, c)| (i % width, i / width, *c))
    }
}

/// Source of icon bitmaps for item kinds
pub trait IconSampler {
    /// Sample the icon for `kind`. Must be deterministic for a given kind.
    fn sample_icon(&self, kind: ItemKind) -> Option<IconBitmap>;
}

/// Generates a small gem-shaped icon whose palette is derived from the item kind.
/// Stands in for sprite sheet lookups in the demo and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProceduralIcons;

impl ProceduralIcons {
    fn palette(kind: ItemKind) -> (Color, Color) {
        // Knuth multiplicative hash spreads neighbouring ids across the hue wheel
        let h = kind.0.wrapping_mul(2_654_435_761);
        let r = (h >> 24) as u8;
        let g = (h >> 16) as u8;
        let b = (h >> 8) as u8;
        let base = Color::from_rgba(r | 0x40, g | 0x40, b | 0x40, 255);
        let rim = Color::from_rgba(r / 2, g / 2, b / 2, 255);
        (base, rim)
    }
}

impl IconSampler for ProceduralIcons {
    fn sample_icon(&self, kind: ItemKind) -> Option<IconBitmap> {
        let (base, rim) = Self::palette(kind);
        let transparent = Color::new(0.0, 0.0, 0.0, 0.0);
        let center = (ICON_SIZE as f32 - 1.0) / 2.0;

        let mut pixels = Vec::with_capacity(ICON_SIZE * ICON_SIZE);
        for y in 0..ICON_SIZE {
            for x in 0..ICON_SIZE {
                // Diamond: |dx| + |dy| within radius
                let d = (x as f32 - center).abs() + (y as f32 - center).abs();
                let color = if d < 5.5 {
                    base
                } else if d < 7.5 {
                    rim
                } else {
                    transparent
                };
                pixels.push(color);
            }
        }

        IconBitmap::new(ICON_SIZE, ICON_SIZE, pixels)
    }
}
