use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::coords::Rect;
use crate::paint::Color;

/// Owned premultiplied pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Pixmap {
    /// Creates a fully transparent pixmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::transparent(); width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Device-space rectangle covered by this pixmap.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Returns the pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    pub(crate) fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut Color> {
        self.index(x, y).map(move |i| &mut self.pixels[i])
    }

    /// Converts to a straight-alpha 8-bit image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let c = self.pixels[y as usize * self.width as usize + x as usize];
            Rgba(c.to_rgba8())
        })
    }

    /// Encodes the pixmap as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        self.to_rgba_image().save_with_format(path, image::ImageFormat::Png)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}
