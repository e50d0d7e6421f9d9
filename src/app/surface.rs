// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/surface.rs
//
// The image surface: decoded pixels plus a cached render handle.

use std::path::PathBuf;

use anyhow::Context;
use image::{DynamicImage, ImageReader, RgbaImage};

use crate::constant::FALLBACK_SURFACE_SIZE;
use crate::domain::color::SampledColor;

/// Re-export the image handle type for use by the view.
pub type ImageHandle = cosmic::widget::image::Handle;

/// Create an iced image handle from an RGBA pixel buffer.
pub fn create_image_handle(pixels: &RgbaImage) -> ImageHandle {
    let (w, h) = pixels.dimensions();
    ImageHandle::from_rgba(w, h, pixels.as_raw().clone())
}

/// The drawing surface: one image decoded at native resolution.
///
/// Drawn once on load; afterwards it is only read from, by the sampler
/// and the magnifier renderer.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    pixels: RgbaImage,
    handle: ImageHandle,
}

impl ImageSurface {
    /// Decode `path` off the UI thread.
    pub async fn load(path: PathBuf) -> anyhow::Result<Self> {
        let decoded = tokio::task::spawn_blocking(move || {
            ImageReader::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?
                .decode()
                .with_context(|| format!("failed to decode {}", path.display()))
        })
        .await??;

        Ok(Self::from_image(&decoded))
    }

    /// Build a surface sized to the image's natural dimensions.
    ///
    /// A degenerate zero-sized decode falls back to a blank square
    /// surface instead.
    #[must_use]
    pub fn from_image(decoded: &DynamicImage) -> Self {
        let pixels = if decoded.width() == 0 || decoded.height() == 0 {
            RgbaImage::new(FALLBACK_SURFACE_SIZE, FALLBACK_SURFACE_SIZE)
        } else {
            decoded.to_rgba8()
        };
        let handle = create_image_handle(&pixels);

        Self { pixels, handle }
    }

    /// Cloneable handle for rendering.
    #[must_use]
    pub fn handle(&self) -> ImageHandle {
        self.handle.clone()
    }

    /// Native pixel dimensions (width, height).
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Raw pixel access for magnifier rendering.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Read the color of a single pixel.
    ///
    /// Coordinates are clamped to the surface upstream; out-of-bounds
    /// reads return `None` instead of panicking.
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> Option<SampledColor> {
        let (w, h) = self.pixels.dimensions();
        (x < w && y < h).then(|| SampledColor::from(*self.pixels.get_pixel(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_surface(width: u32, height: u32, color: [u8; 4]) -> ImageSurface {
        let pixels = RgbaImage::from_pixel(width, height, Rgba(color));
        ImageSurface::from_image(&DynamicImage::ImageRgba8(pixels))
    }

    #[test]
    fn surface_takes_natural_dimensions() {
        let surface = solid_surface(800, 600, [1, 2, 3, 255]);
        assert_eq!(surface.dimensions(), (800, 600));
    }

    #[test]
    fn zero_sized_image_falls_back_to_default_square() {
        let surface = ImageSurface::from_image(&DynamicImage::ImageRgba8(RgbaImage::new(0, 0)));
        assert_eq!(
            surface.dimensions(),
            (FALLBACK_SURFACE_SIZE, FALLBACK_SURFACE_SIZE)
        );
    }

    #[test]
    fn sample_reads_pixel_color() {
        let surface = solid_surface(16, 16, [0x33, 0x66, 0x99, 255]);
        let color = surface.sample(10, 10).expect("in-bounds sample");
        assert_eq!(color.to_string(), "#336699");
    }

    #[test]
    fn sample_on_pure_white_is_ffffff() {
        let surface = solid_surface(16, 16, [255, 255, 255, 255]);
        let color = surface.sample(10, 10).expect("in-bounds sample");
        assert_eq!(color.to_string(), "#ffffff");
        assert_eq!(color, SampledColor::WHITE);
    }

    #[test]
    fn sample_out_of_bounds_is_none() {
        let surface = solid_surface(16, 16, [0, 0, 0, 255]);
        assert!(surface.sample(16, 0).is_none());
        assert!(surface.sample(0, 16).is_none());
    }
}
