// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/magnifier.rs
//
// Magnifier geometry and disc rendering.

use image::{Rgba, RgbaImage};

/// Geometry of the circular magnifier.
///
/// A square region of the source image centered on the cursor is
/// enlarged by the magnification factor so that it exactly fills a
/// disc of `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnifier {
    radius: u32,
    magnification: u32,
}

impl Magnifier {
    /// Build a magnifier, clamping degenerate values to 1.
    #[must_use]
    pub fn new(radius: u32, magnification: u32) -> Self {
        Self {
            radius: radius.max(1),
            magnification: magnification.max(1),
        }
    }

    #[must_use]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Diameter of the magnifier disc in pixels.
    #[must_use]
    pub fn diameter(&self) -> u32 {
        self.radius * 2
    }

    /// Top-left corner of the copied source region.
    ///
    /// May lie outside the surface near its edges.
    #[must_use]
    pub fn source_origin(&self, cursor: (u32, u32)) -> (i64, i64) {
        let reach = i64::from(self.radius / self.magnification);
        (i64::from(cursor.0) - reach, i64::from(cursor.1) - reach)
    }

    /// Render the enlarged circular crop centered on `cursor`.
    ///
    /// Destination pixels outside the disc or mapping outside the
    /// source image are fully transparent, which realizes the circular
    /// clip. Sampling is strict nearest-neighbor: no averaging.
    #[must_use]
    pub fn render_disc(&self, source: &RgbaImage, cursor: (u32, u32)) -> RgbaImage {
        const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

        let (origin_x, origin_y) = self.source_origin(cursor);
        let (width, height) = (i64::from(source.width()), i64::from(source.height()));
        let r = i64::from(self.radius);

        RgbaImage::from_fn(self.diameter(), self.diameter(), |dx, dy| {
            let fx = i64::from(dx) - r;
            let fy = i64::from(dy) - r;
            if fx * fx + fy * fy > r * r {
                return CLEAR;
            }

            let sx = origin_x + i64::from(dx / self.magnification);
            let sy = origin_y + i64::from(dy / self.magnification);
            if sx < 0 || sy < 0 || sx >= width || sy >= height {
                return CLEAR;
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            *source.get_pixel(sx as u32, sy as u32)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_source(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            #[allow(clippy::cast_possible_truncation)]
            Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
        })
    }

    #[test]
    fn degenerate_values_are_clamped() {
        let magnifier = Magnifier::new(0, 0);
        assert_eq!(magnifier.radius(), 1);
        assert_eq!(magnifier.diameter(), 2);
    }

    #[test]
    fn disc_has_diameter_dimensions() {
        let magnifier = Magnifier::new(50, 2);
        let disc = magnifier.render_disc(&gradient_source(200, 200), (100, 100));
        assert_eq!(disc.dimensions(), (100, 100));
    }

    #[test]
    fn center_of_disc_shows_pixel_under_cursor() {
        let magnifier = Magnifier::new(50, 2);
        let source = gradient_source(200, 200);
        let cursor = (120, 80);

        let disc = magnifier.render_disc(&source, cursor);
        let r = magnifier.radius();
        assert_eq!(disc.get_pixel(r, r), source.get_pixel(cursor.0, cursor.1));
    }

    #[test]
    fn corners_are_clipped_transparent() {
        let magnifier = Magnifier::new(50, 2);
        let disc = magnifier.render_disc(&gradient_source(200, 200), (100, 100));

        let last = magnifier.diameter() - 1;
        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
            assert_eq!(disc.get_pixel(x, y).0[3], 0, "corner ({x},{y}) is opaque");
        }
    }

    #[test]
    fn magnification_repeats_source_pixels_in_blocks() {
        let magnifier = Magnifier::new(50, 2);
        let source = gradient_source(200, 200);
        let disc = magnifier.render_disc(&source, (100, 100));

        // At 2x, neighboring destination columns inside the disc come in
        // pairs that map to the same source pixel.
        let r = magnifier.radius();
        assert_eq!(disc.get_pixel(r, r), disc.get_pixel(r + 1, r));
        assert_ne!(disc.get_pixel(r, r), disc.get_pixel(r + 2, r));
    }

    #[test]
    fn region_beyond_surface_edge_is_transparent() {
        let magnifier = Magnifier::new(50, 2);
        let source = gradient_source(200, 200);

        // Cursor at the surface origin: the left half of the copied
        // region lies outside the image.
        let disc = magnifier.render_disc(&source, (0, 0));
        let r = magnifier.radius();
        assert_eq!(disc.get_pixel(0, r).0[3], 0, "off-surface area is opaque");
        assert_eq!(disc.get_pixel(r, r).0[3], 255, "cursor pixel missing");
    }
}
