// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::path::PathBuf;

use crate::app::surface::{ImageHandle, ImageSurface};
use crate::app::view::picker::PickerState;
use crate::config::AppConfig;
use crate::domain::magnifier::Magnifier;

pub struct AppModel {
    // Surface.
    pub surface: Option<ImageSurface>,
    pub current_path: Option<PathBuf>,

    // Picking.
    pub picker: PickerState,
    pub magnifier: Magnifier,
    /// Zoomed disc for the current cursor, rebuilt on every move.
    pub magnifier_disc: Option<ImageHandle>,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            surface: None,
            current_path: None,
            picker: PickerState::default(),
            magnifier: Magnifier::new(config.magnifier_radius, config.magnification),
            magnifier_disc: None,
        }
    }

    /// Clamp a pointer offset within the surface to a pixel coordinate.
    ///
    /// Offsets are produced by the overlay from positions inside its
    /// bounds, so they only ever exceed the surface by the fractional
    /// edge pixel.
    #[must_use]
    pub fn pointer_to_pixel(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        let (w, h) = self.surface.as_ref()?.dimensions();
        if w == 0 || h == 0 || x < 0.0 || y < 0.0 {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(((x as u32).min(w - 1), (y as u32).min(h - 1)))
    }

    /// Forget cursor-derived state after the surface changes.
    pub fn reset_pointer_state(&mut self) {
        self.picker.cursor = None;
        self.picker.pointer_moving = false;
        self.magnifier_disc = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn model_with_surface(width: u32, height: u32) -> AppModel {
        let mut model = AppModel::new(&AppConfig::default());
        let pixels = RgbaImage::from_pixel(width, height, Rgba([8, 8, 8, 255]));
        model.surface = Some(ImageSurface::from_image(&DynamicImage::ImageRgba8(pixels)));
        model
    }

    #[test]
    fn pointer_maps_to_pixel_coordinates() {
        let model = model_with_surface(800, 600);
        assert_eq!(model.pointer_to_pixel(10.7, 10.2), Some((10, 10)));
        assert_eq!(model.pointer_to_pixel(0.0, 0.0), Some((0, 0)));
    }

    #[test]
    fn pointer_on_the_far_edge_clamps_to_last_pixel() {
        let model = model_with_surface(800, 600);
        assert_eq!(model.pointer_to_pixel(800.0, 600.0), Some((799, 599)));
    }

    #[test]
    fn pointer_without_surface_is_none() {
        let model = AppModel::new(&AppConfig::default());
        assert_eq!(model.pointer_to_pixel(10.0, 10.0), None);
    }

    #[test]
    fn negative_offsets_are_rejected() {
        let model = model_with_surface(16, 16);
        assert_eq!(model.pointer_to_pixel(-1.0, 4.0), None);
    }
}
