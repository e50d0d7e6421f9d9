// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/color.rs
//
// Sampled pixel colors and their hex text representation.

use std::fmt;

use cosmic::iced::Color;

/// An opaque RGB color sampled from the image surface.
///
/// The `Display` form is the lowercase, zero-padded `#rrggbb` string
/// shown in the magnifier readout and the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SampledColor {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Text color that stays readable on top of this color.
    ///
    /// White, except on a pure white sample where black is used.
    #[must_use]
    pub fn contrast_text(self) -> Color {
        if self == Self::WHITE {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }

    /// Convert to the renderer color type.
    #[must_use]
    pub fn to_iced(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }
}

impl fmt::Display for SampledColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<image::Rgba<u8>> for SampledColor {
    /// Alpha is dropped: the sampler reads opaque surface pixels.
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::new(pixel.0[0], pixel.0[1], pixel.0[2])
    }
}
