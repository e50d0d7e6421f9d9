// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

use crate::constant::{MAGNIFICATION, MAGNIFIER_RADIUS};

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Radius of the circular magnifier in pixels.
    pub magnifier_radius: u32,
    /// Integer zoom factor applied inside the magnifier.
    pub magnification: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            magnifier_radius: MAGNIFIER_RADIUS,
            magnification: MAGNIFICATION,
        }
    }
}
