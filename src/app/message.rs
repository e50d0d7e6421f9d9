// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use crate::app::surface::ImageSurface;
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File handling.
    #[allow(dead_code)]
    OpenPath(PathBuf),
    SurfaceLoaded(Result<ImageSurface, String>),

    // Configuration.
    ConfigChanged(AppConfig),

    // Picking interaction.
    TogglePicking,
    CancelPicking,
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    CommitPick,
}
