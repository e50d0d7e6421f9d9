// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/header.rs
//
// Header bar controls: dropper toggle and committed color readout.

use cosmic::widget::{button, icon, text};
use cosmic::Element;

use crate::app::{AppMessage, AppModel};
use crate::fl;

/// Controls preceding the window title: the dropper toggle.
pub fn start(_model: &AppModel) -> Vec<Element<'_, AppMessage>> {
    let dropper = button::icon(icon::from_name("color-select-symbolic"))
        .on_press(AppMessage::TogglePicking);

    vec![dropper.into()]
}

/// Controls following the window title: the committed color.
pub fn end(model: &AppModel) -> Vec<Element<'_, AppMessage>> {
    let label = model
        .picker
        .selected
        .map_or_else(|| fl!("select-a-color"), |color| color.to_string());

    vec![text::body(label).into()]
}
