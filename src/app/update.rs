// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handlers: one transition per application message.

use std::path::PathBuf;

use cosmic::{Action, Task};

use crate::app::surface::{ImageSurface, create_image_handle};
use crate::app::{AppMessage, PipetteApp};
use crate::domain::magnifier::Magnifier;

/// Outcome of an update step.
pub enum UpdateResult {
    None,
    Task(Task<Action<AppMessage>>),
}

/// Apply `message` to the application state.
pub fn update(app: &mut PipetteApp, message: AppMessage) -> UpdateResult {
    match message {
        AppMessage::OpenPath(path) => open_path(app, path),
        AppMessage::SurfaceLoaded(result) => surface_loaded(app, result),
        AppMessage::ConfigChanged(config) => {
            app.model.magnifier = Magnifier::new(config.magnifier_radius, config.magnification);
            app.model.magnifier_disc = None;
            app.config = config;
            UpdateResult::None
        }
        AppMessage::TogglePicking => {
            app.model.picker.toggle();
            if !app.model.picker.picking {
                app.model.magnifier_disc = None;
            }
            log::debug!("picker phase: {:?}", app.model.picker.phase());
            UpdateResult::None
        }
        AppMessage::CancelPicking => {
            app.model.picker.cancel();
            app.model.magnifier_disc = None;
            UpdateResult::None
        }
        AppMessage::PointerMoved { x, y } => pointer_moved(app, x, y),
        AppMessage::PointerLeft => {
            app.model.picker.pointer_left();
            UpdateResult::None
        }
        AppMessage::CommitPick => {
            if let Some(color) = app.model.picker.commit() {
                log::info!("selected color {color}");
                app.model.magnifier_disc = None;
            }
            UpdateResult::None
        }
    }
}

/// Decode an image off the UI thread and deliver it as a message.
pub fn load_surface_task(path: PathBuf) -> Task<Action<AppMessage>> {
    Task::perform(ImageSurface::load(path), |result| {
        Action::App(AppMessage::SurfaceLoaded(
            result.map_err(|e| e.to_string()),
        ))
    })
}

fn open_path(app: &mut PipetteApp, path: PathBuf) -> UpdateResult {
    app.model.current_path = Some(path.clone());
    UpdateResult::Task(load_surface_task(path))
}

fn surface_loaded(app: &mut PipetteApp, result: Result<ImageSurface, String>) -> UpdateResult {
    match result {
        Ok(surface) => {
            log::info!(
                "surface loaded at {}x{}",
                surface.dimensions().0,
                surface.dimensions().1
            );
            app.model.surface = Some(surface);
            app.model.reset_pointer_state();
        }
        // Failed loads degrade silently to the placeholder view.
        Err(e) => log::warn!("failed to load image: {e}"),
    }

    UpdateResult::None
}

/// Sample the pixel under the pointer and re-render the magnifier.
fn pointer_moved(app: &mut PipetteApp, x: f32, y: f32) -> UpdateResult {
    let model = &mut app.model;
    if !model.picker.picking {
        return UpdateResult::None;
    }

    let Some((px, py)) = model.pointer_to_pixel(x, y) else {
        return UpdateResult::None;
    };
    let Some(surface) = &model.surface else {
        return UpdateResult::None;
    };
    let Some(color) = surface.sample(px, py) else {
        return UpdateResult::None;
    };

    model.picker.hover_at(px, py, color);
    let disc = model.magnifier.render_disc(surface.pixels(), (px, py));
    model.magnifier_disc = Some(create_image_handle(&disc));

    UpdateResult::None
}
