// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Render the center canvas area: image surface, magnifier, overlay.

use cosmic::iced::{ContentFit, Length, Padding};
use cosmic::iced_widget::stack;
use cosmic::widget::{container, image, text};
use cosmic::Element;

use super::picker::picker_overlay;
use crate::app::{AppMessage, AppModel};
use crate::fl;

/// Render the center canvas area with the current surface.
pub fn view<'a>(model: &'a AppModel) -> Element<'a, AppMessage> {
    let Some(surface) = &model.surface else {
        return container(text(fl!("no-image")))
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into();
    };

    // The surface renders at native resolution so pointer offsets map
    // 1:1 to pixel coordinates.
    let base = image::Image::new(surface.handle()).content_fit(ContentFit::None);

    let overlay = picker_overlay(&model.picker, model.magnifier.radius());

    if model.picker.magnifier_visible()
        && let (Some(disc), Some((cx, cy))) = (&model.magnifier_disc, model.picker.cursor)
    {
        let radius = model.magnifier.radius() as f32;
        let diameter = model.magnifier.diameter() as f32;

        // Position the disc so its center tracks the cursor.
        let positioned = container(
            image::Image::new(disc.clone())
                .width(diameter)
                .height(diameter),
        )
        .padding(Padding {
            top: cy as f32 - radius,
            left: cx as f32 - radius,
            ..Padding::ZERO
        });

        stack![base, positioned, overlay].into()
    } else {
        stack![base, overlay].into()
    }
}
