// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/picker/overlay.rs
//
// Picker overlay widget: pointer tracking plus magnifier adornments.

use cosmic::{
    Element, Renderer,
    iced::{
        Background, Border, Color, Length, Pixels, Point, Rectangle, Shadow, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            text::{self, Renderer as TextRenderer, Text},
            widget::Tree,
        },
        alignment,
        event::{Event, Status},
        font::{self, Font},
        mouse::{self, Button, Cursor},
    },
};

use crate::app::AppMessage;
use crate::app::view::picker::PickerState;
use crate::constant::{MAGNIFIER_BORDER_WIDTH, MAGNIFIER_FONT_SIZE};
use crate::domain::color::SampledColor;

/// Transparent widget stacked over the image surface.
///
/// While picking it publishes pointer motion, pointer leave, and
/// commit clicks, and draws the magnifier ring with the centered hex
/// readout. The zoomed disc itself is a plain image underneath (see
/// `view::canvas`).
pub struct PickerOverlay {
    picking: bool,
    pointer_moving: bool,
    cursor: Option<(u32, u32)>,
    hover: Option<SampledColor>,
    radius: f32,
}

impl PickerOverlay {
    pub fn new(picker: &PickerState, radius: u32) -> Self {
        Self {
            picking: picker.picking,
            pointer_moving: picker.pointer_moving,
            cursor: picker.cursor,
            hover: picker.hover,
            radius: radius as f32,
        }
    }

    /// Screen rectangle covered by the magnifier disc.
    fn disc_bounds(&self, bounds: Rectangle) -> Option<Rectangle> {
        let (cx, cy) = self.cursor?;
        let diameter = self.radius * 2.0;

        Some(Rectangle::new(
            Point::new(
                bounds.x + cx as f32 - self.radius,
                bounds.y + cy as f32 - self.radius,
            ),
            Size::new(diameter, diameter),
        ))
    }

    fn draw_ring(&self, renderer: &mut Renderer, disc: Rectangle, hover: SampledColor) {
        renderer.fill_quad(
            Quad {
                bounds: disc,
                border: Border {
                    radius: self.radius.into(),
                    width: MAGNIFIER_BORDER_WIDTH,
                    color: hover.to_iced(),
                },
                shadow: Shadow::default(),
            },
            Background::Color(Color::TRANSPARENT),
        );
    }

    fn draw_readout(
        &self,
        renderer: &mut Renderer,
        disc: Rectangle,
        hover: SampledColor,
        viewport: Rectangle,
    ) {
        let readout = Text {
            content: hover.to_string(),
            bounds: disc.size(),
            size: Pixels(MAGNIFIER_FONT_SIZE),
            line_height: text::LineHeight::default(),
            font: Font {
                weight: font::Weight::Bold,
                ..Font::default()
            },
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            shaping: text::Shaping::Basic,
            wrapping: text::Wrapping::None,
        };

        renderer.fill_text(readout, disc.center(), hover.contrast_text(), viewport);
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for PickerOverlay {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        viewport: &Rectangle,
    ) {
        if !(self.picking && self.pointer_moving) {
            return;
        }
        let Some(hover) = self.hover else {
            return;
        };
        let Some(disc) = self.disc_bounds(layout.bounds()) else {
            return;
        };

        renderer.with_layer(*viewport, |renderer| {
            self.draw_ring(renderer, disc, hover);
            self.draw_readout(renderer, disc, hover, *viewport);
        });
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        if !self.picking {
            return Status::Ignored;
        }

        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    shell.publish(AppMessage::PointerMoved { x: pos.x, y: pos.y });
                    return Status::Captured;
                }
                if self.pointer_moving {
                    self.pointer_moving = false;
                    shell.publish(AppMessage::PointerLeft);
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if self.pointer_moving {
                    self.pointer_moving = false;
                    shell.publish(AppMessage::PointerLeft);
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if self.hover.is_some() && cursor.position_in(bounds).is_some() {
                    shell.publish(AppMessage::CommitPick);
                    return Status::Captured;
                }
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.picking && cursor.position_in(layout.bounds()).is_some() {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::None
        }
    }
}

impl<'a> From<PickerOverlay> for Element<'a, AppMessage> {
    fn from(widget: PickerOverlay) -> Self {
        Element::new(widget)
    }
}

pub fn picker_overlay<'a>(picker: &PickerState, radius: u32) -> Element<'a, AppMessage> {
    PickerOverlay::new(picker, radius).into()
}
