// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/picker/state.rs
//
// Picker state and the transitions of the picking interaction.

use crate::domain::color::SampledColor;

/// Discrete phases of the picking interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickPhase {
    /// Not picking.
    #[default]
    Idle,
    /// Picking mode on, no sample under the magnifier.
    PickingNoHover,
    /// Picking mode on, sample taken and magnifier visible.
    PickingHovering,
}

/// Mutable state of the color picking interaction.
///
/// The cursor is only recorded while picking; committing a selection
/// always ends picking mode.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    pub picking: bool,
    pub cursor: Option<(u32, u32)>,
    pub pointer_moving: bool,
    pub hover: Option<SampledColor>,
    pub selected: Option<SampledColor>,
}

impl PickerState {
    /// Dropper activation: toggle picking mode.
    ///
    /// Leaving picking mode in any phase returns to idle.
    pub fn toggle(&mut self) {
        if self.picking {
            self.cancel();
        } else {
            self.picking = true;
        }
    }

    /// Leave picking mode without committing.
    pub fn cancel(&mut self) {
        self.picking = false;
        self.cursor = None;
        self.pointer_moving = false;
    }

    /// Record a sampled pointer position.
    ///
    /// Ignored outside picking mode.
    pub fn hover_at(&mut self, x: u32, y: u32, color: SampledColor) {
        if !self.picking {
            return;
        }

        self.cursor = Some((x, y));
        self.pointer_moving = true;
        self.hover = Some(color);
    }

    /// Pointer left the surface: hide the magnifier, keep the last
    /// sample and the selection.
    pub fn pointer_left(&mut self) {
        self.pointer_moving = false;
    }

    /// Commit the hovered color as the selection and end picking.
    ///
    /// Returns the committed color, or `None` when not picking or no
    /// sample has been taken yet.
    pub fn commit(&mut self) -> Option<SampledColor> {
        if !self.picking {
            return None;
        }
        let color = self.hover?;

        self.selected = Some(color);
        self.cancel();

        Some(color)
    }

    /// Whether the magnifier should be rendered.
    #[must_use]
    pub fn magnifier_visible(&self) -> bool {
        self.picking && self.cursor.is_some() && self.pointer_moving
    }

    /// Current phase of the interaction state machine.
    #[must_use]
    pub fn phase(&self) -> PickPhase {
        if !self.picking {
            PickPhase::Idle
        } else if self.magnifier_visible() {
            PickPhase::PickingHovering
        } else {
            PickPhase::PickingNoHover
        }
    }
}
