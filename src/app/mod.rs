// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// COSMIC application wiring and main app struct.

pub mod message;
pub mod model;
pub mod surface;
pub mod update;
pub mod view;

pub use message::AppMessage;
pub use model::AppModel;

use cosmic::app::Core;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::iced::keyboard::{self, Key, Modifiers, key::Named};
use cosmic::{Action, Element, Task};

use crate::Args;
use crate::config::AppConfig;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct PipetteApp {
    core: Core,
    pub model: AppModel,
    pub config: AppConfig,
}

impl cosmic::Application for PipetteApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.codeberg.wfx.Pipette";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        // Load persisted config.
        let config = match cosmic_config::Config::new(Self::APP_ID, AppConfig::VERSION) {
            Ok(handler) => AppConfig::get_entry(&handler).unwrap_or_default(),
            Err(_) => AppConfig::default(),
        };

        let Flags::Args(args) = flags;

        let mut model = AppModel::new(&config);

        // Start decoding the initial image if one was given.
        let init_task = match args.file {
            Some(path) => {
                model.current_path = Some(path.clone());
                update::load_surface_task(path)
            }
            None => Task::none(),
        };

        (
            Self {
                core,
                model,
                config,
            },
            init_task,
        )
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        match update::update(self, message) {
            update::UpdateResult::None => Task::none(),
            update::UpdateResult::Task(task) => task,
        }
    }

    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        view::header::start(&self.model)
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        view::header::end(&self.model)
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::canvas::view(&self.model)
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        Subscription::batch([
            keyboard::on_key_press(handle_key_press),
            self.core()
                .watch_config::<AppConfig>(Self::APP_ID)
                .map(|update| AppMessage::ConfigChanged(update.config)),
        ])
    }
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        // Toggle the dropper.
        Key::Character(ch) if ch.eq_ignore_ascii_case("d") => Some(AppMessage::TogglePicking),

        // Leave picking mode without committing.
        Key::Named(Named::Escape) => Some(AppMessage::CancelPicking),

        _ => None,
    }
}
