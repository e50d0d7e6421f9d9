// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: CLI parsing, logging, and COSMIC runtime startup.

mod app;
mod config;
mod constant;
mod domain;
mod i18n;

use std::path::PathBuf;

use clap::Parser;

use crate::app::{Flags, PipetteApp};

/// Command line arguments.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Image file to open.
    pub file: Option<PathBuf>,
}

fn main() -> cosmic::iced::Result {
    env_logger::init();
    i18n::init();

    let args = Args::parse();

    let settings = cosmic::app::Settings::default();
    cosmic::app::run::<PipetteApp>(settings, Flags::Args(args))
}
