// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

//! A form widget that collects a list of dates and submits them, joined by
//! `", "`, as a single hidden field.
//!
//! The dates live in a [`models::DateCollection`]; a
//! [`controllers::DateListController`] mirrors it into the rendered list, the
//! summary and the hidden field, and the adapters bind the controller to the
//! `DateListAdapter` global of the Slint view.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod ui {
    slint::include_modules!();
}

mod adapters;
use adapters::*;

mod callback;
pub use callback::*;

pub mod config;
pub mod controllers;

mod error;
pub use error::DateListError;

pub mod models;

use slint::ComponentHandle;

/// A window hosting one date list widget, together with the controller owning its state.
pub struct App {
    pub main_window: ui::MainWindow,
    pub controller: controllers::DateListController,
}

impl App {
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        self.main_window.run()
    }
}

/// Creates the window and wires the widget to a fresh controller.
pub fn init(config: config::WidgetConfig) -> Result<App, slint::PlatformError> {
    let main_window = ui::MainWindow::new()?;

    let controller = controllers::DateListController::new(config);
    date_list_adapter::connect(&main_window, &controller);
    date_list_adapter::initialize_adapter(&main_window, controller.clone());

    Ok(App { main_window, controller })
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    let app = match init(config::WidgetConfig::default()) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Could not create the window: {}", e);
            return;
        }
    };

    app.controller.on_submitted(|submission| match serde_json::to_string(submission) {
        Ok(json) => log::info!("{json}"),
        Err(e) => log::error!("Could not serialize the submission: {}", e),
    });

    if let Err(e) = app.run() {
        log::error!("Runtime error: {}", e);
    }
}
