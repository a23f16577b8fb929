// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#![cfg(not(target_arch = "wasm32"))]

use clap::Parser;
use date_list::config::WidgetConfig;

/// Collect the dates to duplicate a day's events onto, then print the form
/// submission as JSON.
#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the hidden form field carrying the dates
    #[arg(long, default_value = "dates")]
    field_name: String,

    /// The day whose events are duplicated
    #[arg(long)]
    source_date: Option<String>,
}

impl From<Cli> for WidgetConfig {
    fn from(cli: Cli) -> Self {
        Self { field_name: cli.field_name, source_date: cli.source_date }
    }
}

fn main() -> Result<(), slint::PlatformError> {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let app = date_list::init(Cli::parse().into())?;

    app.controller.on_submitted(|submission| {
        match serde_json::to_string_pretty(submission) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Could not serialize the submission: {}", e),
        }

        if let Err(e) = slint::quit_event_loop() {
            log::error!("Could not quit the event loop: {}", e);
        }
    });

    app.run()
}
