// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Route the host page posts duplicated dates to.
const DUPLICATE_ROUTE: &str = "duplicate_day_events";

/// Settings of the form the widget is embedded in.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Name of the hidden form field carrying the joined dates.
    pub field_name: String,

    /// The day whose events get duplicated onto the collected dates.
    pub source_date: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self { field_name: "dates".into(), source_date: None }
    }
}

impl WidgetConfig {
    /// Form action: the duplicate route for the source date, or empty to post
    /// back to the current page.
    pub fn action(&self) -> String {
        match &self.source_date {
            Some(date) => format!("{DUPLICATE_ROUTE}/{date}/"),
            None => String::new(),
        }
    }
}
