// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::config::WidgetConfig;

/// What the widget hands over to the host form once submission is allowed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormSubmission {
    pub method: String,

    // empty means the current page
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn new(config: &WidgetConfig, hidden_value: String) -> Self {
        Self {
            method: "POST".into(),
            action: config.action(),
            fields: vec![(config.field_name.clone(), hidden_value)],
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(field, _)| field == name).map(|(_, value)| value.as_str())
    }
}
