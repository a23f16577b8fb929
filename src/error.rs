// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Validation failures reported to the user as an alert.
///
/// The `Display` text is the exact message shown in the widget.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateListError {
    /// Add was invoked while the date input was empty.
    #[error("Please enter a date.")]
    EmptyInput,
    /// Submit was invoked before any date was added.
    #[error("Please add dates to duplicate.")]
    NoDates,
}
