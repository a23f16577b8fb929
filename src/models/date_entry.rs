// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Stable identity of an entry, assigned once when the entry is added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u32);

impl EntryId {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Converts the id to the `int` used by the view.
    pub fn to_view(self) -> i32 {
        self.0 as i32
    }

    /// Converts an `int` coming back from the view into an id.
    pub fn from_view(id: i32) -> Self {
        Self(id as u32)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateEntry {
    pub id: EntryId,

    // free-form text as typed, never parsed
    pub text: String,
}
