// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::{DateEntry, EntryId};
use crate::DateListError;

/// Separator between dates in the summary and in the hidden field.
pub const SEPARATOR: &str = ", ";

/// Joins date texts the way they are displayed and submitted.
pub fn join_dates<'a>(texts: impl IntoIterator<Item = &'a str>) -> String {
    texts.into_iter().collect::<Vec<_>>().join(SEPARATOR)
}

/// Ordered list of the dates a user has added, in insertion order.
///
/// This is the source of truth the rendered list, the summary and the hidden
/// field are derived from. It knows nothing about the view.
#[derive(Clone, Debug, Default)]
pub struct DateCollection {
    entries: Vec<DateEntry>,
    next_id: EntryId,
}

impl DateCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` as a new entry.
    ///
    /// Only the empty string is rejected; the text is otherwise kept verbatim.
    pub fn add(&mut self, text: &str) -> Result<DateEntry, DateListError> {
        if text.is_empty() {
            return Err(DateListError::EmptyInput);
        }

        let entry = DateEntry { id: self.next_id, text: text.into() };
        self.next_id = self.next_id.next();
        self.entries.push(entry.clone());

        Ok(entry)
    }

    /// Removes the entry with the given id and returns its position.
    pub fn delete(&mut self, id: EntryId) -> Option<usize> {
        let index = self.position(id)?;
        self.entries.remove(index);
        Some(index)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[DateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The summary string, which is also the hidden field value.
    pub fn joined(&self) -> String {
        join_dates(self.entries.iter().map(|entry| entry.text.as_str()))
    }

    /// Submission is refused while there is nothing to submit.
    pub fn ensure_submittable(&self) -> Result<(), DateListError> {
        if self.is_empty() {
            return Err(DateListError::NoDates);
        }

        Ok(())
    }
}
