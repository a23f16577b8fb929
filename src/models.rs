// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod date_collection;
pub use date_collection::{join_dates, DateCollection, SEPARATOR};

mod date_entry;
pub use date_entry::{DateEntry, EntryId};

mod form_submission;
pub use form_submission::FormSubmission;
