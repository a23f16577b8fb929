// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::{ModelRc, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::WidgetConfig;
use crate::models::{DateCollection, DateEntry, EntryId, FormSubmission};
use crate::{Callback, DateListError};

/// Owns the dates of one widget and keeps every view of them in sync.
///
/// `collection` is the source of truth, `entries` mirrors it row for row for
/// the rendered list, and `hidden_value` holds the joined string last pushed
/// through the changed callback to the summary and the hidden field. A
/// submission carries `hidden_value` as it is.
#[derive(Clone)]
pub struct DateListController {
    config: Rc<WidgetConfig>,
    collection: Rc<RefCell<DateCollection>>,
    entries: Rc<VecModel<DateEntry>>,
    hidden_value: Rc<RefCell<String>>,
    changed_callback: Rc<Callback<String, ()>>,
    alert_callback: Rc<Callback<DateListError, ()>>,
    submitted_callback: Rc<Callback<FormSubmission, ()>>,
}

impl DateListController {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config: Rc::new(config),
            collection: Rc::new(RefCell::new(DateCollection::new())),
            entries: Rc::new(VecModel::default()),
            hidden_value: Rc::new(RefCell::new(String::new())),
            changed_callback: Rc::new(Callback::default()),
            alert_callback: Rc::new(Callback::default()),
            submitted_callback: Rc::new(Callback::default()),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn entries(&self) -> ModelRc<DateEntry> {
        self.entries.clone().into()
    }

    pub fn joined(&self) -> String {
        self.collection.borrow().joined()
    }

    /// The value currently in the hidden form field.
    pub fn hidden_value(&self) -> String {
        self.hidden_value.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.borrow().is_empty()
    }

    /// Adds `text` as a new date. Returns `false` and raises an alert if the text is empty.
    pub fn add(&self, text: &str) -> bool {
        let result = self.collection.borrow_mut().add(text);

        match result {
            Ok(entry) => {
                log::debug!("added date {:?} as {:?}", entry.text, entry.id);
                self.entries.push(entry);
                self.changed();
                true
            }
            Err(error) => {
                self.alert(error);
                false
            }
        }
    }

    /// Removes the entry with the given id. Unknown ids are ignored.
    pub fn delete(&self, id: EntryId) -> bool {
        let Some(index) = self.collection.borrow_mut().delete(id) else {
            log::debug!("no date with {id:?} to delete");
            return false;
        };

        log::debug!("deleted date {id:?} at row {index}");
        self.entries.remove(index);
        self.changed();
        true
    }

    /// Hands the submission to the submitted callback, or blocks it with an
    /// alert while there are no dates.
    pub fn submit(&self) -> bool {
        let result = self.collection.borrow().ensure_submittable();

        match result {
            Ok(()) => {
                let submission = FormSubmission::new(&self.config, self.hidden_value());
                log::info!("submitting {:?} to {:?}", submission.fields, submission.action);
                self.submitted_callback.invoke(&submission);
                true
            }
            Err(error) => {
                self.alert(error);
                false
            }
        }
    }

    pub fn on_changed(&self, mut callback: impl FnMut(&str) + 'static) {
        self.changed_callback.on(move |joined| {
            callback(joined);
        });
    }

    pub fn on_alert(&self, mut callback: impl FnMut(DateListError) + 'static) {
        self.alert_callback.on(move |error| {
            callback(*error);
        });
    }

    pub fn on_submitted(&self, mut callback: impl FnMut(&FormSubmission) + 'static) {
        self.submitted_callback.on(move |submission| {
            callback(submission);
        });
    }

    fn changed(&self) {
        let joined = self.joined();
        *self.hidden_value.borrow_mut() = joined.clone();
        self.changed_callback.invoke(&joined);
    }

    fn alert(&self, error: DateListError) {
        log::warn!("{error}");
        self.alert_callback.invoke(&error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slint::Model;
    use std::cell::Cell;

    fn test_controller() -> DateListController {
        DateListController::new(WidgetConfig {
            field_name: "dates".into(),
            source_date: Some("2024-06-12".into()),
        })
    }

    fn row_texts(controller: &DateListController) -> Vec<String> {
        controller.entries().iter().map(|entry| entry.text).collect()
    }

    fn row_id(controller: &DateListController, row: usize) -> EntryId {
        controller.entries().row_data(row).unwrap().id
    }

    #[test]
    fn test_add() {
        let controller = test_controller();
        let joined = Rc::new(RefCell::new(String::new()));

        controller.on_changed({
            let joined = joined.clone();

            move |value| {
                *joined.borrow_mut() = value.into();
            }
        });

        assert!(controller.add("2024-01-01"));
        assert_eq!(joined.borrow().as_str(), "2024-01-01");

        assert!(controller.add("2024-02-02"));
        assert_eq!(joined.borrow().as_str(), "2024-01-01, 2024-02-02");

        assert_eq!(controller.entries().row_count(), 2);
        assert_eq!(row_texts(&controller), ["2024-01-01", "2024-02-02"]);
    }

    #[test]
    fn test_add_empty() {
        let controller = test_controller();
        let alert = Rc::new(Cell::new(None));
        let changed = Rc::new(Cell::new(false));

        controller.on_alert({
            let alert = alert.clone();

            move |error| {
                alert.set(Some(error));
            }
        });
        controller.on_changed({
            let changed = changed.clone();

            move |_| {
                changed.set(true);
            }
        });

        assert!(!controller.add(""));
        assert_eq!(alert.get(), Some(DateListError::EmptyInput));
        assert!(!changed.get());
        assert_eq!(controller.entries().row_count(), 0);
    }

    #[test]
    fn test_delete() {
        let controller = test_controller();
        let joined = Rc::new(RefCell::new(String::new()));

        controller.on_changed({
            let joined = joined.clone();

            move |value| {
                *joined.borrow_mut() = value.into();
            }
        });

        controller.add("2024-01-01");
        controller.add("2024-02-02");

        assert!(controller.delete(row_id(&controller, 0)));
        assert_eq!(joined.borrow().as_str(), "2024-02-02");
        assert_eq!(controller.hidden_value(), "2024-02-02");
        assert_eq!(row_texts(&controller), ["2024-02-02"]);
        assert_eq!(controller.joined(), "2024-02-02");
    }

    #[test]
    fn test_delete_duplicate_text() {
        let controller = test_controller();

        controller.add("2024-01-01");
        controller.add("2024-03-03");
        controller.add("2024-01-01");

        let last = row_id(&controller, 2);
        assert!(controller.delete(last));

        assert_eq!(row_texts(&controller), ["2024-01-01", "2024-03-03"]);
        assert_eq!(controller.joined(), "2024-01-01, 2024-03-03");
    }

    #[test]
    fn test_delete_unknown() {
        let controller = test_controller();
        controller.add("2024-01-01");

        let id = row_id(&controller, 0);
        assert!(controller.delete(id));
        assert!(!controller.delete(id));
        assert!(controller.is_empty());
        assert_eq!(controller.entries().row_count(), 0);
    }

    #[test]
    fn test_rows_follow_collection() {
        let controller = test_controller();

        for (step, date) in ["2024-01-01", "2024-02-02", "", "2024-03-03"].into_iter().enumerate() {
            controller.add(date);
            if step == 1 {
                controller.delete(row_id(&controller, 0));
            }
            assert_eq!(row_texts(&controller).join(", "), controller.joined());
            assert_eq!(controller.hidden_value(), controller.joined());
        }

        assert_eq!(controller.joined(), "2024-02-02, 2024-03-03");
    }

    #[test]
    fn test_submit_empty() {
        let controller = test_controller();
        let alert = Rc::new(Cell::new(None));
        let submitted = Rc::new(Cell::new(false));

        controller.on_alert({
            let alert = alert.clone();

            move |error| {
                alert.set(Some(error));
            }
        });
        controller.on_submitted({
            let submitted = submitted.clone();

            move |_| {
                submitted.set(true);
            }
        });

        assert!(!controller.submit());
        assert_eq!(alert.get(), Some(DateListError::NoDates));
        assert!(!submitted.get());
    }

    #[test]
    fn test_submit() {
        let controller = test_controller();
        let submission = Rc::new(RefCell::new(None));

        controller.on_submitted({
            let submission = submission.clone();

            move |value| {
                *submission.borrow_mut() = Some(value.clone());
            }
        });

        controller.add("2024-01-01");
        controller.add("2024-02-02");
        assert!(controller.submit());

        let submission = submission.borrow();
        let submission = submission.as_ref().unwrap();
        assert_eq!(submission.action, "duplicate_day_events/2024-06-12/");
        assert_eq!(submission.value("dates"), Some("2024-01-01, 2024-02-02"));
        assert_eq!(submission.value("dates"), Some(controller.hidden_value().as_str()));

        // submitting leaves the dates in place
        assert_eq!(controller.entries().row_count(), 2);
    }
}
