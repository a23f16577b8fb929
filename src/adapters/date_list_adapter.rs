// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    controllers::DateListController,
    models::{DateEntry, EntryId},
    ui,
};

// a controller to adapter connection (controller -> view)
pub fn connect(view_handle: &ui::MainWindow, controller: &DateListController) {
    let adapter = view_handle.global::<ui::DateListAdapter>();

    adapter.set_dates(Rc::new(MapModel::new(controller.entries(), map_entry_to_item)).into());
    adapter.set_summary(controller.hidden_value().into());
    adapter.set_hidden_value(controller.hidden_value().into());

    controller.on_changed({
        let view_handle = view_handle.as_weak();

        move |joined| {
            let Some(view_handle) = view_handle.upgrade() else {
                return;
            };

            let adapter = view_handle.global::<ui::DateListAdapter>();
            adapter.set_summary(joined.into());
            adapter.set_hidden_value(joined.into());
            adapter.set_alert_message(SharedString::default());
        }
    });

    controller.on_alert({
        let view_handle = view_handle.as_weak();

        move |error| {
            if let Some(view_handle) = view_handle.upgrade() {
                view_handle
                    .global::<ui::DateListAdapter>()
                    .set_alert_message(error.to_string().into());
            }
        }
    });
}

// the view's callbacks to controller connection (view -> controller)
pub fn initialize_adapter(view_handle: &ui::MainWindow, controller: DateListController) {
    let adapter = view_handle.global::<ui::DateListAdapter>();

    adapter.on_add_date({
        let controller = controller.clone();
        let view_handle = view_handle.as_weak();

        move |text| {
            log::debug!("add clicked");

            if !controller.add(text.as_str()) {
                return;
            }

            if let Some(view_handle) = view_handle.upgrade() {
                view_handle.global::<ui::DateListAdapter>().set_input_text(SharedString::default());
            }
        }
    });

    adapter.on_delete_date({
        let controller = controller.clone();

        move |id| {
            log::debug!("delete clicked");
            controller.delete(EntryId::from_view(id));
        }
    });

    adapter.on_submit(move || {
        log::debug!("submit clicked");
        controller.submit();
    });
}

// maps a DateEntry (data) to a DateItem (ui)
fn map_entry_to_item(entry: DateEntry) -> ui::DateItem {
    ui::DateItem { id: entry.id.to_view(), text: entry.text.into() }
}
