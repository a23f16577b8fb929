// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod date_list_controller;
pub use date_list_controller::*;
