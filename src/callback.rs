// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;

type Handler<Arguments, Result> = Box<dyn FnMut(&Arguments, &mut Result)>;

/// Where the date list controller reports back to its host: list changes,
/// alerts and submissions each go through one of these.
///
/// A slot holds at most one handler; `on` replaces whatever was registered.
pub struct Callback<Arguments: ?Sized, Result = ()> {
    handler: Cell<Option<Handler<Arguments, Result>>>,
}

impl<Arguments: ?Sized, Res> Default for Callback<Arguments, Res> {
    fn default() -> Self {
        Self { handler: Cell::new(None) }
    }
}

impl<Arguments: ?Sized, Result: Default> Callback<Arguments, Result> {
    pub fn on(&self, mut f: impl FnMut(&Arguments) -> Result + 'static) {
        self.handler.set(Some(Box::new(move |a: &Arguments, r: &mut Result| *r = f(a))));
    }

    /// Runs the handler. With nothing registered, yields `Result::default()`.
    ///
    /// The handler is out of its slot while it runs: a handler that triggers
    /// its own slot again finds it empty instead of re-entering itself.
    pub fn invoke(&self, a: &Arguments) -> Result {
        let mut result = Result::default();

        if let Some(mut handler) = self.handler.take() {
            handler(a, &mut result);
            self.handler.set(Some(handler));
        }

        result
    }
}
