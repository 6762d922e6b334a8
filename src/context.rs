//! Application Context
//!
//! The controller shared via Leptos Context API. Components hand it
//! intents; it runs each one as a local task.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_core::{Controller, ForkifyClient, Intent};

use crate::storage::BrowserStorage;
use crate::store::StoreView;

pub type BrowserController = Controller<ForkifyClient, BrowserStorage, StoreView>;

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Rc<BrowserController>, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: BrowserController) -> Self {
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn controller(&self) -> Rc<BrowserController> {
        self.controller.get_value()
    }

    /// Run an intent without blocking the event handler
    pub fn dispatch(&self, intent: Intent) {
        let controller = self.controller();
        spawn_local(async move {
            controller.dispatch(intent).await;
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
