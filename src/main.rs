//! Recipe Book Frontend Entry Point

mod app;
mod components;
mod context;
mod display;
mod location;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("RecipeBook", log::LevelFilter::Info) {
        leptos::logging::error!("logger not installed: {}", e);
    }
    mount_to_body(App);
}
