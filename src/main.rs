//! StyleHub Frontend Entry Point

mod context;
mod store;
mod components;
mod app;
mod markdown;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("Failed to initialize console log");
    mount_to_body(App);
}
