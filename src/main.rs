#![allow(warnings)]
//! Food Dashboard Frontend Entry Point

mod logger;
mod commands;
mod context;
mod store;
mod toast;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
