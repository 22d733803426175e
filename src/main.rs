//! Value Ranking Frontend Entry Point

mod models;
mod error;
mod config;
mod seed;
mod ranking;
mod codec;
mod storage;
mod session;
mod notifications;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    let _ = rolling_logger::init(log::LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY);
    mount_to_body(App);
}
