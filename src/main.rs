//! Resume Screener Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod delete_controls;
mod error;
mod feedback;
mod logging;
mod models;
mod recent;
mod store;
mod submission;

use config::{ClientConfig, CONFIG_ELEMENT_ID};

fn main() {
    console_error_panic_hook::set_once();

    let document = leptos::prelude::document();
    let config = match ClientConfig::from_document(&document) {
        Ok(config) => {
            logging::init(config.log_level());
            config
        }
        Err(e) => {
            let config = ClientConfig::default();
            logging::init(config.log_level());
            log::warn!("[App] Invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, e);
            config
        }
    };

    app::start(config);
}
