use wasm_bindgen::prelude::*;

use crate::domain::logging::{get_logger, LogComponent};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
mod macros;
pub mod presentation;

/// Initialize logging, time and panic reporting for the browser
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Initialize logger with infrastructure implementation
    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    // Initialize time provider with browser implementation
    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Error page runtime initialized",
    );
}

/// Mount the Leptos error page into the document body
#[wasm_bindgen(js_name = mountErrorPage)]
pub fn mount_error_page() {
    leptos::mount_to_body(app::ErrorPageApp);
}
