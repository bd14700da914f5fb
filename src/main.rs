//! QR Dashboard Frontend Entry Point

mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

/// Recent diagnostics kept in memory for the error notice
const DIAGNOSTIC_CAPACITY: usize = 200;

fn main() {
    console_error_panic_hook::set_once();

    let diagnostics = match dashboard_logger::init_logger("QrDashboard", DIAGNOSTIC_CAPACITY) {
        Ok(log) => Some(log),
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] logger unavailable: {}", e).into());
            None
        }
    };

    mount_to_body(move || view! { <App diagnostics=diagnostics /> });
}
