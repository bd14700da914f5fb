//! QR Dashboard App
//!
//! Nav bar plus the summary card, error notice and listing table.

use leptos::prelude::*;
use reactive_stores::Store;

use dashboard_logger::DiagnosticLog;
use qrcode_api::ApiConfig;

use crate::components::{FetchNotice, ListingView, SummaryView};
use crate::context::DashboardContext;
use crate::store::DashboardState;

#[component]
pub fn App(diagnostics: Option<DiagnosticLog>) -> impl IntoView {
    // State
    let store = Store::new(DashboardState::default());
    provide_context(store);

    let config = ApiConfig::from_build_env();
    match &config {
        Ok(config) => tracing::info!(base_url = config.base_url(), "dashboard starting"),
        Err(e) => tracing::error!(error = %e, "backend is not configured"),
    }

    // Provide context to all children
    let ctx = DashboardContext::new(config, store, diagnostics);
    provide_context(ctx);
    on_cleanup(move || ctx.abandon());

    view! {
        <nav class="top-nav">
            <h1>"QR Dashboard"</h1>
        </nav>
        <main class="dashboard">
            <SummaryView />
            <FetchNotice />
            <ListingView />
        </main>
    }
}
