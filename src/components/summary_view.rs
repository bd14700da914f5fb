//! Summary View
//!
//! Metric card with the total number of QR codes.

use leptos::prelude::*;
use qrcode_api::summary_count;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn SummaryView() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();

    // Load on mount
    Effect::new(move |_| ctx.ensure_loaded());

    let count = move || store.query().with(|q| summary_count(q.data()));
    let loading = move || store.query().with(|q| q.is_loading());

    view! {
        <section class="summary-view">
            <h2>"Dashboard"</h2>
            <div class="metric-grid">
                <div class="metric-card" aria-busy=move || loading().to_string()>
                    <h3>"Total QR Codes"</h3>
                    <p class="metric-value">{count}</p>
                </div>
            </div>
        </section>
    }
}
