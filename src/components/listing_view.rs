//! Listing View
//!
//! One table row per QR code, in backend order.

use leptos::prelude::*;
use qrcode_api::table_rows;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn ListingView() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();

    // Load on mount; joins the summary's request if it is already out
    Effect::new(move |_| ctx.ensure_loaded());

    view! {
        <section class="listing-view">
            <h2>"QR Codes"</h2>
            <table class="qr-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.query().with(|q| table_rows(q.data()))
                        key=|row| row.key.clone()
                        children=move |row| {
                            view! {
                                <tr>
                                    <td>{row.id}</td>
                                    <td>{row.status}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
