//! Dashboard State Store
//!
//! Uses Leptos reactive_stores so each view subscribes to the query field.

use leptos::prelude::*;
use reactive_stores::Store;
use qrcode_api::QrCodeQuery;

/// Dashboard-wide state, one instance per mounted App
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// QR code collection plus load status, shared by every view
    pub query: QrCodeQuery,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}
