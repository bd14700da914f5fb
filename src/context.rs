//! Dashboard Context
//!
//! Backend settings and load orchestration provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use dashboard_logger::DiagnosticLog;
use qrcode_api::{ApiConfig, ConfigError, FetchError, LoadMode, QrCodeClient, QrCodeSource};

use crate::store::{DashboardStore, DashboardStateStoreFields};

#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// Read once at startup, never mutated
    config: StoredValue<Result<ApiConfig, ConfigError>>,
    store: DashboardStore,
    /// Operator-facing diagnostic buffer, absent if the logger failed to start
    pub diagnostics: StoredValue<Option<DiagnosticLog>>,
}

impl DashboardContext {
    pub fn new(
        config: Result<ApiConfig, ConfigError>,
        store: DashboardStore,
        diagnostics: Option<DiagnosticLog>,
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            store,
            diagnostics: StoredValue::new(diagnostics),
        }
    }

    /// Called by each view on mount. Starts the load only if nobody has yet.
    pub fn ensure_loaded(&self) {
        self.load(LoadMode::OnMount);
    }

    /// Manual retry from the error notice
    pub fn retry(&self) {
        self.load(LoadMode::Refresh);
    }

    /// Drop the in-flight request so its result never lands
    pub fn abandon(&self) {
        if self.store.query().try_update(|q| q.abandon()).is_none() {
            tracing::debug!("dashboard already disposed, nothing to abandon");
        }
    }

    fn load(&self, mode: LoadMode) {
        let store = self.store;
        let Some(Some(ticket)) = store.query().try_update(|q| q.begin(mode)) else {
            return;
        };
        let config = self.config.get_value();

        spawn_local(async move {
            let outcome = match config {
                Ok(config) => QrCodeClient::new(config).list_qr_codes().await,
                Err(e) => Err(FetchError::from(e)),
            };
            // The App may have been torn down while the request was out
            if store.query().try_update(|q| q.settle(ticket, outcome)).is_none() {
                tracing::debug!("dashboard disposed before QR codes arrived");
            }
        });
    }
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext should be provided")
}
