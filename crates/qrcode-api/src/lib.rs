//! QR Code Backend Contract
//!
//! Platform-neutral half of the dashboard:
//! - models: records as served by the backend
//! - config: base URL and API key
//! - client: the `GET /qrcodes` fetch
//! - query: shared, deduplicated load state
//! - view: count and table rows derived from the collection

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod view;

pub use client::{QrCodeClient, QrCodeSource, API_KEY_HEADER};
pub use config::ApiConfig;
pub use error::{ConfigError, FetchError, FetchResult};
pub use models::{QrCode, QrCodeId, QrCodeListResponse};
pub use query::{FetchTicket, LoadMode, QrCodeQuery, QueryStatus, Settle};
pub use view::{summary_count, table_rows, TableRow, LARGE_COLLECTION_HINT};
