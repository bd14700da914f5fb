//! Backend Client
//!
//! `GET {base}/qrcodes` with the `X-API-Key` header. One attempt per call:
//! no retry, no backoff, no credential refresh.

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::{QrCode, QrCodeListResponse};

/// Header carrying the static credential
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Anything that can produce the QR code collection.
///
/// Browser futures are not `Send`, so the bound is dropped on wasm.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QrCodeSource {
    async fn list_qr_codes(&self) -> FetchResult<Vec<QrCode>>;
}

/// reqwest-backed implementation of the fetch contract
#[derive(Debug, Clone)]
pub struct QrCodeClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl QrCodeClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QrCodeSource for QrCodeClient {
    async fn list_qr_codes(&self) -> FetchResult<Vec<QrCode>> {
        let url = self.config.qrcodes_url();
        tracing::debug!(%url, "fetching QR codes");

        let resp = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::http(status.as_u16(), &body));
        }

        let parsed: QrCodeListResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::info!(count = parsed.qr_codes.len(), "QR codes received");
        Ok(parsed.qr_codes)
    }
}
