//! Backend Models
//!
//! Read-only copies of the QR code records served by the backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// QR code identifier: the backend may send either a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QrCodeId {
    Number(i64),
    Text(String),
}

impl fmt::Display for QrCodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrCodeId::Number(n) => write!(f, "{}", n),
            QrCodeId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for QrCodeId {
    fn from(value: &str) -> Self {
        QrCodeId::Text(value.to_string())
    }
}

impl From<i64> for QrCodeId {
    fn from(value: i64) -> Self {
        QrCodeId::Number(value)
    }
}

impl From<i32> for QrCodeId {
    fn from(value: i32) -> Self {
        QrCodeId::Number(value.into())
    }
}

/// One QR code record. Extra backend fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrCode {
    #[serde(alias = "ID")]
    pub id: QrCodeId,
    /// Opaque lifecycle text, displayed verbatim
    #[serde(alias = "Status", default, deserialize_with = "null_as_empty")]
    pub status: String,
}

/// `null` and absent both read as empty text
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl QrCode {
    pub fn new(id: impl Into<QrCodeId>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
        }
    }
}

/// Body of `GET /qrcodes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrCodeListResponse {
    pub qr_codes: Vec<QrCode>,
}
