//! View Models
//!
//! Pure projections of the collection into what the dashboard renders.

use std::collections::HashMap;

use crate::models::QrCode;

/// Above this many rows the listing logs a warning. Nothing is cut off.
pub const LARGE_COLLECTION_HINT: usize = 1_000;

/// Metric card value
pub fn summary_count(codes: &[QrCode]) -> usize {
    codes.len()
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Render key: (how many earlier rows share this id, id)
    pub key: (usize, String),
    pub id: String,
    pub status: String,
}

/// Rows in backend order, values verbatim
pub fn table_rows(codes: &[QrCode]) -> Vec<TableRow> {
    if codes.len() > LARGE_COLLECTION_HINT {
        tracing::warn!(rows = codes.len(), "rendering a large unpaginated QR code collection");
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    codes
        .iter()
        .map(|code| {
            let id = code.id.to_string();
            let repeat = seen.entry(id.clone()).or_insert(0);
            let key = (*repeat, id.clone());
            *repeat += 1;
            TableRow {
                key,
                id,
                status: code.status.clone(),
            }
        })
        .collect()
}
