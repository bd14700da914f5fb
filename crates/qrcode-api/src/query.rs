//! Query State
//!
//! Single source of truth for the QR code collection shared by every view.
//! Views ask for a load; at most one request is in flight, and only the
//! result of the current request is applied.

use crate::error::FetchError;
use crate::models::QrCode;

/// Why a load is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// A view mounted. Joins an existing request or result.
    OnMount,
    /// Operator asked to try again. Skipped only while a request is in flight.
    Refresh,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(FetchError),
}

/// Handle for one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// What `settle` did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Applied,
    /// The ticket was superseded or abandoned; state untouched
    Stale,
}

/// Collection plus request bookkeeping.
///
/// `data` is either empty or exactly the payload of the last applied success.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QrCodeQuery {
    data: Vec<QrCode>,
    status: QueryStatus,
    generation: u64,
}

impl QrCodeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[QrCode] {
        &self.data
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            QueryStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Start a request if one is needed. `None` means the caller must not fetch.
    pub fn begin(&mut self, mode: LoadMode) -> Option<FetchTicket> {
        let start = match (&self.status, mode) {
            (QueryStatus::Loading, _) => false,
            (QueryStatus::Idle, _) => true,
            (_, LoadMode::OnMount) => false,
            (_, LoadMode::Refresh) => true,
        };
        if !start {
            tracing::debug!(?mode, status = ?self.status, "load joined existing query");
            return None;
        }

        self.generation += 1;
        self.status = QueryStatus::Loading;
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn settle(&mut self, ticket: FetchTicket, outcome: Result<Vec<QrCode>, FetchError>) -> Settle {
        if ticket.generation != self.generation || !self.is_loading() {
            tracing::debug!(ticket = ticket.generation, current = self.generation, "dropping stale QR code result");
            return Settle::Stale;
        }

        match outcome {
            Ok(codes) => {
                self.data = codes;
                self.status = QueryStatus::Loaded;
            }
            Err(err) => {
                tracing::error!(error = %err, transient = err.is_transient(), "failed to load QR codes");
                self.status = QueryStatus::Failed(err);
            }
        }
        Settle::Applied
    }

    /// Forget the in-flight request; its result will be ignored.
    pub fn abandon(&mut self) {
        if self.is_loading() {
            self.generation += 1;
            self.status = if self.data.is_empty() { QueryStatus::Idle } else { QueryStatus::Loaded };
        }
    }
}
