//! UI Components
//!
//! Dashboard views.

mod fetch_notice;
mod listing_view;
mod summary_view;

pub use fetch_notice::FetchNotice;
pub use listing_view::ListingView;
pub use summary_view::SummaryView;
