//! Fetch Notice
//!
//! Visible error state for the last failed load, with a manual retry.
//! The views keep showing whatever data they had.

use leptos::prelude::*;
use qrcode_api::FetchError;

use crate::context::use_dashboard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// CSS modifier per failure kind
fn notice_tone(err: &FetchError) -> &'static str {
    if err.is_transient() {
        "fetch-notice transient"
    } else if err.is_auth() || matches!(err, FetchError::Config(_)) {
        "fetch-notice action-needed"
    } else {
        "fetch-notice failed"
    }
}

/// Retrying cannot fix a build without backend settings
fn can_retry(err: &FetchError) -> bool {
    !matches!(err, FetchError::Config(_))
}

#[component]
pub fn FetchNotice() -> impl IntoView {
    let ctx = use_dashboard();
    let store = use_dashboard_store();

    let error = move || store.query().with(|q| q.error().cloned());
    let loading = move || store.query().with(|q| q.is_loading());

    // Recent error diagnostics, re-read whenever the failure changes
    let details = move || {
        let _ = error();
        ctx.diagnostics
            .with_value(|log| log.as_ref().map(|l| l.errors()).unwrap_or_default())
            .into_iter()
            .map(|record| view! { <li>{record.display_line()}</li> })
            .collect_view()
    };

    view! {
        {move || error().map(|err| {
            let tone = notice_tone(&err);
            let retry = can_retry(&err);
            view! {
                <div class=tone role="alert">
                    <p>{err.user_message()}</p>
                    <Show when=move || retry>
                        <button
                            class="retry-btn"
                            disabled=loading
                            on:click=move |_| ctx.retry()
                        >
                            "Retry"
                        </button>
                    </Show>
                    <details>
                        <summary>"Details"</summary>
                        <ul class="diagnostics">{details}</ul>
                    </details>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrcode_api::ConfigError;

    #[test]
    fn test_tone_per_variant() {
        assert_eq!(notice_tone(&FetchError::Network("x".into())), "fetch-notice transient");
        assert_eq!(notice_tone(&FetchError::http(401, "")), "fetch-notice action-needed");
        assert_eq!(notice_tone(&FetchError::Decode("x".into())), "fetch-notice failed");
        assert_eq!(
            notice_tone(&FetchError::Config(ConfigError::MissingBaseUrl)),
            "fetch-notice action-needed"
        );
    }

    #[test]
    fn test_config_errors_not_retryable() {
        assert!(!can_retry(&FetchError::Config(ConfigError::MissingApiKey)));
        assert!(can_retry(&FetchError::http(500, "")));
    }
}
