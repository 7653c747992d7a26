//! Last-sync indicator fed by a periodic poll.
//!
//! The poll is a cancellable task: it runs for as long as the admin shell
//! is mounted and stops on cleanup. A failed fetch keeps the previous value
//! on screen.

use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::sync::LastSync;

use crate::shared::api_utils::get_json;
use crate::shared::date_utils::format_last_sync;
use crate::shared::error::ApiError;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

const POLL_INTERVAL_MS: u32 = 30_000;

async fn fetch_last_sync(token: &str) -> Result<LastSync, ApiError> {
    get_json("/api/sync/last", Some(token)).await
}

/// Wall-clock time from the JS runtime; `SystemTime` is unavailable on
/// wasm32-unknown-unknown.
fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Handle for a running poll loop. The loop checks the flag before every
/// fetch and after every sleep, so cancellation takes effect within one
/// tick.
#[derive(Clone)]
pub struct PollHandle {
    cancelled: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Start the last-sync poll: one fetch immediately, then every 30 seconds
/// until cancelled. `on_value` only fires for successful fetches.
pub fn start_last_sync_poll(
    token: String,
    on_value: impl Fn(Option<DateTime<Utc>>) + 'static,
) -> PollHandle {
    let cancelled = Arc::new(AtomicBool::new(false));
    let handle = PollHandle {
        cancelled: cancelled.clone(),
    };
    spawn_local(async move {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match fetch_last_sync(&token).await {
                Ok(last_sync) => on_value(last_sync.last_sync_at),
                Err(error) => log::warn!("failed to fetch last sync time: {error}"),
            }
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
    });
    handle
}

#[component]
pub fn SyncStatus() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let (last_sync, set_last_sync) = signal(None::<DateTime<Utc>>);

    // Only mounted inside the authenticated shell, so the token is present.
    let token = auth_state.get_untracked().token.unwrap_or_default();
    let handle = start_last_sync_poll(token, move |value| set_last_sync.set(value));
    on_cleanup(move || handle.cancel());

    view! {
        <div class="sync-status" title="Last member-data sync">
            {icon("sync")}
            <span>{move || format_last_sync(last_sync.get(), now_utc())}</span>
        </div>
    }
}
