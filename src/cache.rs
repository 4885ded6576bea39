// Time-based throttle for the /info snapshot.

use std::future::Future;
use std::sync::Mutex;

/// Cached text is reused while `now - computed_at <= FRESHNESS_WINDOW_SECS`.
pub const FRESHNESS_WINDOW_SECS: i64 = 3;

#[derive(Debug, Default)]
struct CachedPayload {
    text: String,
    /// `None` until the first computation starts.
    computed_at: Option<i64>,
}

/// Reuses the last produced text for a short window.
///
/// The timestamp is claimed under the lock *before* the producer runs, so at most one
/// recomputation starts per window. Callers arriving while it runs get the previous text.
#[derive(Debug, Default)]
pub struct FreshnessCache {
    state: Mutex<CachedPayload>,
}

impl FreshnessCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_compute<F, Fut>(&self, producer: F) -> String
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = String>,
    {
        self.get_or_compute_at(chrono::Utc::now().timestamp(), producer)
            .await
    }

    /// Same as [`get_or_compute`](Self::get_or_compute) with an explicit clock reading (epoch seconds).
    pub async fn get_or_compute_at<F, Fut>(&self, now: i64, producer: F) -> String
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = String>,
    {
        if let Some(cached) = self.claim(now) {
            tracing::debug!("info cache hit");
            return cached;
        }
        tracing::debug!(now, "info cache miss, recomputing");
        let text = producer().await;
        self.store(now, text.clone());
        text
    }

    /// Returns the cached text if still fresh; otherwise records `now` as the new
    /// computation time and returns `None`.
    fn claim(&self, now: i64) -> Option<String> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match state.computed_at {
            Some(at) if now - at <= FRESHNESS_WINDOW_SECS => Some(state.text.clone()),
            _ => {
                state.computed_at = Some(now);
                None
            }
        }
    }

    /// Drops results from a computation that a newer claim has already superseded.
    fn store(&self, claimed_at: i64, text: String) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.computed_at == Some(claimed_at) {
            state.text = text;
        }
    }
}
