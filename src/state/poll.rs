//! Polling Refresher
//!
//! Timer-driven refresh of the pledge total: one immediate fetch on mount,
//! then a fixed-rate cycle every 5 seconds. Cycles fire on the wall clock
//! regardless of whether the previous fetch is still in flight, so
//! completions can arrive out of order; each fetch carries a sequence
//! number and stale completions are discarded.

use gloo_timers::callback::Interval;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api;
use crate::state::global::GlobalState;

/// Refresh cadence in milliseconds
pub const POLL_INTERVAL_MS: u32 = 5_000;

/// Start the polling loop for the lifetime of the current reactive owner.
///
/// The interval is owned by the `on_cleanup` closure, so teardown cancels
/// the timer deterministically. In-flight fetches are not cancelled; their
/// results are dropped at the reconciliation boundary (`try_set` inside
/// [`GlobalState::apply_fund_state`]) once the view is gone.
pub fn start_polling(state: GlobalState) {
    let issued = Rc::new(Cell::new(0u64));
    let applied = Rc::new(Cell::new(0u64));

    let refresh = move || {
        let seq = issued.get() + 1;
        issued.set(seq);

        let state = state.clone();
        let applied = Rc::clone(&applied);
        spawn_local(async move {
            match api::fetch_fund_state().await {
                Ok(fund) => {
                    if supersedes(seq, applied.get()) {
                        applied.set(seq);
                        state.apply_fund_state(fund);
                    }
                }
                Err(e) => {
                    // Read failures are recovered locally: log and keep prior state
                    web_sys::console::error_1(
                        &format!("Failed to refresh fund total: {}", e).into(),
                    );
                }
            }
        });
    };

    // First fetch immediately, then every POLL_INTERVAL_MS
    refresh();
    let interval = Interval::new(POLL_INTERVAL_MS, refresh);
    on_cleanup(move || drop(interval));
}

/// A completion is applied only if it was issued after the last applied one.
fn supersedes(seq: u64, last_applied: u64) -> bool {
    seq > last_applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_completions_apply() {
        assert!(supersedes(1, 0));
        assert!(supersedes(2, 1));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        // Request 2 completed first; a late request 1 must not overwrite it
        assert!(supersedes(2, 0));
        assert!(!supersedes(1, 2));
        assert!(!supersedes(2, 2));
    }
}
