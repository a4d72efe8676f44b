//! Global Application State
//!
//! Reactive state management using Leptos signals. All writes of
//! server-reported aggregates are funneled through [`GlobalState::apply_fund_state`].

use leptos::*;

use crate::api::FundState;
use crate::state::cache;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Last known validated pledge total (euros)
    pub total: RwSignal<f64>,
    /// Last known number of validated pledges
    pub pledge_count: RwSignal<u64>,
    /// Timestamp (ms) of the last successful refresh
    pub last_refresh: RwSignal<Option<i64>>,
    /// Confirmation overlay visibility
    pub modal_open: RwSignal<bool>,
    /// Message shown in the confirmation overlay
    pub modal_message: RwSignal<String>,
    /// Bumped on every successful pledge; watched by the confetti canvas
    pub celebration: RwSignal<u32>,
}

/// Provide global state to the component tree.
///
/// The total is seeded from the snapshot cache so the page does not
/// flash a zero while waiting for the first network response.
pub fn provide_global_state() {
    let state = GlobalState {
        total: create_rw_signal(cache::load_total()),
        pledge_count: create_rw_signal(0),
        last_refresh: create_rw_signal(None),
        modal_open: create_rw_signal(false),
        modal_message: create_rw_signal(String::new()),
        celebration: create_rw_signal(0),
    };

    provide_context(state);
}

impl GlobalState {
    /// Apply a server-reported aggregate to the shared state.
    ///
    /// Non-finite totals are dropped. Writes use `try_set` and stop at the
    /// first disposed signal, so a completion that lands after the view is
    /// torn down touches nothing. Positive totals also refresh the cache.
    pub fn apply_fund_state(&self, fund: FundState) {
        if !fund.total_amount.is_finite() {
            return;
        }
        if self.total.try_set(fund.total_amount).is_some() {
            // View torn down
            return;
        }
        let _ = self.pledge_count.try_set(fund.count);
        let _ = self
            .last_refresh
            .try_set(Some(chrono::Utc::now().timestamp_millis()));

        cache::save_total(fund.total_amount);
    }

    /// Open the confirmation overlay with the given message
    pub fn open_modal(&self, message: &str) {
        self.modal_message.set(message.to_string());
        self.modal_open.set(true);
    }

    /// Close the confirmation overlay
    pub fn close_modal(&self) {
        self.modal_open.set(false);
    }

    /// Trigger a confetti burst
    pub fn celebrate(&self) {
        self.celebration.update(|n| *n += 1);
    }
}
