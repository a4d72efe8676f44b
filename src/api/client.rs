//! HTTP Ledger Client
//!
//! Functions for communicating with the spreadsheet-backed pledge ledger.
//! The endpoint is an opaque collaborator: one URL, GET for the current
//! aggregate, POST to record a pledge and receive the updated aggregate.

use gloo_net::http::Request;

/// Default ledger endpoint (Apps Script deployment)
pub const DEFAULT_API_URL: &str =
    "https://script.google.com/macros/s/AKfycbwvCBx_pJyuUYWl-6hGzUSscuve-knywyr15A2E45s9HsZKUan-v9mfN4Fb28NOUNvJ/exec";

/// Local storage key for overriding the ledger URL
const API_URL_KEY: &str = "fund_api_url";

/// Aggregate ledger state: validated total and number of pledges.
///
/// Owned by the remote service. The client never mutates this locally;
/// it only replaces its copy with a server-returned value.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundState {
    pub total_amount: f64,
    pub count: u64,
}

/// Get the ledger URL from local storage or use the default
pub fn get_api_url() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_URL.to_string()
            }
        } else {
            DEFAULT_API_URL.to_string()
        }
    } else {
        DEFAULT_API_URL.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetch the current aggregate state from the ledger.
///
/// Failures are returned as `Err` rather than collapsed into a zero
/// fallback, so a failed read stays distinguishable from a legitimate
/// zero total. The polling path logs the error and keeps prior state.
pub async fn fetch_fund_state() -> Result<FundState, String> {
    let response = Request::get(&get_api_url())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned status {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a pledge amount and return the server-confirmed aggregate.
///
/// Errors propagate to the caller so the form can surface them.
pub async fn submit_pledge(amount: f64) -> Result<FundState, String> {
    #[derive(serde::Serialize)]
    struct PledgeRequest {
        amount: f64,
    }

    let response = Request::post(&get_api_url())
        .json(&PledgeRequest { amount })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned status {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fund_state_wire_format() {
        let state: FundState =
            serde_json::from_str(r#"{"totalAmount": 175.5, "count": 5}"#).unwrap();
        assert_eq!(state.total_amount, 175.5);
        assert_eq!(state.count, 5);
    }

    #[test]
    fn test_fund_state_default_is_empty() {
        let state = FundState::default();
        assert_eq!(state.total_amount, 0.0);
        assert_eq!(state.count, 0);
    }
}
