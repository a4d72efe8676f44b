//! Ledger API Client
//!
//! HTTP access to the external pledge ledger endpoint.

pub mod client;

pub use client::{fetch_fund_state, submit_pledge, FundState};
