//! State Management
//!
//! Global application state, the snapshot cache, and the polling loop.

pub mod cache;
pub mod global;
pub mod poll;

pub use global::{provide_global_state, GlobalState};
pub use poll::start_polling;
