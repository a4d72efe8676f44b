//! UI Components
//!
//! Leptos components for the pledge board.

pub mod confetti;
pub mod counter;
pub mod modal;
pub mod pledge_form;

pub use confetti::ConfettiCanvas;
pub use counter::Counter;
pub use modal::PledgeModal;
pub use pledge_form::PledgeForm;
