//! Fundboard
//!
//! Pledge board for the national fund weekend, built with Leptos (WASM).
//!
//! # Features
//!
//! - Live pledge total with a count-up animation
//! - Pledge promise form with client-side validation
//! - Snapshot cache so the total renders before the first network response
//! - Confetti burst and confirmation overlay on submission
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The ledger of record is an external spreadsheet-backed script
//! endpoint reached over HTTP; the app polls it every 5 seconds and holds no
//! durable state beyond a localStorage copy of the last known total.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
