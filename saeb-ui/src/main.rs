//! SAEB Dashboard
//!
//! Browser dashboard for the SAEB municipal rollout, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Section loading and all view state come from the
//! `saeb-dashboard` crate; this crate supplies the gloo-net transport and the
//! components.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
