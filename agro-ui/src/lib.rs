//! Shared Dioxus components and browser bridge for the crop advisory app.
//!
//! This crate provides:
//! - `browser`: localStorage, object URLs, file inputs and alerts via `web-sys`
//! - `fetch`: the abortable `fetch` transport for `POST /api/advice/`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: the drop zone, preview and result cards

pub mod browser;
pub mod components;
pub mod fetch;
pub mod state;
