//! Portfolio Site - Rust Implementation
//!
//! A single-page portfolio with persisted display preferences.
//!
//! This library provides:
//! - Preference storage with legacy-key migration (`prefs`)
//! - Projection of preferences onto the document (`dom`)
//! - Page UI state and event handling (`controller`)
//! - Dioxus components for the page (`app`)
//! - An axum server rendering the page and serving its assets (`api`, `ui`)

pub mod app;
pub mod contact;
pub mod controller;
pub mod dom;
pub mod notice;
pub mod prefs;
pub mod scroll;
pub mod site;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;
