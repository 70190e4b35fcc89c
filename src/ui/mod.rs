//! UI components and layouts.
//!
//! Leptos components rendered on the server (`ssr`) and wired to browser
//! events in the client build (`hydrate`).
//!
//! # Structure
//!
//! - [`components`]: the chat components
//! - [`gallery`]: a preview page showing every component (`ssr` only)

pub mod components;
#[cfg(feature = "ssr")]
pub mod gallery;
