//! MiChat chat widgets
//!
//! Presentational Leptos components for a chat-style web application.
//!
//! # Components
//!
//! - [`FileUpload`](ui::components::FileUpload): reads the selected file as text
//!   and reports it through a callback
//! - [`MessageBubble`](ui::components::MessageBubble): one chat message, styled by origin
//! - [`HistoryPreview`](ui::components::HistoryPreview): truncated preview of a past prompt
//!
//! # Modules
//!
//! - [`model`]: message and history records
//! - [`file_select`]: file sources and the read-then-report flow
//! - [`ui`]: Leptos components and the gallery page
//! - [`config`]: gallery configuration (`ssr` only)

#[cfg(feature = "ssr")]
pub mod config;
pub mod file_select;
pub mod model;
pub mod ui;

pub use model::{ChatMessage, HistoryEntry, MessageKind};
