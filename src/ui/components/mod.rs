//! Chat UI components.
//!
//! # Components
//!
//! - [`FileUpload`]: file picker reporting the selected file's text
//! - [`MessageBubble`]: one chat message, styled by origin
//! - [`HistoryPreview`]: truncated preview of a past prompt

mod file_upload;
mod history_preview;
mod message_bubble;

pub use file_upload::FileUpload;
pub use history_preview::HistoryPreview;
pub use message_bubble::MessageBubble;
