//! Render-time data shapes.
//!
//! These records are owned by the parent application and handed to the
//! components by value. Nothing in this crate mutates them.

use serde::{Deserialize, Deserializer, Serialize};

/// Number of prompt characters shown by a history preview.
pub const PREVIEW_CHARS: usize = 50;

/// Suffix appended to every history preview.
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Origin of a chat message.
///
/// Only the `user` tag is distinguished. Every other tag (`assistant`,
/// `system`, or anything unrecognised) maps to [`MessageKind::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Sent by the local user.
    User,
    /// Anything else.
    #[default]
    Other,
}

impl MessageKind {
    /// Map a wire tag to a kind.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "user" { Self::User } else { Self::Other }
    }
}

// Hand-written so unknown tags fall back through any deserializer,
// including ones that reject unlisted enum variants.
impl<'de> Deserialize<'de> for MessageKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message origin.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a message sent by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::User,
            content: content.into(),
        }
    }

    /// Create a message from any other origin.
    pub fn other(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Other,
            content: content.into(),
        }
    }

    /// Whether the message was sent by the user.
    pub fn is_user(&self) -> bool {
        self.kind == MessageKind::User
    }
}

/// An archived prompt shown in the history sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The prompt text as originally sent.
    pub prompt: String,
}

impl HistoryEntry {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Preview text: the first [`PREVIEW_CHARS`] characters followed by
    /// [`PREVIEW_ELLIPSIS`].
    ///
    /// The ellipsis is appended unconditionally, so `"hello"` previews as
    /// `"hello..."`.
    pub fn preview(&self) -> String {
        let mut preview: String = self.prompt.chars().take(PREVIEW_CHARS).collect();
        preview.push_str(PREVIEW_ELLIPSIS);
        preview
    }
}
