//! Chat message bubble.

use leptos::prelude::*;

use crate::model::{ChatMessage, MessageKind};

impl MessageKind {
    /// Background classes for this origin.
    ///
    /// `User` gets its own treatment; every other origin shares the second.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::User => "bg-blue-800",
            Self::Other => "bg-green-800",
        }
    }
}

/// Renders one chat message.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <MessageBubble message=ChatMessage::user("Hello!") />
/// }
/// ```
#[component]
pub fn MessageBubble(
    /// Message to render.
    message: ChatMessage,
) -> impl IntoView {
    let classes = format!("p-4 mb-4 {} rounded-lg", message.kind.classes());

    view! {
        <div class=classes>
            {message.content}
        </div>
    }
}
