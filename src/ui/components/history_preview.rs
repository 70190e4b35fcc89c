//! Truncated preview of an archived prompt.

use leptos::prelude::*;

use crate::model::HistoryEntry;

/// Renders a history entry as a clickable-looking preview.
///
/// The component takes no click handler; wrap it in an element that
/// handles clicks if selection is needed.
#[component]
pub fn HistoryPreview(
    /// Entry to preview.
    item: HistoryEntry,
) -> impl IntoView {
    view! {
        <div class="p-2 bg-gray-700 rounded mb-2 cursor-pointer hover:bg-gray-600">
            {item.preview()}
        </div>
    }
}
