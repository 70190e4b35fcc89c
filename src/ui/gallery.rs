//! Component gallery page.
//!
//! Serves a single HTML page showing every component with sample data.
//! It stands in for the parent application: it owns the sample messages
//! and history and logs whatever the upload control reports.

use std::sync::Arc;

use axum::{Router, extract::State, response::Html, routing::get};
use leptos::prelude::*;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GalleryConfig;
use crate::file_select::FileReadError;
use crate::ui::components::{FileUpload, HistoryPreview, MessageBubble};

/// Build the gallery router.
pub fn router(gallery: Arc<GalleryConfig>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(gallery)
}

async fn index_handler(State(gallery): State<Arc<GalleryConfig>>) -> Html<String> {
    Html(html_shell(&gallery.title, &render_gallery(&gallery)))
}

/// Render the gallery body to HTML.
pub fn render_gallery(gallery: &GalleryConfig) -> String {
    let messages = gallery.messages.clone();
    let history = gallery.history.clone();

    Owner::new().with(move || {
        let on_file_select = Callback::new(|text: String| {
            info!(name: "gallery.file.selected", bytes = text.len(), "File selected");
        });
        let on_error = Callback::new(|err: FileReadError| {
            info!(name: "gallery.file.failed", error = %err, "File read failed");
        });

        view! {
            <div class="grid gap-6 md:grid-cols-[16rem_1fr]">
                <aside id="history">
                    <h2 class="font-semibold mb-2">"History"</h2>
                    {history
                        .into_iter()
                        .map(|item| view! { <HistoryPreview item=item /> })
                        .collect_view()}
                </aside>
                <section id="conversation">
                    <FileUpload on_file_select=on_file_select on_error=on_error />
                    {messages
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message /> })
                        .collect_view()}
                </section>
            </div>
        }
        .to_html()
    })
}

/// Wrap a rendered body in the page shell.
fn html_shell(title: &str, content: &str) -> String {
    let title = html_escape(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
</head>
<body class="min-h-screen bg-gray-900 text-white antialiased">
    <main class="container mx-auto px-4 py-6 max-w-5xl">
        <h1 class="text-2xl font-bold mb-6">{title}</h1>
        {content}
    </main>
</body>
</html>"#
    )
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChatMessage, HistoryEntry};

    fn gallery() -> GalleryConfig {
        GalleryConfig {
            title: "Gallery <test>".to_string(),
            messages: vec![ChatMessage::user("from me"), ChatMessage::other("from them")],
            history: vec![HistoryEntry::new("hello")],
        }
    }

    #[test]
    fn test_render_contains_every_component() {
        let html = render_gallery(&gallery());
        assert!(html.contains(r#"type="file""#));
        assert!(html.contains("bg-blue-800"));
        assert!(html.contains("bg-green-800"));
        assert!(html.contains("hello..."));
    }

    #[test]
    fn test_shell_escapes_title() {
        let html = html_shell(&gallery().title, "");
        assert!(html.contains("<title>Gallery &lt;test&gt;</title>"));
    }
}
