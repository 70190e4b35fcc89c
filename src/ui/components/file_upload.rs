//! File picker that reports the selected file's text.

use leptos::prelude::*;
use tracing::warn;

use crate::file_select::{
    BrowserFile, Delivery, FileReadError, MountGuard, SelectedFile, deliver_first,
};

/// File input that reads the chosen file as text.
///
/// Only the first selected file is read. `on_file_select` fires once per
/// selection, after the read completes, and never after the component has
/// been unmounted. Read failures go to `on_error` when given, and are
/// logged otherwise.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <FileUpload on_file_select=move |text: String| set_draft.set(text) />
/// }
/// ```
#[component]
pub fn FileUpload(
    /// Receives the file's text.
    #[prop(into)]
    on_file_select: Callback<String>,
    /// Receives read failures.
    #[prop(optional, into)]
    on_error: Option<Callback<FileReadError>>,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let guard = mount_guard();

    let on_change = move |ev: web_sys::Event| {
        let files = BrowserFile::from_change_event(&ev);
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            select(files, &guard, on_file_select, on_error).await;
        });
    };

    let classes = format!("mb-4 text-white {class}");

    view! {
        <input type="file" class=classes on:change=on_change />
    }
}

/// Guard tied to the current owner; released when the owner is cleaned up.
fn mount_guard() -> MountGuard {
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });
    guard
}

/// Deliver a selection to the component's callbacks.
async fn select<F, I>(
    files: I,
    guard: &MountGuard,
    on_file_select: Callback<String>,
    on_error: Option<Callback<FileReadError>>,
) -> Option<Delivery>
where
    F: SelectedFile,
    I: IntoIterator<Item = F>,
{
    match deliver_first(files, guard, |text| on_file_select.run(text)).await {
        Ok(delivery) => Some(delivery),
        Err(err) => {
            match on_error {
                Some(on_error) => on_error.run(err),
                None => {
                    warn!(name: "file.select.failed", error = %err, "Failed to read selected file");
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct StubFile(Option<&'static str>);

    #[async_trait(?Send)]
    impl SelectedFile for StubFile {
        fn name(&self) -> String {
            "stub.txt".to_string()
        }

        async fn read_text(&self) -> Result<String, FileReadError> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| FileReadError::NotText(self.name()))
        }
    }

    fn recording<T: Send + Sync + 'static>() -> (Arc<Mutex<Vec<T>>>, Callback<T>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, Callback::new(move |value: T| sink.lock().unwrap().push(value)))
    }

    #[test]
    fn test_renders_single_unfiltered_file_input() {
        let html = Owner::new().with(|| {
            view! { <FileUpload on_file_select=|_text: String| {} class="w-full" /> }.to_html()
        });

        assert_eq!(html.matches("<input").count(), 1);
        assert!(html.contains(r#"type="file""#));
        assert!(html.contains("mb-4 text-white w-full"));
        assert!(!html.contains("accept"));
        assert!(!html.contains("multiple"));
    }

    #[test]
    fn test_owner_cleanup_releases_guard() {
        let owner = Owner::new();
        let guard = owner.with(mount_guard);
        assert!(guard.is_mounted());

        owner.cleanup();
        assert!(!guard.is_mounted());
    }

    #[tokio::test]
    async fn test_selection_reaches_callback() {
        let owner = Owner::new();
        let (texts, on_file_select) = owner.with(recording::<String>);
        let guard = owner.with(mount_guard);

        let outcome = select(vec![StubFile(Some("body"))], &guard, on_file_select, None).await;

        assert_eq!(outcome, Some(Delivery::Delivered));
        assert_eq!(*texts.lock().unwrap(), vec!["body".to_string()]);
    }

    #[tokio::test]
    async fn test_no_callback_after_owner_cleanup() {
        let owner = Owner::new();
        let (texts, on_file_select) = owner.with(recording::<String>);
        let guard = owner.with(mount_guard);
        owner.cleanup();

        let outcome = select(vec![StubFile(Some("late"))], &guard, on_file_select, None).await;

        assert_eq!(outcome, Some(Delivery::Detached));
        assert!(texts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_goes_to_on_error() {
        let owner = Owner::new();
        let (texts, on_file_select) = owner.with(recording::<String>);
        let (errors, on_error) = owner.with(recording::<FileReadError>);
        let guard = owner.with(mount_guard);

        let outcome = select(vec![StubFile(None)], &guard, on_file_select, Some(on_error)).await;

        assert_eq!(outcome, None);
        assert!(texts.lock().unwrap().is_empty());
        let errors = errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], FileReadError::NotText(name) if name == "stub.txt"));
    }

    #[tokio::test]
    async fn test_failure_without_on_error_is_logged_only() {
        let owner = Owner::new();
        let (texts, on_file_select) = owner.with(recording::<String>);
        let guard = owner.with(mount_guard);

        let outcome = select(vec![StubFile(None)], &guard, on_file_select, None).await;

        assert_eq!(outcome, None);
        assert!(texts.lock().unwrap().is_empty());
    }
}
