//! Reading a selection and reporting it to the owning component.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::provider::{FileReadError, SelectedFile};

/// Tracks whether the component that started a read is still mounted.
///
/// Clones share the same flag. The component releases it from its cleanup
/// hook; reads that finish afterwards are discarded.
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    /// Create a guard in the mounted state.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Whether the owner is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the owner as gone.
    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a selection that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The first file's text was passed to the callback.
    Delivered,
    /// Nothing was selected; the callback was not invoked.
    NoFile,
    /// The owner unmounted before the read finished; the callback was not invoked.
    Detached,
}

/// Read the first selected file and pass its text to `on_text`.
///
/// Files after the first are ignored and never read. `on_text` runs at most
/// once, only after the read completes, and only if `guard` is still
/// mounted at that point.
pub async fn deliver_first<F, I, C>(
    files: I,
    guard: &MountGuard,
    on_text: C,
) -> Result<Delivery, FileReadError>
where
    F: SelectedFile,
    I: IntoIterator<Item = F>,
    C: FnOnce(String),
{
    let Some(file) = files.into_iter().next() else {
        debug!(name: "file.select.empty", "No file selected");
        return Ok(Delivery::NoFile);
    };

    let result = file.read_text().await;

    if !guard.is_mounted() {
        debug!(
            name: "file.select.detached",
            file = %file.name(),
            failed = result.is_err(),
            "Owner unmounted before read completed"
        );
        return Ok(Delivery::Detached);
    }

    let text = result?;
    debug!(
        name: "file.select.read",
        file = %file.name(),
        bytes = text.len(),
        "Selected file read"
    );
    on_text(text);
    Ok(Delivery::Delivered)
}
