//! Core trait and error type for selected files.

use async_trait::async_trait;

/// Errors that can occur while reading a selected file.
#[derive(Debug, thiserror::Error)]
pub enum FileReadError {
    /// The platform refused or aborted the read.
    #[error("File read rejected: {0}")]
    Rejected(String),

    /// The file contents could not be decoded as text.
    #[error("File is not valid text: {0}")]
    NotText(String),

    /// An I/O error occurred while reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file the user picked.
///
/// Reads are not `Send`: browser file handles live on the UI thread.
#[async_trait(?Send)]
pub trait SelectedFile: std::fmt::Debug {
    /// Display name of the file.
    fn name(&self) -> String;

    /// Read the entire file as text.
    async fn read_text(&self) -> Result<String, FileReadError>;
}
