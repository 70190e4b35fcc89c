//! Files read from the local filesystem.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::provider::{FileReadError, SelectedFile};

/// A file on disk, read with `tokio::fs`.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait(?Send)]
impl SelectedFile for LocalFile {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }

    async fn read_text(&self) -> Result<String, FileReadError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                FileReadError::NotText(self.path.display().to_string())
            } else {
                FileReadError::Io(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_reads_text_file() {
        let mut temp_file = NamedTempFile::with_suffix(".txt").unwrap();
        write!(temp_file, "Hello, World!").unwrap();

        let file = LocalFile::new(temp_file.path());
        assert_eq!(file.read_text().await.unwrap(), "Hello, World!");
        assert!(file.name().ends_with(".txt"));
    }

    #[tokio::test]
    async fn test_binary_file_is_not_text() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = LocalFile::new(temp_file.path()).read_text().await.unwrap_err();
        assert!(matches!(err, FileReadError::NotText(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFile::new(dir.path().join("absent.txt"))
            .read_text()
            .await
            .unwrap_err();
        assert!(matches!(err, FileReadError::Io(_)));
    }
}
