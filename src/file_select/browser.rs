//! Files selected through a browser `<input type="file">`.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlInputElement};

use super::provider::{FileReadError, SelectedFile};

/// A browser `File` handle.
#[derive(Debug, Clone)]
pub struct BrowserFile(web_sys::File);

impl BrowserFile {
    pub fn new(file: web_sys::File) -> Self {
        Self(file)
    }

    /// Files currently selected on an input, in selection order.
    pub fn from_input(input: &HtmlInputElement) -> Vec<Self> {
        let Some(list) = input.files() else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(Self)
            .collect()
    }

    /// Files selected on the input that fired `event`.
    pub fn from_change_event(event: &Event) -> Vec<Self> {
        event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .map(|input| Self::from_input(&input))
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl SelectedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read_text(&self) -> Result<String, FileReadError> {
        let value = JsFuture::from(self.0.text())
            .await
            .map_err(|e| FileReadError::Rejected(format!("{e:?}")))?;
        value.as_string().ok_or_else(|| FileReadError::NotText(self.name()))
    }
}
