//! File selection and text reading.
//!
//! The upload control hands whatever the user picked to [`deliver_first`],
//! which reads only the first file and reports its text through a callback.
//! File sources implement [`SelectedFile`]:
//!
//! - [`BrowserFile`]: a `web_sys::File` from an `<input type="file">`
//! - [`LocalFile`]: a path on disk (server builds only)

mod browser;
mod delivery;
#[cfg(feature = "ssr")]
mod local;
mod provider;

pub use browser::BrowserFile;
pub use delivery::{Delivery, MountGuard, deliver_first};
#[cfg(feature = "ssr")]
pub use local::LocalFile;
pub use provider::{FileReadError, SelectedFile};
