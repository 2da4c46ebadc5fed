//! `file:` URL ↔ filesystem path conversion.
//!
//! Converts local filesystem paths to `file:` scheme URLs and back, with
//! separate rule sets for POSIX-style and Windows-style paths. The flavor
//! is chosen per [`PathConverter`], not read from process state, so both
//! conventions are usable (and testable) in one process.

mod convert;
mod error;
mod escape;
mod flavor;
mod resolve;


pub use convert::PathConverter;
pub use error::{FileUrlError, FileUrlResult};
pub use flavor::PathFlavor;
pub use url::Url;
