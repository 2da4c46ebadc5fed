//! `file:` URL ↔ filesystem path conversion.

use std::path::PathBuf;

use url::Url;

use crate::error::{FileUrlError, FileUrlResult};
use crate::escape::{escape_path, has_encoded_separator, percent_decode};
use crate::flavor::PathFlavor;
use crate::resolve;

/// Converts between `file:` URLs and filesystem paths under a fixed
/// [`PathFlavor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathConverter {
    flavor: PathFlavor,
}

impl PathConverter {
    /// A converter for the given flavor.
    #[must_use]
    pub const fn new(flavor: PathFlavor) -> Self {
        Self { flavor }
    }

    /// A converter for the compile target's flavor.
    #[must_use]
    pub const fn host() -> Self {
        Self::new(PathFlavor::host())
    }

    /// The flavor this converter applies.
    #[must_use]
    pub const fn flavor(self) -> PathFlavor {
        self.flavor
    }

    /// Parses `input` as a URL and converts it with
    /// [`Self::file_url_to_path`].
    ///
    /// ## Errors
    /// [`FileUrlError::InvalidUrl`] when `input` is not a URL at all, plus
    /// every error [`Self::file_url_to_path`] can produce.
    pub fn file_url_str_to_path(self, input: &str) -> FileUrlResult<PathBuf> {
        let url = Url::parse(input)?;
        self.file_url_to_path(&url)
    }

    /// Converts a `file:` URL to a filesystem path.
    ///
    /// ## Errors
    /// - [`FileUrlError::InvalidScheme`] when the scheme is not `file`.
    /// - [`FileUrlError::EncodedSeparator`] when the path smuggles an
    ///   encoded separator.
    /// - [`FileUrlError::HostNotAllowed`] for a host-bearing URL on POSIX.
    /// - [`FileUrlError::PathNotAbsolute`] for a host-less Windows URL
    ///   whose path lacks a drive-letter prefix.
    pub fn file_url_to_path(self, url: &Url) -> FileUrlResult<PathBuf> {
        if url.scheme() != "file" {
            return Err(FileUrlError::InvalidScheme(url.scheme().to_string()));
        }
        match self.flavor {
            PathFlavor::Windows => windows_path_from_url(url),
            PathFlavor::Posix => posix_path_from_url(url),
        }
    }

    /// Converts a filesystem path to a `file:` URL.
    ///
    /// The path is resolved to absolute form first (lexically; relative
    /// input is joined against the working directory), a trailing
    /// separator from the input is restored if resolution stripped it,
    /// and characters that are structurally significant in a URL are
    /// escaped before the path is installed in the URL.
    ///
    /// ## Errors
    /// Does not fail under normal operation; the `Result` covers URL
    /// construction.
    pub fn path_to_file_url(self, path: &str) -> FileUrlResult<Url> {
        let resolved = resolve::resolve(path, self.flavor);
        let resolved = self.restore_trailing_separator(path, resolved);
        let escaped = escape_path(&resolved, self.flavor);
        let url_path = match self.flavor {
            PathFlavor::Windows => {
                let slashed = escaped.replace('\\', "/");
                if slashed.starts_with('/') {
                    slashed
                } else {
                    format!("/{slashed}")
                }
            }
            PathFlavor::Posix => escaped,
        };
        let mut url = Url::parse("file:///")?;
        url.set_path(&url_path);
        Ok(url)
    }

    /// Resolution strips trailing separators; put one back when the
    /// caller's input ended with one.
    fn restore_trailing_separator(self, input: &str, mut resolved: String) -> String {
        let input_ends_with_sep = input
            .chars()
            .next_back()
            .is_some_and(|c| self.flavor.is_input_separator(c));
        if input_ends_with_sep && !resolved.ends_with(self.flavor.separator()) {
            resolved.push(self.flavor.separator());
        }
        resolved
    }
}

fn windows_path_from_url(url: &Url) -> FileUrlResult<PathBuf> {
    let raw = url.path();
    if has_encoded_separator(raw, PathFlavor::Windows) {
        return Err(FileUrlError::EncodedSeparator);
    }
    let pathname = percent_decode(&raw.replace('/', "\\"));

    if let Some(host) = url.host_str()
        && !host.is_empty()
    {
        return Ok(PathBuf::from(format!("\\\\{host}{pathname}")));
    }

    // A local path requires a drive letter right after the leading
    // separator: `\C:\...`.
    let bytes = pathname.as_bytes();
    let has_drive = bytes.get(1).is_some_and(u8::is_ascii_alphabetic) && bytes.get(2) == Some(&b':');
    if !has_drive {
        return Err(FileUrlError::PathNotAbsolute);
    }
    Ok(PathBuf::from(&pathname[1..]))
}

fn posix_path_from_url(url: &Url) -> FileUrlResult<PathBuf> {
    if let Some(host) = url.host_str()
        && !host.is_empty()
    {
        return Err(FileUrlError::HostNotAllowed(host.to_string()));
    }
    let raw = url.path();
    if has_encoded_separator(raw, PathFlavor::Posix) {
        return Err(FileUrlError::EncodedSeparator);
    }
    Ok(PathBuf::from(percent_decode(raw)))
}
