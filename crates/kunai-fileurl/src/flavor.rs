//! Path flavor selection.

/// Filesystem path convention a [`PathConverter`](crate::PathConverter)
/// applies.
///
/// The flavor is an explicit value rather than a process-wide flag so both
/// conventions can be exercised in one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathFlavor {
    /// Forward-slash separators, host-less `file:` URLs.
    Posix,
    /// Backslash separators, drive letters, UNC hosts.
    Windows,
}

impl PathFlavor {
    /// The flavor of the compile target.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The flavor's canonical separator character.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` terminates a path as a separator in caller input.
    /// Windows accepts a forward slash here as well.
    pub(crate) const fn is_input_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }
}
