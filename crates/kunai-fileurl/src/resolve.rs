//! Lexical absolute-path resolution.
//!
//! Collapses `.` and `..` segments and duplicate separators without
//! touching the filesystem. Relative input is joined against the process
//! working directory first.

use crate::flavor::PathFlavor;

pub(crate) fn resolve(path: &str, flavor: PathFlavor) -> String {
    match flavor {
        PathFlavor::Posix => resolve_posix(path),
        PathFlavor::Windows => resolve_windows(path),
    }
}

fn resolve_posix(path: &str) -> String {
    let joined = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("{}/{path}", current_dir_string('/'))
    };
    let mut resolved = String::from("/");
    resolved.push_str(&collapse_segments(&joined, '/').join("/"));
    resolved
}

fn resolve_windows(path: &str) -> String {
    let normalized = path.replace('/', "\\");
    let bytes = normalized.as_bytes();
    let (prefix, rest) = if let Some(unc_rest) = normalized.strip_prefix("\\\\") {
        // UNC: keep the double-backslash anchor.
        ("\\\\".to_string(), unc_rest.to_string())
    } else if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        (format!("{}\\", &normalized[..2]), normalized[2..].to_string())
    } else {
        // No anchor: join against the working directory, rendered with
        // backslash separators.
        (
            "\\".to_string(),
            format!("{}\\{normalized}", current_dir_string('\\')),
        )
    };
    format!("{prefix}{}", collapse_segments(&rest, '\\').join("\\"))
}

/// Splits on `separator` and drops empty segments, `.`, and the segment
/// preceding each `..` (never popping past the root).
fn collapse_segments(path: &str, separator: char) -> Vec<&str> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(separator) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments
}

fn current_dir_string(separator: char) -> String {
    let cwd = std::env::current_dir()
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default();
    if separator == '\\' {
        cwd.replace('/', "\\")
    } else {
        cwd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_absolute_passthrough() {
        assert_eq!(resolve("/etc/fstab", PathFlavor::Posix), "/etc/fstab");
        assert_eq!(resolve("/", PathFlavor::Posix), "/");
    }

    #[test]
    fn posix_collapses_dot_segments() {
        assert_eq!(resolve("/a/./b/../c", PathFlavor::Posix), "/a/c");
        assert_eq!(resolve("/a//b///c", PathFlavor::Posix), "/a/b/c");
        assert_eq!(resolve("/../..", PathFlavor::Posix), "/");
    }

    #[test]
    fn posix_strips_trailing_separator() {
        assert_eq!(resolve("/a/b/", PathFlavor::Posix), "/a/b");
    }

    #[test]
    fn posix_relative_joins_cwd() {
        let resolved = resolve("some/file.txt", PathFlavor::Posix);
        assert!(resolved.starts_with('/'));
        assert!(resolved.ends_with("/some/file.txt"));
    }

    #[test]
    fn windows_drive_paths() {
        assert_eq!(
            resolve("C:\\Temp\\..\\Users\\.\\me", PathFlavor::Windows),
            "C:\\Users\\me"
        );
        assert_eq!(resolve("C:\\", PathFlavor::Windows), "C:\\");
        // Forward slashes normalize to backslashes.
        assert_eq!(resolve("C:/Temp/file", PathFlavor::Windows), "C:\\Temp\\file");
    }

    #[test]
    fn windows_unc_keeps_anchor() {
        assert_eq!(
            resolve("\\\\server\\share\\..\\other", PathFlavor::Windows),
            "\\\\server\\other"
        );
    }
}
