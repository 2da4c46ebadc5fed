//! Percent-decoding and path escaping.
//!
//! Both directions are total string transforms: decoding passes malformed
//! percent sequences through unchanged, and escaping only ever adds
//! characters.

use percent_encoding::percent_decode_str;

use crate::flavor::PathFlavor;

/// Percent-decodes a URL path component, lossily for non-UTF-8 bytes.
pub(crate) fn percent_decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

/// Escapes the characters that are structurally significant in a URL but
/// legal in a filesystem path, in fixed order: `%`, then (POSIX only,
/// where a backslash is an ordinary filename character) `\`, then newline,
/// carriage return, and tab.
pub(crate) fn escape_path(path: &str, flavor: PathFlavor) -> String {
    let mut escaped = path.replace('%', "%25");
    if flavor == PathFlavor::Posix {
        escaped = escaped.replace('\\', "%5C");
    }
    escaped = escaped.replace('\n', "%0A");
    escaped = escaped.replace('\r', "%0D");
    escaped.replace('\t', "%09")
}

/// Scans a raw (still encoded) URL path for percent-encoded separators:
/// `%2F`/`%2f` always, plus `%5C`/`%5c` on Windows.
pub(crate) fn has_encoded_separator(component: &str, flavor: PathFlavor) -> bool {
    let bytes = component.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        if *byte != b'%' {
            continue;
        }
        let second = bytes.get(index + 1).copied();
        let third = bytes.get(index + 2).map(u8::to_ascii_lowercase);
        if second == Some(b'2') && third == Some(b'f') {
            return true;
        }
        if flavor == PathFlavor::Windows && second == Some(b'5') && third == Some(b'c') {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_passes_malformed_sequences_through() {
        assert_eq!(percent_decode("/a%2"), "/a%2");
        assert_eq!(percent_decode("/a%zz"), "/a%zz");
        assert_eq!(percent_decode("/a%20b"), "/a b");
    }

    #[test]
    fn escape_order_makes_percent_safe() {
        // The literal `%` is escaped before anything else, so an input
        // that already looks escaped survives a round trip.
        assert_eq!(escape_path("/a%5C", PathFlavor::Posix), "/a%255C");
        assert_eq!(
            escape_path("/back\\slash", PathFlavor::Posix),
            "/back%5Cslash"
        );
    }

    #[test]
    fn windows_keeps_backslashes_raw() {
        assert_eq!(
            escape_path("C:\\Temp\\file", PathFlavor::Windows),
            "C:\\Temp\\file"
        );
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(
            escape_path("/a\nb\rc\td", PathFlavor::Posix),
            "/a%0Ab%0Dc%09d"
        );
    }

    #[test]
    fn encoded_separator_scan() {
        assert!(has_encoded_separator("/%2Ffoo", PathFlavor::Posix));
        assert!(has_encoded_separator("/%2ffoo", PathFlavor::Posix));
        assert!(!has_encoded_separator("/%5Cfoo", PathFlavor::Posix));
        assert!(has_encoded_separator("/%5cfoo", PathFlavor::Windows));
        assert!(!has_encoded_separator("/%20foo", PathFlavor::Windows));
        // A bare trailing percent is not a separator.
        assert!(!has_encoded_separator("/foo%", PathFlavor::Windows));
    }
}
