//! Thin filesystem wrappers.
//!
//! Async and sync variants of the two primitives the sibling crates'
//! callers need: existence checks and whole-file copies. Existence checks
//! never error (an unreachable path reports `false`); copies propagate
//! `std::io::Error`.

use std::io;
use std::path::Path;

use tracing::debug;

/// Whether `path` exists, without following through on errors: permission
/// failures and absent paths both report `false`.
pub async fn exists(path: impl AsRef<Path>) -> bool {
    tokio::fs::metadata(path.as_ref()).await.is_ok()
}

/// Sync variant of [`exists`].
#[must_use]
pub fn exists_sync(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Copies `src` to `dst`, overwriting `dst` if it exists. Returns the
/// number of bytes copied.
///
/// ## Errors
/// Any I/O error from reading `src` or writing `dst`.
pub async fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> io::Result<u64> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let bytes = tokio::fs::copy(src, dst).await?;
    debug!(src = %src.display(), dst = %dst.display(), bytes, "copied file");
    Ok(bytes)
}

/// Sync variant of [`copy_file`].
///
/// ## Errors
/// Any I/O error from reading `src` or writing `dst`.
pub fn copy_file_sync(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> io::Result<u64> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let bytes = std::fs::copy(src, dst)?;
    debug!(src = %src.display(), dst = %dst.display(), bytes, "copied file");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn exists_reports_presence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("present.txt");
        std::fs::write(&file, b"x").unwrap();

        assert!(exists(&file).await);
        assert!(!exists(dir.path().join("absent.txt")).await);
    }

    #[test]
    fn exists_sync_reports_presence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("present.txt");
        std::fs::write(&file, b"x").unwrap();

        assert!(exists_sync(&file));
        assert!(!exists_sync(dir.path().join("absent.txt")));
    }

    #[test_log::test(tokio::test)]
    async fn copy_file_copies_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        std::fs::write(&src, b"hello copy").unwrap();

        let bytes = copy_file(&src, &dst).await.unwrap();
        assert_eq!(bytes, 10);
        assert_eq!(std::fs::read(&dst).unwrap(), b"hello copy");
    }

    #[test_log::test(tokio::test)]
    async fn copy_file_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        std::fs::write(&src, b"new").unwrap();
        std::fs::write(&dst, b"old contents").unwrap();

        copy_file(&src, &dst).await.unwrap();
        assert_eq!(std::fs::read(&dst).unwrap(), b"new");
    }

    #[test_log::test(tokio::test)]
    async fn copy_file_missing_source_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_file(dir.path().join("absent"), dir.path().join("dst"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn copy_file_sync_copies_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        std::fs::write(&src, b"sync copy").unwrap();

        let bytes = copy_file_sync(&src, &dst).unwrap();
        assert_eq!(bytes, 9);
        assert_eq!(std::fs::read(&dst).unwrap(), b"sync copy");
    }
}
