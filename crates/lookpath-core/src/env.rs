//! Environment capability for the resolver.
//!
//! The search algorithm never touches process globals directly; everything
//! it needs (variable lookup, platform flag, file stats) comes in through
//! this trait so the search is deterministic under test.

use async_trait::async_trait;
use std::io;

/// What the resolver needs from the host: environment variables, a platform
/// flag, and file stats in both blocking and suspending form.
///
/// Stat methods follow symlinks and report whether the target is a regular
/// file. Permission denial must surface as `io::ErrorKind::PermissionDenied`
/// so the resolver can abort on it structurally; any other failure
/// (including "not found") is treated as a non-match.
#[async_trait]
pub trait Environment: Sync {
    /// Gets an environment variable, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;

    /// Whether the platform uses Windows path conventions (`;` PATH
    /// delimiter, `\` separator, PATHEXT extension inference).
    fn is_windows(&self) -> bool;

    /// Resolves whether `path` is a regular file, following symlinks.
    async fn stat_is_file(&self, path: &str) -> io::Result<bool>;

    /// Synchronous form of [`Environment::stat_is_file`].
    fn stat_is_file_blocking(&self, path: &str) -> io::Result<bool>;
}

/// The real process environment: `std::env`, `std::fs`, and `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnvironment;

#[async_trait]
impl Environment for RealEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    async fn stat_is_file(&self, path: &str) -> io::Result<bool> {
        let meta = tokio::fs::metadata(path).await?;
        Ok(meta.is_file())
    }

    fn stat_is_file_blocking(&self, path: &str) -> io::Result<bool> {
        let meta = std::fs::metadata(path)?;
        Ok(meta.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn test_var_reads_process_env() {
        std::env::set_var("LOOKPATH_TEST_VAR", "value");
        assert_eq!(
            RealEnvironment.var("LOOKPATH_TEST_VAR"),
            Some("value".to_string())
        );
        std::env::remove_var("LOOKPATH_TEST_VAR");
        assert_eq!(RealEnvironment.var("LOOKPATH_TEST_VAR"), None);
    }

    #[test]
    fn test_stat_blocking_regular_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tool");
        std::fs::write(&file, b"#!/bin/sh\n").unwrap();

        assert!(RealEnvironment
            .stat_is_file_blocking(file.to_str().unwrap())
            .unwrap());
        // A directory stats fine but is not a regular file
        assert!(!RealEnvironment
            .stat_is_file_blocking(dir.path().to_str().unwrap())
            .unwrap());
    }

    #[test]
    fn test_stat_blocking_missing_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = RealEnvironment
            .stat_is_file_blocking(missing.to_str().unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_stat_async_matches_blocking() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("tool");
        std::fs::write(&file, b"").unwrap();

        let path = file.to_str().unwrap();
        assert!(RealEnvironment.stat_is_file(path).await.unwrap());
        assert!(RealEnvironment.stat_is_file_blocking(path).unwrap());
    }
}
