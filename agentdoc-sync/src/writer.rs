//! Atomic document writer.
//!
//! ## `write_document` protocol
//!
//! 1. Normalise line endings to LF.
//! 2. Read the current file (if any) to classify the write. CRLF on disk
//!    compares equal to the same text with LF endings.
//! 3. `--dry-run`: stop here and report [`WriteResult::WouldWrite`].
//! 4. Create parent directories.
//! 5. Write to `<path>.agentdoc.tmp`.
//! 6. Rename over the final path (atomic on POSIX); remove the tmp on failure.
//!
//! Every non-dry-run call rewrites the file, even when content is identical.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// The file did not exist before.
    Created { path: PathBuf },
    /// The file existed with different content.
    Updated { path: PathBuf },
    /// The file was rewritten with the content it already had.
    Identical { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Created { path }
            | WriteResult::Updated { path }
            | WriteResult::Identical { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// write_document
// ---------------------------------------------------------------------------

/// Atomically write one rendered document.
pub fn write_document(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, SyncError> {
    let tmp = PathBuf::from(format!("{}.agentdoc.tmp", path.display()));
    write_document_with_tmp(path, content, dry_run, &tmp)
}

fn write_document_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, SyncError> {
    let normalized = content.replace("\r\n", "\n");
    let previous = read_existing(path)?;

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, &normalized).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    let path = path.to_path_buf();
    let result = match previous {
        None => WriteResult::Created { path },
        Some(bytes) if String::from_utf8_lossy(&bytes).replace("\r\n", "\n") == normalized => {
            WriteResult::Identical { path }
        }
        Some(_) => WriteResult::Updated { path },
    };
    tracing::debug!("wrote: {} ({:?})", result.path().display(), result);
    Ok(result)
}

pub(crate) fn read_existing(path: &Path) -> Result<Option<Vec<u8>>, SyncError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn first_write_returns_created() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("qa-engineer.md");
        let result = write_document(&path, "hello\n", false).unwrap();
        assert_eq!(result, WriteResult::Created { path: path.clone() });
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn same_content_is_rewritten_and_reported_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.md");
        write_document(&path, "same\n", false).unwrap();
        let result = write_document(&path, "same\n", false).unwrap();
        assert!(matches!(result, WriteResult::Identical { .. }));
    }

    #[test]
    fn changed_content_returns_updated() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.md");
        write_document(&path, "v1\n", false).unwrap();
        let result = write_document(&path, "v2\n", false).unwrap();
        assert!(matches!(result, WriteResult::Updated { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2\n");
    }

    #[test]
    fn dry_run_reports_would_write_for_new_and_existing_files() {
        let tmp = TempDir::new().unwrap();
        let existing = tmp.path().join("architect.md");
        fs::write(&existing, "old\n").unwrap();
        let fresh = tmp.path().join("agents").join("qa-engineer.md");

        for path in [&existing, &fresh] {
            let result = write_document(path, "new\n", true).unwrap();
            assert_eq!(result, WriteResult::WouldWrite { path: path.clone() });
        }
        assert_eq!(fs::read_to_string(&existing).unwrap(), "old\n");
        assert!(!fresh.parent().unwrap().exists());
    }

    #[test]
    fn crlf_file_on_disk_is_identical_to_lf_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("release-manager.md");
        fs::write(&path, "a\r\nb\r\n").unwrap();
        let result = write_document(&path, "a\nb\n", false).unwrap();
        assert!(matches!(result, WriteResult::Identical { .. }), "{result:?}");
        assert_eq!(fs::read(&path).unwrap(), b"a\nb\n");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean.md");
        write_document(&path, "data", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.agentdoc.tmp", path.display()));
        assert!(!tmp_path.exists(), ".agentdoc.tmp must be cleaned up");
    }

    #[test]
    fn creates_missing_output_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("agents").join("architect.md");
        write_document(&path, "content", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn crlf_is_normalised() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("normalize.md");
        write_document(&path, "line1\r\nline2\r\n", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "line1\nline2\n");
        let second = write_document(&path, "line1\nline2\n", false).unwrap();
        assert!(matches!(second, WriteResult::Identical { .. }));
    }

    #[test]
    fn directory_at_document_path_is_an_io_error() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("devops-engineer.md");
        fs::create_dir_all(path.join("occupied")).unwrap();

        let err = write_document(&path, "body\n", false).unwrap_err();
        assert!(matches!(err, SyncError::Io { path: ref p, .. } if p == &path), "{err:?}");
        assert!(path.join("occupied").is_dir());
        assert!(!root.path().join("devops-engineer.md.agentdoc.tmp").exists());
    }

    #[test]
    #[cfg(unix)]
    fn failed_rename_keeps_previous_document() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let agents = root.path().join("agents");
        let path = agents.join("architect.md");
        write_document(&path, "v1\n", false).unwrap();

        let tmp_dir = TempDir::new().unwrap();
        let tmp_path = tmp_dir.path().join("architect.md.agentdoc.tmp");
        fs::set_permissions(&agents, fs::Permissions::from_mode(0o555)).unwrap();
        let outcome = write_document_with_tmp(&path, "v2\n", false, &tmp_path);
        fs::set_permissions(&agents, fs::Permissions::from_mode(0o755)).unwrap();

        // Privileged users can rename into read-only directories.
        if outcome.is_err() {
            assert!(!tmp_path.exists(), ".agentdoc.tmp should be removed");
            assert_eq!(fs::read_to_string(&path).unwrap(), "v1\n");
            let retry = write_document(&path, "v2\n", false).unwrap();
            assert!(matches!(retry, WriteResult::Updated { .. }), "{retry:?}");
        } else {
            assert!(matches!(outcome, Ok(WriteResult::Updated { .. })), "{outcome:?}");
        }
    }
}
