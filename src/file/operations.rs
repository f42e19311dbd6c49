use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::PatchResult;
use crate::error_handling::{with_file_context, FileAccess};

/// Read the whole file into memory as UTF-8 text.
///
/// Content that is not valid UTF-8 is reported as a read error, the same as a
/// missing or unreadable file.
pub fn read_text(path: &Path) -> PatchResult<String> {
    let content = with_file_context(|| fs::read_to_string(path), path, FileAccess::Read)?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Overwrite the file with `content`.
///
/// The file is truncated before writing and nothing is staged elsewhere, so a
/// failure part way through can leave it short.
pub fn write_text(path: &Path, content: &str) -> PatchResult<()> {
    with_file_context(|| fs::write(path, content), path, FileAccess::Write)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Main.java");

        write_text(&path, "class Main {}\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "class Main {}\n");
    }

    #[test]
    fn test_write_truncates_longer_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Main.java");
        fs::write(&path, "a much longer line than what follows\n").unwrap();

        write_text(&path, "short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.java");

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, PatchError::Read { .. }));
        assert!(err.is_not_found());
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Main.java");
        fs::write(&path, [0x69, 0x6e, 0xff, 0xfe]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, PatchError::Read { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/Main.java");

        let err = write_text(&path, "x").unwrap_err();
        assert!(matches!(err, PatchError::Write { .. }));
    }
}
