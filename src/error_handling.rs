use crate::error::{PatchError, PatchResult};
use std::path::Path;
use tracing::error;

/// Which side of the read-modify-write cycle an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    Read,
    Write,
}

/// Handles file operation errors with file path context
pub fn with_file_context<T, F>(operation: F, path: impl AsRef<Path>, access: FileAccess) -> PatchResult<T>
where
    F: FnOnce() -> std::io::Result<T>,
{
    let path_ref = path.as_ref();
    operation().map_err(|e| {
        error!(
            "{:?} failed on {}: {} (at {}:{})",
            access,
            path_ref.display(),
            e,
            file!(),
            line!()
        );

        match access {
            FileAccess::Read => PatchError::read_error(e, path_ref),
            FileAccess::Write => PatchError::write_error(e, path_ref),
        }
    })
}
