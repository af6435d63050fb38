use std::path::Path;

use tracing::debug;

use quiz_core::model::UploadedFile;

use crate::error::LoadFileError;

/// Reads a file from disk into an `UploadedFile`, deriving its media type from the name.
///
/// No validation happens here; selection and submission validate.
///
/// # Errors
///
/// Returns `LoadFileError` when the path has no file name or cannot be read.
pub async fn load_file(path: impl AsRef<Path>) -> Result<UploadedFile, LoadFileError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| LoadFileError::NoFileName {
            path: path.to_path_buf(),
        })?;

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| LoadFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(file = %name, bytes = bytes.len(), "loaded file from disk");
    Ok(UploadedFile::from_name(name, bytes))
}
