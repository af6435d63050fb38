use std::fmt;
use std::path::Path;

use thiserror::Error;

/// The only media type the processing endpoint accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Rejections raised before any network activity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("no file selected or the file is empty")]
    Empty,

    #[error("unsupported media type: {media_type}")]
    UnsupportedMediaType { media_type: String },
}

/// Errors from driving the upload form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UploadError {
    #[error("no file selected")]
    NothingSelected,

    #[error("an upload is already in progress")]
    AlreadyInFlight,
}

//
// ─── UPLOADED FILE ────────────────────────────────────────────────────────────
//

/// A file picked by the user, before it is sent anywhere.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl UploadedFile {
    /// Creates a file with an explicitly declared media type.
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Creates a file whose media type is derived from the file name extension.
    #[must_use]
    pub fn from_name(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let media_type = media_type_for_name(&name);
        Self::new(name, media_type, bytes)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Checks the file is something the processing endpoint will take.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` for an empty file and
    /// `ValidationError::UnsupportedMediaType` for anything that is not a PDF.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bytes.is_empty() {
            return Err(ValidationError::Empty);
        }
        if self.media_type != PDF_MEDIA_TYPE {
            return Err(ValidationError::UnsupportedMediaType {
                media_type: self.media_type.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Maps a file name to a media type by its extension (case-insensitive).
#[must_use]
pub fn media_type_for_name(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("pdf") => PDF_MEDIA_TYPE,
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("html" | "htm") => "text/html",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => FALLBACK_MEDIA_TYPE,
    }
}

//
// ─── UPLOAD FORM ──────────────────────────────────────────────────────────────
//

/// Selection and in-flight bookkeeping for the upload screen.
///
/// At most one submission is in flight at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    selected: Option<UploadedFile>,
    in_flight: bool,
}

impl UploadForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a file, keeping the previous selection if the new one is invalid.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the file is empty or not a PDF.
    pub fn select(&mut self, file: UploadedFile) -> Result<(), ValidationError> {
        file.validate()?;
        self.selected = Some(file);
        Ok(())
    }

    #[must_use]
    pub fn selected(&self) -> Option<&UploadedFile> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.in_flight
    }

    /// Marks a submission as started and hands out the file to send.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::AlreadyInFlight` while a submission is pending and
    /// `UploadError::NothingSelected` when no file has been selected.
    pub fn begin_submit(&mut self) -> Result<UploadedFile, UploadError> {
        if self.in_flight {
            return Err(UploadError::AlreadyInFlight);
        }
        let file = self.selected.clone().ok_or(UploadError::NothingSelected)?;
        self.in_flight = true;
        Ok(file)
    }

    /// Marks the pending submission as finished. A successful one consumes the selection.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.in_flight = false;
        if succeeded {
            self.selected = None;
        }
    }
}
