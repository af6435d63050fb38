use quiz_core::model::{UploadError, ValidationError};
use services::{LoadFileError, SubmitError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message shown on top of the current view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn new(kind: NotificationKind, title: &str, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn processed(question_count: usize) -> Self {
        Self::new(
            NotificationKind::Success,
            "PDF processed successfully!",
            format!("Generated summary and {question_count} quiz questions."),
        )
    }

    #[must_use]
    pub fn invalid_file(err: &ValidationError) -> Self {
        match err {
            ValidationError::Empty => Self::new(
                NotificationKind::Error,
                "Empty file",
                "The selected file is empty. Please select a PDF file.",
            ),
            _ => Self::new(
                NotificationKind::Error,
                "Invalid file type",
                "Please select a PDF file.",
            ),
        }
    }

    #[must_use]
    pub fn unreadable_file(err: &LoadFileError) -> Self {
        Self::new(NotificationKind::Error, "Could not open file", err.to_string())
    }

    #[must_use]
    pub fn unreadable_pick(name: &str) -> Self {
        Self::new(
            NotificationKind::Error,
            "Could not open file",
            format!("{name} could not be read. Please try another file."),
        )
    }

    #[must_use]
    pub fn upload_blocked(err: &UploadError) -> Self {
        Self::new(NotificationKind::Error, "Upload not started", err.to_string())
    }

    #[must_use]
    pub fn processing_failed() -> Self {
        Self::new(
            NotificationKind::Error,
            "Processing failed",
            "Failed to process your PDF. Please try again.",
        )
    }

    #[must_use]
    pub fn from_submit_error(err: &SubmitError) -> Self {
        match err {
            SubmitError::Validation(err) => Self::invalid_file(err),
            _ => Self::processing_failed(),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            NotificationKind::Success => "toast success",
            NotificationKind::Error => "toast error",
        }
    }
}
