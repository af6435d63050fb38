use std::sync::Arc;

use tracing::{info, warn};

use quiz_core::model::{ProcessedDocument, UploadedFile};

use crate::error::SubmitError;
use crate::processor::DocumentProcessor;

/// Validates a picked file and hands it to the processor.
#[derive(Clone)]
pub struct UploadService {
    processor: Arc<dyn DocumentProcessor>,
}

impl UploadService {
    #[must_use]
    pub fn new(processor: Arc<dyn DocumentProcessor>) -> Self {
        Self { processor }
    }

    /// Validates `file`, then sends it for processing exactly once.
    ///
    /// Invalid files never reach the processor. The caller commits the returned
    /// document to its session state; nothing is committed on error.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Validation` for empty or non-PDF files and
    /// `SubmitError::Processing` when the request or its response fails.
    pub async fn submit(&self, file: &UploadedFile) -> Result<ProcessedDocument, SubmitError> {
        if let Err(err) = file.validate() {
            warn!(file = file.name(), media_type = file.media_type(), %err, "rejected upload");
            return Err(err.into());
        }

        let document = self.processor.process(file).await?;
        info!(
            file = file.name(),
            questions = document.question_count(),
            "upload processed"
        );
        Ok(document)
    }
}
