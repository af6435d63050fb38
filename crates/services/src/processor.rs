use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info, warn};

use quiz_core::model::{ProcessedDocument, UploadedFile};

use crate::config::ProcessingConfig;
use crate::error::{AppServicesError, ProcessingError};

/// Multipart field the endpoint reads the document from.
pub const FILE_FIELD: &str = "file";

/// Turns an uploaded file into a summary and quiz.
#[async_trait]
pub trait DocumentProcessor: Send + Sync {
    /// Sends `file` for processing. One call is one request; nothing is retried.
    async fn process(&self, file: &UploadedFile) -> Result<ProcessedDocument, ProcessingError>;
}

/// `DocumentProcessor` backed by the HTTP `/process` endpoint.
#[derive(Clone)]
pub struct HttpProcessor {
    client: Client,
    config: ProcessingConfig,
}

impl HttpProcessor {
    /// # Errors
    ///
    /// Returns `AppServicesError::Client` if the HTTP client cannot be built.
    pub fn new(config: ProcessingConfig) -> Result<Self, AppServicesError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(AppServicesError::Client)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl DocumentProcessor for HttpProcessor {
    async fn process(&self, file: &UploadedFile) -> Result<ProcessedDocument, ProcessingError> {
        let url = self.config.process_url().clone();
        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.name().to_string())
            .mime_str(file.media_type())?;
        let form = Form::new().part(FILE_FIELD, part);

        info!(%url, file = file.name(), bytes = file.len(), "submitting document");
        let response = self.client.post(url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.detail);
            warn!(%status, detail = detail.as_deref(), "processing endpoint rejected document");
            return Err(ProcessingError::HttpStatus { status, detail });
        }

        let body = response.bytes().await?;
        let document: ProcessedDocument = serde_json::from_slice(&body).map_err(|err| {
            warn!(error = %err, "processing response is malformed");
            ProcessingError::Malformed(err)
        })?;

        debug!(
            filename = document.filename(),
            questions = document.question_count(),
            "document processed"
        );
        Ok(document)
    }
}

/// Error payload the endpoint sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}
