use std::sync::Arc;

use crate::config::ProcessingConfig;
use crate::error::AppServicesError;
use crate::processor::{DocumentProcessor, HttpProcessor};
use crate::upload_service::UploadService;

/// Assembles app-facing services from the processing configuration.
#[derive(Clone)]
pub struct AppServices {
    config: ProcessingConfig,
    upload_service: Arc<UploadService>,
}

impl AppServices {
    /// Build services that talk to the HTTP processing endpoint.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn new_http(config: ProcessingConfig) -> Result<Self, AppServicesError> {
        let processor: Arc<dyn DocumentProcessor> = Arc::new(HttpProcessor::new(config.clone())?);
        Ok(Self::with_processor(config, processor))
    }

    /// Build services around any processor (tests, alternate backends).
    #[must_use]
    pub fn with_processor(config: ProcessingConfig, processor: Arc<dyn DocumentProcessor>) -> Self {
        Self {
            config,
            upload_service: Arc::new(UploadService::new(processor)),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    #[must_use]
    pub fn upload_service(&self) -> Arc<UploadService> {
        Arc::clone(&self.upload_service)
    }
}
