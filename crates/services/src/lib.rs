#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod file_loader;
pub mod processor;
pub mod upload_service;

pub use app_services::AppServices;
pub use config::{ConfigOverrides, ProcessingConfig};
pub use error::{AppServicesError, ConfigError, LoadFileError, ProcessingError, SubmitError};
pub use file_loader::load_file;
pub use processor::{DocumentProcessor, HttpProcessor};
pub use upload_service::UploadService;
