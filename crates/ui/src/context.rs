use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use quiz_core::SessionState;
use quiz_core::model::UploadedFile;
use services::UploadService;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn upload_service(&self) -> Arc<UploadService>;
    fn service_url(&self) -> String;

    /// A file to preselect on the upload screen (e.g. from the command line).
    fn initial_file(&self) -> Option<UploadedFile> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    upload_service: Arc<UploadService>,
    service_url: String,
    initial_file_once: Arc<Mutex<Option<UploadedFile>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            upload_service: app.upload_service(),
            service_url: app.service_url(),
            initial_file_once: Arc::new(Mutex::new(app.initial_file())),
        }
    }

    #[must_use]
    pub fn upload_service(&self) -> Arc<UploadService> {
        Arc::clone(&self.upload_service)
    }

    #[must_use]
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Hands out the preselected file the first time only.
    #[must_use]
    pub fn take_initial_file(&self) -> Option<UploadedFile> {
        self.initial_file_once
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The session state shared by every view, provided once at the root.
pub type SessionSignal = Signal<SessionState>;

#[must_use]
pub fn use_session() -> SessionSignal {
    use_context::<SessionSignal>()
}
