use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::{Screen, SessionState};
use quiz_core::model::{ProcessedDocument, UploadedFile};
use services::{DocumentProcessor, ProcessingError, UploadService};

use crate::context::{SessionSignal, UiApp, build_app_context};
use crate::notify::Notifier;
use crate::views::{QuizView, ResultsView, SummaryView, UploadIntent, UploadView};
use crate::vm::Notification;

/// Processor that records calls and always answers with the same result.
pub struct StubProcessor {
    calls: AtomicUsize,
    document: Option<ProcessedDocument>,
}

impl StubProcessor {
    pub fn returning(document: ProcessedDocument) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            document: Some(document),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            document: None,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DocumentProcessor for StubProcessor {
    async fn process(&self, _file: &UploadedFile) -> Result<ProcessedDocument, ProcessingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.document.clone().ok_or(ProcessingError::Timeout)
    }
}

struct TestApp {
    upload_service: Arc<UploadService>,
    initial_file: Option<UploadedFile>,
}

impl UiApp for TestApp {
    fn upload_service(&self) -> Arc<UploadService> {
        Arc::clone(&self.upload_service)
    }

    fn service_url(&self) -> String {
        "http://localhost:8000".to_string()
    }

    fn initial_file(&self) -> Option<UploadedFile> {
        self.initial_file.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Upload,
    Summary,
    Quiz,
    Results,
}

/// Lets tests reach the signals and callbacks a mounted view owns.
#[derive(Clone, Default)]
pub struct ViewTestHandles {
    session: Rc<RefCell<Option<SessionSignal>>>,
    notifier: Rc<RefCell<Option<Notifier>>>,
    upload: Rc<RefCell<Option<Callback<UploadIntent>>>>,
    redirects: Rc<RefCell<Vec<Screen>>>,
}

impl ViewTestHandles {
    fn register(&self, session: SessionSignal, notifier: Notifier) {
        *self.session.borrow_mut() = Some(session);
        *self.notifier.borrow_mut() = Some(notifier);
    }

    pub(crate) fn register_upload(&self, upload: Callback<UploadIntent>) {
        *self.upload.borrow_mut() = Some(upload);
    }

    pub(crate) fn record_redirect(&self, screen: Screen) {
        self.redirects.borrow_mut().push(screen);
    }

    pub fn session(&self) -> SessionState {
        let session = (*self.session.borrow()).expect("session registered");
        session.peek().clone()
    }

    pub fn notification(&self) -> Option<Notification> {
        let notifier = (*self.notifier.borrow()).expect("notifier registered");
        notifier.peek()
    }

    pub fn upload(&self) -> Callback<UploadIntent> {
        (*self.upload.borrow()).expect("upload callback registered")
    }

    pub fn redirects(&self) -> Vec<Screen> {
        self.redirects.borrow().clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    state: SessionState,
    handles: ViewTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let state = props.state.clone();
    let session = use_context_provider(move || -> SessionSignal { Signal::new(state) });
    let notifier = use_context_provider(Notifier::new);
    use_context_provider(|| props.view);
    let handles = use_context_provider(|| props.handles.clone());
    use_hook(|| handles.register(session, notifier));
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Upload => rsx! { UploadView {} },
        ViewKind::Summary => rsx! { SummaryView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: ViewTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Sends an intent to the mounted upload view.
    pub fn upload(&mut self, intent: UploadIntent) {
        let upload = self.handles.upload();
        self.dom.in_runtime(|| upload.call(intent));
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, state: SessionState) -> ViewHarness {
    setup_view_harness_with(view, state, StubProcessor::failing(), None)
}

pub fn setup_view_harness_with(
    view: ViewKind,
    state: SessionState,
    processor: Arc<dyn DocumentProcessor>,
    initial_file: Option<UploadedFile>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        upload_service: Arc::new(UploadService::new(processor)),
        initial_file,
    });

    let handles = ViewTestHandles::default();
    let props = ViewHarnessProps {
        app,
        view,
        state,
        handles: handles.clone(),
    };
    let dom = VirtualDom::new_with_props(ViewRouterHarness, props);
    ViewHarness { dom, handles }
}
