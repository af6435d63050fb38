use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::Screen;
use quiz_core::model::{UploadForm, UploadedFile};
use services::load_file;
use tracing::{info, warn};

use crate::context::{AppContext, use_session};
use crate::notify::use_notifier;
use crate::routes::Route;
#[cfg(test)]
use crate::views::test_harness::ViewTestHandles;
use crate::views::use_screen_guard;
use crate::vm::{Notification, UploadVm};

/// Everything the upload screen can be asked to do.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadIntent {
    /// A file came from the picker, a drop or a typed path.
    Pick(UploadedFile),
    Submit,
}

/// Reads the first picked file. `Err` carries the name of a file that could not be read.
async fn read_picked(files: Vec<FileData>) -> Option<Result<UploadedFile, String>> {
    let file = files.into_iter().next()?;
    let name = file.name();
    let declared = file.content_type().filter(|media_type| !media_type.is_empty());

    let Ok(bytes) = file.read_bytes().await else {
        return Some(Err(name));
    };
    let bytes = bytes.to_vec();
    Some(Ok(match declared {
        Some(media_type) => UploadedFile::new(name, media_type, bytes),
        None => UploadedFile::from_name(name, bytes),
    }))
}

#[component]
pub fn UploadView() -> Element {
    use_screen_guard(Screen::Uploading);
    let ctx = use_context::<AppContext>();
    let mut session = use_session();
    let mut notifier = use_notifier();
    let navigator = use_navigator();
    let upload_service = ctx.upload_service();
    let service_url = ctx.service_url().to_string();

    let mut form = use_signal(|| {
        let mut form = UploadForm::new();
        if let Some(file) = ctx.take_initial_file() {
            if let Err(err) = form.select(file) {
                warn!(%err, "ignoring preselected file");
            }
        }
        form
    });
    let mut path = use_signal(String::new);
    let mut dragging = use_signal(|| false);

    let upload = use_callback(move |intent: UploadIntent| match intent {
        UploadIntent::Pick(file) => {
            let selected = form.write().select(file);
            if let Err(err) = selected {
                notifier.notify(Notification::invalid_file(&err));
            }
        }
        UploadIntent::Submit => {
            let file = match form.write().begin_submit() {
                Ok(file) => file,
                Err(err) => {
                    notifier.notify(Notification::upload_blocked(&err));
                    return;
                }
            };
            let upload_service = upload_service.clone();
            spawn(async move {
                let result = upload_service.submit(&file).await;
                form.write().finish_submit(result.is_ok());
                match result {
                    Ok(document) => {
                        let question_count = document.question_count();
                        let committed = session.write().commit_document(document);
                        if let Err(err) = committed {
                            warn!(%err, "processed document arrived off the upload screen");
                            return;
                        }
                        info!(question_count, "document ready");
                        notifier.notify(Notification::processed(question_count));
                        let _ = navigator.push(Route::Summary {});
                    }
                    Err(err) => {
                        warn!(%err, "submission failed");
                        notifier.notify(Notification::from_submit_error(&err));
                    }
                }
            });
        }
    });

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<ViewTestHandles>() {
            handles.register_upload(upload);
        }
    });

    let pick_files = move |files: Vec<FileData>| {
        spawn(async move {
            match read_picked(files).await {
                Some(Ok(file)) => upload.call(UploadIntent::Pick(file)),
                Some(Err(name)) => {
                    warn!(file = %name, "could not read picked file");
                    notifier.notify(Notification::unreadable_pick(&name));
                }
                None => {}
            }
        });
    };

    let choose_path = move |_: MouseEvent| {
        let raw = path.read().trim().to_string();
        if raw.is_empty() {
            return;
        }
        spawn(async move {
            match load_file(&raw).await {
                Ok(file) => upload.call(UploadIntent::Pick(file)),
                Err(err) => {
                    warn!(%err, "could not load file");
                    notifier.notify(Notification::unreadable_file(&err));
                }
            }
        });
    };

    let vm = UploadVm::from(&*form.read());
    let drop_class = if dragging() { "drop-zone dragging" } else { "drop-zone" };

    rsx! {
        div { class: "page upload",
            section { class: "hero",
                h2 { "Turn any PDF into a summary and a quiz" }
                p { "AI-powered summaries and interactive quizzes from your own documents" }
            }

            section { class: "upload-card",
                h2 { "Upload Your PDF" }
                p { "Choose a PDF file to generate an interactive summary and quiz" }

                div {
                    class: drop_class,
                    ondragover: move |evt: DragEvent| {
                        evt.prevent_default();
                        dragging.set(true);
                    },
                    ondragleave: move |_| dragging.set(false),
                    ondrop: move |evt: DragEvent| {
                        evt.prevent_default();
                        dragging.set(false);
                        pick_files(evt.files());
                    },

                    match (vm.selected_name.as_ref(), vm.selected_size_str.as_ref()) {
                        (Some(name), Some(size)) => rsx! {
                            div { class: "selection selected",
                                h3 { "File Selected" }
                                p { class: "file-name", "{name} ({size})" }
                                p { class: "hint", "Drop or choose another file to change it" }
                            }
                        },
                        _ => rsx! {
                            div { class: "selection",
                                h3 { "Drop your PDF here" }
                                p { class: "hint", "or click to browse files" }
                            }
                        },
                    }

                    label { class: "file-browse", r#for: "file-input", "Browse files" }
                    input {
                        id: "file-input",
                        r#type: "file",
                        accept: ".pdf,application/pdf",
                        disabled: vm.in_flight,
                        onchange: move |evt: FormEvent| pick_files(evt.files()),
                    }
                }

                div { class: "file-picker",
                    input {
                        id: "file-path",
                        r#type: "text",
                        placeholder: "or type a path: /path/to/document.pdf",
                        value: "{path}",
                        oninput: move |evt| path.set(evt.value()),
                    }
                    button {
                        id: "file-choose",
                        disabled: vm.in_flight,
                        onclick: choose_path,
                        "Select"
                    }
                }

                if vm.selected_name.is_some() {
                    button {
                        id: "upload-submit",
                        class: "primary",
                        disabled: !vm.can_submit,
                        onclick: move |_| upload.call(UploadIntent::Submit),
                        "{vm.submit_label}"
                    }
                }

                p { class: "service", "Processing service: {service_url}" }
            }
        }
    }
}
