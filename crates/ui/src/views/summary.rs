use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::Screen;
use tracing::warn;

use crate::context::use_session;
use crate::routes::Route;
use crate::views::use_screen_guard;
use crate::vm::SummaryVm;

#[component]
pub fn SummaryView() -> Element {
    let allowed = use_screen_guard(Screen::Summary);
    let mut session = use_session();
    let navigator = use_navigator();

    let vm = session.read().document().map(SummaryVm::from);
    let Some(vm) = vm.filter(|_| allowed) else {
        return rsx! {};
    };

    rsx! {
        div { class: "page summary",
            header { class: "doc-header",
                span { class: "pill", "Document Processed" }
                h2 { class: "doc-title", "{vm.filename}" }
                div { class: "doc-meta",
                    span { "{vm.read_time_str}" }
                    span { "{vm.questions_str}" }
                }
            }

            section { class: "card",
                h3 { "Summary" span { class: "badge", "AI Generated" } }
                div { class: "summary-body", dangerous_inner_html: "{vm.summary_html}" }
            }

            section { class: "card quiz-ready",
                h3 { "Interactive Quiz Ready" }
                p { "Test your understanding with {vm.question_count} questions" }
                button {
                    id: "start-quiz",
                    class: "primary",
                    disabled: vm.question_count == 0,
                    onclick: move |_| {
                        let started = session.write().start_quiz();
                        match started {
                            Ok(()) => {
                                let _ = navigator.push(Route::Quiz {});
                            }
                            Err(err) => warn!(%err, "could not start quiz"),
                        }
                    },
                    "Take Quiz Now"
                }
            }

            div { class: "actions",
                button {
                    id: "upload-another",
                    onclick: move |_| {
                        let left = session.write().upload_another();
                        match left {
                            Ok(()) => {
                                let _ = navigator.push(Route::Upload {});
                            }
                            Err(err) => warn!(%err, "could not leave summary"),
                        }
                    },
                    "Upload Another PDF"
                }
            }
        }
    }
}
