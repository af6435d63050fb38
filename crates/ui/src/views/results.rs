use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::Screen;
use tracing::warn;

use crate::context::use_session;
use crate::routes::Route;
use crate::views::use_screen_guard;
use crate::vm::{ResultsVm, ReviewVm};

#[component]
pub fn ResultsView() -> Element {
    let allowed = use_screen_guard(Screen::QuizResults);
    let mut session = use_session();
    let navigator = use_navigator();

    let vm = ResultsVm::from_state(&session.read());
    let Some(vm) = vm.filter(|_| allowed) else {
        return rsx! {};
    };

    rsx! {
        div { class: "page results",
            section { class: "card score",
                h2 { "Quiz Complete!" }
                p { class: "score-line", "{vm.score_str}" }
                div { class: "score-pct", "{vm.percentage_str}" }
                div { class: "score-message", "{vm.message}" }
            }

            div { class: "reviews",
                for review in vm.questions.iter().cloned() {
                    ReviewCard { key: "{review.number}", review }
                }
            }

            div { class: "actions",
                button {
                    id: "back-to-summary",
                    onclick: move |_| {
                        let moved = session.write().back_to_summary();
                        match moved {
                            Ok(()) => {
                                let _ = navigator.push(Route::Summary {});
                            }
                            Err(err) => warn!(%err, "could not return to summary"),
                        }
                    },
                    "Back to Summary"
                }
                button {
                    id: "upload-another",
                    class: "primary",
                    onclick: move |_| {
                        let moved = session.write().upload_another();
                        match moved {
                            Ok(()) => {
                                let _ = navigator.push(Route::Upload {});
                            }
                            Err(err) => warn!(%err, "could not leave results"),
                        }
                    },
                    "Upload Another PDF"
                }
            }
        }
    }
}

#[component]
fn ReviewCard(review: ReviewVm) -> Element {
    let badge_class = if review.is_correct { "badge correct" } else { "badge incorrect" };

    rsx! {
        section { class: "card review",
            div { class: "review-header",
                h3 { "Question {review.number}" }
                span {
                    class: badge_class,
                    "{review.badge}"
                }
            }
            p { class: "review-question", "{review.question}" }
            ul { class: "review-options",
                for option in review.options.iter() {
                    li { class: option.class, "{option.text}" }
                }
            }
        }
    }
}
