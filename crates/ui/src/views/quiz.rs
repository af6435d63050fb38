use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::Screen;
use tracing::{info, warn};

use crate::context::use_session;
use crate::routes::Route;
use crate::views::use_screen_guard;
use crate::vm::{OptionVm, QuizVm, StepVm};

#[component]
pub fn QuizView() -> Element {
    let allowed = use_screen_guard(Screen::QuizInProgress);
    let mut session = use_session();
    let navigator = use_navigator();

    let vm = QuizVm::from_state(&session.read());
    let Some(vm) = vm.filter(|_| allowed) else {
        return rsx! {};
    };
    let index = vm.index;

    rsx! {
        div { class: "page quiz",
            header { class: "quiz-header",
                span { class: "pill", "Interactive Quiz" }
                h2 { "Test Your Knowledge" }
                p { "Answer all questions to see your results" }
            }

            div { class: "progress",
                span { "Progress" }
                span { class: "progress-count", "{vm.progress_str}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {vm.progress_pct}%" }
                }
            }

            nav { class: "steps",
                for step in vm.steps.iter().copied() {
                    StepDot { key: "{step.index}", step }
                }
            }

            section { class: "card question",
                p { class: "position", "{vm.position_str}" }
                h3 { "{vm.question}" }
                div { class: "options", role: "radiogroup",
                    for (option_index, option) in vm.options.iter().cloned().enumerate() {
                        OptionRow {
                            key: "{index}-{option_index}",
                            question_index: index,
                            option_index,
                            option,
                        }
                    }
                }
            }

            div { class: "actions",
                button {
                    id: "quiz-previous",
                    disabled: !vm.has_previous,
                    onclick: move |_| session.write().previous_question(),
                    "Previous"
                }
                button {
                    id: "quiz-next",
                    disabled: !vm.has_next,
                    onclick: move |_| session.write().next_question(),
                    "Next"
                }
                button {
                    id: "quiz-submit",
                    class: "primary",
                    disabled: !vm.can_submit,
                    onclick: move |_| {
                        let submitted = session.write().submit_quiz();
                        match submitted {
                            Ok(result) => {
                                info!(score = result.score, total = result.total, "quiz submitted");
                                let _ = navigator.push(Route::Results {});
                            }
                            Err(err) => warn!(%err, "quiz not submitted"),
                        }
                    },
                    "{vm.submit_label}"
                }
            }
        }
    }
}

#[component]
fn StepDot(step: StepVm) -> Element {
    let mut session = use_session();
    let class = match (step.current, step.answered) {
        (true, _) => "step current",
        (false, true) => "step answered",
        (false, false) => "step",
    };
    let number = step.index + 1;

    rsx! {
        button {
            class: class,
            onclick: move |_| session.write().go_to_question(step.index),
            "{number}"
        }
    }
}

#[component]
fn OptionRow(question_index: usize, option_index: usize, option: OptionVm) -> Element {
    let mut session = use_session();
    let id = format!("q{question_index}-option{option_index}");
    let text = option.text.clone();
    let class = if option.selected { "option selected" } else { "option" };

    rsx! {
        label {
            class: class,
            r#for: "{id}",
            input {
                id: "{id}",
                r#type: "radio",
                name: "q{question_index}",
                checked: option.selected,
                onchange: move |_| session.write().select_answer(question_index, text.clone()),
            }
            span { "{option.text}" }
        }
    }
}
