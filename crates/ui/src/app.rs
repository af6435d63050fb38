use dioxus::prelude::*;
use dioxus_router::Router;
use quiz_core::SessionState;

use crate::context::SessionSignal;
use crate::notify::Notifier;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_context_provider(|| -> SessionSignal { Signal::new(SessionState::new()) });
    use_context_provider(Notifier::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "PDF Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
