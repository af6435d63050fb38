use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use quiz_core::Screen;

use crate::notify::Toast;
use crate::views::{QuizView, ResultsView, SummaryView, UploadView};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", UploadView)] Upload {},
        #[route("/summary", SummaryView)] Summary {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/results", ResultsView)] Results {},
}

impl Route {
    #[must_use]
    pub fn screen(&self) -> Screen {
        match self {
            Route::Upload {} => Screen::Uploading,
            Route::Summary {} => Screen::Summary,
            Route::Quiz {} => Screen::QuizInProgress,
            Route::Results {} => Screen::QuizResults,
        }
    }
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Uploading => Route::Upload {},
            Screen::Summary => Route::Summary {},
            Screen::QuizInProgress => Route::Quiz {},
            Screen::QuizResults => Route::Results {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "PDF Quest Genius" }
            }
            Toast {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
