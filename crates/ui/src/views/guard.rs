use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::Screen;
use tracing::debug;

use crate::context::use_session;
use crate::routes::Route;
#[cfg(test)]
use crate::views::test_harness::ViewTestHandles;

/// Enters `screen` on mount, redirecting when its data is missing.
///
/// Returns whether the screen may render right now.
pub fn use_screen_guard(screen: Screen) -> bool {
    let mut session = use_session();
    let navigator = use_navigator();
    let allowed = screen.check(session.read().prerequisites()).is_ok();

    use_effect(move || {
        let entered = session.write().enter(screen);
        if let Err(violation) = entered {
            debug!(%violation, "redirecting");
            #[cfg(test)]
            {
                if let Some(handles) = try_consume_context::<ViewTestHandles>() {
                    handles.record_redirect(violation.redirect);
                }
            }
            let _ = navigator.replace(Route::from(violation.redirect));
        }
    });

    allowed
}
