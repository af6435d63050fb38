use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::vm::Notification;

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Shows one transient notification at a time; a newer one replaces the older.
#[derive(Clone, Copy)]
pub struct Notifier {
    current: Signal<Option<Notification>>,
    seq: Signal<u64>,
}

impl Notifier {
    /// Must be called inside a component scope (it allocates signals).
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            seq: Signal::new(0),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.current.read().clone()
    }

    pub fn notify(&mut self, notification: Notification) {
        let id = {
            let mut seq = self.seq.write();
            *seq += 1;
            *seq
        };
        self.current.set(Some(notification));

        let mut current = self.current;
        let seq = self.seq;
        // Root-scoped so the timer survives the view that raised it.
        spawn_forever(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            if *seq.peek() == id {
                current.set(None);
            }
        });
    }

    /// Current notification without subscribing the caller.
    #[cfg(test)]
    pub(crate) fn peek(&self) -> Option<Notification> {
        self.current.peek().clone()
    }

    pub fn dismiss(&mut self) {
        self.current.set(None);
    }
}

#[must_use]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

#[component]
pub fn Toast() -> Element {
    let mut notifier = use_notifier();
    let Some(notification) = notifier.current() else {
        return rsx! {};
    };

    rsx! {
        div { class: notification.class(), role: "status",
            div { class: "toast-body",
                strong { "{notification.title}" }
                p { "{notification.description}" }
            }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| notifier.dismiss(),
                "×"
            }
        }
    }
}
