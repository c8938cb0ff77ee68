use dioxus::prelude::*;

use crate::components::FloatingHearts;
use crate::pages::{AskPage, CelebrationPage};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the single session boolean: `accepted` starts false and flips
/// true exactly once, when the proposal's YES button fires. Exactly one
/// of the two pages is mounted at any time; there is no way back short
/// of restarting the app.
#[component]
pub fn App() -> Element {
    let mut accepted: Signal<bool> = use_signal(|| false);

    let on_accept = move |_: ()| {
        if accepted() {
            return;
        }
        tracing::info!("They said YES");
        accepted.set(true);
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell",
            // Ambient background blobs
            div { class: "ambient-layer",
                div { class: "blob blob-top" }
                div { class: "blob blob-bottom" }
                div { class: "blob blob-center" }
            }

            FloatingHearts {}

            div { class: "app-content",
                if accepted() {
                    CelebrationPage {}
                } else {
                    AskPage { on_accept }
                }
            }
        }
    }
}
