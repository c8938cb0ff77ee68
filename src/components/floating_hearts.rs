//! Ambient decoration layer: emoji hearts drifting up the screen.
//!
//! Twenty hearts with randomized position, size, speed, delay and
//! opacity, sampled once when the layer mounts. The drifting itself is
//! pure CSS; the layer never intercepts pointer events.

use dioxus::prelude::*;

use valentine_core::HeartSpec;

/// Renders the ambient heart layer behind both pages.
#[component]
pub fn FloatingHearts() -> Element {
    let hearts: Signal<Vec<HeartSpec>> = use_signal(|| HeartSpec::generate(&mut rand::rng()));

    let hearts = hearts.read();

    rsx! {
        div { class: "floating-hearts",
            for (i, heart) in hearts.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "floating-heart",
                    style: "left: {heart.x_pct}%; font-size: {heart.size_px}px; animation-duration: {heart.duration_s}s; animation-delay: {heart.delay_s}s; opacity: {heart.opacity};",
                    "{heart.emoji}"
                }
            }
        }
    }
}
