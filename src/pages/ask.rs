//! The proposal - "Will you be my Valentine?"
//!
//! The No button dodges the pointer: every approach relocates it to a
//! fresh random spot and escalates the YES button, the mascot's
//! despair and the captions. Accepting hands control back to the app
//! shell, which swaps in the celebration page.

use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

use valentine_core::{ProposalState, Viewport};

/// Decorative emoji strip at the bottom of the page.
const FOOTER_EMOJIS: &[&str] = &["🌹", "💕", "💗", "💕", "🌹"];

/// Proposal view component.
#[component]
pub fn AskPage(on_accept: EventHandler<()>) -> Element {
    let mut state: Signal<ProposalState> = use_signal(ProposalState::new);
    let mut show_entrance = use_signal(|| false);

    // Entrance reveal shortly after mount.
    use_effect(move || {
        spawn(async move {
            sleep(Duration::from_millis(100)).await;
            show_entrance.set(true);
        });
    });

    // One transition for mouse-enter, touch-start and click on No.
    let mut evade = move || {
        let viewport = current_viewport();
        state.write().evade(&mut rand::rng(), viewport);
    };

    let snapshot = state.read().clone();
    let mood_emoji = snapshot.mood().emoji();
    let evade_count = snapshot.evade_count();
    let subtitle = snapshot.subtitle();
    let yes_label = snapshot.yes_label();
    let no_label = snapshot.no_label();
    let yes_scale = snapshot.yes_scale();
    let yes_font = snapshot.yes_font_rem();
    let (yes_pad_v, yes_pad_h) = snapshot.yes_padding_rem();
    let no_opacity = snapshot.no_opacity();
    let no_font = snapshot.no_font_rem();

    let revealed = if show_entrance() { "revealed" } else { "" };

    rsx! {
        div { class: "ask-page",
            // Mascot with thought bubble
            div { class: "entrance {revealed} mascot-wrap",
                div { class: "mascot-inner",
                    div { class: "mascot bounce-slow", "{mood_emoji}" }

                    if let Some(bubble) = snapshot.thought_bubble() {
                        div { class: "thought-bubble fade-in",
                            p { "{bubble}" }
                            div { class: "thought-tail" }
                        }
                    }
                }
            }

            // The question
            h1 { class: "entrance delay-200 {revealed} headline",
                if let Some(name) = crate::recipient_name() {
                    span { class: "headline-line", "{name}, will you be my" }
                } else {
                    span { class: "headline-line", "Will you be my" }
                }
                span { class: "headline-line alt", "Valentine? 💝" }
            }

            // Escalating caption; keyed so the fade replays per tier.
            p {
                key: "{evade_count}",
                class: "entrance delay-400 {revealed} subtitle",
                "{subtitle}"
            }

            // Buttons
            div { class: "entrance delay-500 {revealed} button-row",
                button {
                    class: "yes-button",
                    style: "transform: scale({yes_scale}); font-size: {yes_font}rem; padding: {yes_pad_v}rem {yes_pad_h}rem;",
                    onclick: move |_| on_accept.call(()),
                    "{yes_label}"
                }

                // Inline No, only until the first evasion
                if !snapshot.is_floating() {
                    button {
                        class: "no-button inline",
                        onmouseenter: move |_| evade(),
                        ontouchstart: move |evt| {
                            evt.prevent_default();
                            evade();
                        },
                        onclick: move |_| evade(),
                        "{no_label}"
                    }
                }
            }

            // Floating No, from the first evasion on
            if let Some(pos) = snapshot.evade_pos() {
                button {
                    class: "no-button floating",
                    style: "left: {pos.x}px; top: {pos.y}px; font-size: {no_font}rem; opacity: {no_opacity};",
                    onmouseenter: move |_| evade(),
                    ontouchstart: move |evt| {
                        evt.prevent_default();
                        evade();
                    },
                    onclick: move |_| evade(),
                    "{no_label}"
                }
            }

            // Evasion tally
            if evade_count > 0 {
                div { class: "evade-tally fade-in",
                    p { class: "tally-line",
                        "Times you tried to say no: "
                        span { class: "tally-count", "{evade_count}" }
                    }
                    div { class: "tally-hearts",
                        for i in 0..snapshot.broken_hearts() {
                            {
                                let delay = f64::from(i) * 0.1;
                                rsx! {
                                    span {
                                        key: "{i}",
                                        class: "tally-heart bounce-slow",
                                        style: "animation-delay: {delay}s;",
                                        "💔"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Decorative bottom strip
            div { class: "ask-footer",
                for (i, emoji) in FOOTER_EMOJIS.iter().enumerate() {
                    {
                        let delay = i as f64 * 0.4;
                        rsx! {
                            span {
                                key: "{i}",
                                class: "footer-emoji pulse",
                                style: "animation-delay: {delay}s;",
                                "{emoji}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Read the window's logical size at evasion time, so random placement
/// tracks resizes.
fn current_viewport() -> Viewport {
    let window = dioxus::desktop::window();
    let scale = window.scale_factor();
    let size = window.inner_size().to_logical::<f64>(scale);
    Viewport::new(size.width, size.height)
}
