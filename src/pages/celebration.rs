//! Celebration - they said YES.
//!
//! Confetti rains, sweet messages rotate on a timer, and a love counter
//! climbs until it overflows into ∞. Two independent modals hang off
//! this page: the love letter and the image gallery.

use dioxus::prelude::*;
use tokio::time::sleep;

use valentine_core::celebration::{
    CONTENT_REVEAL, EXTRAS_REVEAL, LOVE_TICK_PERIOD, MESSAGE_REVEAL, MESSAGE_ROTATION_PERIOD,
};
use valentine_core::{ConfettiSpec, LoveCounter, MessageCycle, PROMISES};

use crate::components::{GalleryModal, LetterModal};

const BOTTOM_EMOJIS: &[&str] = &["🧸", "🌹", "💝", "🌹", "🧸"];

/// Celebration view component.
#[component]
pub fn CelebrationPage() -> Element {
    // Entrance staging flags
    let mut show_content = use_signal(|| false);
    let mut show_message = use_signal(|| false);
    let mut show_extras = use_signal(|| false);

    // Timer-driven state
    let mut messages: Signal<MessageCycle> = use_signal(MessageCycle::new);
    let mut love: Signal<LoveCounter> = use_signal(LoveCounter::new);

    // Modal flags, deliberately independent of each other
    let mut show_letter = use_signal(|| false);
    let mut show_gallery = use_signal(|| false);

    // Confetti parameters, sampled once per mount
    let confetti = use_signal(|| ConfettiSpec::generate(&mut rand::rng()));

    // Staggered entrance reveals: content, message block, extras.
    use_effect(move || {
        spawn(async move {
            sleep(CONTENT_REVEAL).await;
            show_content.set(true);
            sleep(MESSAGE_REVEAL - CONTENT_REVEAL).await;
            show_message.set(true);
            sleep(EXTRAS_REVEAL - MESSAGE_REVEAL).await;
            show_extras.set(true);
        });
    });

    // Rotate the sweet messages forever; the loop dies with the scope
    // when this page unmounts.
    use_effect(move || {
        spawn(async move {
            loop {
                sleep(MESSAGE_ROTATION_PERIOD).await;
                messages.write().advance();
            }
        });
    });

    // Love counter climbs until it overflows, then the loop retires.
    use_effect(move || {
        spawn(async move {
            loop {
                sleep(LOVE_TICK_PERIOD).await;
                love.write().tick(&mut rand::rng());
                if love.read().is_overflowing() {
                    tracing::debug!("love counter overflowed");
                    break;
                }
            }
        });
    });

    let content_class = if show_content() { "revealed" } else { "" };
    let message_class = if show_message() { "revealed" } else { "" };
    let extras_class = if show_extras() { "revealed" } else { "" };
    let message_index = messages.read().index();
    let current_message = messages.read().current();
    let love_display = love.read().display();
    let love_caption = love.read().caption();

    rsx! {
        div { class: "celebration-page",
            // Confetti shower
            div { class: "confetti-layer",
                {
                    let confetti = confetti.read();
                    rsx! {
                        for (i, piece) in confetti.iter().enumerate() {
                            span {
                                key: "{i}",
                                class: "confetti-piece",
                                style: "left: {piece.x_pct}%; font-size: {piece.size_px}px; animation-delay: {piece.delay_s}s; animation-duration: {piece.duration_s}s;",
                                "{piece.emoji}"
                            }
                        }
                    }
                }
            }

            // Celebration emoji
            div { class: "celebrate-burst entrance-scale {content_class}",
                div { class: "celebrate-emoji", "🎉" }
            }

            // YAY title
            div { class: "celebrate-title entrance delay-200 {content_class}",
                h1 { span { class: "gradient-text", "YAAAAY!" } }
                p { class: "celebrate-sub", "You said YES! 😍💖" }
            }

            // Main card
            div { class: "celebrate-card entrance delay-300 {message_class}",
                div { class: "card-inner",
                    div { class: "card-heart heartbeat", "💕" }
                    h2 { class: "card-heading", "I knew you'd say yes! 🥰" }

                    div { class: "love-note",
                        p {
                            "Every love story is beautiful, but ours is going to be my favorite! "
                            "Thank you for making my heart skip a beat. "
                            "This Valentine's Day just became the best one ever! 💫"
                        }
                    }

                    div { class: "card-divider",
                        div { class: "divider-line" }
                        span { class: "divider-heart pulse", "♥" }
                        div { class: "divider-line" }
                    }

                    // Rotating sweet message; keyed so the fade replays
                    div { class: "message-block entrance {extras_class}",
                        div { class: "message-card",
                            p { key: "{message_index}", class: "sweet-message fade-in",
                                "{current_message}"
                            }
                        }
                    }

                    // Love counter
                    div { class: "love-counter",
                        p { class: "counter-label", "Love Counter" }
                        div { class: "counter-row",
                            span { class: "counter-value gradient-text", "{love_display}" }
                            span { class: "counter-heart heartbeat", "❤️" }
                        }
                        p { class: "counter-caption", "{love_caption}" }
                    }

                    // Promise cards
                    div { class: "promise-grid",
                        for (i, promise) in PROMISES.iter().enumerate() {
                            div { key: "{i}", class: "promise-card",
                                span { class: "promise-emoji", "{promise.emoji}" }
                                span { class: "promise-label", "Unlimited {promise.label}" }
                            }
                        }
                    }

                    // Modal entry points
                    button {
                        class: "open-letter-button",
                        onclick: move |_| show_letter.set(true),
                        span { "💌" }
                        span { "Read My Love Letter" }
                        span { "💌" }
                    }
                    button {
                        class: "open-gallery-button",
                        onclick: move |_| show_gallery.set(true),
                        span { "📸" }
                        span { "Our Little Gallery" }
                        span { "📸" }
                    }

                    // Coupon
                    div { class: "coupon",
                        p { class: "coupon-label", "Valentine's Coupon" }
                        p { class: "coupon-title", "♾️ Lifetime Supply" }
                        p { class: "coupon-sub", "of Love, Cuddles & Happiness" }
                        div { class: "coupon-stars",
                            for i in 0..5 {
                                span { key: "{i}", "⭐" }
                            }
                        }
                        div { class: "coupon-notch left" }
                        div { class: "coupon-notch right" }
                    }
                }
            }

            // Bottom decorations
            div { class: "celebrate-footer fade-in",
                for (i, emoji) in BOTTOM_EMOJIS.iter().enumerate() {
                    {
                        let delay = i as f64 * 0.3;
                        rsx! {
                            span {
                                key: "{i}",
                                class: "footer-emoji bounce-slow",
                                style: "animation-delay: {delay}s;",
                                "{emoji}"
                            }
                        }
                    }
                }
            }

            p { class: "made-with", "Happy Valentine's Day! Made with ❤️" }

            // Modals - independent flags, both may be open at once
            if show_letter() {
                LetterModal { on_close: move |_| show_letter.set(false) }
            }
            if show_gallery() {
                GalleryModal { on_close: move |_| show_gallery.set(false) }
            }
        }
    }
}
