//! The love letter modal.
//!
//! A long-form letter rendered from Markdown, with a staged close
//! (exit animation first, unmount after), a scroll hint that disappears
//! once the reader scrolls, and little hearts trailing the pointer over
//! the paper.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};
use tokio::time::{sleep, Duration};

use valentine_core::LOVE_LETTER_MD;

/// How long the exit animation plays before the modal unmounts.
const CLOSE_ANIMATION: Duration = Duration::from_millis(300);

/// How long a pointer-trail heart lives before it is dismissed.
const TRAIL_HEART_LIFETIME: Duration = Duration::from_millis(800);

/// A transient heart spawned where the pointer moved over the letter.
#[derive(Clone, PartialEq)]
struct TrailHeart {
    id: u64,
    x: f64,
    y: f64,
}

/// Render the letter Markdown to HTML.
fn letter_html() -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(LOVE_LETTER_MD, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Letter modal component.
#[component]
pub fn LetterModal(on_close: EventHandler<()>) -> Element {
    let mut closing = use_signal(|| false);
    let mut scrolled = use_signal(|| false);
    let mut trail: Signal<Vec<TrailHeart>> = use_signal(Vec::new);
    let mut next_heart_id: Signal<u64> = use_signal(|| 0);

    let html_content = use_memo(letter_html);

    // Staged close: play the exit animation, then unmount.
    let mut request_close = move || {
        if closing() {
            return;
        }
        closing.set(true);
        spawn(async move {
            sleep(CLOSE_ANIMATION).await;
            on_close.call(());
        });
    };

    // Spawn a heart under the pointer; it dismisses itself.
    let mut spawn_trail_heart = move |x: f64, y: f64| {
        let id = next_heart_id();
        next_heart_id.set(id + 1);
        trail.write().push(TrailHeart { id, x, y });

        spawn(async move {
            sleep(TRAIL_HEART_LIFETIME).await;
            trail.write().retain(|heart| heart.id != id);
        });
    };

    let overlay_class = if closing() { "letter-overlay closing" } else { "letter-overlay" };
    let panel_class = if closing() { "letter-panel closing" } else { "letter-panel" };

    rsx! {
        div { class: "{overlay_class}", onclick: move |_| request_close(),
            div {
                class: "{panel_class}",
                onclick: move |evt| evt.stop_propagation(),
                onmousemove: move |evt| {
                    let point = evt.data().element_coordinates();
                    spawn_trail_heart(point.x, point.y);
                },

                // Decorative corners
                div { class: "letter-corner top-left", "✨" }
                div { class: "letter-corner bottom-right", "✨" }

                // Transient hearts trailing the pointer
                {
                    let trail = trail.read();
                    rsx! {
                        for heart in trail.iter() {
                            span {
                                key: "{heart.id}",
                                class: "trail-heart",
                                style: "left: {heart.x}px; top: {heart.y}px;",
                                "❤️"
                            }
                        }
                    }
                }

                header { class: "letter-header",
                    h2 { class: "letter-title",
                        span { class: "bounce", "💌" }
                        span { "Love Letter" }
                        span { class: "bounce delayed", "💕" }
                    }
                    button {
                        class: "letter-close",
                        onclick: move |_| request_close(),
                        "✕"
                    }
                }

                div { class: "letter-body", onscroll: move |_| scrolled.set(true),
                    div {
                        class: "letter-text",
                        dangerous_inner_html: "{html_content()}",
                    }
                }

                if !scrolled() {
                    div { class: "scroll-hint",
                        span { "💝" }
                        span { class: "scroll-hint-text bounce", "Scroll to read more" }
                        span { "💝" }
                    }
                }

                footer { class: "letter-footer",
                    span { class: "bounce", "💕" }
                    button {
                        class: "letter-close-button",
                        onclick: move |_| request_close(),
                        "Close ❤️"
                    }
                    span { class: "bounce delayed", "💕" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_renders_to_html() {
        let html = letter_html();
        assert!(html.contains("<p>"));
        assert!(html.contains("Will you marry me?"));
    }

    #[test]
    fn overlay_class_tracks_closing_flag() {
        // Mirrors the class selection in the component.
        let class_for = |closing: bool| {
            if closing { "letter-overlay closing" } else { "letter-overlay" }
        };
        assert_eq!(class_for(false), "letter-overlay");
        assert_eq!(class_for(true), "letter-overlay closing");
    }
}
