//! The gallery modal: a grid of the image catalog with a full-screen
//! preview (lightbox) on selection.
//!
//! Opening plays a confetti burst of colored slips that dismisses
//! itself after a few seconds. Closing is staged: cards animate out,
//! the panel follows, then the modal unmounts. Selection state lives
//! here and resets with every remount.

use dioxus::prelude::*;
use rand::Rng;
use tokio::time::{sleep, Duration};

use valentine_core::{gallery, GallerySelection, ImageRecord};

use crate::theme::colors;

/// Entrance stagger for the card grid.
const CARDS_REVEAL: Duration = Duration::from_millis(300);
/// The confetti burst dismisses itself after this long.
const CONFETTI_BURST: Duration = Duration::from_secs(4);
/// Staged close: panel out, then unmount.
const PANEL_CLOSE: Duration = Duration::from_millis(100);
const CLOSE_COMPLETE: Duration = Duration::from_millis(600);
/// Lightbox exit animation length.
const PREVIEW_CLOSE: Duration = Duration::from_millis(400);

/// Emoji drifting inside the panel while the gallery is open.
const PANEL_EMOJIS: &[&str] = &["💖", "🌸", "✨", "🎀", "💕", "🦋", "🌺", "⭐", "🐾", "🌈"];

const TWINKLE_COUNT: usize = 12;

/// One colored slip in the opening confetti burst.
#[derive(Clone, PartialEq)]
struct BurstSlip {
    x_pct: f64,
    delay_s: f64,
    duration_s: f64,
    rotation_deg: f64,
    color: &'static str,
}

fn generate_burst(rng: &mut impl Rng) -> Vec<BurstSlip> {
    (0..40)
        .map(|i| BurstSlip {
            x_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..1.5),
            duration_s: rng.random_range(3.0..6.0),
            rotation_deg: rng.random_range(0.0..360.0),
            color: colors::GALLERY_CONFETTI[i % colors::GALLERY_CONFETTI.len()],
        })
        .collect()
}

/// A twinkling star pinned somewhere inside the panel.
#[derive(Clone, PartialEq)]
struct Twinkle {
    x_pct: f64,
    y_pct: f64,
    delay_s: f64,
}

fn generate_twinkles(rng: &mut impl Rng) -> Vec<Twinkle> {
    (0..TWINKLE_COUNT)
        .map(|_| Twinkle {
            x_pct: rng.random_range(0.0..100.0),
            y_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..3.0),
        })
        .collect()
}

/// Gallery modal component.
#[component]
pub fn GalleryModal(on_close: EventHandler<()>) -> Element {
    let mut visible = use_signal(|| false);
    let mut cards_visible = use_signal(|| false);
    let mut show_confetti = use_signal(|| true);
    let mut closing = use_signal(|| false);
    let mut selection: Signal<GallerySelection> = use_signal(GallerySelection::new);

    let burst: Signal<Vec<BurstSlip>> = use_signal(|| generate_burst(&mut rand::rng()));
    let twinkles: Signal<Vec<Twinkle>> = use_signal(|| generate_twinkles(&mut rand::rng()));

    // Entrance staging, plus the self-dismissing confetti burst.
    use_effect(move || {
        spawn(async move {
            visible.set(true);
            sleep(CARDS_REVEAL).await;
            cards_visible.set(true);
        });
        spawn(async move {
            sleep(CONFETTI_BURST).await;
            show_confetti.set(false);
        });
    });

    // Staged close: cards out immediately, panel shortly after, then
    // hand control back to the celebration page.
    let mut request_close = move || {
        if closing() {
            return;
        }
        closing.set(true);
        cards_visible.set(false);
        spawn(async move {
            sleep(PANEL_CLOSE).await;
            visible.set(false);
            sleep(CLOSE_COMPLETE - PANEL_CLOSE).await;
            on_close.call(());
        });
    };

    // Validated at startup; an empty grid is the degraded fallback.
    let records: &[ImageRecord] = match gallery::catalog() {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "image catalog unavailable");
            &[]
        }
    };

    let overlay_class = if visible() { "gallery-overlay visible" } else { "gallery-overlay" };
    let panel_class = if visible() { "gallery-panel visible" } else { "gallery-panel" };
    let selected_record = selection.read().record();

    rsx! {
        div { class: "{overlay_class}", onclick: move |_| request_close(),

            // Confetti burst over the backdrop
            if show_confetti() {
                div { class: "burst-layer",
                    {
                        let burst = burst.read();
                        rsx! {
                            for (i, slip) in burst.iter().enumerate() {
                                div {
                                    key: "{i}",
                                    class: "burst-slip",
                                    style: "left: {slip.x_pct}%; animation-delay: {slip.delay_s}s; animation-duration: {slip.duration_s}s;",
                                    div {
                                        class: "burst-slip-inner",
                                        style: "background-color: {slip.color}; transform: rotate({slip.rotation_deg}deg);",
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "{panel_class}",
                onclick: move |evt| evt.stop_propagation(),

                // Drifting emoji and twinkling stars inside the panel
                {
                    let twinkles = twinkles.read();
                    rsx! {
                        for (i, emoji) in PANEL_EMOJIS.iter().enumerate() {
                            {
                                let delay = i as f64 * 0.5;
                                let left = 5.0 + (i as f64) * 9.0;
                                rsx! {
                                    span {
                                        key: "{i}",
                                        class: "panel-drift",
                                        style: "left: {left}%; animation-delay: {delay}s;",
                                        "{emoji}"
                                    }
                                }
                            }
                        }
                        for (i, star) in twinkles.iter().enumerate() {
                            span {
                                key: "{i}",
                                class: "twinkle-star",
                                style: "left: {star.x_pct}%; top: {star.y_pct}%; animation-delay: {star.delay_s}s;",
                                "✦"
                            }
                        }
                    }
                }

                header { class: "gallery-header",
                    div { class: "gallery-title-group",
                        div { class: "gallery-logo heartbeat", "🎨" }
                        div {
                            h2 { class: "gallery-title", "Cute Gallery" }
                            p { class: "gallery-subtitle",
                                span { class: "wave", "👋" }
                                " Tap any image to explore!"
                            }
                        }
                    }
                    button {
                        class: "gallery-close",
                        onclick: move |_| request_close(),
                        "✕"
                    }
                }

                div { class: "gallery-grid",
                    for (index, record) in records.iter().enumerate() {
                        ImageCard {
                            key: "{record.id}",
                            record: record.clone(),
                            index,
                            visible: cards_visible(),
                            on_select: move |id| selection.write().select(id),
                        }
                    }
                }
            }

            // Full-screen preview over everything else
            if let Some(record) = selected_record {
                Lightbox {
                    record: record.clone(),
                    on_dismiss: move |_| selection.write().clear(),
                }
            }
        }
    }
}

/// One card in the gallery grid.
#[component]
fn ImageCard(
    record: ImageRecord,
    index: usize,
    visible: bool,
    on_select: EventHandler<u32>,
) -> Element {
    let mut hovered = use_signal(|| false);

    let id = record.id;
    let enter_delay_ms = index * 100 + 200;
    let card_class = if visible { "image-card entering" } else { "image-card waiting" };
    let glow_class = if hovered() { "card-glow glowing" } else { "card-glow" };
    let caption_class = if hovered() { "card-caption shown" } else { "card-caption" };

    rsx! {
        div {
            class: "{card_class}",
            style: "animation-delay: {enter_delay_ms}ms;",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |_| on_select.call(id),

            div { class: "{glow_class}", style: "background: {record.theme};" }

            div { class: "card-frame",
                img {
                    class: "card-image",
                    src: "{record.url}",
                    alt: "{record.caption}",
                    loading: "lazy",
                }
                div { class: "{caption_class}",
                    p { "{record.caption}" }
                }
                div { class: "card-badge", "{record.emoji}" }
                if hovered() {
                    div { class: "heart-pop", "💖" }
                }
            }
        }
    }
}

const SPARKLE_EMOJIS: &[&str] = &["💖", "✨", "🌟", "💫", "💖"];

/// Full-screen preview of one catalog record.
#[component]
fn Lightbox(record: ImageRecord, on_dismiss: EventHandler<()>) -> Element {
    let mut show = use_signal(|| false);
    let mut leaving = use_signal(|| false);

    // Enter on the frame after mount so the transition plays.
    use_effect(move || {
        spawn(async move {
            sleep(Duration::from_millis(16)).await;
            show.set(true);
        });
    });

    let mut request_dismiss = move || {
        if leaving() {
            return;
        }
        leaving.set(true);
        show.set(false);
        spawn(async move {
            sleep(PREVIEW_CLOSE).await;
            on_dismiss.call(());
        });
    };

    let lightbox_class = if show() { "lightbox visible" } else { "lightbox" };

    rsx! {
        div { class: "{lightbox_class}", onclick: move |_| request_dismiss(),
            div {
                class: "lightbox-content",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "lightbox-glow heartbeat", style: "background: {record.theme};" }

                div { class: "lightbox-frame",
                    img {
                        class: "lightbox-image",
                        src: "{record.url}",
                        alt: "{record.caption}",
                    }
                    div { class: "lightbox-info",
                        div { class: "lightbox-caption-row",
                            span { class: "lightbox-emoji", "{record.emoji}" }
                            p { class: "lightbox-caption", "{record.caption}" }
                            span { class: "lightbox-emoji", "{record.emoji}" }
                        }
                        div { class: "lightbox-sparkles",
                            for (i, sparkle) in SPARKLE_EMOJIS.iter().enumerate() {
                                {
                                    let delay = i as f64 * 0.3;
                                    rsx! {
                                        span {
                                            key: "{i}",
                                            class: "twinkle",
                                            style: "animation-delay: {delay}s;",
                                            "{sparkle}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                button {
                    class: "lightbox-close",
                    onclick: move |_| request_dismiss(),
                    "✕"
                }
                button {
                    class: "lightbox-like",
                    onclick: move |evt| evt.stop_propagation(),
                    "💝"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn burst_slips_use_palette_colors() {
        let mut rng = StdRng::seed_from_u64(5);
        let burst = generate_burst(&mut rng);
        assert_eq!(burst.len(), 40);
        for slip in &burst {
            assert!(colors::GALLERY_CONFETTI.contains(&slip.color));
            assert!((0.0..100.0).contains(&slip.x_pct));
            assert!((3.0..6.0).contains(&slip.duration_s));
        }
    }

    #[test]
    fn twinkles_stay_inside_the_panel() {
        let mut rng = StdRng::seed_from_u64(6);
        for star in generate_twinkles(&mut rng) {
            assert!((0.0..100.0).contains(&star.x_pct));
            assert!((0.0..100.0).contains(&star.y_pct));
            assert!((0.0..3.0).contains(&star.delay_s));
        }
    }

    #[test]
    fn card_classes_track_visibility() {
        // Mirrors the class selection in ImageCard.
        let class_for = |visible: bool| {
            if visible { "image-card entering" } else { "image-card waiting" }
        };
        assert_eq!(class_for(true), "image-card entering");
        assert_eq!(class_for(false), "image-card waiting");
    }
}
