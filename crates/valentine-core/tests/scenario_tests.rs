//! End-to-end scenarios over the core state machines, mirroring the
//! three flows a user actually walks through.

use rand::rngs::StdRng;
use rand::SeedableRng;

use valentine_core::gallery;
use valentine_core::proposal::{SUBTITLES, YES_TEXTS};
use valentine_core::{GallerySelection, Mood, ProposalState, Viewport};

/// Fresh load, then the pointer chases the No button five times.
#[test]
fn five_evasions_escalate_to_sad() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = ProposalState::new();
    let viewport = Viewport::new(1280.0, 720.0);

    for _ in 0..5 {
        state.evade(&mut rng, viewport);
    }

    assert_eq!(state.evade_count(), 5);
    assert_eq!(state.mood(), Mood::Sad);

    // Fifth escalation tier (clamped where the catalog is shorter).
    assert_eq!(state.yes_label(), YES_TEXTS[4]);
    assert_eq!(state.subtitle(), SUBTITLES[4]);
    assert!((state.yes_scale() - 1.6).abs() < 1e-9);

    // Floating, with opacity not yet at the floor (1 - 5*0.07 = 0.65).
    assert!(state.is_floating());
    assert!((state.no_opacity() - 0.65).abs() < 1e-9);
}

/// Accepting is terminal for the proposal: the session boolean flips
/// once and the proposal state is simply dropped. A fresh session
/// starts over from zero.
#[test]
fn acceptance_resets_with_the_session() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut accepted = false;

    let mut state = ProposalState::new();
    state.evade(&mut rng, Viewport::new(1280.0, 720.0));

    // The accept control's one allowed transition.
    assert!(!accepted);
    accepted = true;
    drop(state);
    assert!(accepted);

    // "Reload": everything is rebuilt from scratch, nothing persists.
    let fresh = ProposalState::new();
    assert_eq!(fresh.evade_count(), 0);
    assert!(!fresh.is_floating());
    assert_eq!(fresh.mood(), Mood::Happy);
}

/// Open the gallery, preview image 3, dismiss back to the grid.
#[test]
fn gallery_preview_round_trip() {
    let mut selection = GallerySelection::new();
    assert!(!selection.is_previewing());

    selection.select(3);
    assert!(selection.is_previewing());
    let record = selection.record().expect("catalog has id 3");
    assert_eq!(record.caption, "Beautiful Moments with You 🌹");

    selection.clear();
    assert!(!selection.is_previewing());
    assert_eq!(selection.selected(), None);

    // A remounted modal starts from a clean selection again.
    let remounted = GallerySelection::new();
    assert_eq!(remounted.selected(), None);
}

/// The catalog itself is fixed configuration: 14 records, stable ids.
#[test]
fn catalog_is_the_fixed_fourteen() {
    let records = gallery::catalog().expect("embedded catalog is valid");
    assert_eq!(records.len(), 14);
    assert!(records.iter().all(|r| !r.caption.is_empty()));
    assert!(records.iter().all(|r| r.url.ends_with(".jpeg")));
}
