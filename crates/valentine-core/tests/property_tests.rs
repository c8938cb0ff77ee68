//! Property-based tests for the proposal and celebration state machines.
//!
//! Uses proptest to verify the clamping, monotonicity and bounds
//! invariants that the views rely on.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use valentine_core::proposal::{
    escalation_index, EVADE_BUTTON_HEIGHT, EVADE_BUTTON_WIDTH, NO_TEXTS, SUBTITLES,
    THOUGHT_BUBBLES, YES_TEXTS,
};
use valentine_core::celebration::LOVE_CAP;
use valentine_core::{LoveCounter, MessageCycle, Mood, ProposalState, Viewport, SWEET_MESSAGES};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Viewports from phone-sized up to a large desktop.
fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (320.0f64..3840.0, 480.0f64..2160.0).prop_map(|(w, h)| Viewport::new(w, h))
}

/// Evasion counts well past every catalog length.
fn evade_count_strategy() -> impl Strategy<Value = u32> {
    0u32..500
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Catalog selection never reads out of bounds, for every catalog.
    #[test]
    fn escalation_indices_in_bounds(count in evade_count_strategy()) {
        prop_assert!(escalation_index(count, NO_TEXTS.len()) < NO_TEXTS.len());
        prop_assert!(escalation_index(count, YES_TEXTS.len()) < YES_TEXTS.len());
        prop_assert!(escalation_index(count, SUBTITLES.len()) < SUBTITLES.len());
        prop_assert!(escalation_index(count, THOUGHT_BUBBLES.len()) < THOUGHT_BUBBLES.len());
    }

    /// The clamp is exactly min(count, len - 1).
    #[test]
    fn escalation_index_is_min_with_last(count in evade_count_strategy()) {
        let len = NO_TEXTS.len();
        prop_assert_eq!(escalation_index(count, len), (count as usize).min(len - 1));
    }

    /// Mood is a monotonic step function: it never regresses as the
    /// count grows.
    #[test]
    fn mood_never_regresses(count in 0u32..499) {
        fn rank(mood: Mood) -> u8 {
            match mood {
                Mood::Happy => 0,
                Mood::Worried => 1,
                Mood::Sad => 2,
            }
        }
        prop_assert!(rank(Mood::from_evasions(count + 1)) >= rank(Mood::from_evasions(count)));
    }

    /// Every evasion lands the button fully on-screen, and once floating
    /// the state never returns to inline.
    #[test]
    fn evasions_stay_on_screen(
        seed in any::<u64>(),
        viewport in viewport_strategy(),
        evasions in 1usize..60,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = ProposalState::new();

        for step in 1..=evasions {
            state.evade(&mut rng, viewport);
            prop_assert!(state.is_floating());
            prop_assert_eq!(state.evade_count(), step as u32);

            let pos = state.evade_pos().unwrap();
            prop_assert!(pos.x >= 0.0);
            prop_assert!(pos.y >= 0.0);
            prop_assert!(pos.x <= viewport.width - EVADE_BUTTON_WIDTH);
            prop_assert!(pos.y <= viewport.height - EVADE_BUTTON_HEIGHT);
        }
    }

    /// Derived presentation respects its floors and caps at any count.
    #[test]
    fn presentation_bounds(seed in any::<u64>(), evasions in 0usize..100) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = ProposalState::new();
        let viewport = Viewport::new(1280.0, 720.0);

        for _ in 0..evasions {
            state.evade(&mut rng, viewport);
        }

        prop_assert!(state.yes_scale() >= 1.0);
        prop_assert!(state.yes_font_rem() <= 2.0);
        prop_assert!(state.no_opacity() >= 0.35);
        prop_assert!(state.no_opacity() <= 1.0);
        prop_assert!(state.no_font_rem() >= 0.65);
        prop_assert!(state.broken_hearts() <= 12);
    }

    /// The love counter is non-decreasing and never exceeds the cap,
    /// under any tick sequence.
    #[test]
    fn love_counter_bounded_monotone(seed in any::<u64>(), ticks in 0usize..600) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counter = LoveCounter::new();
        let mut previous = counter.value();

        for _ in 0..ticks {
            counter.tick(&mut rng);
            prop_assert!(counter.value() >= previous);
            prop_assert!(counter.value() <= LOVE_CAP);
            previous = counter.value();
        }
    }

    /// The message index is always in range and visits the catalog in
    /// order, wrapping at the end.
    #[test]
    fn message_cycle_in_order(advances in 0usize..100) {
        let mut cycle = MessageCycle::new();
        for step in 0..advances {
            prop_assert_eq!(cycle.index(), step % SWEET_MESSAGES.len());
            prop_assert!(cycle.index() < SWEET_MESSAGES.len());
            cycle.advance();
        }
    }
}
