//! The evasion state machine behind the proposal view.
//!
//! Two states: inline (`evade_pos` absent, the No button sits in normal
//! flow next to YES) and floating (`evade_pos` present, the button is
//! absolutely positioned and jumps to a fresh random spot on every
//! pointer approach). Once floating, never inline again.
//!
//! Everything the view shows - mood, labels, sizing, opacity - is a
//! pure function of `evade_count`, clamped into the catalog bounds, so
//! the presentation can never disagree with the state.

use rand::Rng;

/// Footprint of the No button, used to keep it fully on-screen.
pub const EVADE_BUTTON_WIDTH: f64 = 160.0;
pub const EVADE_BUTTON_HEIGHT: f64 = 50.0;

/// Minimum inset from every viewport edge when sampling a new spot.
pub const EVADE_MARGIN: f64 = 20.0;

/// Escalating No button labels, one per evasion tier.
pub const NO_TEXTS: &[&str] = &[
    "No 😢",
    "Are you sure? 🥺",
    "Really sure? 😭",
    "Think again! 💔",
    "Please? 🥹",
    "Don't do this! 😿",
    "I'll be sad... 😞",
    "You're breaking my heart! 💔",
    "Give me a chance! 😩",
    "Pretty please? 🙏",
    "I'll cry... 😭",
    "Last chance! 🥺",
];

/// Escalating YES button labels.
pub const YES_TEXTS: &[&str] = &[
    "Yes! 💕",
    "YES!! 😍",
    "Absolutely! 💖",
    "Of course! 🥰",
    "100% Yes! 💗",
];

/// Caption line under the question, escalating with the evasions.
pub const SUBTITLES: &[&str] = &[
    "I've been waiting to ask you this... 💭",
    "Come on, you know the right answer! 😉",
    "The No button is getting scared of you! 😂",
    "Hint: the correct answer is the BIG button! 👆",
    "The No button can run, but it can't hide! 😄",
];

/// Thought bubble next to the mascot, shown from the first evasion on.
pub const THOUGHT_BUBBLES: &[&str] = &[
    "Wait what? 😳",
    "Noooo! 😢",
    "Pwease?? 🥺",
    "I won't give up! 💪",
];

/// Mascot mood, a step function of the evasion count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Worried,
    Sad,
}

impl Mood {
    /// Derive the mood from how many times No has been evaded.
    pub fn from_evasions(count: u32) -> Self {
        match count {
            0 => Mood::Happy,
            1..=3 => Mood::Worried,
            _ => Mood::Sad,
        }
    }

    /// Mascot face for this mood.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "🥰",
            Mood::Worried => "🥺",
            Mood::Sad => "😭",
        }
    }

    /// Stable name, used for CSS classes and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Worried => "worried",
            Mood::Sad => "sad",
        }
    }
}

/// Viewport dimensions in logical pixels, read at evasion time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A sampled position for the floating No button, in logical pixels
/// from the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvadePoint {
    pub x: f64,
    pub y: f64,
}

/// State owned by the proposal view.
///
/// `evade_pos` starts absent (the button is inline) and becomes - and
/// stays - present after the first evasion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProposalState {
    evade_count: u32,
    evade_pos: Option<EvadePoint>,
}

impl ProposalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the No button has dodged the pointer.
    pub fn evade_count(&self) -> u32 {
        self.evade_count
    }

    /// Current floating position, absent while the button is inline.
    pub fn evade_pos(&self) -> Option<EvadePoint> {
        self.evade_pos
    }

    /// Whether the No button has left normal flow.
    pub fn is_floating(&self) -> bool {
        self.evade_pos.is_some()
    }

    pub fn mood(&self) -> Mood {
        Mood::from_evasions(self.evade_count)
    }

    /// The evasion transition: sample a fresh on-screen position and
    /// bump the counter. Fired on pointer-enter, touch-start or click
    /// of the No button.
    pub fn evade(&mut self, rng: &mut impl Rng, viewport: Viewport) {
        self.evade_pos = Some(sample_evade_point(rng, viewport));
        self.evade_count = self.evade_count.saturating_add(1);
        tracing::debug!(
            evasions = self.evade_count,
            mood = self.mood().name(),
            "No button escaped again"
        );
    }

    /// Current No button label.
    pub fn no_label(&self) -> &'static str {
        NO_TEXTS[escalation_index(self.evade_count, NO_TEXTS.len())]
    }

    /// Current YES button label.
    pub fn yes_label(&self) -> &'static str {
        YES_TEXTS[escalation_index(self.evade_count, YES_TEXTS.len())]
    }

    /// Caption under the question.
    pub fn subtitle(&self) -> &'static str {
        SUBTITLES[escalation_index(self.evade_count, SUBTITLES.len())]
    }

    /// Thought bubble line; none before the first evasion.
    pub fn thought_bubble(&self) -> Option<&'static str> {
        let shown = self.evade_count.checked_sub(1)?;
        Some(THOUGHT_BUBBLES[escalation_index(shown, THOUGHT_BUBBLES.len())])
    }

    /// YES button scale factor, growing 12% per evasion.
    pub fn yes_scale(&self) -> f64 {
        1.0 + f64::from(self.evade_count) * 0.12
    }

    /// YES button font size in rem, capped at 2.0.
    pub fn yes_font_rem(&self) -> f64 {
        (1.1 + f64::from(self.evade_count) * 0.1).min(2.0)
    }

    /// YES button padding in rem as (vertical, horizontal).
    pub fn yes_padding_rem(&self) -> (f64, f64) {
        let c = f64::from(self.evade_count);
        (0.9 + c * 0.05, 2.2 + c * 0.15)
    }

    /// No button opacity, floored at 0.35 so it stays clickable.
    pub fn no_opacity(&self) -> f64 {
        (1.0 - f64::from(self.evade_count) * 0.07).max(0.35)
    }

    /// No button font size in rem, floored at 0.65.
    pub fn no_font_rem(&self) -> f64 {
        (1.0 - f64::from(self.evade_count) * 0.04).max(0.65)
    }

    /// How many broken hearts to show in the tally row (at most 12).
    pub fn broken_hearts(&self) -> u32 {
        self.evade_count.min(12)
    }
}

/// Clamp an escalation counter into catalog bounds: `min(count, len-1)`.
pub fn escalation_index(count: u32, len: usize) -> usize {
    debug_assert!(len > 0);
    (count as usize).min(len - 1)
}

/// Uniformly sample a position keeping the whole button inside the
/// viewport, inset by [`EVADE_MARGIN`]. Viewports smaller than the
/// button plus margins collapse the range instead of inverting it.
fn sample_evade_point(rng: &mut impl Rng, viewport: Viewport) -> EvadePoint {
    let max_x = (viewport.width - EVADE_BUTTON_WIDTH - EVADE_MARGIN).max(EVADE_MARGIN);
    let max_y = (viewport.height - EVADE_BUTTON_HEIGHT - EVADE_MARGIN).max(EVADE_MARGIN);

    EvadePoint {
        x: rng.random_range(EVADE_MARGIN..=max_x),
        y: rng.random_range(EVADE_MARGIN..=max_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(14)
    }

    #[test]
    fn mood_thresholds() {
        assert_eq!(Mood::from_evasions(0), Mood::Happy);
        assert_eq!(Mood::from_evasions(1), Mood::Worried);
        assert_eq!(Mood::from_evasions(3), Mood::Worried);
        assert_eq!(Mood::from_evasions(4), Mood::Sad);
        assert_eq!(Mood::from_evasions(100), Mood::Sad);
    }

    #[test]
    fn starts_inline_and_happy() {
        let state = ProposalState::new();
        assert_eq!(state.evade_count(), 0);
        assert!(!state.is_floating());
        assert_eq!(state.mood(), Mood::Happy);
        assert_eq!(state.no_label(), "No 😢");
        assert_eq!(state.yes_label(), "Yes! 💕");
        assert_eq!(state.thought_bubble(), None);
    }

    #[test]
    fn evade_goes_floating_and_stays_floating() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        let viewport = Viewport::new(1280.0, 720.0);

        state.evade(&mut rng, viewport);
        assert!(state.is_floating());
        assert_eq!(state.evade_count(), 1);

        for _ in 0..50 {
            state.evade(&mut rng, viewport);
            assert!(state.is_floating());
        }
        assert_eq!(state.evade_count(), 51);
    }

    #[test]
    fn evade_positions_stay_within_bounds() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        let viewport = Viewport::new(1280.0, 720.0);

        for _ in 0..200 {
            state.evade(&mut rng, viewport);
            let pos = state.evade_pos().unwrap();
            assert!(pos.x >= 0.0 && pos.x <= viewport.width - EVADE_BUTTON_WIDTH);
            assert!(pos.y >= 0.0 && pos.y <= viewport.height - EVADE_BUTTON_HEIGHT);
        }
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        state.evade(&mut rng, Viewport::new(50.0, 30.0));
        let pos = state.evade_pos().unwrap();
        assert_eq!(pos.x, EVADE_MARGIN);
        assert_eq!(pos.y, EVADE_MARGIN);
    }

    #[test]
    fn labels_clamp_at_catalog_ends() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        let viewport = Viewport::new(1280.0, 720.0);

        for _ in 0..30 {
            state.evade(&mut rng, viewport);
        }
        assert_eq!(state.no_label(), NO_TEXTS[NO_TEXTS.len() - 1]);
        assert_eq!(state.yes_label(), YES_TEXTS[YES_TEXTS.len() - 1]);
        assert_eq!(state.subtitle(), SUBTITLES[SUBTITLES.len() - 1]);
        assert_eq!(
            state.thought_bubble(),
            Some(THOUGHT_BUBBLES[THOUGHT_BUBBLES.len() - 1])
        );
    }

    #[test]
    fn thought_bubble_tracks_previous_tier() {
        let mut rng = rng();
        let mut state = ProposalState::new();
        let viewport = Viewport::new(1280.0, 720.0);

        state.evade(&mut rng, viewport);
        assert_eq!(state.thought_bubble(), Some(THOUGHT_BUBBLES[0]));
        state.evade(&mut rng, viewport);
        assert_eq!(state.thought_bubble(), Some(THOUGHT_BUBBLES[1]));
    }

    #[test]
    fn presentation_escalates_and_floors() {
        let mut state = ProposalState::new();
        assert!((state.yes_scale() - 1.0).abs() < f64::EPSILON);
        assert!((state.no_opacity() - 1.0).abs() < f64::EPSILON);

        let mut rng = rng();
        let viewport = Viewport::new(1280.0, 720.0);
        let mut last_scale = state.yes_scale();
        let mut last_opacity = state.no_opacity();

        for _ in 0..20 {
            state.evade(&mut rng, viewport);
            assert!(state.yes_scale() >= last_scale);
            assert!(state.no_opacity() <= last_opacity);
            last_scale = state.yes_scale();
            last_opacity = state.no_opacity();
        }

        // Deep into the escalation everything is pinned at its bound.
        assert!((state.no_opacity() - 0.35).abs() < f64::EPSILON);
        assert!((state.no_font_rem() - 0.65).abs() < f64::EPSILON);
        assert!((state.yes_font_rem() - 2.0).abs() < f64::EPSILON);
        assert_eq!(state.broken_hearts(), 12);
    }

    #[test]
    fn escalation_index_never_out_of_bounds() {
        for count in 0..100 {
            assert!(escalation_index(count, NO_TEXTS.len()) < NO_TEXTS.len());
            assert!(escalation_index(count, YES_TEXTS.len()) < YES_TEXTS.len());
        }
    }
}
