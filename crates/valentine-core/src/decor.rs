//! Decoration layer particles: ambient floating hearts and the
//! celebration confetti shower.
//!
//! Each particle is a bag of randomized animation parameters sampled
//! once when the owning layer mounts; the drifting itself is pure CSS.

use rand::Rng;

/// Emoji pool for the ambient hearts.
pub const HEART_EMOJIS: &[&str] = &["❤️", "💕", "💗", "💖", "💝", "💘", "🌸", "✨"];

/// Emoji pool for the celebration confetti.
pub const CONFETTI_EMOJIS: &[&str] = &[
    "💖", "💕", "💗", "💝", "💘", "🌹", "✨", "🦋", "🎀", "💐", "🍫", "🧸",
];

pub const HEART_COUNT: usize = 20;
pub const CONFETTI_COUNT: usize = 40;

/// One ambient heart drifting up the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartSpec {
    /// Horizontal position as a percentage of the viewport width
    pub x_pct: f64,
    /// Font size in pixels (12-26)
    pub size_px: f64,
    /// Float-up duration in seconds (10-18)
    pub duration_s: f64,
    /// Animation delay in seconds (0-15)
    pub delay_s: f64,
    /// Opacity (0.1-0.4)
    pub opacity: f64,
    pub emoji: &'static str,
}

impl HeartSpec {
    /// Sample the full ambient layer of [`HEART_COUNT`] hearts.
    pub fn generate(rng: &mut impl Rng) -> Vec<HeartSpec> {
        (0..HEART_COUNT).map(|_| Self::sample(rng)).collect()
    }

    fn sample(rng: &mut impl Rng) -> Self {
        Self {
            x_pct: rng.random_range(0.0..100.0),
            size_px: rng.random_range(12.0..26.0),
            duration_s: rng.random_range(10.0..18.0),
            delay_s: rng.random_range(0.0..15.0),
            opacity: rng.random_range(0.1..0.4),
            emoji: HEART_EMOJIS[rng.random_range(0..HEART_EMOJIS.len())],
        }
    }
}

/// One confetti emoji raining down during the celebration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiSpec {
    /// Horizontal position as a percentage of the viewport width
    pub x_pct: f64,
    /// Animation delay in seconds (0-6)
    pub delay_s: f64,
    /// Fall duration in seconds (5-9)
    pub duration_s: f64,
    /// Font size in pixels (14-30)
    pub size_px: f64,
    pub emoji: &'static str,
}

impl ConfettiSpec {
    /// Sample the full shower of [`CONFETTI_COUNT`] pieces.
    pub fn generate(rng: &mut impl Rng) -> Vec<ConfettiSpec> {
        (0..CONFETTI_COUNT).map(|_| Self::sample(rng)).collect()
    }

    fn sample(rng: &mut impl Rng) -> Self {
        Self {
            x_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..6.0),
            duration_s: rng.random_range(5.0..9.0),
            size_px: rng.random_range(14.0..30.0),
            emoji: CONFETTI_EMOJIS[rng.random_range(0..CONFETTI_EMOJIS.len())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hearts_within_parameter_ranges() {
        let mut rng = StdRng::seed_from_u64(2);
        let hearts = HeartSpec::generate(&mut rng);
        assert_eq!(hearts.len(), HEART_COUNT);

        for heart in &hearts {
            assert!((0.0..100.0).contains(&heart.x_pct));
            assert!((12.0..26.0).contains(&heart.size_px));
            assert!((10.0..18.0).contains(&heart.duration_s));
            assert!((0.0..15.0).contains(&heart.delay_s));
            assert!((0.1..0.4).contains(&heart.opacity));
            assert!(HEART_EMOJIS.contains(&heart.emoji));
        }
    }

    #[test]
    fn confetti_within_parameter_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let confetti = ConfettiSpec::generate(&mut rng);
        assert_eq!(confetti.len(), CONFETTI_COUNT);

        for piece in &confetti {
            assert!((0.0..100.0).contains(&piece.x_pct));
            assert!((0.0..6.0).contains(&piece.delay_s));
            assert!((5.0..9.0).contains(&piece.duration_s));
            assert!((14.0..30.0).contains(&piece.size_px));
            assert!(CONFETTI_EMOJIS.contains(&piece.emoji));
        }
    }
}
