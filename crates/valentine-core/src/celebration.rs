//! Celebration view state: rotating sweet messages and the love counter.
//!
//! Both are driven by timers owned by the view; the state here is just
//! the arithmetic, so it stays testable without a scheduler.

use std::time::Duration;

use rand::Rng;

/// Messages cycled in the celebration card.
pub const SWEET_MESSAGES: &[&str] = &[
    "You just made me the happiest person in the world! 🌍💖",
    "I promise to love you more than pizza... and that's saying a lot! 🍕❤️",
    "You + Me = Forever ∞ 💕",
    "My heart does a little dance every time I think of you! 💃🕺",
    "You're not just my Valentine, you're my everything! 🌟",
    "If kisses were snowflakes, I'd send you a blizzard! ❄️💋",
    "You stole my heart, but I'll let you keep it! 🥰",
    "Together is my favorite place to be! 🏡💗",
];

/// The counter freezes here and the display flips to the infinity glyph.
pub const LOVE_CAP: u32 = 9_999;

/// Per-tick increment range for the love counter.
pub const LOVE_TICK_MIN: u32 = 10;
pub const LOVE_TICK_MAX: u32 = 59;

/// Entrance reveal stagger: content, message block, extras.
pub const CONTENT_REVEAL: Duration = Duration::from_millis(200);
pub const MESSAGE_REVEAL: Duration = Duration::from_millis(800);
pub const EXTRAS_REVEAL: Duration = Duration::from_millis(1_400);

/// Timer periods for the two repeating loops.
pub const MESSAGE_ROTATION_PERIOD: Duration = Duration::from_secs(4);
pub const LOVE_TICK_PERIOD: Duration = Duration::from_millis(100);

/// Index into [`SWEET_MESSAGES`], advancing on a fixed timer and
/// wrapping from the last entry back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageCycle {
    index: usize,
}

impl MessageCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        SWEET_MESSAGES[self.index]
    }

    /// Step to the next message, modulo the catalog size.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % SWEET_MESSAGES.len();
    }
}

/// Monotonically climbing counter, frozen once it reaches [`LOVE_CAP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoveCounter {
    value: u32,
}

impl LoveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Add a random increment, clamping at the cap. No-op once frozen.
    pub fn tick(&mut self, rng: &mut impl Rng) {
        if self.value >= LOVE_CAP {
            return;
        }
        let step = rng.random_range(LOVE_TICK_MIN..=LOVE_TICK_MAX);
        self.value = (self.value + step).min(LOVE_CAP);
    }

    pub fn is_overflowing(&self) -> bool {
        self.value >= LOVE_CAP
    }

    /// The numeral with thousands separators, or the overflow glyph.
    pub fn display(&self) -> String {
        if self.is_overflowing() {
            "∞".to_string()
        } else {
            format_thousands(self.value)
        }
    }

    /// Caption under the numeral.
    pub fn caption(&self) -> &'static str {
        if self.is_overflowing() {
            "Love overflow! Can't count anymore! 💥"
        } else {
            "Counting the ways I love you..."
        }
    }
}

/// The promise cards under the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promise {
    pub emoji: &'static str,
    pub label: &'static str,
}

pub const PROMISES: &[Promise] = &[
    Promise { emoji: "🍫", label: "Chocolates" },
    Promise { emoji: "🌹", label: "Flowers" },
    Promise { emoji: "🤗", label: "Hugs" },
    Promise { emoji: "💋", label: "Kisses" },
];

fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn message_cycle_wraps_in_order() {
        let mut cycle = MessageCycle::new();
        assert_eq!(cycle.current(), SWEET_MESSAGES[0]);

        for expected in 1..SWEET_MESSAGES.len() {
            cycle.advance();
            assert_eq!(cycle.index(), expected);
        }

        // N-1 wraps back to 0.
        cycle.advance();
        assert_eq!(cycle.index(), 0);
        assert_eq!(cycle.current(), SWEET_MESSAGES[0]);
    }

    #[test]
    fn love_counter_is_monotonic_and_capped() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counter = LoveCounter::new();
        let mut previous = 0;

        // 500 ticks is far more than enough to hit the cap.
        for _ in 0..500 {
            counter.tick(&mut rng);
            assert!(counter.value() >= previous);
            assert!(counter.value() <= LOVE_CAP);
            previous = counter.value();
        }
        assert_eq!(counter.value(), LOVE_CAP);
        assert!(counter.is_overflowing());

        // Frozen from here on.
        counter.tick(&mut rng);
        assert_eq!(counter.value(), LOVE_CAP);
    }

    #[test]
    fn display_switches_to_overflow_glyph() {
        let mut counter = LoveCounter::new();
        assert_eq!(counter.display(), "0");
        assert_eq!(counter.caption(), "Counting the ways I love you...");

        let mut rng = StdRng::seed_from_u64(7);
        while !counter.is_overflowing() {
            counter.tick(&mut rng);
        }
        assert_eq!(counter.display(), "∞");
        assert_eq!(counter.caption(), "Love overflow! Can't count anymore! 💥");
    }

    #[test]
    fn thousands_formatting() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(9_998), "9,998");
        assert_eq!(format_thousands(123_456), "123,456");
    }

    #[test]
    fn reveal_stagger_is_ordered() {
        assert!(CONTENT_REVEAL < MESSAGE_REVEAL);
        assert!(MESSAGE_REVEAL < EXTRAS_REVEAL);
    }

    #[test]
    fn four_promises() {
        assert_eq!(PROMISES.len(), 4);
        assert_eq!(PROMISES[0].label, "Chocolates");
    }
}
