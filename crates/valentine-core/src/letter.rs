//! The love letter shown in the letter modal.
//!
//! Kept as Markdown source; the desktop shell renders it to HTML.

/// The letter, verbatim.
pub const LOVE_LETTER_MD: &str = "\
🌹 You're My Best Friend...

You're the first person I want to tell my good news to. You're the one \
I turn to when the world feels heavy. You laugh at my terrible jokes \
(even when they're really bad 😄). You know my flaws, my weird habits, \
my fears — and yet, you choose to stay. Every. Single. Day.

That's not just love — that's magic.

We've shared so many beautiful chapters together — late-night talks, \
silly fights, spontaneous adventures, comfortable silences, and a \
million little moments that mean everything to me.

But today, on this Valentine's Day, I want to ask you something I've \
been carrying in my heart for a while...

Will you be mine — not just today, not just on Valentine's Day — but \
forever? Will you let me be the one who loves you endlessly, the one \
who holds your hand through every storm, and the one who makes you \
smile every single morning?

Will you marry me? 💍❤️

You've already made my life the most beautiful story. Now, I just want \
to make sure it never ends.
";

/// The letter's paragraphs, blank-line separated.
pub fn paragraphs() -> impl Iterator<Item = &'static str> {
    LOVE_LETTER_MD
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_has_content() {
        assert!(LOVE_LETTER_MD.contains("Will you marry me?"));
        assert!(LOVE_LETTER_MD.starts_with("🌹"));
    }

    #[test]
    fn paragraphs_are_nonempty() {
        let paragraphs: Vec<_> = paragraphs().collect();
        assert!(paragraphs.len() >= 7);
        assert!(paragraphs.iter().all(|p| !p.is_empty()));
    }
}
