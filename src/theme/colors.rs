//! Color constants for the Valentine palette.
//!
//! Soft blush backgrounds with a pink-red-rose gradient accent line.

#![allow(dead_code)]

// === BLUSH (Backgrounds) ===
pub const BLUSH_LIGHT: &str = "#fce7f3";
pub const BLUSH_PAPER: &str = "#fff1f2";
pub const BLUSH_DEEP: &str = "#fee2e2";

// === PINK / RED / ROSE (Accents) ===
pub const PINK: &str = "#ec4899";
pub const RED: &str = "#ef4444";
pub const ROSE: &str = "#f43f5e";
pub const PINK_SOFT: &str = "#f9a8d4";
pub const PINK_BRIGHT: &str = "#f472b6";

// === TEXT ===
pub const INK: &str = "#374151";
pub const INK_SOFT: &str = "#6b7280";
pub const PINK_TEXT: &str = "#db2777";
pub const PINK_DEEP: &str = "#be185d";

// === NIGHT (Gallery panel) ===
pub const NIGHT: &str = "#0f172a";
pub const NIGHT_PLUM: &str = "#2e1065";

/// Colored slips in the gallery's opening confetti burst.
pub const GALLERY_CONFETTI: &[&str] = &[
    "#f472b6", "#a78bfa", "#60a5fa", "#34d399", "#fbbf24", "#fb923c", "#f87171",
];
