//! Valentine Core Library
//!
//! State machines and content catalogs behind the "Will you be my
//! Valentine?" experience. Everything in this crate is pure logic:
//! the evasive No button, the derived escalation presentation, the
//! celebration counters, the decoration particle parameters, and the
//! image/letter catalogs. No rendering, no persistence - all state
//! lives for one session and is discarded on exit.
//!
//! ## Overview
//!
//! The experience has exactly two top-level views, switched by a single
//! boolean owned by the application shell:
//!
//! - **Proposal**: the question, a YES button that grows with every
//!   evasion, and a No button that relocates itself instead of being
//!   clickable in place ([`ProposalState`]).
//! - **Celebration**: rotating sweet messages ([`MessageCycle`]), a
//!   runaway love counter ([`LoveCounter`]), and two modals (love
//!   letter, image gallery).
//!
//! ## Quick Start
//!
//! ```ignore
//! use valentine_core::{ProposalState, Viewport};
//!
//! let mut rng = rand::rng();
//! let mut state = ProposalState::new();
//!
//! // The pointer approaches the No button...
//! state.evade(&mut rng, Viewport::new(1280.0, 720.0));
//!
//! assert_eq!(state.evade_count(), 1);
//! assert!(state.is_floating());
//! println!("{} {}", state.mood().emoji(), state.subtitle());
//! ```

pub mod celebration;
pub mod decor;
pub mod error;
pub mod gallery;
pub mod letter;
pub mod proposal;

// Re-exports
pub use celebration::{LoveCounter, MessageCycle, Promise, PROMISES, SWEET_MESSAGES};
pub use decor::{ConfettiSpec, HeartSpec};
pub use error::CatalogError;
pub use gallery::{GallerySelection, ImageRecord};
pub use letter::LOVE_LETTER_MD;
pub use proposal::{EvadePoint, Mood, ProposalState, Viewport};
