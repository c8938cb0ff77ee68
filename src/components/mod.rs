//! UI components for the Valentine proposal.

mod floating_hearts;
mod gallery_modal;
mod letter_modal;

pub use floating_hearts::FloatingHearts;
pub use gallery_modal::GalleryModal;
pub use letter_modal::LetterModal;
