//! Page components for the Valentine proposal.

mod ask;
mod celebration;

pub use ask::AskPage;
pub use celebration::CelebrationPage;
