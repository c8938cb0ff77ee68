//! Error types for the Valentine core.
//!
//! The interaction model is total - evasion, acceptance, counters and
//! selection cannot fail. The only fallible surface is the embedded
//! image catalog, which is parsed and validated once at startup.

use thiserror::Error;

/// Errors raised while loading the embedded image catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The embedded JSON did not parse
    #[error("Image catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog parsed but contains no records
    #[error("Image catalog is empty")]
    Empty,

    /// Two records share the same id
    #[error("Image catalog has duplicate id: {0}")]
    DuplicateId(u32),

    /// A record has no url to render
    #[error("Image {0} has an empty url")]
    MissingUrl(u32),
}
