//! Domain types for source classification.
//!
//! - Source: a labelled root path from the host's media settings
//! - MediaContent: a library file attributed to a source label
//! - MediaType / ContentKind: query filters and classification outcomes

pub mod media;
pub mod source;

pub use media::{ContentKind, MediaType};
pub use source::{MediaContent, Source};
