//! Host media library access.
//!
//! - `paths`: normalization of the path encodings the host reports
//! - `queries`: movie, TV show, episode and source queries

pub mod paths;
pub mod queries;

pub use paths::{normalize_path, normalize_string, unstack, unstack_multipath};
pub use queries::Library;
