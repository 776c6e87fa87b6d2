//! scribe_core: Core utilities shared by the scribe TypeScript toolkit.
//!
//! Provides source locations and the line map used to derive them.

pub mod text;

// Re-export commonly used types
pub use text::{LineMap, SourceLocation};
