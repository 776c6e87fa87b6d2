//! scribe_ast: Syntax tree definitions for the scribe TypeScript toolkit.
//!
//! This crate defines the token kinds, the immutable node types, a validating
//! node factory, and the visitor used by every consumer of the tree.

pub mod factory;
pub mod modifiers;
pub mod node;
pub mod syntax_kind;
pub mod visitor;

// Re-export key types
pub use factory::{NodeError, NodeResult};
pub use modifiers::ModifierFlags;
pub use node::*;
pub use syntax_kind::SyntaxKind;
pub use visitor::{AstNode, Visitor};
