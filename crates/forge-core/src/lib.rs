//! Forge Core - Shared functionality for the Forge scaffolding tools
//!
//! The generators are thin CLIs; everything they have in common lives
//! here: locating the tools directory and the templates next to it,
//! ordered placeholder substitution, and writing a source/header pair.

pub mod emit;
pub mod paths;
pub mod template;
pub mod tokens;

pub use emit::{emit, GeneratedPair};
pub use paths::Paths;
pub use template::TemplatePair;
pub use tokens::Substitutions;
