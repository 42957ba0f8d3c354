//! CLI Commands
//!
//! All md4 CLI commands organized as separate modules.

mod hash;
mod vectors;

pub use hash::hash_messages;
pub use vectors::self_test;
