//! WordTrie Library
//!
//! A generic prefix tree (trie) associating string keys with typed payloads,
//! plus the collaborators the `wordtrie` binary uses around it: a word
//! loader, a console tree renderer, layered configuration and error
//! reporting.
//!
//! # Architecture
//!
//! - [`data_structures::trie`] is the core and knows nothing about files,
//!   configuration or logging.
//! - [`loader`] turns text sources into keys and frequency tries.
//! - [`render`] draws a trie through its read-only node view.
//! - [`config`] and [`error`] carry the ambient concerns.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;
pub mod render;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for WordTrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
