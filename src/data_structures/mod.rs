//! Data structures for WordTrie.
//!
//! All implementations are single-threaded, contain no unsafe code, and walk
//! their trees with explicit stacks so deep keys cannot exhaust the call stack.

pub mod trie;

// Re-export common data structures
pub use trie::{NodeRef, Trie};
