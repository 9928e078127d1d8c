//! Test modules for WordTrie.
//!
//! Suites for the collaborators around the trie: configuration, errors,
//! word loading and rendering. The trie's own unit and property tests live
//! next to it in `data_structures::trie`.

pub mod config_tests;
pub mod error_tests;

pub use test_utils::{word_strategy, TestFixture};
