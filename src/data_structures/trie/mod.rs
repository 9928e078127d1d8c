// Copyright (c) 2025 WordTrie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Generic prefix tree (trie) implementation.
//!
//! This module provides a trie mapping string keys to arbitrary payloads with
//! exact-match lookup, prefix enumeration ("autocomplete"), deletion that
//! prunes nodes no longer serving any key, counting and reset.
//!
//! Keys are treated as sequences of `char`s; no normalization is applied.
//!
//! # Example
//!
//! ```
//! use wordtrie_lib::data_structures::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("cat", "animal");
//! trie.insert("car", "vehicle");
//! trie.insert("cart", "shopping");
//!
//! assert_eq!(trie.search("car"), Some(&"vehicle"));
//! assert_eq!(trie.auto_complete("ca").len(), 3);
//!
//! trie.delete("car");
//! assert_eq!(trie.search("car"), None);
//! assert_eq!(trie.search("cart"), Some(&"shopping"));
//! assert_eq!(trie.count_words(), 2);
//! ```
//!
//! # Concurrency
//!
//! `Trie` is a plain single-threaded container. Hosts sharing one across
//! threads must serialize mutations (`insert`, `delete`, `clear`) against each
//! other and against reads, e.g. by wrapping it in a `RwLock`.

use std::fmt;

mod iter;
mod node;

#[cfg(test)]
mod tests;

pub use iter::{Iter, Keys, Values};
pub use node::NodeRef;
use node::TrieNode;

/// A prefix tree associating string keys with payloads of type `T`.
///
/// The root always exists and stands for the empty prefix. Every node other
/// than the root is either terminal or has at least one child.
#[derive(Clone)]
pub struct Trie<T> {
    /// The root node of the trie
    root: TrieNode<T>,
}

impl<T> Trie<T> {
    /// Creates a new empty `Trie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Inserts a key with its payload.
    ///
    /// Missing nodes along the key's path are created. Re-inserting an
    /// existing key replaces its payload; the empty key marks the root.
    ///
    /// # Returns
    ///
    /// The payload previously stored for `key`, if any.
    pub fn insert<K>(&mut self, key: K, payload: T) -> Option<T>
    where
        K: AsRef<str>,
    {
        let mut node = &mut self.root;
        for c in key.as_ref().chars() {
            node = node.children.entry(c).or_default();
        }
        node.payload.replace(payload)
    }

    /// Looks up the payload stored for `key`.
    ///
    /// Returns `None` both when the path is missing and when `key` is only a
    /// prefix of other keys.
    pub fn search<K>(&self, key: K) -> Option<&T>
    where
        K: AsRef<str>,
    {
        self.find_node(key.as_ref())?.payload.as_ref()
    }

    /// Mutable counterpart of [`search`](Self::search).
    pub fn search_mut<K>(&mut self, key: K) -> Option<&mut T>
    where
        K: AsRef<str>,
    {
        let mut node = &mut self.root;
        for c in key.as_ref().chars() {
            node = node.children.get_mut(&c)?;
        }
        node.payload.as_mut()
    }

    /// Checks if `key` was inserted and not deleted since.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.search(key).is_some()
    }

    /// Checks if any stored key starts with `prefix`.
    pub fn contains_prefix<P>(&self, prefix: P) -> bool
    where
        P: AsRef<str>,
    {
        // A reachable node always leads to a key, so path existence suffices.
        self.find_node(prefix.as_ref()).is_some()
    }

    /// Removes `key` and prunes every ancestor left without a purpose.
    ///
    /// Pruning stops at the first ancestor that is terminal or still has
    /// other children, so prefixes shared with other keys survive. Removing an
    /// absent key is a no-op.
    ///
    /// # Returns
    ///
    /// The removed payload, or `None` if `key` was not present.
    pub fn delete<K>(&mut self, key: K) -> Option<T>
    where
        K: AsRef<str>,
    {
        let chars: Vec<char> = key.as_ref().chars().collect();

        // First pass: find the deepest node on the path that must survive.
        // The edge below it is where the pruned chain starts.
        let mut node = &self.root;
        let mut cut = 0;
        for (depth, c) in chars.iter().enumerate() {
            if node.is_terminal() || node.children.len() > 1 {
                cut = depth;
            }
            node = node.children.get(c)?;
        }
        if !node.is_terminal() {
            return None;
        }

        // The root is never pruned, and a node with children keeps its place.
        if chars.is_empty() || !node.children.is_empty() {
            let mut node = &mut self.root;
            for c in &chars {
                node = node.children.get_mut(c)?;
            }
            return node.payload.take();
        }

        let mut parent = &mut self.root;
        for c in &chars[..cut] {
            parent = parent.children.get_mut(c)?;
        }
        let mut chain = parent.children.remove(&chars[cut])?;
        for c in &chars[cut + 1..] {
            chain = chain.children.remove(c)?;
        }
        debug_assert!(chain.children.is_empty());
        chain.payload
    }

    /// Returns every stored key starting with `prefix`, with its payload.
    ///
    /// `prefix` itself is included when it is a key. Order is unspecified;
    /// an absent prefix yields an empty vector.
    pub fn auto_complete<P>(&self, prefix: P) -> Vec<(String, &T)>
    where
        P: AsRef<str>,
    {
        self.prefix_iter(prefix).collect()
    }

    /// Lazy form of [`auto_complete`](Self::auto_complete).
    pub fn prefix_iter<P>(&self, prefix: P) -> Iter<'_, T>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        Iter::new(prefix.to_owned(), self.find_node(prefix))
    }

    /// Returns every stored key with its payload, in unspecified order.
    pub fn get_all_words(&self) -> Vec<(String, &T)> {
        self.iter().collect()
    }

    /// Iterates over all `(key, payload)` pairs.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(String::new(), Some(&self.root))
    }

    /// Iterates over all keys.
    pub fn keys(&self) -> Keys<'_, T> {
        Keys { inner: self.iter() }
    }

    /// Iterates over all payloads.
    pub fn values(&self) -> Values<'_, T> {
        Values { inner: self.iter() }
    }

    /// Counts the stored keys by walking the whole tree.
    ///
    /// This is an O(n) operation in the number of nodes.
    pub fn count_words(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_terminal() {
                count += 1;
            }
            stack.extend(node.children.values());
        }
        count
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_prunable()
    }

    /// Discards every key, leaving a fresh empty root.
    pub fn clear(&mut self) {
        let mut old = std::mem::take(&mut self.root);
        old.dismantle();
    }

    /// A read-only view of the root for structural traversal.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(None, &self.root)
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode<T>> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T> Drop for Trie<T> {
    fn drop(&mut self) {
        self.root.dismantle();
    }
}

impl<K: AsRef<str>, T> Extend<(K, T)> for Trie<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, payload) in iter {
            self.insert(key, payload);
        }
    }
}

impl<K: AsRef<str>, T> FromIterator<(K, T)> for Trie<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a, T> IntoIterator for &'a Trie<T> {
    type Item = (String, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
