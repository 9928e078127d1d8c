// Copyright (c) 2025 WordTrie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Node implementation for the prefix trie.
//!
//! Each node stands for one position in a key's character sequence. A node is
//! terminal exactly when it carries a payload, so "payload without a key" is
//! not representable.

use std::fmt;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child table keyed by the edge character.
pub(crate) type Children<T> = HashMap<char, TrieNode<T>, FnvBuildHasher>;

/// A node in the trie.
pub(crate) struct TrieNode<T> {
    /// Map of edge characters to owned child nodes
    pub(crate) children: Children<T>,

    /// Payload of the key ending here; `Some` iff the node is terminal
    pub(crate) payload: Option<T>,
}

impl<T> TrieNode<T> {
    /// Creates a new empty, non-terminal node.
    pub(crate) fn new() -> Self {
        Self {
            children: Children::default(),
            payload: None,
        }
    }

    /// Whether some inserted key ends exactly at this node.
    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.payload.is_some()
    }

    /// A node that is neither terminal nor has children serves no key.
    #[inline]
    pub(crate) fn is_prunable(&self) -> bool {
        self.payload.is_none() && self.children.is_empty()
    }

    /// Detaches all descendants and drops them one at a time.
    ///
    /// The derived drop glue recurses once per level, which overflows the
    /// stack on very long keys.
    pub(crate) fn dismantle(&mut self) {
        let mut stack: Vec<TrieNode<T>> = self.children.drain().map(|(_, n)| n).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

// Built from a flat worklist; the derived impl recurses once per level.
impl<T: Clone> Clone for TrieNode<T> {
    fn clone(&self) -> Self {
        // (parent index, edge, copy without children). Parents always precede
        // their descendants, so popping from the back attaches leaves first.
        let mut flat = vec![(0, '\0', self.shallow_clone())];
        let mut stack = vec![(0, self)];
        while let Some((index, source)) = stack.pop() {
            for (c, child) in &source.children {
                stack.push((flat.len(), child));
                flat.push((index, *c, child.shallow_clone()));
            }
        }

        while let Some((parent, edge, node)) = flat.pop() {
            match flat.get_mut(parent) {
                Some((_, _, parent)) => {
                    parent.children.insert(edge, node);
                }
                None => return node,
            }
        }
        TrieNode::new()
    }
}

impl<T: Clone> TrieNode<T> {
    fn shallow_clone(&self) -> Self {
        Self {
            children: Children::with_capacity_and_hasher(self.children.len(), Default::default()),
            payload: self.payload.clone(),
        }
    }
}

// Only the edges are listed so formatting never descends.
impl<T: fmt::Debug> fmt::Debug for TrieNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut edges: Vec<_> = self.children.keys().collect();
        edges.sort_unstable();
        f.debug_struct("TrieNode")
            .field("payload", &self.payload)
            .field("edges", &edges)
            .finish()
    }
}

// Manual impl: `T` needs no `Default` for an empty node.
impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of one node and the edge character leading into it.
///
/// Handed out by [`Trie::root`](super::Trie::root) for callers that need the
/// tree shape itself, such as the tree renderer.
#[derive(Debug)]
pub struct NodeRef<'a, T> {
    edge: Option<char>,
    node: &'a TrieNode<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(edge: Option<char>, node: &'a TrieNode<T>) -> Self {
        Self { edge, node }
    }

    /// The character on the incoming edge, `None` for the root.
    pub fn edge(&self) -> Option<char> {
        self.edge
    }

    /// Whether a key ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.node.is_terminal()
    }

    /// The payload stored for the key ending here.
    pub fn payload(&self) -> Option<&'a T> {
        self.node.payload.as_ref()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.node.children.len()
    }

    /// Direct children in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let node = self.node;
        node.children
            .iter()
            .map(|(c, child)| NodeRef::new(Some(*c), child))
    }

    /// Direct children ordered by edge character.
    pub fn sorted_children(&self) -> Vec<NodeRef<'a, T>> {
        let mut children: Vec<_> = self.children().collect();
        children.sort_unstable_by_key(|child| child.edge);
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_prunable() {
        let node = TrieNode::<u8>::new();
        assert!(!node.is_terminal());
        assert!(node.is_prunable());
    }

    #[test]
    fn test_terminal_node_is_not_prunable() {
        let mut node = TrieNode::new();
        node.payload = Some(1u8);
        assert!(node.is_terminal());
        assert!(!node.is_prunable());
    }

    #[test]
    fn test_dismantle_deep_chain() {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..100_000 {
            node = node.children.entry('x').or_default();
        }
        node.payload = Some(());

        root.dismantle();
        assert!(root.is_prunable());
    }

    #[test]
    fn test_clone_deep_chain() {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..100_000 {
            node = node.children.entry('x').or_default();
        }
        node.payload = Some(7u32);

        let mut copy = root.clone();
        let mut depth = 0;
        let mut cursor = &copy;
        while let Some(child) = cursor.children.get(&'x') {
            cursor = child;
            depth += 1;
        }
        assert_eq!(depth, 100_000);
        assert_eq!(cursor.payload, Some(7));

        copy.dismantle();
        root.dismantle();
    }

    #[test]
    fn test_debug_lists_edges_only() {
        let mut node = TrieNode::new();
        node.payload = Some(1u8);
        node.children.entry('b').or_default().payload = Some(2);
        node.children.entry('a').or_default();

        assert_eq!(
            format!("{node:?}"),
            "TrieNode { payload: Some(1), edges: ['a', 'b'] }"
        );
    }

    #[test]
    fn test_sorted_children() {
        let mut node = TrieNode::<()>::new();
        for c in ['z', 'a', 'm'] {
            node.children.insert(c, TrieNode::new());
        }

        let view = NodeRef::new(None, &node);
        let edges: Vec<_> = view.sorted_children().iter().map(|c| c.edge()).collect();
        assert_eq!(edges, vec![Some('a'), Some('m'), Some('z')]);
        assert_eq!(view.child_count(), 3);
    }
}
