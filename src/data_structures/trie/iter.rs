// Copyright (c) 2025 WordTrie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Depth-first iteration over the keys stored below a node.

use super::node::TrieNode;

/// An iterator over the `(key, payload)` pairs of a [`Trie`](super::Trie).
///
/// This struct is created by the [`iter`] and [`prefix_iter`] methods on
/// [`Trie`](super::Trie). The walk keeps its own stack, so deep keys do not
/// grow the call stack. Order is unspecified.
///
/// [`iter`]: super::Trie::iter
/// [`prefix_iter`]: super::Trie::prefix_iter
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<(String, &'a TrieNode<T>)>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(prefix: String, start: Option<&'a TrieNode<T>>) -> Self {
        Self {
            stack: start.map(|node| vec![(prefix, node)]).unwrap_or_default(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (String, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            for (c, child) in &node.children {
                let mut child_key = String::with_capacity(key.len() + c.len_utf8());
                child_key.push_str(&key);
                child_key.push(*c);
                self.stack.push((child_key, child));
            }

            if let Some(payload) = &node.payload {
                return Some((key, payload));
            }
        }
        None
    }
}

/// An iterator over the keys of a [`Trie`](super::Trie).
///
/// This struct is created by the [`keys`](super::Trie::keys) method.
#[derive(Debug)]
pub struct Keys<'a, T> {
    pub(crate) inner: Iter<'a, T>,
}

impl<T> Iterator for Keys<'_, T> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the payloads of a [`Trie`](super::Trie).
///
/// This struct is created by the [`values`](super::Trie::values) method.
#[derive(Debug)]
pub struct Values<'a, T> {
    pub(crate) inner: Iter<'a, T>,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}
