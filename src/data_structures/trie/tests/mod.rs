// Copyright (c) 2025 WordTrie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Test suites for the prefix trie.


use super::{NodeRef, Trie};

/// Counts non-root nodes that are neither terminal nor have children.
pub(super) fn dangling_nodes<T>(trie: &Trie<T>) -> usize {
    let mut dangling = 0;
    let mut stack: Vec<NodeRef<'_, T>> = trie.root().children().collect();
    while let Some(node) = stack.pop() {
        if !node.is_terminal() && node.child_count() == 0 {
            dangling += 1;
        }
        stack.extend(node.children());
    }
    dangling
}

/// Collects enumeration output into a sorted, owned form.
pub(super) fn sorted<T: Clone>(pairs: Vec<(String, &T)>) -> Vec<(String, T)> {
    let mut owned: Vec<_> = pairs.into_iter().map(|(k, v)| (k, v.clone())).collect();
    owned.sort_by(|a, b| a.0.cmp(&b.0));
    owned
}
