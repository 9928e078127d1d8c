//! Console rendering of a trie as a branch/leaf tree.
//!
//! ```text
//! .
//! ├── c
//! │   └── a
//! │       ├── r [1]
//! │       │   └── t [1]
//! │       └── t [1]
//! └── d
//!     └── o
//!         └── g [1]
//! ```

use std::fmt::Display;

use crate::config::render::{RenderConfig, RenderStyle};
use crate::data_structures::{NodeRef, Trie};

/// Branch symbols for one style.
struct Glyphs {
    branch: &'static str,
    last: &'static str,
    vertical: &'static str,
    blank: &'static str,
}

const UNICODE: Glyphs = Glyphs {
    branch: "├── ",
    last: "└── ",
    vertical: "│   ",
    blank: "    ",
};

const ASCII: Glyphs = Glyphs {
    branch: "|-- ",
    last: "`-- ",
    vertical: "|   ",
    blank: "    ",
};

/// Marker drawn after terminal nodes when payloads are hidden.
const TERMINAL_MARKER: &str = "*";

/// Draws tries as text trees.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    /// Creates a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renders `trie` with children in edge order, one node per line.
    pub fn render<T: Display>(&self, trie: &Trie<T>) -> String {
        let glyphs = match self.config.style {
            RenderStyle::Unicode => &UNICODE,
            RenderStyle::Ascii => &ASCII,
        };

        let root = trie.root();
        let mut out = String::from(".");
        self.write_label(&mut out, root);
        out.push('\n');

        // (node, indentation inherited from ancestors, is last sibling)
        let mut stack: Vec<(NodeRef<'_, T>, String, bool)> = Vec::new();
        push_children(&mut stack, root, String::new());

        while let Some((node, indent, is_last)) = stack.pop() {
            out.push_str(&indent);
            out.push_str(if is_last { glyphs.last } else { glyphs.branch });
            if let Some(c) = node.edge() {
                out.push(c);
            }
            self.write_label(&mut out, node);
            out.push('\n');

            let child_indent = format!(
                "{indent}{}",
                if is_last { glyphs.blank } else { glyphs.vertical }
            );
            push_children(&mut stack, node, child_indent);
        }

        out
    }

    fn write_label<T: Display>(&self, out: &mut String, node: NodeRef<'_, T>) {
        let Some(payload) = node.payload() else {
            return;
        };
        if self.config.show_payloads {
            out.push_str(&format!(" [{payload}]"));
        } else {
            out.push(' ');
            out.push_str(TERMINAL_MARKER);
        }
    }
}

// Pushed in reverse so the smallest edge is popped first.
fn push_children<'a, T>(
    stack: &mut Vec<(NodeRef<'a, T>, String, bool)>,
    node: NodeRef<'a, T>,
    indent: String,
) {
    let children = node.sorted_children();
    let last = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate().rev() {
        stack.push((child, indent.clone(), i == last));
    }
}
