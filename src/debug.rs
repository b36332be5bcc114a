//! Debug utilities: tree drawing and integrity checks.

use std::fmt::{self, Write};

use crate::node::Node;
use crate::tree::Tree;

impl<V: fmt::Debug> Tree<V> {
    /// Draw the tree structure.
    ///
    /// In verbose mode the header carries the node count, each label is
    /// prefixed with its node's priority and followed by the node's value.
    pub fn render(&self, verbose: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_tree(&mut out, verbose);
        out
    }

    pub fn write_tree<W: Write>(&self, out: &mut W, verbose: bool) -> fmt::Result {
        out.write_str(self.name())?;
        if verbose {
            write!(out, " (# of nodes: {})", self.size())?;
        }
        out.write_str("\n.\n")?;
        write_edges(out, self.root(), verbose, &mut String::new())
    }
}

fn write_edges<V: fmt::Debug, W: Write>(
    out: &mut W,
    node: &Node<V>,
    verbose: bool,
    indent: &mut String,
) -> fmt::Result {
    let last = node.edges.len().saturating_sub(1);
    for (i, e) in node.edges.iter().enumerate() {
        out.write_str(indent)?;
        out.write_str("+-- ")?;
        if verbose {
            write!(out, "({}) ", e.node.priority)?;
        }
        out.write_str(&e.label)?;
        if verbose {
            if let Some(v) = &e.node.value {
                write!(out, " -> {v:?}")?;
            }
        }
        out.write_char('\n')?;

        let mark = indent.len();
        indent.push_str(if i == last { "    " } else { "|   " });
        write_edges(out, &e.node, verbose, indent)?;
        indent.truncate(mark);
    }
    Ok(())
}

impl<V: fmt::Debug> fmt::Display for Tree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, false)
    }
}

impl<V> Tree<V> {
    /// Walk the whole tree and describe every broken structural rule.
    ///
    /// Looks for empty labels, siblings sharing a first character, valueless
    /// leaves or single-child chains below the root, stale priorities and
    /// depths, and a node count that disagrees with [`size`](Tree::size).
    /// An empty result means the tree is healthy.
    pub fn verify_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.root().depth != 0 {
            issues.push(format!("root depth is {}", self.root().depth));
        }
        let reachable = verify_node(self.root(), true, "", &mut issues);
        if reachable != self.size() {
            issues.push(format!(
                "{} nodes reachable but size() = {}",
                reachable,
                self.size()
            ));
        }
        issues
    }
}

fn verify_node<V>(node: &Node<V>, is_root: bool, path: &str, issues: &mut Vec<String>) -> usize {
    for (i, a) in node.edges.iter().enumerate() {
        let Some(first) = a.label.chars().next() else {
            issues.push(format!("empty label below {path:?}"));
            continue;
        };
        if node.edges[i + 1..]
            .iter()
            .any(|b| b.label.starts_with(first))
        {
            issues.push(format!("siblings below {path:?} share first char {first:?}"));
        }
    }

    if !is_root && node.value.is_none() {
        match node.edges.len() {
            0 => issues.push(format!("valueless leaf at {path:?}")),
            1 => issues.push(format!("unmerged valueless node at {path:?}")),
            _ => {}
        }
    }

    let below: usize = node.edges.iter().map(|e| e.node.priority).sum();
    let expected = usize::from(node.value.is_some()) + below;
    if node.priority != expected {
        issues.push(format!(
            "priority at {path:?} is {} but should be {expected}",
            node.priority
        ));
    }

    let mut reachable = 1;
    for e in &node.edges {
        let child_path = format!("{path}{}", e.label);
        if e.node.depth != node.depth + 1 {
            issues.push(format!(
                "depth at {child_path:?} is {} but parent is at {}",
                e.node.depth, node.depth
            ));
        }
        reachable += verify_node(&e.node, false, &child_path, issues);
    }
    reachable
}
