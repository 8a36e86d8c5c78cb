//! Read-only scans over the tree.
//!
//! Results are plain vectors of borrowed tracks; the tree's own child links
//! are never used to chain results together.

use std::cmp::Ordering;

use super::model::Track;
use super::tree::{Link, Node};

/// In-order (ascending title) iterator over a [`TrackIndex`](super::TrackIndex).
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(root: &'a Link, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.track)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// ASCII case-insensitive ordering, byte by byte.
pub(super) fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Ordinal descent; finds any stored title exactly.
pub(super) fn find_exact<'a>(root: &'a Link, title: &str) -> Option<&'a Track> {
    let mut node = root.as_deref();
    while let Some(n) = node {
        node = match title.cmp(n.track.title()) {
            Ordering::Less => n.left.as_deref(),
            Ordering::Greater => n.right.as_deref(),
            Ordering::Equal => return Some(&n.track),
        };
    }
    None
}

/// Case-insensitive descent.
///
/// The tree is ordered ordinally, so when titles differ only in how their
/// case sorts this can walk past a folded match; callers try
/// [`find_exact`] first.
pub(super) fn find_folded<'a>(root: &'a Link, title: &str) -> Option<&'a Track> {
    let mut node = root.as_deref();
    while let Some(n) = node {
        node = match cmp_ignore_ascii_case(title, n.track.title()) {
            Ordering::Less => n.left.as_deref(),
            Ordering::Greater => n.right.as_deref(),
            Ordering::Equal => return Some(&n.track),
        };
    }
    None
}
