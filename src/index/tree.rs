//! AVL node storage and the balance-preserving insert/remove paths.
//!
//! Every child slot owns its subtree exclusively. Rotations move boxes
//! between slots; nothing here is ever shared or aliased.

use std::cmp::Ordering;
use std::mem;

use tracing::trace;

use super::error::IndexError;
use super::model::Track;

pub(super) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(super) struct Node {
    pub(super) track: Track,
    pub(super) left: Link,
    pub(super) right: Link,
    /// Cached subtree height, 1 for a leaf.
    pub(super) height: usize,
}

impl Node {
    fn leaf(track: Track) -> Self {
        Self {
            track,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height.
    pub(super) fn balance(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Height of a possibly absent subtree (0 when absent).
pub(super) fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

fn rotate_right(mut y: Box<Node>) -> Box<Node> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    trace!(pivot = y.track.title(), "rotate right");
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left(mut x: Box<Node>) -> Box<Node> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    trace!(pivot = x.track.title(), "rotate left");
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// What the unwind path knows when it rebalances an ancestor.
///
/// After an insert the new key decides between single and double rotation;
/// after a removal there is no key, so the heavy child's own balance does.
enum Unwind<'a> {
    Inserted(&'a str),
    Removed,
}

impl Unwind<'_> {
    /// Left-heavy node whose left child leans right (left-right case).
    fn needs_left_right(&self, left: &Node) -> bool {
        match self {
            Unwind::Inserted(key) => *key > left.track.title(),
            Unwind::Removed => left.balance() < 0,
        }
    }

    /// Right-heavy node whose right child leans left (right-left case).
    fn needs_right_left(&self, right: &Node) -> bool {
        match self {
            Unwind::Inserted(key) => *key < right.track.title(),
            Unwind::Removed => right.balance() > 0,
        }
    }
}

fn rebalance(slot: &mut Link, unwind: Unwind<'_>) {
    let Some(mut node) = slot.take() else {
        return;
    };
    node.update_height();

    let balance = node.balance();
    let node = if balance > 1 {
        if node
            .left
            .as_deref()
            .is_some_and(|left| unwind.needs_left_right(left))
        {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance < -1 {
        if node
            .right
            .as_deref()
            .is_some_and(|right| unwind.needs_right_left(right))
        {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    };

    *slot = Some(node);
}

/// Insert `track` below `slot`, keyed by `key` (the track's own title).
///
/// An equal title anywhere on the path aborts before anything is touched.
pub(super) fn insert(slot: &mut Link, track: Track, key: &str) -> Result<(), IndexError> {
    let node = match slot {
        Some(node) => node,
        None => {
            *slot = Some(Box::new(Node::leaf(track)));
            return Ok(());
        }
    };

    match key.cmp(node.track.title()) {
        Ordering::Less => insert(&mut node.left, track, key)?,
        Ordering::Greater => insert(&mut node.right, track, key)?,
        Ordering::Equal => {
            return Err(IndexError::AlreadyExists {
                title: node.track.title().to_string(),
            });
        }
    }

    rebalance(slot, Unwind::Inserted(key));
    Ok(())
}

/// Remove the node whose title equals `key` (ordinal) and hand back its track.
///
/// Returns `None` and leaves the subtree untouched when `key` is absent.
pub(super) fn remove(slot: &mut Link, key: &str) -> Option<Track> {
    let node = slot.as_mut()?;

    let removed = match key.cmp(node.track.title()) {
        Ordering::Less => remove(&mut node.left, key)?,
        Ordering::Greater => remove(&mut node.right, key)?,
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // Two children: the in-order successor has no left child, so
            // removing it recurses into the splice case below.
            let successor_key = min_title(&node.right)?.to_string();
            let successor = remove(&mut node.right, &successor_key)?;
            mem::replace(&mut node.track, successor)
        }
        Ordering::Equal => {
            let mut doomed = slot.take()?;
            *slot = doomed.left.take().or_else(|| doomed.right.take());
            return Some(doomed.track);
        }
    };

    rebalance(slot, Unwind::Removed);
    Some(removed)
}

fn min_title(link: &Link) -> Option<&str> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(node.track.title())
}
