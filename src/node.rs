//! The owned node representation shared by the mutation, query and diagnostics code.
//!
//! Nodes never know their parent. Every recursive function here takes a subtree by value and
//! hands back the (possibly different) subtree that the caller must put back into the slot it
//! came from. That "take, recurse, reattach" protocol is the only way links change.

use std::cmp::Ordering;

/// An owning, possibly empty, reference to a subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single key with its two (possibly empty) subtrees.
#[derive(Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Allocates a node with no children.
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Returns the node holding the smallest key in the subtree, i.e. its left-most node.
pub(crate) fn minimum<K>(node: Option<&Node<K>>) -> Option<&Node<K>> {
    let mut current = node?;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    Some(current)
}

/// Returns the node holding the largest key in the subtree, i.e. its right-most node.
pub(crate) fn maximum<K>(node: Option<&Node<K>>) -> Option<&Node<K>> {
    let mut current = node?;
    while let Some(right) = current.right.as_deref() {
        current = right;
    }
    Some(current)
}

/// Finds the node holding exactly `key`.
pub(crate) fn find<'a, K>(node: Option<&'a Node<K>>, key: &K) -> Option<&'a Node<K>>
where
    K: Ord,
{
    let node = node?;
    match key.cmp(&node.key) {
        Ordering::Less => find(node.left.as_deref(), key),
        Ordering::Equal => Some(node),
        Ordering::Greater => find(node.right.as_deref(), key),
    }
}

/// Inserts `key` into the subtree and returns the subtree to reattach, along with whether a new
/// node was allocated. An existing equal key leaves the subtree untouched.
pub(crate) fn insert<K>(link: Link<K>, key: K) -> (Link<K>, bool)
where
    K: Ord,
{
    match link {
        None => (Some(Node::leaf(key)), true),
        Some(mut node) => {
            let inserted = match key.cmp(&node.key) {
                Ordering::Less => {
                    let (left, inserted) = insert(node.left.take(), key);
                    node.left = left;
                    inserted
                }
                Ordering::Equal => false,
                Ordering::Greater => {
                    let (right, inserted) = insert(node.right.take(), key);
                    node.right = right;
                    inserted
                }
            };
            (Some(node), inserted)
        }
    }
}

/// Deletes `key` from the subtree and returns the subtree to reattach, along with whether a node
/// was released.
///
/// A matching node with a right child takes its in-order successor's key and the successor is
/// then deleted from the right subtree. Without a right child the in-order predecessor is used
/// instead. Only a matching leaf is actually unlinked, so nodes are never moved, only keys.
pub(crate) fn delete<K>(link: Link<K>, key: &K) -> (Link<K>, bool)
where
    K: Ord + Clone,
{
    let Some(mut node) = link else {
        return (None, false);
    };

    let deleted = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, deleted) = delete(node.left.take(), key);
            node.left = left;
            deleted
        }
        Ordering::Greater => {
            let (right, deleted) = delete(node.right.take(), key);
            node.right = right;
            deleted
        }
        Ordering::Equal if node.right.is_some() => {
            let successor = match minimum(node.right.as_deref()) {
                Some(successor) => successor.key.clone(),
                None => unreachable!("a present right child has a minimum"),
            };
            let (right, deleted) = delete(node.right.take(), &successor);
            node.key = successor;
            node.right = right;
            deleted
        }
        Ordering::Equal if node.left.is_some() => {
            let predecessor = match maximum(node.left.as_deref()) {
                Some(predecessor) => predecessor.key.clone(),
                None => unreachable!("a present left child has a maximum"),
            };
            let (left, deleted) = delete(node.left.take(), &predecessor);
            node.key = predecessor;
            node.left = left;
            deleted
        }
        Ordering::Equal => return (None, true),
    };

    (Some(node), deleted)
}

/// Frees the subtree children first and returns how many nodes were released.
///
/// Walks with an explicit stack so a chain-shaped subtree cannot exhaust the call stack. A node
/// is pushed back marked as visited before its detached children, so the children are popped
/// and freed first.
pub(crate) fn release<K>(link: Link<K>) -> usize {
    let mut released = 0;
    let mut stack = link.into_iter().map(|node| (node, false)).collect::<Vec<_>>();
    while let Some((mut node, visited)) = stack.pop() {
        if visited {
            drop(node);
            released += 1;
            continue;
        }
        let (left, right) = (node.left.take(), node.right.take());
        stack.push((node, true));
        stack.extend(right.into_iter().chain(left).map(|child| (child, false)));
    }
    released
}

/// Checks the ordering invariant: every key on the left is smaller and every key on the right is
/// larger than the node's own key.
#[cfg(test)]
pub(crate) fn is_ordered<K>(node: Option<&Node<K>>) -> bool
where
    K: Ord,
{
    fn within<K: Ord>(node: Option<&Node<K>>, lower: Option<&K>, upper: Option<&K>) -> bool {
        match node {
            None => true,
            Some(n) => {
                lower.map_or(true, |lower| lower < &n.key)
                    && upper.map_or(true, |upper| &n.key < upper)
                    && within(n.left.as_deref(), lower, Some(&n.key))
                    && within(n.right.as_deref(), Some(&n.key), upper)
            }
        }
    }

    within(node, None, None)
}
