//! Breadth-first diagnostics over a subtree: level-order enumeration and minimum depth.

use std::collections::VecDeque;

use crate::node::Node;

/// Walks a subtree in level order using an explicit queue of `(slot, depth)` pairs.
///
/// Absent child slots are queued and yielded like any other entry so callers can see where a
/// level has holes. Every finite tree produces a finite frontier since each yielded node queues
/// exactly two slots and absent slots queue nothing.
pub(crate) struct Frontier<'a, K> {
    queue: VecDeque<(Option<&'a Node<K>>, usize)>,
}

impl<'a, K> Frontier<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((root, 0));
        Self { queue }
    }
}

impl<'a, K> Iterator for Frontier<'a, K> {
    type Item = (Option<&'a Node<K>>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, depth) = self.queue.pop_front()?;
        if let Some(node) = slot {
            self.queue.push_back((node.left.as_deref(), depth + 1));
            self.queue.push_back((node.right.as_deref(), depth + 1));
        }
        Some((slot, depth))
    }
}

/// Borrows the keys of the subtree, root first, then each level from left to right.
pub(crate) fn keys<K>(root: Option<&Node<K>>) -> impl Iterator<Item = &K> {
    Frontier::new(root).filter_map(|(slot, _)| slot.map(|node| &node.key))
}

/// Collects the keys of the subtree in level order.
pub(crate) fn level_order<K>(root: Option<&Node<K>>) -> Vec<K>
where
    K: Clone,
{
    keys(root).cloned().collect()
}

/// Returns the depth of the shallowest leaf, counting the root as depth 0. An empty subtree has
/// depth 0 as well.
pub(crate) fn minimum_depth<K>(root: Option<&Node<K>>) -> usize {
    if root.is_none() {
        return 0;
    }

    // The first leaf met in level order is a shallowest one.
    match Frontier::new(root).find(|(slot, _)| slot.map_or(false, Node::is_leaf)) {
        Some((_, depth)) => depth,
        None => unreachable!("a non-empty finite tree always has a leaf"),
    }
}
