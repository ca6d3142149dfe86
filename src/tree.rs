//! A mutable, unbalanced BST of unique keys. Every node is owned by exactly one slot, either the
//! tree's root or one side of its parent, and nodes hold no pointer back to their parent.
//!
//! # Examples
//!
//! ```
//! use keytree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains_key(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains_key(&1));
//!
//! // Inserting an existing key does nothing.
//! tree.insert(1);
//! assert_eq!(tree.len(), 1);
//!
//! tree.delete(&1);
//! assert!(!tree.contains_key(&1));
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::frontier;
use crate::node::{self, Link};

/// A Binary Search Tree of unique keys. This can be used for inserting, finding, and deleting
/// keys as well as inspecting the shape of the tree level by level.
///
/// The tree never rebalances and [`insert`](Tree::insert), [`delete`](Tree::delete) and
/// [`contains_key`](Tree::contains_key) recurse once per level. Keys arriving in sorted order
/// build a chain as tall as the tree is long, which can overflow the thread stack somewhere
/// around tens of thousands of keys. Dropping or [`clear`](Tree::clear)ing a tree of any shape
/// is safe.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Releases every node, children before their parent, and leaves the tree empty. Clearing
    /// an empty tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let mut tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.level_order(), Vec::<i32>::new());
    /// ```
    pub fn clear(&mut self) {
        let released = node::release(self.root.take());
        self.len = 0;
        debug!(released, "cleared tree");
    }

    /// Returns the number of edges between the root and the closest leaf, a leaf being a node
    /// without children. Both an empty tree and a lone root have a minimum depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.minimum_depth(), 0);
    ///
    /// tree.extend([2, 1, 3, 4]);
    ///
    /// // 1 is a leaf right below the root.
    /// assert_eq!(tree.minimum_depth(), 1);
    /// ```
    pub fn minimum_depth(&self) -> usize {
        let depth = frontier::minimum_depth(self.root.as_deref());
        trace!(depth, "computed minimum depth");
        depth
    }
}

impl<K> Tree<K>
where
    K: Ord,
{
    /// Returns `true` if some node holds exactly `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(0);
    ///
    /// assert!(tree.contains_key(&0));
    /// assert!(!tree.contains_key(&42));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        node::find(self.root.as_deref(), key).is_some()
    }

    /// Inserts `key` into the tree if no node holds it yet. Inserting an existing key leaves the
    /// tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.level_order(), vec![2, 1]);
    /// ```
    pub fn insert(&mut self, key: K) {
        let (root, inserted) = node::insert(self.root.take(), key);
        self.root = root;
        if inserted {
            self.len += 1;
            debug!(len = self.len, "inserted key");
        } else {
            trace!("key already present");
        }
    }
}

impl<K> Tree<K>
where
    K: Ord + Clone + fmt::Debug,
{
    /// Deletes the node holding `key` from the tree. If the tree does not contain the key,
    /// nothing happens.
    ///
    /// A node with a right subtree is replaced by its in-order successor, otherwise by its
    /// in-order predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let mut tree: Tree<i32> = [5, 3, 8, 7].into_iter().collect();
    /// tree.delete(&5);
    ///
    /// // 7 is the smallest key to the right of 5 so it takes its place.
    /// assert_eq!(tree.level_order(), vec![7, 3, 8]);
    /// assert!(!tree.contains_key(&5));
    /// ```
    pub fn delete(&mut self, key: &K) {
        let (root, deleted) = node::delete(self.root.take(), key);
        self.root = root;
        if deleted {
            self.len -= 1;
            debug!(?key, len = self.len, "deleted key");
        } else {
            trace!(?key, "key not present");
        }
    }
}

impl<K> Tree<K>
where
    K: Clone,
{
    /// Returns the keys in level order: the root, then its children from left to right, then
    /// its grandchildren and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::Tree;
    ///
    /// let tree: Tree<i32> = [10, 1, 99, -5, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.level_order(), vec![10, 1, 99, -5, 8]);
    /// ```
    pub fn level_order(&self) -> Vec<K> {
        frontier::level_order(self.root.as_deref())
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Writes the keys in level order separated by single spaces.
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys = frontier::keys(self.root.as_deref());
        if let Some(first) = keys.next() {
            write!(f, "{first}")?;
            for key in keys {
                write!(f, " {key}")?;
            }
        }
        Ok(())
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys = frontier::keys(self.root.as_deref()).collect::<Vec<_>>();
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("level_order", &keys)
            .finish()
    }
}
