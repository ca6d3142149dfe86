//! An ordered tree of unique keys, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the key that
//! was inserted and has up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`. The [`Tree`] here never rebalances,
//! so inserting keys in sorted order degrades it into a linked list. Besides
//! the usual operations it can report its keys level by level and the depth of
//! its shallowest leaf.
//!
//! The [`walkthrough`] module drives a tree through a scripted series of
//! inserts and removals, which is what the `keytree` binary prints.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod frontier;
mod node;
pub mod tree;
pub mod walkthrough;


pub use tree::Tree;
