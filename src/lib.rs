//! A rank-augmented AVL tree for text-editing buffers.
//!
//! [`EditTree`] stores a sequence of `char`s in a height-balanced binary tree where every
//! node records the size of its own left subtree (its *rank*). That single number is enough
//! to address the sequence by position while descending, so every edit touches only a
//! logarithmic-depth path:
//!
//! - [`get`](EditTree::get), [`insert`](EditTree::insert), [`remove`](EditTree::remove) - O(log n)
//! - [`split_off`](EditTree::split_off) and [`concatenate`](EditTree::concatenate) - O(log n),
//!   built on a height-aware *join* rather than rebuilding either tree
//! - [`remove_range`](EditTree::remove_range) - two splits and a concatenate
//!
//! # Example
//!
//! ```
//! use edit_tree::EditTree;
//!
//! let mut text = EditTree::from("hello world");
//! text.insert(5, ',').unwrap();
//! assert_eq!(text.to_string(), "hello, world");
//!
//! // Cut " world" out as its own tree.
//! let cut = text.remove_range(6, 6).unwrap();
//! assert_eq!(cut.to_string(), " world");
//! assert_eq!(text.to_string(), "hello,");
//!
//! // And splice it back on.
//! let mut cut = cut;
//! text.concatenate(&mut cut);
//! assert_eq!(text.to_string(), "hello, world");
//! assert!(cut.is_empty());
//! ```
//!
//! # Structure
//!
//! The tree can be inspected read-only through [`EditTree::root`], which returns a
//! [`Cursor`] exposing each node's element, rank, [`Balance`] code,
//! children and parent. [`EditTree::to_debug_string`] renders the same information as a
//! pre-order list, e.g. `[b1=, a0=, c0=]`.

#![cfg_attr(not(test), no_std)]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod balance;
mod error;
mod raw;

pub mod edit_tree;

pub use balance::Balance;
pub use edit_tree::{Cursor, EditTree, NodeRef};
pub use error::{Error, Result};
