//! # Singly Linked List
//!
//! An owning, singly linked list with a sentinel in front of the first node.
//!
//! ## Core Components
//!
//! - [`list::SingleLinkedList`]: the container and its structural edits.
//! - [`position::Position`]: a handle to the sentinel, a node, or past-the-end.
//! - [`iter`]: shared, mutable and owning iterators, plus an iterator over positions.
//! - [`error::ListError`]: errors returned by the fallible (`try_*`) operations.
//!
//! ## Layout
//!
//! ```text
//!  ┌──────────┐     ┌─────────┐     ┌─────────┐
//!  │ sentinel │ ──→ │ value 0 │ ──→ │ value 1 │ ──→ (end)
//!  └──────────┘     └─────────┘     └─────────┘
//!  before_begin()    begin()
//! ```
//!
//! Nodes are stored in slots of a growable arena and linked by key. A removed
//! node's slot is recycled by later insertions, and its generation is bumped so
//! positions that still refer to it are detected as stale.
//!
//! ## Contract checks
//!
//! Every position is checked against the list that receives it. The panicking
//! operations (`insert_after`, `erase_after`, `advance`, indexing) fail fast on
//! a stale, foreign or past-the-end position. The `try_*` operations report
//! the same conditions as a [`ListError`].

mod arena;
mod node;
mod traits;

mod cmp;
pub mod error;
pub mod iter;
pub mod list;
pub mod position;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::ListError;
pub use iter::{IntoIter, Iter, IterMut, Positions};
pub use list::{SingleLinkedList, swap};
pub use position::Position;

#[cfg(test)]
mod tests;
