use core::sync::atomic::{AtomicUsize, Ordering};

use super::arena::Key;

/// Identity of a list, recorded in every position the list hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(usize);

impl ListId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Place {
    BeforeBegin(ListId),
    Node(ListId, Key),
    End,
}

/// A handle to a spot in a [`SingleLinkedList`](super::SingleLinkedList).
///
/// A position refers to the sentinel ("before-begin"), to one element, or to
/// past-the-end. It does not borrow the list: it stays usable across edits
/// for as long as the element it refers to is still in the list. Two positions
/// are equal when they refer to the same element of the same list, or when
/// both are past-the-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    place: Place,
}

impl Position {
    /// The past-the-end position. It is the same for every list.
    pub const END: Position = Position { place: Place::End };

    pub(crate) const fn before_begin(owner: ListId) -> Self {
        Position {
            place: Place::BeforeBegin(owner),
        }
    }

    pub(crate) const fn node(owner: ListId, key: Key) -> Self {
        Position {
            place: Place::Node(owner, key),
        }
    }

    pub(crate) fn from_link(owner: ListId, next: Option<Key>) -> Self {
        next.map_or(Position::END, |key| Position::node(owner, key))
    }

    pub(crate) const fn place(&self) -> Place {
        self.place
    }

    /// Returns `true` for the sentinel position.
    pub const fn is_before_begin(&self) -> bool {
        matches!(self.place, Place::BeforeBegin(_))
    }

    /// Returns `true` for the past-the-end position.
    pub const fn is_end(&self) -> bool {
        matches!(self.place, Place::End)
    }
}
