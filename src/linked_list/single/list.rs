use core::{
    mem,
    ops::{Index, IndexMut},
};

use super::{
    arena::{Arena, Key},
    error::ListError,
    iter::{Iter, IterMut, Positions},
    node::{Node, Sentinel},
    position::{ListId, Place, Position},
    traits::Link,
};

/// An owning singly linked list.
///
/// Front insertion and removal are O(1), and so is inserting or erasing right
/// after any [`Position`] the list handed out earlier.
pub struct SingleLinkedList<T> {
    id: ListId,
    sentinel: Sentinel,
    nodes: Arena<Node<T>>,
}

impl<T> SingleLinkedList<T> {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self {
            id: ListId::next(),
            sentinel: Sentinel::new(),
            nodes: Arena::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ListId::next(),
            sentinel: Sentinel::new(),
            nodes: Arena::with_capacity(capacity),
        }
    }

    /// Number of nodes the list can hold without reallocating its storage.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves room for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Like [`reserve`](Self::reserve), but reports allocation failure instead of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ListError> {
        self.nodes.try_reserve(additional).map_err(|err| {
            log::warn!("failed to reserve room for {additional} list nodes: {err}");
            ListError::from(err)
        })
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sentinel position in front of the first element.
    ///
    /// It can be passed to [`insert_after`](Self::insert_after) and
    /// [`erase_after`](Self::erase_after) but never dereferenced.
    pub fn before_begin(&self) -> Position {
        Position::before_begin(self.id)
    }

    /// The position of the first element, or [`end`](Self::end) if the list is empty.
    pub fn begin(&self) -> Position {
        Position::from_link(self.id, self.sentinel.next())
    }

    /// The past-the-end position.
    pub fn end(&self) -> Position {
        Position::END
    }

    /// Returns the position following `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past-the-end, stale, or belongs to another list.
    pub fn advance(&self, pos: Position) -> Position {
        match self.link(pos) {
            Some(link) => Position::from_link(self.id, link.next()),
            None => panic!("cannot advance {pos:?}: not a live position of this list"),
        }
    }

    /// The element at `pos`, if `pos` refers to a live element of this list.
    pub fn get(&self, pos: Position) -> Option<&T> {
        match pos.place() {
            Place::Node(owner, key) if owner == self.id => self.nodes.get(key).map(Node::value),
            _ => None,
        }
    }

    /// Mutable access to the element at `pos`, if it is a live element of this list.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        match pos.place() {
            Place::Node(owner, key) if owner == self.id => {
                self.nodes.get_mut(key).map(Node::value_mut)
            }
            _ => None,
        }
    }

    /// The first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.get(self.begin())
    }

    /// Mutable access to the first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.begin())
    }

    /// Prepends `value` to the list.
    pub fn push_front(&mut self, value: T) {
        self.insert_after(self.before_begin(), value);
    }

    /// Prepends `value`, reporting allocation failure instead of aborting.
    /// The list is left unchanged on failure.
    pub fn try_push_front(&mut self, value: T) -> Result<(), ListError> {
        self.try_insert_after(self.before_begin(), value).map(|_| ())
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink_after(self.before_begin())
            .ok()
            .map(|(_, value)| value)
    }

    /// Inserts `value` right after `pos` and returns the position of the new element.
    ///
    /// `pos` may be [`before_begin`](Self::before_begin), which makes this a
    /// front insertion, or the position of any element of this list.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past-the-end, stale, or belongs to another list.
    pub fn insert_after(&mut self, pos: Position, value: T) -> Position {
        let Some(next) = self.link(pos).map(|link| link.next()) else {
            panic!("cannot insert after {pos:?}: not a live position of this list");
        };
        self.splice_after(pos, next, value)
    }

    /// Fallible form of [`insert_after`](Self::insert_after).
    ///
    /// Storage is reserved before anything is linked, so on error the list is
    /// exactly as it was.
    pub fn try_insert_after(&mut self, pos: Position, value: T) -> Result<Position, ListError> {
        let next = self
            .link(pos)
            .map(|link| link.next())
            .ok_or_else(|| {
                log::debug!("rejected insertion after {pos:?}");
                ListError::InvalidPosition
            })?;
        self.try_reserve(1)?;
        Ok(self.splice_after(pos, next, value))
    }

    /// Removes the element right after `pos` and returns the position of the
    /// element that now follows `pos`, or past-the-end.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a live position of this list, or if no element
    /// follows it.
    pub fn erase_after(&mut self, pos: Position) -> Position {
        match self.unlink_after(pos) {
            Ok((next, _)) => next,
            Err(err) => panic!("cannot erase after {pos:?}: {err}"),
        }
    }

    /// Fallible form of [`erase_after`](Self::erase_after).
    pub fn try_erase_after(&mut self, pos: Position) -> Result<Position, ListError> {
        self.unlink_after(pos)
            .map(|(next, _)| next)
            .inspect_err(|err| log::debug!("rejected erasure after {pos:?}: {err}"))
    }

    /// Removes every element, front to back.
    pub fn clear(&mut self) {
        let released = self.len();
        while self.pop_front().is_some() {}
        if released > 0 {
            log::trace!("released {released} list nodes");
        }
    }

    /// Exchanges the contents of two lists without touching their nodes.
    ///
    /// Positions move along with the elements they refer to.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// An iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.sentinel.next())
    }

    /// An iterator over mutable references to the elements, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let head = self.sentinel.next();
        IterMut::new(&mut self.nodes, head)
    }

    /// An iterator over the positions of all elements, front to back.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions::new(self.id, &self.nodes, self.sentinel.next())
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// The position of the last element, or before-begin when the list is empty.
    pub(crate) fn last_position(&self) -> Position {
        self.positions().last().unwrap_or(self.before_begin())
    }

    fn link(&self, pos: Position) -> Option<&dyn Link> {
        match pos.place() {
            Place::BeforeBegin(owner) if owner == self.id => Some(&self.sentinel as &dyn Link),
            Place::Node(owner, key) if owner == self.id => {
                self.nodes.get(key).map(|node| node as &dyn Link)
            }
            _ => None,
        }
    }

    fn link_mut(&mut self, pos: Position) -> Option<&mut dyn Link> {
        match pos.place() {
            Place::BeforeBegin(owner) if owner == self.id => {
                Some(&mut self.sentinel as &mut dyn Link)
            }
            Place::Node(owner, key) if owner == self.id => {
                self.nodes.get_mut(key).map(|node| node as &mut dyn Link)
            }
            _ => None,
        }
    }

    /// Links a new node holding `value` between `pos` and `next`.
    /// `pos` must already be validated.
    fn splice_after(&mut self, pos: Position, next: Option<Key>, value: T) -> Position {
        let key = self.nodes.insert(Node::new(value, next));
        self.link_mut(pos)
            .expect("validated position outlives an insertion")
            .set_next(Some(key));
        Position::node(self.id, key)
    }

    /// Detaches the node after `pos`, returning the new successor of `pos` and the value.
    fn unlink_after(&mut self, pos: Position) -> Result<(Position, T), ListError> {
        let target = self
            .link(pos)
            .ok_or(ListError::InvalidPosition)?
            .next()
            .ok_or(ListError::NothingToErase)?;
        let (value, next) = self
            .nodes
            .remove(target)
            .expect("linked node is live")
            .into_parts();
        self.link_mut(pos)
            .expect("validated position outlives a removal of its successor")
            .set_next(next);
        Ok((Position::from_link(self.id, next), value))
    }
}

/// Exchanges the contents of two lists. Same as [`SingleLinkedList::swap`].
pub fn swap<T>(lhs: &mut SingleLinkedList<T>, rhs: &mut SingleLinkedList<T>) {
    lhs.swap(rhs);
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SingleLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Index<Position> for SingleLinkedList<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        match self.get(pos) {
            Some(value) => value,
            None => panic!("cannot dereference {pos:?}: not an element of this list"),
        }
    }
}

impl<T> IndexMut<Position> for SingleLinkedList<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        match self.get_mut(pos) {
            Some(value) => value,
            None => panic!("cannot dereference {pos:?}: not an element of this list"),
        }
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        let mut pos = list.before_begin();
        for value in iter {
            pos = list.insert_after(pos, value);
        }
        list
    }
}

impl<T> Extend<T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        let mut pos = self.last_position();
        for value in iter {
            pos = self.insert_after(pos, value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SingleLinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for SingleLinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for SingleLinkedList<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}
