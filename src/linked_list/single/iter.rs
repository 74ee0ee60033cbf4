use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{
    arena::{Arena, Key, Slot},
    list::SingleLinkedList,
    node::Node,
    position::{ListId, Position},
    traits::Link,
};

/// A front-to-back iterator over shared references to the elements.
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    current: Option<Key>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<Node<T>>, head: Option<Key>) -> Self {
        Self {
            nodes,
            current: head,
            remaining: nodes.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.current?)?;
        self.current = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// A front-to-back iterator over mutable references to the elements.
pub struct IterMut<'a, T> {
    slots: NonNull<[Slot<Node<T>>]>,
    current: Option<Key>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(nodes: &'a mut Arena<Node<T>>, head: Option<Key>) -> Self {
        Self {
            remaining: nodes.len(),
            slots: nodes.as_raw(),
            current: head,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the arena is mutably borrowed for 'a, and the chain is
        // acyclic, so every key is resolved at most once.
        let node = unsafe { Arena::resolve_raw(self.slots, self.current?)? };
        self.current = node.next();
        self.remaining -= 1;
        Some(node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator that pops elements off the front of the list.
pub struct IntoIter<T> {
    list: SingleLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// An iterator over the positions of the elements, front to back.
///
/// Created by [`SingleLinkedList::positions`].
pub struct Positions<'a, T> {
    owner: ListId,
    nodes: &'a Arena<Node<T>>,
    current: Option<Key>,
}

impl<'a, T> Positions<'a, T> {
    pub(crate) fn new(owner: ListId, nodes: &'a Arena<Node<T>>, head: Option<Key>) -> Self {
        Self {
            owner,
            nodes,
            current: head,
        }
    }
}

impl<T> Iterator for Positions<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let key = self.current?;
        self.current = self.nodes.get(key)?.next();
        Some(Position::node(self.owner, key))
    }
}

impl<T> FusedIterator for Positions<'_, T> {}

impl<T> IntoIterator for SingleLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SingleLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SingleLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
