use super::{arena::Key, traits::Link};

/// A node holding one value and the link to its successor.
pub(crate) struct Node<T> {
    value: T,
    next: Option<Key>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Option<Key>) -> Self {
        Self { value, next }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub(crate) fn into_parts(self) -> (T, Option<Key>) {
        (self.value, self.next)
    }
}

impl<T> Link for Node<T> {
    #[inline]
    fn next(&self) -> Option<Key> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<Key>) {
        self.next = next;
    }
}

/// The anchor in front of the first node. It never holds a value.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Sentinel {
    next: Option<Key>,
}

impl Sentinel {
    pub(crate) const fn new() -> Self {
        Self { next: None }
    }
}

impl Link for Sentinel {
    #[inline]
    fn next(&self) -> Option<Key> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<Key>) {
        self.next = next;
    }
}
