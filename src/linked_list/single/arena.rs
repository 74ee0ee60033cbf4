use alloc::{collections::TryReserveError, vec::Vec};
use core::{mem, ptr::NonNull};

/// A handle to an occupied slot of an [`Arena`].
///
/// The generation tells apart successive occupants of the same slot, so a key
/// kept past the removal of its value never resolves to a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Key {
    index: usize,
    generation: u32,
}

enum Entry<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

pub(crate) struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

/// Growable slot storage with a free list of vacant slots.
///
/// A slot whose generation is exhausted is retired: it stays vacant and never
/// returns to the free list, so no key can name two different occupants.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
    retired: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
            retired: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
            retired: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of values the arena holds without reallocating. Vacant slots
    /// count, retired ones do not.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity() - self.retired
    }

    fn vacant(&self) -> usize {
        self.slots.len() - self.len - self.retired
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        let grow = additional.saturating_sub(self.vacant());
        self.slots.reserve(grow);
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        let grow = additional.saturating_sub(self.vacant());
        self.slots.try_reserve(grow)
    }

    /// Stores `value`, reusing the most recently vacated slot if there is one.
    pub(crate) fn insert(&mut self, value: T) -> Key {
        self.len += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index];
                let Entry::Vacant { next_free } = slot.entry else {
                    unreachable!("free list points at an occupied slot");
                };
                self.free_head = next_free;
                slot.entry = Entry::Occupied(value);
                Key {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 0,
                    entry: Entry::Occupied(value),
                });
                Key {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Takes the value out of the slot named by `key`. Stale keys yield `None`.
    pub(crate) fn remove(&mut self, key: Key) -> Option<T> {
        if !self.contains(key) {
            return None;
        }
        let slot = &mut self.slots[key.index];
        let entry = mem::replace(&mut slot.entry, Entry::Vacant { next_free: None });
        self.len -= 1;
        match slot.generation.checked_add(1) {
            Some(generation) => {
                slot.generation = generation;
                slot.entry = Entry::Vacant {
                    next_free: self.free_head,
                };
                self.free_head = Some(key.index);
            }
            None => self.retired += 1,
        }
        match entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant { .. } => None,
        }
    }

    pub(crate) fn contains(&self, key: Key) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn get(&self, key: Key) -> Option<&T> {
        match self.slots.get(key.index)? {
            Slot {
                generation,
                entry: Entry::Occupied(value),
            } if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, key: Key) -> Option<&mut T> {
        match self.slots.get_mut(key.index)? {
            Slot {
                generation,
                entry: Entry::Occupied(value),
            } if *generation == key.generation => Some(value),
            _ => None,
        }
    }

    /// Raw view of the slot storage for iterators that hand out disjoint
    /// mutable borrows. See [`Arena::resolve_raw`].
    pub(crate) fn as_raw(&mut self) -> NonNull<[Slot<T>]> {
        NonNull::from(self.slots.as_mut_slice())
    }

    /// Resolves `key` against a raw slot view obtained from [`Arena::as_raw`].
    ///
    /// # Safety
    ///
    /// The arena behind `slots` must be exclusively borrowed for `'a` and must
    /// not be resized during that time. The caller must not resolve the same
    /// key twice while the first borrow is alive.
    pub(crate) unsafe fn resolve_raw<'a>(slots: NonNull<[Slot<T>]>, key: Key) -> Option<&'a mut T> {
        if key.index >= slots.len() {
            return None;
        }
        let slot = unsafe { &mut *slots.cast::<Slot<T>>().as_ptr().add(key.index) };
        match slot {
            Slot {
                generation,
                entry: Entry::Occupied(value),
            } if *generation == key.generation => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, Key};

    #[test]
    fn test_arena_reuses_vacant_slot_with_new_generation() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        assert_eq!(arena.len(), 2);

        assert_eq!(arena.remove(a), Some('a'));
        assert_eq!(arena.remove(a), None);
        assert!(!arena.contains(a));

        let c = arena.insert('c');
        assert_eq!(c.index, a.index);
        assert_ne!(c, a);
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.get(c), Some(&'c'));
        assert_eq!(arena.get(b), Some(&'b'));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_arena_reserve_counts_vacant_slots() {
        let mut arena = Arena::with_capacity(4);
        let keys = [arena.insert(1), arena.insert(2), arena.insert(3), arena.insert(4)];
        for key in keys {
            arena.remove(key);
        }
        let capacity = arena.capacity();
        arena.reserve(4);
        assert_eq!(arena.capacity(), capacity);
        assert!(arena.try_reserve(8).is_ok());
        assert!(arena.capacity() >= 8);
    }

    #[test]
    fn test_arena_retires_slot_with_exhausted_generation() {
        let mut arena = Arena::new();
        let first = arena.insert('a');
        arena.slots[first.index].generation = u32::MAX;
        let last = Key {
            index: first.index,
            generation: u32::MAX,
        };

        assert_eq!(arena.remove(last), Some('a'));
        assert_eq!(arena.len(), 0);

        let next = arena.insert('b');
        assert_ne!(next.index, last.index);
        assert!(!arena.contains(last));
        assert!(!arena.contains(Key {
            index: last.index,
            generation: 0,
        }));

        // The retired slot does not count as room for new values.
        assert_eq!(arena.remove(next), Some('b'));
        assert_eq!(arena.vacant(), 1);
        assert_eq!(arena.capacity(), arena.slots.capacity() - 1);
        assert_eq!(arena.insert('c').index, next.index);
    }

    #[test]
    fn test_arena_get_mut_rejects_stale_key() {
        let mut arena = Arena::new();
        let key = arena.insert(10);
        *arena.get_mut(key).unwrap() += 1;
        assert_eq!(arena.remove(key), Some(11));
        assert!(arena.get_mut(key).is_none());
    }
}
