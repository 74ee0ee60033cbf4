use super::arena::Key;

/// A forward link in the chain.
///
/// Both the sentinel and the nodes implement this, so editing "after" a
/// position is the same operation whether the position is the front of the
/// list or an element inside it.
pub(crate) trait Link {
    /// Get the key of the next node in the chain
    fn next(&self) -> Option<Key>;

    /// Set the key of the next node in the chain
    fn set_next(&mut self, next: Option<Key>);
}
