//! Linked list containers.
//!
//! The list owns its nodes. Positions are small copyable handles that stay
//! valid for as long as the node they refer to is in the list, so a caller can
//! remember a spot in the chain and keep editing after it.
//!
//! # Examples
//!
//! ```
//! use mola_single_list::linked_list::single::SingleLinkedList;
//!
//! let mut list = SingleLinkedList::from([2, 4]);
//! list.push_front(1);
//!
//! let two = list.positions().find(|&pos| list[pos] == 2).unwrap();
//! let three = list.insert_after(two, 3);
//! assert_eq!(list[three], 3);
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 2, 3, 4]);
//!
//! // Erasing after the sentinel is the same as popping the front.
//! let first = list.erase_after(list.before_begin());
//! assert_eq!(first, two);
//! assert_eq!(list.len(), 3);
//! ```
pub mod single;
