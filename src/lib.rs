//! A generic singly linked list with a before-begin sentinel and stable positions.
//!
//! Elements are inserted and erased *after* a [`Position`]. The sentinel
//! position returned by [`LinkedList::before_begin`] makes front insertion
//! the same operation as insertion anywhere else.
//!
//! ```
//! use forward_list::{forward_list, ListError};
//!
//! let mut list = forward_list![1, 2, 3];
//! let first = list.begin();
//!
//! let ninety_nine = list.insert_after(first, 99)?;
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 99, 2, 3]);
//!
//! list.erase_after(first)?;
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(ninety_nine), None);
//! assert_eq!(list.erase_after(list.end()), Err(ListError::EndPosition));
//! # Ok::<(), ListError>(())
//! ```
//!
//! # Thread safety
//!
//! The list does no internal synchronization. Sharing one list between
//! threads while any of them mutates it needs external locking.

mod cursor;
mod errors;
mod linked_list;
mod macros;
mod node;
mod position;
#[cfg(feature = "serde")]
mod serde_impl;

pub use cursor::{Cursor, CursorMut};
pub use errors::ListError;
pub use linked_list::{IntoIter, Iter, IterMut, LinkedList, Positions};
pub use position::Position;
