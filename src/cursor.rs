use crate::{errors::ListError, linked_list::LinkedList, position::Position};

/// A read-only view positioned on one node of a list.
///
/// The cursor may sit on the sentinel, on an element, or at the end.
pub struct Cursor<'a, T> {
    list: &'a LinkedList<T>,
    pos: Position,
}

/// A mutable view positioned on one node of a list. Besides modifying the
/// current value it can insert and erase after itself.
pub struct CursorMut<'a, T> {
    list: &'a mut LinkedList<T>,
    pos: Position,
}

impl<T> LinkedList<T> {
    /// A read-only cursor at `pos`. Errors if `pos` names no node of this list.
    pub fn cursor(&self, pos: Position) -> Result<Cursor<'_, T>, ListError> {
        if !self.contains_position(pos) {
            return Err(ListError::InvalidPosition);
        }
        Ok(Cursor { list: self, pos })
    }

    /// A mutable cursor at `pos`. Errors if `pos` names no node of this list.
    pub fn cursor_mut(&mut self, pos: Position) -> Result<CursorMut<'_, T>, ListError> {
        if !self.contains_position(pos) {
            return Err(ListError::InvalidPosition);
        }
        Ok(CursorMut { list: self, pos })
    }
}

impl<'a, T> Cursor<'a, T> {
    pub fn position(&self) -> Position {
        self.pos
    }

    /// The value under the cursor; `None` on the sentinel or at the end.
    pub fn current(&self) -> Option<&'a T> {
        self.list.get(self.pos)
    }

    /// The value after the cursor without moving.
    pub fn peek_next(&self) -> Option<&'a T> {
        let next = self.list.next_position(self.pos).ok()?;
        self.list.get(next)
    }

    /// Advance one node. Advancing from the end is an error.
    pub fn move_next(&mut self) -> Result<(), ListError> {
        self.pos = self.list.next_position(self.pos)?;
        Ok(())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            list: self.list,
            pos: self.pos,
        }
    }
}

impl<'a, T> CursorMut<'a, T> {
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn current(&mut self) -> Option<&mut T> {
        self.list.get_mut(self.pos)
    }

    pub fn peek_next(&mut self) -> Option<&mut T> {
        let next = self.list.next_position(self.pos).ok()?;
        self.list.get_mut(next)
    }

    pub fn move_next(&mut self) -> Result<(), ListError> {
        self.pos = self.list.next_position(self.pos)?;
        Ok(())
    }

    /// Insert after the cursor. The cursor stays where it is; the new
    /// element's position is returned.
    pub fn insert_after(&mut self, value: T) -> Result<Position, ListError> {
        self.list.insert_after(self.pos, value)
    }

    /// Erase the element after the cursor, returning the position that now follows it.
    pub fn erase_after(&mut self) -> Result<Position, ListError> {
        self.list.erase_after(self.pos)
    }

    pub fn remove_after(&mut self) -> Result<T, ListError> {
        self.list.remove_after(self.pos)
    }

    /// Reborrow as a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            list: &*self.list,
            pos: self.pos,
        }
    }
}

// Views compare by the node they name, regardless of kind.

impl<T, U> PartialEq<Cursor<'_, U>> for Cursor<'_, T> {
    fn eq(&self, other: &Cursor<'_, U>) -> bool {
        self.pos == other.pos
    }
}

impl<T, U> PartialEq<CursorMut<'_, U>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'_, U>) -> bool {
        self.pos == other.pos
    }
}

impl<T, U> PartialEq<Cursor<'_, U>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'_, U>) -> bool {
        self.pos == other.pos
    }
}

impl<T, U> PartialEq<CursorMut<'_, U>> for CursorMut<'_, T> {
    fn eq(&self, other: &CursorMut<'_, U>) -> bool {
        self.pos == other.pos
    }
}

impl<T> PartialEq<Position> for Cursor<'_, T> {
    fn eq(&self, other: &Position) -> bool {
        self.pos == *other
    }
}

impl<T> PartialEq<Position> for CursorMut<'_, T> {
    fn eq(&self, other: &Position) -> bool {
        self.pos == *other
    }
}
