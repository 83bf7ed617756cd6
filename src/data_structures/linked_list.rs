//! A singly linked list, owning its nodes through `Box`es.
//!
//! Each node holds a value and the link to the next node -- `None` marking the tail -- so cycles
//! are impossible by construction. The list keeps its own `size` counter which, at all times,
//! equals the number of nodes reachable from `head`.

use std::fmt::{self, Debug, Display, Formatter};
use crate::errors::{KataError, KataResult};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next:  Link<T>,
}

/// A forward-only list: appends at the tail, positional removals and head-to-tail traversal.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    size: usize,
}

impl<T> SinglyLinkedList<T> {

    /// An empty list: no head, size `0`
    pub const fn new() -> Self {
        Self { head: None, size: 0 }
    }

    /// number of elements -- always the number of nodes reachable from the head
    pub fn len(&self) -> usize {
        self.size
    }

    /// `true` when there is no head node
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends `value` after the current tail.\
    /// No tail pointer is kept (which would alias the last node), so the tail is sought from the head:
    /// O(n). Bulk building through [FromIterator] / [Extend] is O(1) per element.
    pub fn add(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.size += 1;
    }

    /// Removes -- and returns -- the element at the zero-based `index`.\
    /// Removing the head repoints `head` to the second node; any other removal relinks the
    /// predecessor past the removed node.
    ///
    /// Fails with [KataError::IndexOutOfRange] for `index >= len()`, leaving the list unchanged.
    pub fn remove_at(&mut self, index: usize) -> KataResult<T> {
        let out_of_range = KataError::IndexOutOfRange { index, len: self.size };
        if index >= self.size {
            return Err(out_of_range);
        }
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return Err(out_of_range),
            }
        }
        let Some(removed) = link.take() else {
            return Err(out_of_range);
        };
        let Node { value, next } = *removed;
        *link = next;
        self.size -= 1;
        Ok(value)
    }

    /// borrowing iterator, from head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }

    /// the contained values, in head to tail order
    pub fn to_vec(&self) -> Vec<T> where T: Clone {
        self.iter().cloned().collect()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    // unlinks one node at a time: the default, recursive drop would overflow the stack on long lists
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        // seek the tail once, then keep the cursor on the newest node
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        for value in iter {
            let node = cursor.insert(Box::new(Node { value, next: None }));
            cursor = &mut node.next;
            self.size += 1;
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `1 -> 2 -> 3`
impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// See [SinglyLinkedList::iter()]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
