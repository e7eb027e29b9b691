use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter;

use crate::arena::{Arena, ArenaKey};
use crate::error::{Error, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct NodeId(usize);

impl ArenaKey for NodeId {
    fn from_usize(value: usize) -> Self {
        Self(value)
    }

    fn into_usize(self) -> usize {
        self.0
    }
}

/// One element of the stack. `below` points at the next node toward the
/// bottom, or is `None` for the bottommost node.
#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    below: Option<NodeId>,
}

/// A last-in-first-out stack of values.
///
/// Elements live in an arena and are chained together by index, so the stack
/// owns every node directly and dropping it never recurses down the chain.
/// Push and pop are O(1).
#[derive(Debug, Clone)]
pub struct Stack<T> {
    top: Option<NodeId>,
    len: usize,
    nodes: Arena<NodeId, Node<T>>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            top: None,
            len: 0,
            nodes: Arena::new(),
        }
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes a value onto the top of the stack.
    pub fn push(&mut self, value: T) {
        let id = self.nodes.insert(Node {
            value,
            below: self.top,
        });

        self.top = Some(id);
        self.len += 1;
    }

    /// Removes and returns the top value.
    ///
    /// Fails with [`Error::Underflow`] on an empty stack, leaving it
    /// unchanged.
    pub fn pop(&mut self) -> Result<T> {
        let id = self.top.ok_or(Error::Underflow)?;
        let node = self.nodes.remove(id).unwrap();

        self.top = node.below;
        self.len -= 1;
        debug_assert_eq!(self.len, self.nodes.len());

        Ok(node.value)
    }

    /// Borrows the top value without changing the stack.
    ///
    /// Fails with [`Error::Underflow`] on an empty stack.
    pub fn top(&self) -> Result<&T> {
        let id = self.top.ok_or(Error::Underflow)?;
        Ok(&self.nodes[id].value)
    }

    /// Walks the chain from the top node down to the bottom one.
    fn chain(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut current = self.top;

        iter::from_fn(move || {
            let id = current?;
            current = self.nodes[id].below;
            Some(id)
        })
    }
}

impl<T: PartialEq> Stack<T> {
    /// Determines whether the stack contains exactly `items`, read bottom to
    /// top. Any difference in length, order, or content returns `false`.
    pub fn has_elements(&self, items: &[T]) -> bool {
        if items.len() != self.len {
            return false;
        }

        self.chain()
            .zip(items.iter().rev())
            .all(|(id, item)| self.nodes[id].value == *item)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut result = Self::new();

        for value in iter {
            result.push(value);
        }

        result
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .chain()
                .zip(other.chain())
                .all(|(a, b)| self.nodes[a].value == other.nodes[b].value)
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Display> Display for Stack<T> {
    /// Renders as `Stack[x0, x1, .., xn]` with the bottom element first and
    /// the top element last, or `Stack[]` when empty.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let ids = self.chain().collect::<Vec<_>>();

        write!(f, "Stack[")?;

        for (i, id) in ids.iter().rev().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{}", self.nodes[*id].value)?;
        }

        write!(f, "]")
    }
}
