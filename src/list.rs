use crate::prelude::*;
use crate::utility;
use std::fmt;

/// Circular singly-linked list with a sentinel node.
///
/// Nodes live in an arena whose root slot is the sentinel. The chain
/// always starts and ends at the sentinel: the list is empty exactly
/// when the sentinel links to itself. The sentinel is never handed out,
/// so every `Id<Node>` a caller sees names a real element.
///
/// Handles stay valid until their node is removed; after that, any
/// operation given the handle fails with [`Error::StaleHandle`].
pub struct CircularList {
    nodes: Block<Node>,
}

impl CircularList {
    /// Creates an empty list.
    pub fn new() -> Result<Self> {
        let sentinel_value = 0;
        let nodes = Block::with_root(|sentinel| Node::new(sentinel_value, sentinel))?;
        Ok(Self { nodes })
    }

    /// Releases every node, then the list itself.
    ///
    /// Same as dropping the list; taking `self` by value means no handle
    /// to the list survives the call.
    pub fn destroy(mut self) {
        self.clear();
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let sentinel = self.sentinel();
        let mut current = self.successor(sentinel);
        while current != sentinel {
            let next = self.successor(current);
            self.nodes.remove(current);
            current = next;
        }
        self.nodes[sentinel].set_next(sentinel);
        debug_assert!(self.nodes.is_empty(), "unlinked nodes after clear");
    }

    /// The logical head, or `None` if the list is empty.
    pub fn entry(&self) -> Option<Id<Node>> {
        let sentinel = self.sentinel();
        let head = self.successor(sentinel);
        if head == sentinel {
            None
        } else {
            Some(head)
        }
    }

    pub fn is_empty(&self) -> bool {
        let sentinel = self.sentinel();
        self.successor(sentinel) == sentinel
    }

    /// Number of elements, read from the arena rather than counted along
    /// the chain; always agrees with [`utility::size`].
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: Id<Node>) -> Result<&Node> {
        self.check(id)?;
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: Id<Node>) -> Result<&mut Node> {
        self.check(id)?;
        self.nodes.get_mut(id)
    }

    pub fn value(&self, id: Id<Node>) -> Result<Value> {
        self.node(id).map(Node::value)
    }

    pub fn set_value(&mut self, id: Id<Node>, value: Value) -> Result<()> {
        self.node_mut(id)?.set_value(value);
        Ok(())
    }

    /// Adds `value` as the new head and returns its handle.
    pub fn push(&mut self, value: Value) -> Result<Id<Node>> {
        let sentinel = self.sentinel();
        let head = self.successor(sentinel);
        let id = self.nodes.try_push(Node::new(value, head))?;
        self.nodes[sentinel].set_next(id);
        Ok(id)
    }

    /// Inserts `value` at the position currently held by `at`, which
    /// becomes the successor of the new element.
    ///
    /// With `at` absent, or equal to the head, this is [`push`]. It is
    /// therefore impossible to insert between the tail and the head
    /// without the new element becoming the head.
    ///
    /// [`push`]: CircularList::push
    pub fn insert(
        &mut self,
        at: Option<Id<Node>>,
        value: Value,
    ) -> Result<Id<Node>> {
        let at = match at {
            Some(at) if Some(at) != self.entry() => at,
            _ => return self.push(value),
        };
        self.check(at)?;

        let previous = utility::previous(self, at)?;
        let id = self.nodes.try_push(Node::new(value, at))?;
        self.nodes[previous].set_next(id);
        Ok(id)
    }

    /// Removes the head, returning the new head if any remains.
    pub fn pop(&mut self) -> Result<Option<Id<Node>>> {
        let head = self.entry().ok_or(Error::EmptyList)?;
        let sentinel = self.sentinel();
        let next = self.successor(head);
        self.nodes[sentinel].set_next(next);
        self.nodes.remove(head);
        Ok(self.entry())
    }

    /// Removes `target`, returning the element that followed it, or
    /// `None` if `target` was the tail.
    pub fn erase(&mut self, target: Id<Node>) -> Result<Option<Id<Node>>> {
        self.check(target)?;
        if Some(target) == self.entry() {
            return self.pop();
        }

        let previous = utility::previous(self, target)?;
        let next = self.successor(target);
        self.nodes[previous].set_next(next);
        self.nodes.remove(target);

        if self.is_sentinel(next) {
            Ok(None)
        } else {
            Ok(Some(next))
        }
    }

    /// Elements from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = (Id<Node>, Value)> + '_ {
        let sentinel = self.sentinel();
        let mut current = self.successor(sentinel);
        std::iter::from_fn(move || {
            if current == sentinel {
                return None;
            }
            let node = &self.nodes[current];
            let item = (current, node.value());
            current = node.next();
            Some(item)
        })
    }

    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.iter().map(|(_, value)| value)
    }

    pub(crate) fn sentinel(&self) -> Id<Node> {
        self.nodes.root()
    }

    pub(crate) fn is_sentinel(&self, id: Id<Node>) -> bool {
        self.nodes.is_root(id)
    }

    pub(crate) fn contains(&self, id: Id<Node>) -> bool {
        self.check(id).is_ok()
    }

    /// Raw successor of a node known to be live, sentinel included.
    pub(crate) fn successor(&self, id: Id<Node>) -> Id<Node> {
        self.nodes[id].next()
    }

    fn check(&self, id: Id<Node>) -> Result<()> {
        if self.is_sentinel(id) {
            return Err(Error::StaleHandle);
        }
        self.nodes.get(id).map(|_| ())
    }
}

impl fmt::Debug for CircularList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl fmt::Display for CircularList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (position, value) in self.values().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
