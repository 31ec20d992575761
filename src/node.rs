use crate::prelude::*;

/// The scalar stored in each list element.
pub type Value = i32;

/// Element of a [`CircularList`].
///
/// A node lives in its list's arena and knows only its value and the
/// id of its successor. It is created already linked, so `next` always
/// names a node of the same list while the node is alive.
#[derive(Debug)]
pub struct Node {
    next: Id<Node>,
    value: Value,
}

impl Node {
    pub(crate) fn new(value: Value, next: Id<Node>) -> Self {
        Self { next, value }
    }

    pub(crate) fn next(&self) -> Id<Node> {
        self.next
    }

    /// Rewires the link only; no node is created or released.
    pub(crate) fn set_next(&mut self, next: Id<Node>) {
        self.next = next;
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }
}
