//! Traversals over a [`CircularList`].
//!
//! None of these mutate the list. The list is only forward-linked, so
//! anything that needs a predecessor walks the whole cycle.

use crate::prelude::*;
use fnv::FnvHashSet;

/// Number of elements, counted by walking the chain.
pub fn size(list: &CircularList) -> usize {
    let sentinel = list.sentinel();
    let mut count = 0;
    let mut current = list.successor(sentinel);
    while current != sentinel {
        count += 1;
        current = list.successor(current);
    }
    count
}

/// Whether `node` is currently linked into `list`, by handle identity.
pub fn is_member(list: &CircularList, node: Id<Node>) -> bool {
    let sentinel = list.sentinel();
    let mut current = list.successor(sentinel);
    while current != sentinel {
        if current == node {
            return true;
        }
        current = list.successor(current);
    }
    false
}

/// Successor of `node`, stepping over the sentinel to the head.
pub fn next_wrapping(list: &CircularList, node: Id<Node>) -> Result<Id<Node>> {
    list.node(node)?;
    Ok(wrapping(list, node))
}

/// The element whose wrapped successor is `node`.
///
/// In a single-element list this is `node` itself.
pub fn previous(list: &CircularList, node: Id<Node>) -> Result<Id<Node>> {
    if list.is_empty() {
        return Err(Error::EmptyList);
    }
    list.node(node)?;

    let mut current = node;
    loop {
        let next = wrapping(list, current);
        if next == node {
            return Ok(current);
        }
        current = next;
    }
}

/// The element `index` steps after the head, or `None` if the list is
/// empty.
///
/// There is no bounds check: an index past the tail keeps going around
/// the cycle, so `by_position(list, size(list))` is the head again.
pub fn by_position(list: &CircularList, index: usize) -> Option<Id<Node>> {
    let mut current = list.entry()?;
    for _ in 0..index % list.len() {
        current = wrapping(list, current);
    }
    Some(current)
}

/// The element `distance` links after `node`, without wrapping: `None`
/// if the walk reaches the end of the list first.
pub fn forward(
    list: &CircularList,
    node: Id<Node>,
    distance: usize,
) -> Result<Option<Id<Node>>> {
    list.node(node)?;

    let mut current = node;
    for _ in 0..distance {
        current = list.successor(current);
        if list.is_sentinel(current) {
            return Ok(None);
        }
    }
    Ok(Some(current))
}

/// Checks the structural invariants: the chain from the sentinel comes
/// back to it, visits no node twice, and visits every node the list
/// holds.
pub fn is_well_formed(list: &CircularList) -> bool {
    let sentinel = list.sentinel();
    let mut visited = FnvHashSet::default();
    let mut current = list.successor(sentinel);
    while current != sentinel {
        if !list.contains(current) || !visited.insert(current) {
            return false;
        }
        if visited.len() > list.len() {
            return false;
        }
        current = list.successor(current);
    }
    visited.len() == list.len()
}

fn wrapping(list: &CircularList, node: Id<Node>) -> Id<Node> {
    let next = list.successor(node);
    if list.is_sentinel(next) {
        list.successor(next)
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[Value]) -> (CircularList, Vec<Id<Node>>) {
        let mut list = CircularList::new().unwrap();
        let ids = values.iter().map(|v| list.push(*v).unwrap()).collect();
        (list, ids)
    }

    #[test]
    fn size_counts_the_chain() {
        let (mut list, ids) = list_of(&[1, 2, 3, 4]);
        assert_eq!(size(&list), 4);
        list.erase(ids[1]).unwrap();
        assert_eq!(size(&list), 3);
        list.clear();
        assert_eq!(size(&list), 0);
    }

    #[test]
    fn membership_is_by_identity() {
        let (mut list, ids) = list_of(&[1, 2]);
        let (_other, other_ids) = list_of(&[1, 2]);
        assert!(is_member(&list, ids[0]));
        assert!(!is_member(&list, other_ids[0]));

        list.erase(ids[0]).unwrap();
        assert!(!is_member(&list, ids[0]));
    }

    #[test]
    fn next_wrapping_skips_the_sentinel() {
        let (list, ids) = list_of(&[1, 2, 3]);
        assert_eq!(next_wrapping(&list, ids[2]), Ok(ids[1]));
        assert_eq!(next_wrapping(&list, ids[0]), Ok(ids[2]));
    }

    #[test]
    fn previous_wraps_around() {
        let (list, ids) = list_of(&[1, 2, 3, 4]);
        assert_eq!(previous(&list, ids[3]), Ok(ids[0]));
        assert_eq!(previous(&list, ids[0]), Ok(ids[1]));
        assert_eq!(previous(&list, ids[2]), Ok(ids[3]));
    }

    #[test]
    fn previous_of_single_element_is_itself() {
        let (list, ids) = list_of(&[1]);
        assert_eq!(previous(&list, ids[0]), Ok(ids[0]));
    }

    #[test]
    fn previous_needs_a_live_node() {
        let (mut list, ids) = list_of(&[1, 2]);
        list.erase(ids[0]).unwrap();
        assert_eq!(previous(&list, ids[0]), Err(Error::StaleHandle));
        list.clear();
        assert_eq!(previous(&list, ids[1]), Err(Error::EmptyList));
    }

    #[test]
    fn by_position_wraps_past_the_tail() {
        let (list, ids) = list_of(&[1, 2, 3]);
        assert_eq!(by_position(&list, 0), Some(ids[2]));
        assert_eq!(by_position(&list, 2), Some(ids[0]));
        assert_eq!(by_position(&list, 3), Some(ids[2]));
        assert_eq!(by_position(&list, 7), Some(ids[1]));

        let empty = CircularList::new().unwrap();
        assert_eq!(by_position(&empty, 0), None);
        assert_eq!(by_position(&empty, 5), None);
    }

    #[test]
    fn forward_stops_at_the_tail() {
        let (list, ids) = list_of(&[1, 2, 3]);
        assert_eq!(forward(&list, ids[2], 0), Ok(Some(ids[2])));
        assert_eq!(forward(&list, ids[2], 2), Ok(Some(ids[0])));
        assert_eq!(forward(&list, ids[2], 3), Ok(None));
        assert_eq!(forward(&list, ids[0], 1), Ok(None));
    }

    #[test]
    fn mutations_keep_the_list_well_formed() {
        let (mut list, ids) = list_of(&[1, 2, 3, 4]);
        assert!(is_well_formed(&list));
        list.insert(Some(ids[1]), 5).unwrap();
        assert!(is_well_formed(&list));
        list.erase(ids[0]).unwrap();
        assert!(is_well_formed(&list));
        list.pop().unwrap();
        assert!(is_well_formed(&list));
        list.clear();
        assert!(is_well_formed(&list));
    }
}
