use crate::prelude::*;
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_TAG: AtomicU32 = AtomicU32::new(1);

const SLOT_LIMIT: usize = u32::MAX as usize;

struct Slot<T> {
    generation: u32,
    item: Option<T>,
}

/// Slot store addressed by [`Id`]s.
///
/// Slot 0 is the root: it is filled on construction and can never be
/// removed or cleared. Vacated slots are recycled through a free list,
/// with their generation bumped so that old handles stop resolving. A
/// slot whose generation is exhausted is retired instead of recycled.
pub(crate) struct Block<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    occupied: usize,
    limit: usize,
    tag: u32,
}

impl<T> Block<T> {
    /// Creates a block whose root is built by `make`, which is handed
    /// the root's own id.
    pub(crate) fn with_root<F>(make: F) -> Result<Self>
    where
        F: FnOnce(Id<T>) -> T,
    {
        let tag = NEXT_TAG.fetch_add(1, Ordering::Relaxed);
        let root = make(Id::new(0, 0, tag));
        let mut slots = Vec::new();
        slots
            .try_reserve(1)
            .map_err(|_| Error::AllocationFailure)?;
        slots.push(Slot {
            generation: 0,
            item: Some(root),
        });
        let free = vec![];
        let occupied = 0;
        let limit = SLOT_LIMIT;
        Ok(Self {
            slots,
            free,
            occupied,
            limit,
            tag,
        })
    }

    pub(crate) fn root(&self) -> Id<T> {
        Id::new(0, 0, self.tag)
    }

    pub(crate) fn is_root(&self, id: Id<T>) -> bool {
        id.as_usize() == 0 && id.tag() == self.tag
    }

    /// Number of occupied slots, not counting the root.
    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Stores `item`, reusing a vacant slot if there is one.
    ///
    /// Storage is reserved before anything is written, so on
    /// `AllocationFailure` the block is exactly as it was.
    pub(crate) fn try_push(&mut self, item: T) -> Result<Id<T>> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.item.is_none(), "free slot occupied");
            slot.item = Some(item);
            self.occupied += 1;
            return Ok(Id::new(index, slot.generation, self.tag));
        }

        let index = self.slots.len();
        if index >= self.limit {
            return Err(Error::AllocationFailure);
        }
        self.slots
            .try_reserve(1)
            .map_err(|_| Error::AllocationFailure)?;
        // every slot may end up on the free list at once
        let wanted = (index + 1).saturating_sub(self.free.len());
        self.free
            .try_reserve(wanted)
            .map_err(|_| Error::AllocationFailure)?;

        self.slots.push(Slot {
            generation: 0,
            item: Some(item),
        });
        self.occupied += 1;
        Ok(Id::new(index as u32, 0, self.tag))
    }

    /// Vacates the slot named by `id`, returning its item.
    ///
    /// The root is never removed; stale and foreign ids yield `None`.
    pub(crate) fn remove(&mut self, id: Id<T>) -> Option<T> {
        if self.is_root(id) || self.get(id).is_err() {
            return None;
        }
        let index = id.as_usize();
        let slot = &mut self.slots[index];
        let item = slot.item.take();
        if let Some(generation) = slot.generation.checked_add(1) {
            slot.generation = generation;
            self.free.push(index as u32);
        }
        self.occupied -= 1;
        item
    }

    #[cfg(test)]
    pub(crate) fn limit_to(&mut self, limit: usize) {
        self.limit = limit;
    }

    pub(crate) fn contains(&self, id: Id<T>) -> bool {
        self.get(id).is_ok()
    }

    pub(crate) fn get(&self, id: Id<T>) -> Result<&T> {
        if id.tag() != self.tag {
            return Err(Error::ForeignHandle);
        }
        match self.slots.get(id.as_usize()) {
            Some(Slot {
                generation,
                item: Some(item),
            }) if *generation == id.generation() => Ok(item),
            _ => Err(Error::StaleHandle),
        }
    }

    pub(crate) fn get_mut(&mut self, id: Id<T>) -> Result<&mut T> {
        if id.tag() != self.tag {
            return Err(Error::ForeignHandle);
        }
        match self.slots.get_mut(id.as_usize()) {
            Some(Slot {
                generation,
                item: Some(item),
            }) if *generation == id.generation() => Ok(item),
            _ => Err(Error::StaleHandle),
        }
    }
}

impl<T> Index<Id<T>> for Block<T> {
    type Output = T;

    fn index(&self, id: Id<T>) -> &Self::Output {
        debug_assert!(self.contains(id), "stale id: {:?}", id);
        some(self.slots[id.as_usize()].item.as_ref())
    }
}

impl<T> IndexMut<Id<T>> for Block<T> {
    fn index_mut(&mut self, id: Id<T>) -> &mut Self::Output {
        debug_assert!(self.contains(id), "stale id: {:?}", id);
        some(self.slots[id.as_usize()].item.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_fixed() {
        let mut block = Block::with_root(|_| 'r').unwrap();
        let root = block.root();
        assert!(block.is_root(root));
        assert!(block.is_empty());
        assert_eq!(block.remove(root), None);
        assert_eq!(block[root], 'r');
    }

    #[test]
    fn removed_ids_go_stale() {
        let mut block = Block::with_root(|_| 0).unwrap();
        let a = block.try_push(1).unwrap();
        assert_eq!(block.remove(a), Some(1));
        assert_eq!(block.get(a), Err(Error::StaleHandle));

        let b = block.try_push(2).unwrap();
        assert_eq!(a.as_usize(), b.as_usize());
        assert_ne!(a, b);
        assert_eq!(block.get(a), Err(Error::StaleHandle));
        assert_eq!(*block.get(b).unwrap(), 2);
        assert_eq!(block.len(), 1);
    }

    #[test]
    fn ids_do_not_cross_blocks() {
        let mut left = Block::with_root(|_| 0).unwrap();
        let mut right = Block::with_root(|_| 0).unwrap();
        let id = left.try_push(1).unwrap();
        right.try_push(1).unwrap();
        assert_eq!(right.get(id), Err(Error::ForeignHandle));
        assert_eq!(right.remove(id), None);
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn vacant_slots_are_recycled() {
        let mut block = Block::with_root(|_| 0).unwrap();
        let ids: Vec<_> = (1..=3).map(|n| block.try_push(n).unwrap()).collect();
        block.remove(ids[0]);
        block.remove(ids[2]);
        assert_eq!(block.len(), 1);

        let again = block.try_push(4).unwrap();
        assert_eq!(again.as_usize(), ids[2].as_usize());
        assert_eq!(block[again], 4);
        assert_eq!(block.len(), 2);
    }

    #[test]
    fn exhausted_slots_are_retired() {
        let mut block = Block::with_root(|_| 0).unwrap();
        let old = block.try_push(1).unwrap();
        block.slots[old.as_usize()].generation = u32::MAX;
        let last = Id::new(old.as_usize() as u32, u32::MAX, block.tag);

        assert_eq!(block.remove(last), Some(1));
        assert!(block.free.is_empty());
        assert_eq!(block.get(last), Err(Error::StaleHandle));

        let fresh = block.try_push(2).unwrap();
        assert_ne!(fresh.as_usize(), old.as_usize());
        assert_eq!(block.get(last), Err(Error::StaleHandle));
        assert_eq!(block.len(), 1);
    }

    #[test]
    fn full_block_is_left_unchanged() {
        let mut block = Block::with_root(|_| 0).unwrap();
        block.limit_to(3);
        let a = block.try_push(1).unwrap();
        let b = block.try_push(2).unwrap();

        assert_eq!(block.try_push(3), Err(Error::AllocationFailure));
        assert_eq!(block.len(), 2);
        assert_eq!(block.slots.len(), 3);
        assert!(block.free.is_empty());
        assert_eq!(block[a], 1);
        assert_eq!(block[b], 2);

        block.remove(a);
        let c = block.try_push(3).unwrap();
        assert_eq!(c.as_usize(), a.as_usize());
        assert_eq!(block.try_push(4), Err(Error::AllocationFailure));
        assert_eq!(block.len(), 2);
    }
}
