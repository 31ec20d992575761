use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Handle to a slot of a [`Block`](crate::util::block::Block).
///
/// Besides the slot index, an `Id` records the generation of the slot
/// when it was issued and the tag of the issuing block, so that a handle
/// outliving its slot, or presented to the wrong block, is detected
/// rather than silently resolving to some other item.
pub struct Id<T> {
    index: u32,
    generation: u32,
    tag: u32,
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub(crate) fn new(index: u32, generation: u32, tag: u32) -> Self {
        let _phantom = PhantomData;
        Self {
            index,
            generation,
            tag,
            _phantom,
        }
    }

    pub(crate) fn as_usize(self) -> usize {
        self.index as usize
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }

    pub(crate) fn tag(self) -> u32 {
        self.tag
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.index, self.generation, self.tag)
    }
}

impl<T> Copy for Id<T> {}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "id:{}@{}/{}", self.index, self.generation, self.tag)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.generation == other.generation
            && self.tag == other.tag
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.tag, self.index, self.generation).cmp(&(
            other.tag,
            other.index,
            other.generation,
        ))
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, hash: &mut H) {
        self.index.hash(hash);
        self.generation.hash(hash);
        self.tag.hash(hash);
    }
}
