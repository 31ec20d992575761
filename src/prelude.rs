pub(crate) use crate::error::{Error, Result};
pub(crate) use crate::list::CircularList;
pub(crate) use crate::node::{Node, Value};
pub(crate) use crate::util::block::Block;
pub(crate) use crate::util::id::Id;
pub(crate) use crate::util::unreachable::some;
