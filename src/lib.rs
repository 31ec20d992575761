//! A circular singly-linked list with a sentinel node.
//!
//! Nodes are kept in an arena owned by the list and addressed by
//! generational [`Id`]s, so handles can be held across mutations and a
//! handle to a removed node is reported instead of reused.
//!
//! ```
//! use slcircular::{utility, CircularList};
//!
//! let mut list = CircularList::new()?;
//! let one = list.push(1)?;
//! list.push(2)?;
//! assert_eq!(list.to_string(), "[2, 1]");
//! assert_eq!(utility::size(&list), 2);
//! assert_eq!(utility::by_position(&list, 1), Some(one));
//! # Ok::<(), slcircular::Error>(())
//! ```

mod error;
mod list;
mod node;
mod prelude;
mod util;
pub mod utility;

pub use crate::error::{Error, Result};
pub use crate::list::CircularList;
pub use crate::node::{Node, Value};
pub use crate::util::id::Id;
