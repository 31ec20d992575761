pub(crate) mod block;
pub mod id;
pub(crate) mod unreachable;
