pub(crate) mod exit;
pub(crate) mod log;
pub(crate) mod print;
