#[cold]
#[inline(never)]
pub(crate) fn unreachable() -> ! {
    unreachable!("circular list invariant violated")
}

#[inline(always)]
pub(crate) fn some<T>(option: Option<T>) -> T {
    match option {
        Some(item) => item,
        None => unreachable(),
    }
}
