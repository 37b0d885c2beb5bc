/// Step forward through `len` slots, wrapping to the first.
pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Step backward through `len` slots, wrapping to the last.
pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + len - 1) % len
}
