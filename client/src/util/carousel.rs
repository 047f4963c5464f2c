//! Index math for the inline citation carousel.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Move `index` by `delta` within `0..len`, wrapping at both ends.
///
/// An empty carousel always reports index 0.
pub fn step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len_i = isize::try_from(len).unwrap_or(isize::MAX);
    let current = isize::try_from(index % len).unwrap_or(0);
    let next = (current + delta % len_i).rem_euclid(len_i);
    usize::try_from(next).unwrap_or(0)
}

/// One-based "current/total" label, e.g. `2/5`.
pub fn position_label(index: usize, len: usize) -> String {
    if len == 0 {
        return "0/0".to_owned();
    }
    format!("{}/{len}", index % len + 1)
}
