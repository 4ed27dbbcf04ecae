//! Remove-then-insert, the one primitive behind every move on the board.
//!
//! The destination index is always read against the list as it looks *after*
//! the removal. For a same-list move this is what a drag-and-drop library
//! reports, so moving index 2 to index 0 in `[a, b, c, d]` gives
//! `[c, a, b, d]`.

/// Moves `source[from]` to position `to` of `destination`.
///
/// When `destination` is `None` the element is reinserted into `source` itself.
/// `to` is clamped to the length of the target list. Returns `None` without
/// touching either list when `from` is out of range.
pub fn relocate<T>(
    source: &mut Vec<T>,
    from: usize,
    destination: Option<&mut Vec<T>>,
    to: usize,
) -> Option<usize> {
    if from >= source.len() {
        return None;
    }

    let moved = source.remove(from);
    let target = match destination {
        Some(list) => list,
        None => source,
    };
    let at = to.min(target.len());
    target.insert(at, moved);
    Some(at)
}

/// Borrows two distinct elements of a slice mutably.
pub(crate) fn pair_mut<T>(slice: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = slice.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = slice.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
