//! Back and forward navigation over a pair of stacks, in the manner of a browser's history.

use crate::collections::traits::Stack;

/// Moves pages between the `back` stack, whose top is the current page, and the `forward` stack.
/// Returns the number of pages that were moved.
///
/// A positive `steps` moves up to `steps` pages from `forward` onto `back`, so the last page moved
/// becomes current. A negative `steps` moves up to `|steps|` pages from `back` onto `forward`, but
/// never the last page on `back`. Either way, moving stops early once there is nothing left to move.
///
/// Nothing moves if `steps` is zero, `forward` is absent or `back` holds fewer than two pages.
///
/// # Examples
/// ```
/// # use primitive_collections::collections::stack::LinkedStack;
/// # use primitive_collections::collections::stack::navigation::navigate;
/// # use primitive_collections::collections::traits::Stack;
/// let mut back: LinkedStack<_> = ["home", "search", "result"].into_iter().collect();
/// let mut forward = LinkedStack::new();
///
/// assert_eq!(navigate(&mut back, Some(&mut forward), -5), 2);
/// assert_eq!(back.peek(), Some(&"home"));
/// assert_eq!(forward.peek(), Some(&"search"));
/// ```
pub fn navigate<P, S: Stack<P>>(back: &mut S, forward: Option<&mut S>, steps: isize) -> usize {
    let Some(forward) = forward else {
        return 0;
    };
    if steps == 0 || back.len() < 2 {
        return 0;
    }

    // The current page always stays on back.
    let (from, to, keep) = if steps > 0 {
        (forward, back, 0)
    } else {
        (back, forward, 1)
    };

    let mut moved = 0;
    while moved < steps.unsigned_abs() && from.len() > keep {
        match from.pop() {
            Ok(page) => to.push(page),
            Err(_) => break,
        }
        moved += 1;
    }
    moved
}
