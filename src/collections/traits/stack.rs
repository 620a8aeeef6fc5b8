use crate::util::error::EmptyContainer;

/// A last-in, first-out collection. Implemented by
/// [`ArrayStack`](crate::collections::stack::ArrayStack) and
/// [`LinkedStack`](crate::collections::stack::LinkedStack), which share this contract exactly, so
/// that the algorithms in [`stack`](crate::collections::stack) work over either backing.
///
/// Implementations must uphold the following:
/// - `push`, `pop` and `peek` take `O(1)` amortized time.
/// - Popping an empty stack returns [`EmptyContainer`] rather than panicking.
/// - After `push(a)` then `pop()`, which returns `a`, the stack is indistinguishable from its state
///   before the push.
pub trait Stack<T> {
    /// Returns the number of elements on the stack.
    fn len(&self) -> usize;

    /// Returns true if the stack contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes `value` onto the top of the stack.
    fn push(&mut self, value: T);

    /// Removes the top element and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if there is nothing to pop.
    fn pop(&mut self) -> Result<T, EmptyContainer>;

    /// Returns a reference to the top element, if there is one.
    fn peek(&self) -> Option<&T>;

    /// Replaces the top element with `value`, returning the value it replaced.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if there is no top element to replace.
    fn modify_top(&mut self, value: T) -> Result<T, EmptyContainer>;
}
