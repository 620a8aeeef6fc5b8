//! Bracket matching over the `{}`, `()` and `[]` alphabet.

use derive_more::{Display, Error, IsVariant};

use crate::collections::stack::ArrayStack;
use crate::collections::traits::Stack;

/// The reason a sequence of brackets isn't balanced. Indices count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum BracketError {
    /// An odd number of brackets can never pair up. Detected before scanning.
    #[display("Input of length {len} can't be balanced!")]
    OddLength {
        /// The number of characters in the input.
        len: usize,
    },
    /// A character outside the bracket alphabet.
    #[display("Unsupported character {found:?} at index {index}!")]
    Unsupported {
        /// Where the character was found.
        index: usize,
        /// The offending character.
        found: char,
    },
    /// A closing bracket with no opener left to close.
    #[display("Closing bracket {found:?} at index {index} has no opening bracket!")]
    Unmatched {
        /// Where the closing bracket was found.
        index: usize,
        /// The closing bracket.
        found: char,
    },
    /// A closing bracket of the wrong type for the innermost opener.
    #[display("Expected {expected:?} at index {index}, found {found:?}!")]
    Mismatch {
        /// Where the closing bracket was found.
        index: usize,
        /// The closer that would have matched.
        expected: char,
        /// The closer that was found.
        found: char,
    },
    /// Openers were left on the stack once the input ran out.
    #[display("{count} bracket(s) were never closed!")]
    Unclosed {
        /// How many openers were left.
        count: usize,
    },
}

const fn closer_for(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

const fn is_closer(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Checks that every bracket in `input` is closed by a bracket of the same type, in order, using a
/// stack of type `S` to hold the open brackets.
///
/// # Errors
/// Returns the first [`BracketError`] encountered while scanning from the start of `input`.
pub fn check_brackets_with<S: Stack<char> + Default>(input: &str) -> Result<(), BracketError> {
    let len = input.chars().count();
    if len % 2 != 0 {
        return Err(BracketError::OddLength { len });
    }

    let mut open = S::default();
    for (index, found) in input.chars().enumerate() {
        if closer_for(found).is_some() {
            open.push(found);
        } else if is_closer(found) {
            let popped = open
                .pop()
                .map_err(|_| BracketError::Unmatched { index, found })?;
            // Only openers are ever pushed.
            let expected = closer_for(popped).unwrap_or(found);
            if expected != found {
                return Err(BracketError::Mismatch {
                    index,
                    expected,
                    found,
                });
            }
        } else {
            return Err(BracketError::Unsupported { index, found });
        }
    }

    match open.len() {
        0 => Ok(()),
        count => Err(BracketError::Unclosed { count }),
    }
}

/// [`check_brackets_with`] backed by an [`ArrayStack`].
///
/// # Errors
/// Returns the first [`BracketError`] encountered while scanning from the start of `input`.
///
/// # Examples
/// ```
/// # use primitive_collections::collections::stack::brackets::{check_brackets, BracketError};
/// assert_eq!(check_brackets("{[()]}"), Ok(()));
/// assert_eq!(
///     check_brackets("{[(])}"),
///     Err(BracketError::Mismatch { index: 3, expected: ')', found: ']' })
/// );
/// assert_eq!(check_brackets("("), Err(BracketError::OddLength { len: 1 }));
/// ```
pub fn check_brackets(input: &str) -> Result<(), BracketError> {
    check_brackets_with::<ArrayStack<char>>(input)
}

/// Returns true if `input` is a balanced sequence of brackets.
pub fn is_balanced(input: &str) -> bool {
    check_brackets(input).is_ok()
}
