use std::fmt::{self, Debug, Display, Formatter, Write};

use crate::collections::contiguous::DynamicArray;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// A mutable sequence of characters backed by a [`DynamicArray<char>`]. Unlike [`str`], every
/// character takes up exactly one slot, so indices count characters rather than bytes.
///
/// Searching is done by brute force: every starting index is compared with the pattern character
/// by character, which takes `O(m * n)` time for a pattern of length `m`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of characters in the CharBuffer.
/// - `m`: The number of characters in the pattern or the characters being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `append` | `O(m)`*, `O(n+m)` |
/// | `insert` | `O(n+m)` |
/// | `contains` | `O(n*m)` |
/// | `indices_of` | `O(n*m)` |
/// | `replace` | `O(n*m)`** |
/// | `reverse` | `O(n)` |
///
/// \* If the buffer doesn't have enough capacity for the new characters, it has to reallocate.
///
/// \** Plus `O(n)` for every replacement of a different length, which shifts the rest of the
/// buffer.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CharBuffer {
    pub(crate) chars: DynamicArray<char>,
}

impl CharBuffer {
    /// Creates a new, empty CharBuffer without allocating.
    pub fn new() -> CharBuffer {
        CharBuffer {
            chars: DynamicArray::new(),
        }
    }

    /// Creates a new CharBuffer with room for `cap` characters.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> CharBuffer {
        CharBuffer {
            chars: DynamicArray::with_cap(cap),
        }
    }

    /// Creates a new CharBuffer holding a copy of `chars`.
    pub fn from_chars(chars: &[char]) -> CharBuffer {
        CharBuffer {
            chars: DynamicArray::from(chars),
        }
    }

    /// Returns the number of characters in the buffer.
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the buffer holds no characters.
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the number of characters the buffer can hold before growing.
    pub const fn cap(&self) -> usize {
        self.chars.cap()
    }

    /// Returns the contents of the buffer as a slice.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Appends `chars` to the end of the buffer.
    pub fn append(&mut self, chars: &[char]) {
        self.chars.extend_from_slice(chars);
    }

    /// Appends every character of `s` to the end of the buffer.
    pub fn push_str(&mut self, s: &str) {
        self.chars.extend(s.chars());
    }

    /// Inserts `chars` so that the first of them ends up at `index`, shifting the characters after
    /// it back. An `index` equal to the length of the buffer appends.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is greater than the length of the buffer, in which
    /// case the buffer is unchanged.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::text::CharBuffer;
    /// let mut buffer = CharBuffer::from("held");
    /// assert!(buffer.insert(3, &['l', 'o', ' ', 'w', 'o', 'r', 'l']).is_ok());
    /// assert_eq!(buffer.to_string(), "hello world");
    /// ```
    pub fn insert(&mut self, index: usize, chars: &[char]) -> Result<(), IndexOutOfBounds> {
        if index > self.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }

        self.chars.extend_from_slice(chars);
        self.chars[index..].rotate_right(chars.len());
        Ok(())
    }

    /// Returns true if `pattern` occurs anywhere in the buffer. An empty pattern is never
    /// contained.
    pub fn contains(&self, pattern: &[char]) -> bool {
        self.match_starts(pattern).next().is_some()
    }

    /// Returns the starting index of every occurrence of `pattern`, including overlapping ones, in
    /// ascending order.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::text::CharBuffer;
    /// let buffer = CharBuffer::from("aaaba");
    /// assert_eq!(buffer.indices_of(&['a', 'a']), [0, 1]);
    /// assert_eq!(buffer.indices_of(&['a']), [0, 1, 2, 4]);
    /// ```
    pub fn indices_of(&self, pattern: &[char]) -> DynamicArray<usize> {
        self.match_starts(pattern).collect()
    }

    /// Replaces every occurrence of `old` with `new`, scanning from the front and never matching
    /// inside a replacement that was just made. Returns the number of replacements.
    ///
    /// The rest of the buffer is shifted forward when `new` is shorter than `old` and back when it
    /// is longer, growing the buffer if needed. An empty `new` deletes every occurrence.
    ///
    /// # Examples
    /// ```
    /// # use primitive_collections::collections::text::CharBuffer;
    /// let mut buffer = CharBuffer::from("one two one");
    /// assert_eq!(buffer.replace(&['o', 'n', 'e'], &['3']), 2);
    /// assert_eq!(buffer.to_string(), "3 two 3");
    /// ```
    pub fn replace(&mut self, old: &[char], new: &[char]) -> usize {
        if old.is_empty() {
            return 0;
        }

        let mut count = 0;
        let mut index = 0;
        while index + old.len() <= self.len() {
            if self.matches_at(index, old) {
                self.splice(index, old.len(), new);
                index += new.len();
                count += 1;
            } else {
                index += 1;
            }
        }
        count
    }

    /// Reverses the buffer in place by swapping characters symmetrically around the middle.
    pub fn reverse(&mut self) {
        let len = self.len();
        for index in 0..len / 2 {
            self.chars.swap(index, len - 1 - index);
        }
    }

    fn matches_at(&self, index: usize, pattern: &[char]) -> bool {
        pattern
            .iter()
            .enumerate()
            .all(|(offset, c)| self.chars.get(index + offset) == Some(c))
    }

    fn match_starts<'a>(&'a self, pattern: &'a [char]) -> impl Iterator<Item = usize> + 'a {
        let last_start = match pattern.len() {
            0 => None,
            len => self.len().checked_sub(len),
        };

        last_start
            .into_iter()
            .flat_map(|last| 0..=last)
            .filter(move |index| self.matches_at(*index, pattern))
    }

    /// Replaces the `len` characters starting at `index` with `with`, moving the characters after
    /// them to close or open the gap.
    fn splice(&mut self, index: usize, len: usize, with: &[char]) {
        let old_len = self.len();
        let tail = index + len..old_len;

        if with.len() < len {
            self.chars.copy_within(tail, index + with.len());
            self.chars.truncate(old_len - (len - with.len()));
        } else if with.len() > len {
            let extra = with.len() - len;
            self.chars.resize(old_len + extra, '\0');
            self.chars.copy_within(tail, index + with.len());
        }

        self.chars[index..index + with.len()].copy_from_slice(with);
    }
}

impl From<&str> for CharBuffer {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl FromIterator<char> for CharBuffer {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CharBuffer {
            chars: DynamicArray::from_iter(iter),
        }
    }
}

impl Extend<char> for CharBuffer {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl PartialEq<str> for CharBuffer {
    fn eq(&self, other: &str) -> bool {
        self.chars.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&str> for CharBuffer {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl Debug for CharBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharBuffer")
            .field("contents", &self.to_string())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl Display for CharBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.chars.iter() {
            f.write_char(*c)?;
        }
        Ok(())
    }
}
