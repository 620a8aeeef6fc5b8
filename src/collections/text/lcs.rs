use crate::collections::contiguous::DynamicArray;
use crate::collections::text::CharBuffer;

/// Finds the longest run of characters that appears in both `a` and `b`. If several runs share
/// the longest length, the one that ends first in `a` is returned. Returns an empty buffer if the
/// inputs share no characters.
///
/// Fills a table where the entry for `a[i - 1]` and `b[j - 1]` holds the length of the common run
/// ending at both of them: one more than the entry for the previous pair on a match, and zero
/// otherwise. Takes `O(n * m)` time and space.
///
/// # Panics
/// Panics if the table doesn't fit in memory.
///
/// # Examples
/// ```
/// # use primitive_collections::collections::text::longest_common_substring;
/// assert_eq!(longest_common_substring("abcdef", "zcdefg"), "cdef");
/// assert_eq!(longest_common_substring("abc", "xyz"), "");
/// ```
pub fn longest_common_substring(a: &str, b: &str) -> CharBuffer {
    let a: DynamicArray<char> = a.chars().collect();
    let b: DynamicArray<char> = b.chars().collect();

    let width = b.len() + 1;
    let mut table: DynamicArray<usize> = DynamicArray::new();
    table.resize((a.len() + 1) * width, 0);

    let mut max_len = 0;
    let mut end = 0;
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            if a[i - 1] != b[j - 1] {
                continue;
            }

            let len = table[(i - 1) * width + j - 1] + 1;
            table[i * width + j] = len;
            if len > max_len {
                max_len = len;
                end = i;
            }
        }
    }

    CharBuffer::from_chars(&a[end - max_len..end])
}
