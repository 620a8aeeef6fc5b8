#![cfg(test)]

use super::*;
use crate::collections::contiguous::DynamicArray;

fn chars(s: &str) -> DynamicArray<char> {
    s.chars().collect()
}

#[test]
fn test_append_and_insert() {
    let mut buffer = CharBuffer::new();
    buffer.append(&chars("world"));
    assert_eq!(buffer.insert(0, &chars("hello ")), Ok(()));
    buffer.push_str("!");
    assert_eq!(buffer, "hello world!");

    assert_eq!(buffer.insert(12, &['?']), Ok(()), "Inserting at the length should append.");
    assert_eq!(
        buffer.insert(14, &['x']),
        Err(IndexOutOfBounds { index: 14, len: 13 })
    );
    assert_eq!(buffer, "hello world!?");
    assert_eq!(buffer.len(), 13);
}

#[test]
fn test_insert_in_middle() {
    let mut buffer = CharBuffer::from("held");
    assert_eq!(buffer.insert(2, &chars("lo wor")), Ok(()));
    assert_eq!(buffer, "helo world", "The first inserted char should land at the index.");

    let mut buffer = CharBuffer::from("held");
    assert_eq!(buffer.insert(3, &chars("lo worl")), Ok(()));
    assert_eq!(buffer, "hello world");
}

#[test]
fn test_counts_chars_not_bytes() {
    let mut buffer = CharBuffer::from("héllo");
    assert_eq!(buffer.len(), 5);
    assert_eq!(buffer.indices_of(&['l']), [2, 3]);

    buffer.reverse();
    assert_eq!(buffer, "olléh");
}

#[test]
fn test_search() {
    let buffer = CharBuffer::from("abcabcab");

    assert!(buffer.contains(&chars("cab")));
    assert!(!buffer.contains(&chars("cc")));
    assert!(!buffer.contains(&[]), "An empty pattern is never contained.");
    assert!(!buffer.contains(&chars("abcabcabc")));

    assert_eq!(buffer.indices_of(&chars("ab")), [0, 3, 6]);
    assert_eq!(buffer.indices_of(&chars("abcab")), [0, 3], "Overlapping matches count.");
    assert!(buffer.indices_of(&chars("x")).is_empty());
    assert!(CharBuffer::new().indices_of(&['a']).is_empty());
}

#[test]
fn test_replace_shorter() {
    let mut buffer = CharBuffer::from("a--b--c");
    assert_eq!(buffer.replace(&chars("--"), &chars("-")), 2);
    assert_eq!(buffer, "a-b-c");
}

#[test]
fn test_replace_longer_grows() {
    let mut buffer = CharBuffer::with_cap(5);
    buffer.push_str("x.y.z");
    assert_eq!(buffer.cap(), 5);

    assert_eq!(buffer.replace(&['.'], &chars(" and ")), 2);
    assert_eq!(buffer, "x and y and z");
    assert!(buffer.cap() >= buffer.len());
}

#[test]
fn test_replace_same_length_and_delete() {
    let mut buffer = CharBuffer::from("cat hat bat");
    assert_eq!(buffer.replace(&chars("at"), &chars("ow")), 3);
    assert_eq!(buffer, "cow how bow");

    assert_eq!(buffer.replace(&['o'], &[]), 3);
    assert_eq!(buffer, "cw hw bw");

    assert_eq!(buffer.replace(&[], &['z']), 0);
    assert_eq!(buffer.replace(&chars("zz"), &['z']), 0);
    assert_eq!(buffer, "cw hw bw");
}

#[test]
fn test_replace_never_rescans_replacements() {
    let mut buffer = CharBuffer::from("aaa");
    assert_eq!(buffer.replace(&['a'], &chars("aa")), 3);
    assert_eq!(buffer, "aaaaaa");

    let mut buffer = CharBuffer::from("aaaa");
    assert_eq!(buffer.replace(&chars("aa"), &['b']), 2);
    assert_eq!(buffer, "bb");
}

#[test]
fn test_reverse() {
    for (input, expected) in [("", ""), ("a", "a"), ("ab", "ba"), ("abcde", "edcba")] {
        let mut buffer = CharBuffer::from(input);
        buffer.reverse();
        assert_eq!(buffer, expected);
    }
}

#[test]
fn test_longest_common_substring() {
    assert_eq!(longest_common_substring("abcdef", "zcdefg"), "cdef");
    assert_eq!(longest_common_substring("abab", "baba"), "aba");
    assert_eq!(
        longest_common_substring("xay", "ayxa"),
        "xa",
        "The first longest run in the first input should win."
    );
    assert_eq!(longest_common_substring("", "abc"), "");
    assert_eq!(longest_common_substring("abc", "def"), "");
}

#[test]
fn test_display_and_debug() {
    let buffer = CharBuffer::from("hi");
    assert_eq!(buffer.to_string(), "hi");
    assert!(format!("{buffer:?}").starts_with("CharBuffer { contents: \"hi\", len: 2"));
}
