use super::{SPACE, decode, first_codepoint, is_continuation, last_codepoint, split_words};

// Tokenizer

#[test]
fn split_collapses_space_runs() {
    assert_eq!(split_words("  a   b  "), vec!["a", "b"]);
}

#[test]
fn split_empty_input() {
    assert!(split_words("").is_empty());
    assert!(split_words("     ").is_empty());
}

#[test]
fn split_single_word() {
    assert_eq!(split_words("solo"), vec!["solo"]);
}

#[test]
fn split_preserves_order_and_bytes() {
    assert_eq!(
        split_words("Grüße aus  Köln"),
        vec!["Grüße", "aus", "Köln"]
    );
}

#[test]
fn split_only_on_space() {
    // Tabs and newlines are not word separators.
    assert_eq!(split_words("a\tb c\nd"), vec!["a\tb", "c\nd"]);
}

// Decoder

#[test]
fn continuation_byte_detection() {
    assert!(is_continuation(0x80));
    assert!(is_continuation(0xBF));
    assert!(!is_continuation(b'a'));
    assert!(!is_continuation(0xC3));
    assert!(!is_continuation(0xE2));
}

#[test]
fn decode_ascii() {
    assert_eq!(decode(b"A"), Some((0x41, 1)));
    assert_eq!(decode(b"Abc"), Some((0x41, 1)));
}

#[test]
fn decode_two_byte() {
    // U+00E9 LATIN SMALL LETTER E WITH ACUTE
    assert_eq!(decode(&[0xC3, 0xA9]), Some((0xE9, 2)));
}

#[test]
fn decode_three_byte() {
    // U+20AC EURO SIGN
    assert_eq!(decode(&[0xE2, 0x82, 0xAC]), Some((0x20AC, 3)));
}

#[test]
fn decode_four_byte() {
    // U+1F600 GRINNING FACE
    assert_eq!(decode(&[0xF0, 0x9F, 0x98, 0x80]), Some((0x1F600, 4)));
}

#[test]
fn decode_stops_after_codepoint() {
    let bytes = "€x".as_bytes();
    assert_eq!(decode(bytes), Some((0x20AC, 3)));
}

#[test]
fn decode_truncated_window() {
    assert_eq!(decode(&[]), None);
    assert_eq!(decode(&[0xE2, 0x82]), None);
}

#[test]
fn decode_rejects_overlong_lead_bytes() {
    assert_eq!(decode(&[0xFE, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80]), None);
    assert_eq!(decode(&[0xFF, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80]), None);
    assert_eq!(decode(&[0xF8, 0x88, 0x80, 0x80, 0x80]), None);
}

#[test]
fn decode_agrees_with_std() {
    for ch in ['a', '~', 'ß', 'Ω', 'あ', '€', '\u{FFFD}', '𝄞', '\u{10FFFF}'] {
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        assert_eq!(
            decode(encoded.as_bytes()),
            Some((ch as u32, ch.len_utf8())),
            "decoding {ch:?}"
        );
    }
}

// Boundary codepoints

#[test]
fn single_codepoint_word_both_ends() {
    let word = "€";
    assert_eq!(first_codepoint(word), 0x20AC);
    assert_eq!(last_codepoint(word), 0x20AC);
}

#[test]
fn boundaries_of_mixed_word() {
    let word = "éto€";
    assert_eq!(first_codepoint(word), 0xE9);
    assert_eq!(last_codepoint(word), 0x20AC);
}

#[test]
fn boundaries_of_ascii_word() {
    assert_eq!(first_codepoint("hello"), 'h' as u32);
    assert_eq!(last_codepoint("hello"), 'o' as u32);
}

#[test]
fn empty_word_substitutes_space() {
    assert_eq!(first_codepoint(""), SPACE);
    assert_eq!(last_codepoint(""), SPACE);
}

#[test]
fn four_byte_boundaries() {
    let word = "𝄞a😀";
    assert_eq!(first_codepoint(word), 0x1D11E);
    assert_eq!(last_codepoint(word), 0x1F600);
}
