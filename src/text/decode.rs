//! UTF-8 to codepoint decoding over an explicit byte window.

/// Codepoint substituted for an empty boundary so kerning queries stay defined.
pub const SPACE: u32 = ' ' as u32;

/// Low six payload bits carried by every continuation byte.
const PAYLOAD_MASK: u32 = 0x3F;

/// Whether `byte` is a UTF-8 continuation byte (`10xxxxxx`).
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decode the codepoint starting at `bytes[0]`.
///
/// Returns the codepoint and the number of bytes consumed. Each leading `1`
/// bit after the first one in the lead byte accounts for one continuation
/// byte; continuation payloads are accumulated most significant first and the
/// remaining lead bits are placed above them. Returns `None` for an empty
/// window, for a lead byte announcing more than three continuation bytes, or
/// when the window ends before the announced continuation bytes.
pub fn decode(bytes: &[u8]) -> Option<(u32, usize)> {
    let (&lead, rest) = bytes.split_first()?;
    if lead < 0x80 {
        return Some((u32::from(lead), 1));
    }
    // UTF-8 sequences are at most four bytes; 0xFE/0xFF would overflow the shift.
    if lead >= 0xF8 {
        return None;
    }

    let mut lead_bits = u32::from(lead);
    let mut lead_mask = PAYLOAD_MASK;
    let mut lead_shift = 0;
    let mut total_bits = 0;
    let mut codepoint = 0u32;
    let mut consumed = 1;

    while lead_bits & 0xC0 == 0xC0 {
        lead_bits = (lead_bits << 1) & 0xFF;
        total_bits += 6;
        lead_mask >>= 1;
        lead_shift += 1;

        let next = *rest.get(consumed - 1)?;
        codepoint = (codepoint << 6) | (u32::from(next) & PAYLOAD_MASK);
        consumed += 1;
    }

    codepoint |= ((lead_bits >> lead_shift) & lead_mask) << total_bits;
    Some((codepoint, consumed))
}

/// First codepoint of `word`, or [`SPACE`] when `word` is empty.
pub fn first_codepoint(word: &str) -> u32 {
    let bytes = word.as_bytes();
    if bytes.is_empty() {
        return SPACE;
    }
    let len = 1 + bytes[1..]
        .iter()
        .take_while(|&&b| is_continuation(b))
        .count();
    decode(&bytes[..len]).map_or(SPACE, |(cp, _)| cp)
}

/// Last codepoint of `word`, or [`SPACE`] when `word` is empty.
///
/// Walks backward over continuation bytes to the lead byte, then decodes
/// forward from there.
pub fn last_codepoint(word: &str) -> u32 {
    let bytes = word.as_bytes();
    let Some(mut start) = bytes.len().checked_sub(1) else {
        return SPACE;
    };
    while start > 0 && is_continuation(bytes[start]) {
        start -= 1;
    }
    decode(&bytes[start..]).map_or(SPACE, |(cp, _)| cp)
}
