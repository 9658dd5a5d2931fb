//! UTF-16 surrogate helpers shared by the machines.
//!
//! Code points are carried as `u32` rather than `char` because a lone
//! surrogate never becomes a code point here, while supplementary code points
//! are assembled one half at a time.

/// `true` for a lead (high) surrogate, `0xD800..=0xDBFF`.
#[inline]
#[must_use]
pub const fn is_lead_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}

/// `true` for a trail (low) surrogate, `0xDC00..=0xDFFF`.
#[inline]
#[must_use]
pub const fn is_trail_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

/// Combines a lead and a trail surrogate into a supplementary code point.
///
/// The caller must have checked both halves.
#[inline]
#[must_use]
pub const fn supplementary_code_point(lead: u16, trail: u16) -> u32 {
    debug_assert!(is_lead_surrogate(lead) && is_trail_surrogate(trail));
    0x10000 + (((lead as u32) - 0xD800) << 10) + ((trail as u32) - 0xDC00)
}

/// Number of UTF-16 code units needed to encode `code_point`.
#[inline]
#[must_use]
pub const fn code_unit_len(code_point: u32) -> i32 {
    if code_point > 0xFFFF { 2 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_surrogate_halves() {
        assert!(is_lead_surrogate(0xD83D));
        assert!(!is_lead_surrogate(0xDC41));
        assert!(is_trail_surrogate(0xDC41));
        assert!(!is_trail_surrogate(0xD83D));
        assert!(!is_lead_surrogate(u16::from(b'a')));
        assert!(!is_trail_surrogate(0xFFFF));
    }

    #[test]
    fn combines_pairs_like_char_decoding() {
        for ch in ['\u{10000}', '\u{1F441}', '\u{1F1FA}', '\u{E0100}', '\u{10FFFF}'] {
            let mut buf = [0u16; 2];
            let encoded = ch.encode_utf16(&mut buf);
            assert_eq!(
                supplementary_code_point(encoded[0], encoded[1]),
                u32::from(ch)
            );
            assert_eq!(code_unit_len(u32::from(ch)), 2);
        }
        assert_eq!(code_unit_len(0xFFFF), 1);
        assert_eq!(code_unit_len(u32::from('a')), 1);
    }

    #[quickcheck_macros::quickcheck]
    fn agrees_with_char_encoding(ch: char) -> bool {
        let mut buf = [0u16; 2];
        let encoded = ch.encode_utf16(&mut buf);
        let combined = match *encoded {
            [unit] => u32::from(unit),
            [lead, trail] if is_lead_surrogate(lead) => supplementary_code_point(lead, trail),
            _ => 0,
        };
        combined == u32::from(ch)
            && usize::try_from(code_unit_len(combined)).ok() == Some(encoded.len())
    }
}
