//! The pairwise grapheme break predicate.
//!
//! Rules follow UAX #29 (GB3 through GB11) with two engine-specific
//! additions: virama clustering for Indic scripts and emoji modifiers after
//! the historical `E_Base_GAZ` code points. Regional indicator pairs are
//! parity dependent and therefore resolved by the machines, never here.
#![allow(clippy::enum_glob_use)]

use crate::properties::{
    CharProperties, GraphemeClusterBreak, UnicodeProperties, ZERO_WIDTH_JOINER, is_e_base_gaz,
};

/// Returns `true` if there is a grapheme cluster boundary between `prev` and
/// `next` according to the default Unicode data.
///
/// Both arguments are Unicode scalar values. Must not be called with two
/// regional indicators; flag pairing depends on the length of the whole run
/// and is handled by the state machines.
///
/// # Examples
///
/// ```rust
/// use grapheme_machines::is_grapheme_break;
///
/// assert!(!is_grapheme_break(0x000D, 0x000A)); // CR LF
/// assert!(is_grapheme_break(u32::from('a'), u32::from('b')));
/// assert!(!is_grapheme_break(u32::from('e'), 0x0301)); // combining acute
/// ```
#[must_use]
pub fn is_grapheme_break(prev: u32, next: u32) -> bool {
    is_grapheme_break_with(&UnicodeProperties, prev, next)
}

/// [`is_grapheme_break`] against a caller-provided property source.
#[must_use]
pub fn is_grapheme_break_with<P: CharProperties + ?Sized>(props: &P, prev: u32, next: u32) -> bool {
    use GraphemeClusterBreak::*;

    let prev_class = props.grapheme_cluster_break(prev);
    let next_class = props.grapheme_cluster_break(next);

    // GB3
    if prev_class == Cr && next_class == Lf {
        return false;
    }

    // GB4, GB5
    if matches!(prev_class, Control | Cr | Lf) || matches!(next_class, Control | Cr | Lf) {
        return true;
    }

    // GB6, GB7, GB8: Hangul syllable sequences.
    match (prev_class, next_class) {
        (L, L | V | Lv | Lvt) | (Lv | V, V | T) | (Lvt | T, T) => return false,
        _ => {}
    }

    // GB12, GB13 depend on the length of the whole run.
    let regional_indicator_pair =
        props.is_regional_indicator(prev) && props.is_regional_indicator(next);
    debug_assert!(
        !regional_indicator_pair,
        "regional indicator pairs must be resolved by the caller: U+{prev:04X} U+{next:04X}"
    );
    if regional_indicator_pair {
        return false;
    }

    // GB9, GB9a
    if matches!(next_class, Extend | Zwj | SpacingMark) || next == ZERO_WIDTH_JOINER {
        return false;
    }

    // GB9b
    if prev_class == Prepend {
        return false;
    }

    if props.is_virama(prev) && props.is_other_letter(next) {
        return false;
    }

    // GB10
    if (props.is_emoji_modifier_base(prev) || is_e_base_gaz(prev)) && props.is_emoji_modifier(next)
    {
        return false;
    }

    // GB11
    if prev == ZERO_WIDTH_JOINER && props.is_emoji(next) {
        return false;
    }

    // GB999
    true
}
