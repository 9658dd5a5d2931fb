//! Unicode character properties consumed by the predicate and the machines.
//!
//! The machines never look at character data directly; they ask a
//! [`CharProperties`] implementation. [`UnicodeProperties`] answers from the
//! ICU4X compiled data tables, which is what every constructor without an
//! explicit provider uses.

use icu_properties::{
    CanonicalCombiningClass, GeneralCategory, GraphemeClusterBreak as IcuGraphemeClusterBreak,
    maps, sets,
};

/// U+000D CARRIAGE RETURN.
pub const CARRIAGE_RETURN: u32 = 0x000D;
/// U+000A LINE FEED.
pub const LINE_FEED: u32 = 0x000A;
/// U+200D ZERO WIDTH JOINER.
pub const ZERO_WIDTH_JOINER: u32 = 0x200D;
/// U+20E3 COMBINING ENCLOSING KEYCAP.
pub const COMBINING_ENCLOSING_KEYCAP: u32 = 0x20E3;
/// U+E007F CANCEL TAG, the terminator of an emoji tag sequence.
pub const CANCEL_TAG: u32 = 0xE007F;

/// The grapheme cluster break classes the predicate distinguishes.
///
/// This is the UAX #29 `Grapheme_Cluster_Break` property reduced to the
/// values the rules in [`is_grapheme_break`](crate::is_grapheme_break) act
/// on. Everything else, including code points a provider has no data for,
/// is [`Other`](Self::Other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphemeClusterBreak {
    #[default]
    /// No special behavior.
    Other,
    /// Control characters other than CR and LF.
    Control,
    /// U+000D.
    Cr,
    /// U+000A.
    Lf,
    /// Combining marks and other extenders.
    Extend,
    /// U+200D.
    Zwj,
    /// Regional indicator symbols.
    RegionalIndicator,
    /// Prepended concatenation marks.
    Prepend,
    /// Spacing combining marks.
    SpacingMark,
    /// Hangul leading jamo.
    L,
    /// Hangul vowel jamo.
    V,
    /// Hangul trailing jamo.
    T,
    /// Hangul LV syllables.
    Lv,
    /// Hangul LVT syllables.
    Lvt,
}

/// Read-only source of the per-code-point properties the segmentation rules
/// consume.
///
/// Implementations must be pure: the same code point always yields the same
/// answer. All code points are passed as `u32` scalar values; lone
/// surrogates are never passed.
pub trait CharProperties {
    /// The `Grapheme_Cluster_Break` class of `code_point`.
    fn grapheme_cluster_break(&self, code_point: u32) -> GraphemeClusterBreak;

    /// The `Emoji` binary property.
    fn is_emoji(&self, code_point: u32) -> bool;

    /// The `Emoji_Modifier` binary property (the Fitzpatrick skin tones).
    fn is_emoji_modifier(&self, code_point: u32) -> bool;

    /// The `Emoji_Modifier_Base` binary property.
    fn is_emoji_modifier_base(&self, code_point: u32) -> bool;

    /// The `Variation_Selector` binary property, covering both the standard
    /// variation selectors and the ideographic variation selectors.
    fn is_variation_selector(&self, code_point: u32) -> bool;

    /// Whether `code_point` has canonical combining class 9 (virama).
    fn is_virama(&self, code_point: u32) -> bool;

    /// Whether `code_point` has general category `Other_Letter`.
    fn is_other_letter(&self, code_point: u32) -> bool;

    /// Whether `code_point` has canonical combining class 0.
    fn is_starter(&self, code_point: u32) -> bool;

    /// The `Regional_Indicator` binary property.
    fn is_regional_indicator(&self, code_point: u32) -> bool {
        (0x1F1E6..=0x1F1FF).contains(&code_point)
    }
}

impl<P: CharProperties + ?Sized> CharProperties for &P {
    fn grapheme_cluster_break(&self, code_point: u32) -> GraphemeClusterBreak {
        (**self).grapheme_cluster_break(code_point)
    }

    fn is_emoji(&self, code_point: u32) -> bool {
        (**self).is_emoji(code_point)
    }

    fn is_emoji_modifier(&self, code_point: u32) -> bool {
        (**self).is_emoji_modifier(code_point)
    }

    fn is_emoji_modifier_base(&self, code_point: u32) -> bool {
        (**self).is_emoji_modifier_base(code_point)
    }

    fn is_variation_selector(&self, code_point: u32) -> bool {
        (**self).is_variation_selector(code_point)
    }

    fn is_virama(&self, code_point: u32) -> bool {
        (**self).is_virama(code_point)
    }

    fn is_other_letter(&self, code_point: u32) -> bool {
        (**self).is_other_letter(code_point)
    }

    fn is_starter(&self, code_point: u32) -> bool {
        (**self).is_starter(code_point)
    }

    fn is_regional_indicator(&self, code_point: u32) -> bool {
        (**self).is_regional_indicator(code_point)
    }
}

/// [`CharProperties`] backed by the ICU4X compiled Unicode data.
///
/// # Examples
///
/// ```rust
/// use grapheme_machines::{CharProperties, GraphemeClusterBreak, UnicodeProperties};
///
/// let props = UnicodeProperties;
/// assert_eq!(props.grapheme_cluster_break(0x0301), GraphemeClusterBreak::Extend);
/// assert!(props.is_emoji_modifier(0x1F3FB));
/// assert!(props.is_regional_indicator(0x1F1FA));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeProperties;

const GCB_CLASSES: [(IcuGraphemeClusterBreak, GraphemeClusterBreak); 13] = [
    (IcuGraphemeClusterBreak::Control, GraphemeClusterBreak::Control),
    (IcuGraphemeClusterBreak::CR, GraphemeClusterBreak::Cr),
    (IcuGraphemeClusterBreak::LF, GraphemeClusterBreak::Lf),
    (IcuGraphemeClusterBreak::Extend, GraphemeClusterBreak::Extend),
    (IcuGraphemeClusterBreak::ZWJ, GraphemeClusterBreak::Zwj),
    (
        IcuGraphemeClusterBreak::RegionalIndicator,
        GraphemeClusterBreak::RegionalIndicator,
    ),
    (IcuGraphemeClusterBreak::Prepend, GraphemeClusterBreak::Prepend),
    (
        IcuGraphemeClusterBreak::SpacingMark,
        GraphemeClusterBreak::SpacingMark,
    ),
    (IcuGraphemeClusterBreak::L, GraphemeClusterBreak::L),
    (IcuGraphemeClusterBreak::V, GraphemeClusterBreak::V),
    (IcuGraphemeClusterBreak::T, GraphemeClusterBreak::T),
    (IcuGraphemeClusterBreak::LV, GraphemeClusterBreak::Lv),
    (IcuGraphemeClusterBreak::LVT, GraphemeClusterBreak::Lvt),
];

impl CharProperties for UnicodeProperties {
    fn grapheme_cluster_break(&self, code_point: u32) -> GraphemeClusterBreak {
        let raw = maps::grapheme_cluster_break().get32(code_point);
        GCB_CLASSES
            .iter()
            .find(|(icu, _)| *icu == raw)
            .map_or(GraphemeClusterBreak::Other, |&(_, class)| class)
    }

    fn is_emoji(&self, code_point: u32) -> bool {
        sets::emoji().contains32(code_point)
    }

    fn is_emoji_modifier(&self, code_point: u32) -> bool {
        sets::emoji_modifier().contains32(code_point)
    }

    fn is_emoji_modifier_base(&self, code_point: u32) -> bool {
        sets::emoji_modifier_base().contains32(code_point)
    }

    fn is_variation_selector(&self, code_point: u32) -> bool {
        sets::variation_selector().contains32(code_point)
    }

    fn is_virama(&self, code_point: u32) -> bool {
        maps::canonical_combining_class().get32(code_point) == CanonicalCombiningClass::Virama
    }

    fn is_other_letter(&self, code_point: u32) -> bool {
        maps::general_category().get32(code_point) == GeneralCategory::OtherLetter
    }

    fn is_starter(&self, code_point: u32) -> bool {
        maps::canonical_combining_class().get32(code_point)
            == CanonicalCombiningClass::NotReordered
    }

    fn is_regional_indicator(&self, code_point: u32) -> bool {
        sets::regional_indicator().contains32(code_point)
    }
}

/// Keycap bases: the ASCII digits, `#` and `*`.
#[inline]
#[must_use]
pub fn is_keycap_base(code_point: u32) -> bool {
    matches!(code_point, 0x30..=0x39 | 0x23 | 0x2A)
}

/// The `E_Base_GAZ` code points of older Unicode versions (BOY, GIRL, MAN,
/// WOMAN), which take emoji modifiers and also start ZWJ sequences.
#[inline]
#[must_use]
pub fn is_e_base_gaz(code_point: u32) -> bool {
    (0x1F466..=0x1F469).contains(&code_point)
}

/// Tag characters that spell out an emoji tag sequence, U+E0020..=U+E007E.
#[inline]
#[must_use]
pub fn is_tag_spec_char(code_point: u32) -> bool {
    (0xE0020..=0xE007E).contains(&code_point)
}
