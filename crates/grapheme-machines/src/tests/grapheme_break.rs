use rstest::rstest;

use super::utils::TableProperties;
use crate::{is_grapheme_break, is_grapheme_break_with};

#[rstest]
#[case::cr_lf(0x000D, 0x000A, false)]
#[case::lf_cr(0x000A, 0x000D, true)]
#[case::after_cr(0x000D, 0x0061, true)]
#[case::before_cr(0x0061, 0x000D, true)]
#[case::after_control(0x0007, 0x0301, true)]
#[case::before_control(0x0061, 0x0007, true)]
#[case::hangul_l_l(0x1100, 0x1100, false)]
#[case::hangul_l_v(0x1100, 0x1161, false)]
#[case::hangul_l_lv(0x1100, 0xAC00, false)]
#[case::hangul_l_lvt(0x1100, 0xAC01, false)]
#[case::hangul_lv_t(0xAC00, 0x11A8, false)]
#[case::hangul_v_v(0x1161, 0x1161, false)]
#[case::hangul_lvt_t(0xAC01, 0x11A8, false)]
#[case::hangul_t_t(0x11A8, 0x11A8, false)]
#[case::hangul_t_v(0x11A8, 0x1161, true)]
#[case::hangul_lvt_v(0xAC01, 0x1161, true)]
#[case::extend(0x0061, 0x0301, false)]
#[case::zwj(0x0061, 0x200D, false)]
#[case::spacing_mark(0x0915, 0x0903, false)]
#[case::prepend(0x0600, 0x0661, false)]
#[case::virama_letter(0x094D, 0x0937, false)]
#[case::virama_digit(0x094D, 0x0967, true)]
#[case::modifier_base(0x1F466, 0x1F3FB, false)]
#[case::zwj_emoji(0x200D, 0x1F5E8, false)]
#[case::zwj_letter(0x200D, 0x0061, true)]
#[case::letters(0x0061, 0x0062, true)]
#[case::emoji_emoji(0x1F441, 0x1F5E8, true)]
#[case::regional_indicator_then_letter(0x1F1FA, 0x0061, true)]
fn unicode_data_rules(#[case] prev: u32, #[case] next: u32, #[case] expected: bool) {
    assert_eq!(
        is_grapheme_break(prev, next),
        expected,
        "U+{prev:04X} U+{next:04X}"
    );
}

#[test]
fn cr_lf_wins_over_control_rules() {
    // CR and LF are both classed as controls for GB4/GB5; GB3 comes first.
    assert!(!is_grapheme_break(0x000D, 0x000A));
    assert!(is_grapheme_break(0x000A, 0x000A));
    assert!(is_grapheme_break(0x000D, 0x000D));
}

#[test]
fn controls_break_before_extenders() {
    // GB4 beats GB9.
    assert!(is_grapheme_break(0x000A, 0x0301));
    assert!(is_grapheme_break(0x000A, 0x200D));
}

#[test]
fn unknown_properties_break() {
    let props = TableProperties::default();
    assert!(is_grapheme_break_with(&props, 0x0061, 0x0301));
    assert!(is_grapheme_break_with(&props, 0x10FFFF, 0x0061));
    assert!(!is_grapheme_break_with(&props, 0x000D, 0x000A));
}

#[test]
fn modifier_after_e_base_gaz() {
    const MODIFIER: u32 = 0x1F3FB;
    let props = TableProperties {
        modifiers: &[MODIFIER],
        ..TableProperties::default()
    };
    for base in 0x1F466..=0x1F469 {
        assert!(!is_grapheme_break_with(&props, base, MODIFIER));
    }
    assert!(is_grapheme_break_with(&props, 0x1F46A, MODIFIER));
    assert!(is_grapheme_break_with(&props, 0x0061, MODIFIER));
}

#[test]
fn modifier_after_declared_base() {
    let props = TableProperties {
        modifiers: &[0x1F3FC],
        modifier_bases: &[0x270B],
        ..TableProperties::default()
    };
    assert!(!is_grapheme_break_with(&props, 0x270B, 0x1F3FC));
    assert!(is_grapheme_break_with(&props, 0x270C, 0x1F3FC));
}

#[test]
fn zwj_joins_only_emoji() {
    let props = TableProperties {
        emoji: &[0x2764],
        ..TableProperties::default()
    };
    assert!(!is_grapheme_break_with(&props, 0x200D, 0x2764));
    assert!(is_grapheme_break_with(&props, 0x200D, 0x2765));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "regional indicator pairs must be resolved by the caller")]
fn regional_indicator_pair_is_a_caller_error() {
    let _ = is_grapheme_break(0x1F1FA, 0x1F1F8);
}
