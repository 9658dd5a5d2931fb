use std::{string::String, vec::Vec};

use crate::{
    BackspacePolicy, BackspaceStateMachine, BackwardGraphemeBoundaryStateMachine, CharProperties,
    ForwardGraphemeBoundaryStateMachine, GraphemeClusterBreak, MachineOptions,
    boundary::{find_backward_boundary, find_forward_boundary},
};

pub(crate) fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

pub(crate) fn lenient() -> MachineOptions {
    MachineOptions::lenient()
}

pub(crate) fn strict() -> MachineOptions {
    MachineOptions {
        panic_on_misuse: true,
        ..MachineOptions::default()
    }
}

pub(crate) fn forward_offset(preceding: &[u16], following: &[u16]) -> i32 {
    let mut machine = ForwardGraphemeBoundaryStateMachine::with_options(strict());
    find_forward_boundary(&mut machine, preceding, following)
}

pub(crate) fn backward_offset(preceding: &[u16]) -> i32 {
    let mut machine = BackwardGraphemeBoundaryStateMachine::with_options(strict());
    find_backward_boundary(&mut machine, preceding)
}

pub(crate) fn backspace_offset_with(policy: BackspacePolicy, preceding: &[u16]) -> i32 {
    let mut machine = BackspaceStateMachine::with_options(MachineOptions {
        backspace_policy: policy,
        ..strict()
    });
    find_backward_boundary(&mut machine, preceding)
}

pub(crate) fn backspace_offset(preceding: &[u16]) -> i32 {
    backspace_offset_with(BackspacePolicy::default(), preceding)
}

/// Presses backspace once at the end of `input` and checks what is left.
#[track_caller]
pub(crate) fn assert_delete_backwards_with(policy: BackspacePolicy, input: &str, target: &str) {
    let units = utf16(input);
    let deleted = usize::try_from(-backspace_offset_with(policy, &units)).unwrap();
    let remaining = String::from_utf16_lossy(&units[..units.len() - deleted]);
    assert_eq!(
        remaining, target,
        "backspacing {input:?} left {remaining:?}, expected {target:?}"
    );
}

#[track_caller]
pub(crate) fn assert_delete_backwards(input: &str, target: &str) {
    assert_delete_backwards_with(BackspacePolicy::default(), input, target);
}

/// Presses backspace repeatedly, checking each intermediate text.
#[track_caller]
pub(crate) fn assert_delete_backwards_seq(targets: &[&str]) {
    assert!(targets.len() >= 2, "need at least one keystroke");
    for pair in targets.windows(2) {
        assert_delete_backwards(pair[0], pair[1]);
    }
}

/// Minimal property table where every code point is `Other` unless listed.
///
/// Lets tests exercise rules that the current Unicode data makes
/// unreachable, such as a non-`Extend` emoji modifier.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TableProperties {
    pub(crate) modifiers: &'static [u32],
    pub(crate) modifier_bases: &'static [u32],
    pub(crate) emoji: &'static [u32],
}

impl CharProperties for TableProperties {
    fn grapheme_cluster_break(&self, code_point: u32) -> GraphemeClusterBreak {
        match code_point {
            0x0D => GraphemeClusterBreak::Cr,
            0x0A => GraphemeClusterBreak::Lf,
            0x200D => GraphemeClusterBreak::Zwj,
            _ => GraphemeClusterBreak::Other,
        }
    }

    fn is_emoji(&self, code_point: u32) -> bool {
        self.emoji.contains(&code_point)
    }

    fn is_emoji_modifier(&self, code_point: u32) -> bool {
        self.modifiers.contains(&code_point)
    }

    fn is_emoji_modifier_base(&self, code_point: u32) -> bool {
        self.modifier_bases.contains(&code_point)
    }

    fn is_variation_selector(&self, _code_point: u32) -> bool {
        false
    }

    fn is_virama(&self, _code_point: u32) -> bool {
        false
    }

    fn is_other_letter(&self, _code_point: u32) -> bool {
        false
    }

    fn is_starter(&self, _code_point: u32) -> bool {
        true
    }
}
