//! Drivers that run a segmentation machine over an in-memory UTF-16 buffer.
//!
//! The machines themselves never see a buffer; these helpers play the part
//! of the editing layer that walks one and feeds code units in the right
//! direction. Offsets here are absolute indices into the buffer.
//!
//! # Examples
//!
//! ```rust
//! use grapheme_machines::boundary::{grapheme_cluster_ranges, next_grapheme_boundary};
//!
//! let text: Vec<u16> = "a\r\n\u{1F469}\u{1F3FB}".encode_utf16().collect();
//! assert_eq!(next_grapheme_boundary(&text, 1), 3);
//! let clusters: Vec<_> = grapheme_cluster_ranges(&text).collect();
//! assert_eq!(clusters, vec![0..1, 1..3, 3..7]);
//! ```

use core::{iter::FusedIterator, ops::Range};

use crate::{
    BackspaceStateMachine, BackwardGraphemeBoundaryStateMachine,
    ForwardGraphemeBoundaryStateMachine, MachineState, SegmentationMachine,
};

/// Runs a forward machine: `preceding` is the text before the start offset
/// and `following` the text after it, both in document order.
///
/// Returns the machine's finalized offset.
pub fn find_forward_boundary<M: SegmentationMachine + ?Sized>(
    machine: &mut M,
    preceding: &[u16],
    following: &[u16],
) -> i32 {
    let mut state = MachineState::NeedMoreInput;
    for &unit in preceding.iter().rev() {
        state = machine.feed_preceding_code_unit(unit);
        if state != MachineState::NeedMoreInput {
            break;
        }
    }
    if state == MachineState::NeedMoreInput {
        state = machine.tell_end_of_preceding_text();
    }
    if state == MachineState::NeedFollowingInput {
        for &unit in following {
            if machine.feed_following_code_unit(unit) != MachineState::NeedMoreInput {
                break;
            }
        }
    }
    machine.finalize_and_get_boundary_offset()
}

/// Runs a backward-scanning machine over `preceding`, the text before the
/// start offset in document order.
///
/// Returns the machine's finalized offset.
pub fn find_backward_boundary<M: SegmentationMachine + ?Sized>(
    machine: &mut M,
    preceding: &[u16],
) -> i32 {
    for &unit in preceding.iter().rev() {
        if machine.feed_preceding_code_unit(unit) != MachineState::NeedMoreInput {
            return machine.finalize_and_get_boundary_offset();
        }
    }
    machine.tell_end_of_preceding_text();
    machine.finalize_and_get_boundary_offset()
}

/// The end of the grapheme cluster starting at `offset`.
///
/// Returns `offset` itself when `offset == text.len()`.
///
/// # Panics
///
/// Panics if `offset > text.len()`.
#[must_use]
pub fn next_grapheme_boundary(text: &[u16], offset: usize) -> usize {
    let (preceding, following) = text.split_at(offset);
    let mut machine = ForwardGraphemeBoundaryStateMachine::new();
    offset + magnitude(find_forward_boundary(&mut machine, preceding, following))
}

/// The start of the grapheme cluster ending at `offset`.
///
/// Returns `0` when `offset == 0`.
///
/// # Panics
///
/// Panics if `offset > text.len()`.
#[must_use]
pub fn previous_grapheme_boundary(text: &[u16], offset: usize) -> usize {
    let mut machine = BackwardGraphemeBoundaryStateMachine::new();
    offset - magnitude(find_backward_boundary(&mut machine, &text[..offset]))
}

/// Where the text left of `caret` should be cut when backspace is pressed:
/// `text[result..caret]` is what one keystroke deletes.
///
/// # Panics
///
/// Panics if `caret > text.len()`.
#[must_use]
pub fn backspace_deletion_start(text: &[u16], caret: usize) -> usize {
    backspace_deletion_start_with(&mut BackspaceStateMachine::new(), text, caret)
}

/// [`backspace_deletion_start`] with a caller-configured machine, e.g. one
/// using a different [`BackspacePolicy`](crate::BackspacePolicy).
///
/// The machine is reset before use.
///
/// # Panics
///
/// Panics if `caret > text.len()`.
pub fn backspace_deletion_start_with<M: SegmentationMachine + ?Sized>(
    machine: &mut M,
    text: &[u16],
    caret: usize,
) -> usize {
    machine.reset();
    caret - magnitude(find_backward_boundary(machine, &text[..caret]))
}

/// Iterates over the grapheme clusters of `text` as code unit ranges.
#[must_use]
pub fn grapheme_cluster_ranges(text: &[u16]) -> GraphemeClusterRanges<'_> {
    GraphemeClusterRanges {
        text,
        position: 0,
        machine: ForwardGraphemeBoundaryStateMachine::new(),
    }
}

/// Iterator returned by [`grapheme_cluster_ranges`].
///
/// Reuses a single forward machine, resetting it between clusters.
#[derive(Debug)]
pub struct GraphemeClusterRanges<'a> {
    text: &'a [u16],
    position: usize,
    machine: ForwardGraphemeBoundaryStateMachine,
}

impl Iterator for GraphemeClusterRanges<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        self.machine.reset();
        let (preceding, following) = self.text.split_at(self.position);
        let length = magnitude(find_forward_boundary(&mut self.machine, preceding, following));
        let start = self.position;
        self.position = (start + length.max(1)).min(self.text.len());
        Some(start..self.position)
    }
}

impl FusedIterator for GraphemeClusterRanges<'_> {}

fn magnitude(offset: i32) -> usize {
    usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX)
}
