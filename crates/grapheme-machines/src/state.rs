use core::fmt;

/// The answer a segmentation machine gives after every feed call.
///
/// # Examples
///
/// ```rust
/// use grapheme_machines::{BackwardGraphemeBoundaryStateMachine, MachineState};
///
/// let mut machine = BackwardGraphemeBoundaryStateMachine::new();
/// assert_eq!(machine.feed_preceding_code_unit(u16::from(b'a')), MachineState::NeedMoreInput);
/// assert_eq!(machine.feed_preceding_code_unit(u16::from(b' ')), MachineState::Finished);
/// assert_eq!(machine.finalize_and_get_boundary_offset(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub enum MachineState {
    /// Feed another code unit in the current direction.
    NeedMoreInput,
    /// The forward machine is done with the preceding text; feed the code
    /// units that follow the start offset.
    NeedFollowingInput,
    /// A boundary was found. Read it with `finalize_and_get_boundary_offset`.
    Finished,
    /// The call broke the feed protocol. Callers should treat this as an
    /// assertion failure.
    Invalid,
}

impl MachineState {
    /// Returns `true` when the caller should stop feeding.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Invalid)
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NeedMoreInput => "NeedMoreInput",
            Self::NeedFollowingInput => "NeedFollowingInput",
            Self::Finished => "Finished",
            Self::Invalid => "Invalid",
        })
    }
}
