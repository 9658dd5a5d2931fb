//! Forward grapheme boundary search.
//!
//! The machine runs in two phases. First it is fed the code units *before*
//! the start offset, walking backward, but only to count the regional
//! indicators that immediately precede it. Then it is fed the code units
//! *after* the start offset in document order and finds where the grapheme
//! cluster that starts at the offset ends.

use crate::{
    ContractViolation, MachineOptions, MachineState, SegmentationMachine,
    grapheme_break::is_grapheme_break_with,
    machine::reject,
    properties::{CharProperties, UnicodeProperties},
    utf16::{is_lead_surrogate, is_trail_surrogate, supplementary_code_point},
};

const MACHINE: &str = "ForwardGraphemeBoundaryStateMachine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ForwardState {
    /// Counting preceding regional indicators. Initial state.
    CountRis,
    /// Waiting for the lead surrogate while counting regional indicators.
    CountRisWaitLeadSurrogate { trail: u16 },
    /// Waiting for the first following code unit.
    StartForward,
    /// Waiting for the trail surrogate of the first following code point.
    StartForwardWaitTrailSurrogate { lead: u16 },
    /// Searching for the boundary after `prev`.
    Search { prev: u32 },
    /// Waiting for a trail surrogate while searching.
    SearchWaitTrailSurrogate { prev: u32, lead: u16 },
    Finished,
}

/// Finds the end of the grapheme cluster that starts at an offset.
///
/// The reported offset is `>= 0`, in code units, relative to the start
/// offset.
///
/// # Examples
///
/// ```rust
/// use grapheme_machines::{ForwardGraphemeBoundaryStateMachine, MachineState};
///
/// let flags: Vec<u16> = "\u{1F1FA}\u{1F1F8}\u{1F1EF}\u{1F1F5}".encode_utf16().collect();
///
/// // Start between the two flags: the preceding text holds two regional
/// // indicators, so the next two pair up.
/// let (before, after) = flags.split_at(4);
/// let mut machine = ForwardGraphemeBoundaryStateMachine::new();
/// for &unit in before.iter().rev() {
///     if machine.feed_preceding_code_unit(unit) != MachineState::NeedMoreInput {
///         break;
///     }
/// }
/// machine.tell_end_of_preceding_text();
/// for &unit in after {
///     if machine.feed_following_code_unit(unit) == MachineState::Finished {
///         break;
///     }
/// }
/// assert_eq!(machine.finalize_and_get_boundary_offset(), 4);
/// ```
#[derive(Debug)]
pub struct ForwardGraphemeBoundaryStateMachine<P = UnicodeProperties> {
    props: P,
    options: MachineOptions,
    state: ForwardState,
    preceding_ris_count: u32,
    boundary_offset: i32,
    last_violation: Option<ContractViolation>,
}

impl Default for ForwardGraphemeBoundaryStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardGraphemeBoundaryStateMachine {
    /// Creates a machine using the default Unicode data and options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(MachineOptions::default())
    }

    /// Creates a machine using the default Unicode data.
    #[must_use]
    pub fn with_options(options: MachineOptions) -> Self {
        Self::with_properties(UnicodeProperties, options)
    }
}

impl<P: CharProperties> ForwardGraphemeBoundaryStateMachine<P> {
    /// Creates a machine that classifies code points with `props`.
    #[must_use]
    pub fn with_properties(props: P, options: MachineOptions) -> Self {
        Self {
            props,
            options,
            state: ForwardState::CountRis,
            preceding_ris_count: 0,
            boundary_offset: 0,
            last_violation: None,
        }
    }

    /// Feeds the code unit before everything fed so far.
    ///
    /// Only valid while counting preceding regional indicators, i.e. until
    /// [`MachineState::NeedFollowingInput`] has been returned.
    pub fn feed_preceding_code_unit(&mut self, code_unit: u16) -> MachineState {
        match self.state {
            ForwardState::CountRis => {
                if is_trail_surrogate(code_unit) {
                    self.state = ForwardState::CountRisWaitLeadSurrogate { trail: code_unit };
                    return MachineState::NeedMoreInput;
                }
                self.start_forward()
            }
            ForwardState::CountRisWaitLeadSurrogate { trail } => {
                if is_lead_surrogate(code_unit) {
                    let code_point = supplementary_code_point(code_unit, trail);
                    if self.props.is_regional_indicator(code_point) {
                        self.preceding_ris_count += 1;
                        self.state = ForwardState::CountRis;
                        return MachineState::NeedMoreInput;
                    }
                }
                self.start_forward()
            }
            ForwardState::StartForward
            | ForwardState::StartForwardWaitTrailSurrogate { .. }
            | ForwardState::Search { .. }
            | ForwardState::SearchWaitTrailSurrogate { .. } => self.reject(
                ContractViolation::PrecedingDuringFollowingPhase(MACHINE),
            ),
            ForwardState::Finished => self.reject(ContractViolation::FedAfterFinished(MACHINE)),
        }
    }

    /// Signals that there is no more preceding text.
    ///
    /// Moves the machine to the following phase. Calling it again before any
    /// following code unit was fed is harmless.
    pub fn tell_end_of_preceding_text(&mut self) -> MachineState {
        match self.state {
            ForwardState::CountRis
            | ForwardState::CountRisWaitLeadSurrogate { .. }
            | ForwardState::StartForward => self.start_forward(),
            ForwardState::StartForwardWaitTrailSurrogate { .. }
            | ForwardState::Search { .. }
            | ForwardState::SearchWaitTrailSurrogate { .. } => self.reject(
                ContractViolation::EndOfPrecedingDuringFollowingPhase(MACHINE),
            ),
            ForwardState::Finished => self.reject(ContractViolation::EndAfterFinished(MACHINE)),
        }
    }

    /// Feeds the code unit after everything fed so far.
    pub fn feed_following_code_unit(&mut self, code_unit: u16) -> MachineState {
        match self.state {
            ForwardState::CountRis | ForwardState::CountRisWaitLeadSurrogate { .. } => self
                .reject(ContractViolation::FollowingDuringPrecedingPhase(MACHINE)),
            ForwardState::StartForward => {
                debug_assert_eq!(self.boundary_offset, 0);
                if is_trail_surrogate(code_unit) {
                    tracing::debug!(code_unit, "lone trail surrogate at start");
                    self.boundary_offset = 1;
                    return self.finish();
                }
                if is_lead_surrogate(code_unit) {
                    self.state = ForwardState::StartForwardWaitTrailSurrogate { lead: code_unit };
                    return MachineState::NeedMoreInput;
                }
                self.boundary_offset = 1;
                self.state = ForwardState::Search {
                    prev: u32::from(code_unit),
                };
                MachineState::NeedMoreInput
            }
            ForwardState::StartForwardWaitTrailSurrogate { lead } => {
                if !is_trail_surrogate(code_unit) {
                    tracing::debug!(lead, "lone lead surrogate at start");
                    self.boundary_offset = 1;
                    return self.finish();
                }
                self.boundary_offset = 2;
                self.state = ForwardState::Search {
                    prev: supplementary_code_point(lead, code_unit),
                };
                MachineState::NeedMoreInput
            }
            ForwardState::Search { prev } => {
                if is_lead_surrogate(code_unit) {
                    self.state = ForwardState::SearchWaitTrailSurrogate {
                        prev,
                        lead: code_unit,
                    };
                    return MachineState::NeedMoreInput;
                }
                if is_trail_surrogate(code_unit) {
                    return self.finish();
                }
                let next = u32::from(code_unit);
                if is_grapheme_break_with(&self.props, prev, next) {
                    return self.finish();
                }
                self.boundary_offset += 1;
                self.state = ForwardState::Search { prev: next };
                MachineState::NeedMoreInput
            }
            ForwardState::SearchWaitTrailSurrogate { prev, lead } => {
                if !is_trail_surrogate(code_unit) {
                    return self.finish();
                }
                let next = supplementary_code_point(lead, code_unit);
                if self.props.is_regional_indicator(prev) && self.props.is_regional_indicator(next)
                {
                    // `prev` pairs with `next` only if an even number of
                    // regional indicators come before `prev`.
                    if self.preceding_ris_count % 2 == 0 {
                        self.boundary_offset += 2;
                    }
                    return self.finish();
                }
                if is_grapheme_break_with(&self.props, prev, next) {
                    return self.finish();
                }
                self.boundary_offset += 2;
                self.state = ForwardState::Search { prev: next };
                MachineState::NeedMoreInput
            }
            ForwardState::Finished => self.reject(ContractViolation::FedAfterFinished(MACHINE)),
        }
    }

    /// Returns the forward boundary offset, finishing the machine as if the
    /// text ended here. Idempotent.
    pub fn finalize_and_get_boundary_offset(&mut self) -> i32 {
        match self.state {
            ForwardState::Finished => {}
            ForwardState::StartForwardWaitTrailSurrogate { .. } => {
                // Lone lead surrogate at the end of the text.
                self.boundary_offset = 1;
                self.finish();
            }
            ForwardState::CountRis
            | ForwardState::CountRisWaitLeadSurrogate { .. }
            | ForwardState::StartForward
            | ForwardState::Search { .. }
            | ForwardState::SearchWaitTrailSurrogate { .. } => {
                self.finish();
            }
        }
        debug_assert!(self.boundary_offset >= 0);
        self.boundary_offset
    }

    /// Returns the machine to its initial state.
    pub fn reset(&mut self) {
        self.state = ForwardState::CountRis;
        self.preceding_ris_count = 0;
        self.boundary_offset = 0;
        self.last_violation = None;
    }

    /// Number of regional indicators counted in the preceding text.
    #[must_use]
    pub fn preceding_regional_indicator_count(&self) -> u32 {
        self.preceding_ris_count
    }

    /// The most recent protocol violation, if any, since construction or the
    /// last [`reset`](Self::reset).
    #[must_use]
    pub fn last_violation(&self) -> Option<ContractViolation> {
        self.last_violation
    }

    /// `true` once the machine has reported [`MachineState::Finished`] or
    /// was finalized.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == ForwardState::Finished
    }

    fn start_forward(&mut self) -> MachineState {
        self.state = ForwardState::StartForward;
        MachineState::NeedFollowingInput
    }

    fn finish(&mut self) -> MachineState {
        debug_assert_ne!(self.state, ForwardState::Finished);
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(
            self.boundary_offset >= 0,
            "Internal error: negative forward offset {}",
            self.boundary_offset
        );
        tracing::trace!(
            machine = MACHINE,
            offset = self.boundary_offset,
            preceding_ris = self.preceding_ris_count,
            "boundary found"
        );
        self.state = ForwardState::Finished;
        MachineState::Finished
    }

    fn reject(&mut self, violation: ContractViolation) -> MachineState {
        reject(&self.options, &mut self.last_violation, violation)
    }
}

impl<P: CharProperties> SegmentationMachine for ForwardGraphemeBoundaryStateMachine<P> {
    fn feed_preceding_code_unit(&mut self, code_unit: u16) -> MachineState {
        Self::feed_preceding_code_unit(self, code_unit)
    }

    fn feed_following_code_unit(&mut self, code_unit: u16) -> MachineState {
        Self::feed_following_code_unit(self, code_unit)
    }

    fn tell_end_of_preceding_text(&mut self) -> MachineState {
        Self::tell_end_of_preceding_text(self)
    }

    fn finalize_and_get_boundary_offset(&mut self) -> i32 {
        Self::finalize_and_get_boundary_offset(self)
    }

    fn reset(&mut self) {
        Self::reset(self);
    }
}
