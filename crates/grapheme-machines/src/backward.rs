//! Backward grapheme boundary search.
//!
//! Fed the code units before the start offset in reverse document order,
//! the machine finds where the grapheme cluster that ends at the offset
//! begins.

use crate::{
    ContractViolation, MachineOptions, MachineState, SegmentationMachine,
    grapheme_break::is_grapheme_break_with,
    machine::reject,
    properties::{CharProperties, UnicodeProperties},
    utf16::{is_lead_surrogate, is_trail_surrogate, supplementary_code_point},
};

const MACHINE: &str = "BackwardGraphemeBoundaryStateMachine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackwardState {
    /// Initial state.
    Start,
    /// Waiting for the lead surrogate of the last code point.
    StartWaitLeadSurrogate { trail: u16 },
    /// Searching for the boundary before `next`.
    Search { next: u32 },
    /// Waiting for a lead surrogate while searching.
    SearchWaitLeadSurrogate { next: u32, trail: u16 },
    /// Counting the regional indicators preceding a regional indicator pair.
    /// `run` counts those before the code point the offset currently covers.
    CountRis { run: u32 },
    /// Waiting for a lead surrogate while counting regional indicators.
    CountRisWaitLeadSurrogate { run: u32, trail: u16 },
    Finished,
}

/// Finds the start of the grapheme cluster that ends at an offset.
///
/// The reported offset is `<= 0`, in code units, relative to the start
/// offset.
///
/// # Examples
///
/// ```rust
/// use grapheme_machines::{BackwardGraphemeBoundaryStateMachine, MachineState};
///
/// // U+1F1FA U+1F1F8, one flag.
/// let text: Vec<u16> = "\u{1F1FA}\u{1F1F8}".encode_utf16().collect();
/// let mut machine = BackwardGraphemeBoundaryStateMachine::new();
/// for &unit in text.iter().rev() {
///     if machine.feed_preceding_code_unit(unit) == MachineState::Finished {
///         break;
///     }
/// }
/// machine.tell_end_of_preceding_text();
/// assert_eq!(machine.finalize_and_get_boundary_offset(), -4);
/// ```
#[derive(Debug)]
pub struct BackwardGraphemeBoundaryStateMachine<P = UnicodeProperties> {
    props: P,
    options: MachineOptions,
    state: BackwardState,
    boundary_offset: i32,
    last_violation: Option<ContractViolation>,
}

impl Default for BackwardGraphemeBoundaryStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl BackwardGraphemeBoundaryStateMachine {
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

impl<P: CharProperties> BackwardGraphemeBoundaryStateMachine<P> {
    /// Creates a machine that classifies code points with `props`.
    #[must_use]
    pub fn with_properties(props: P, options: MachineOptions) -> Self {
        Self {
            props,
            options,
            state: BackwardState::Start,
            boundary_offset: 0,
            last_violation: None,
        }
    }

    /// Feeds the code unit before everything fed so far.
    pub fn feed_preceding_code_unit(&mut self, code_unit: u16) -> MachineState {
        match self.state {
            BackwardState::Start => {
                debug_assert_eq!(self.boundary_offset, 0);
                if is_trail_surrogate(code_unit) {
                    self.state = BackwardState::StartWaitLeadSurrogate { trail: code_unit };
                    return MachineState::NeedMoreInput;
                }
                if is_lead_surrogate(code_unit) {
                    tracing::debug!(code_unit, "lone lead surrogate at start");
                    self.boundary_offset = -1;
                    return self.finish();
                }
                self.boundary_offset = -1;
                self.state = BackwardState::Search {
                    next: u32::from(code_unit),
                };
                MachineState::NeedMoreInput
            }
            BackwardState::StartWaitLeadSurrogate { trail } => {
                if !is_lead_surrogate(code_unit) {
                    tracing::debug!(trail, "lone trail surrogate at start");
                    self.boundary_offset = -1;
                    return self.finish();
                }
                self.boundary_offset = -2;
                self.state = BackwardState::Search {
                    next: supplementary_code_point(code_unit, trail),
                };
                MachineState::NeedMoreInput
            }
            BackwardState::Search { next } => {
                if is_trail_surrogate(code_unit) {
                    self.state = BackwardState::SearchWaitLeadSurrogate {
                        next,
                        trail: code_unit,
                    };
                    return MachineState::NeedMoreInput;
                }
                if is_lead_surrogate(code_unit) {
                    return self.finish();
                }
                let prev = u32::from(code_unit);
                if is_grapheme_break_with(&self.props, prev, next) {
                    return self.finish();
                }
                self.boundary_offset -= 1;
                self.state = BackwardState::Search { next: prev };
                MachineState::NeedMoreInput
            }
            BackwardState::SearchWaitLeadSurrogate { next, trail } => {
                if !is_lead_surrogate(code_unit) {
                    return self.finish();
                }
                let prev = supplementary_code_point(code_unit, trail);
                if self.props.is_regional_indicator(prev) && self.props.is_regional_indicator(next)
                {
                    self.state = BackwardState::CountRis { run: 1 };
                    return MachineState::NeedMoreInput;
                }
                if is_grapheme_break_with(&self.props, prev, next) {
                    return self.finish();
                }
                self.boundary_offset -= 2;
                self.state = BackwardState::Search { next: prev };
                MachineState::NeedMoreInput
            }
            BackwardState::CountRis { run } => {
                if is_trail_surrogate(code_unit) {
                    self.state = BackwardState::CountRisWaitLeadSurrogate {
                        run,
                        trail: code_unit,
                    };
                    return MachineState::NeedMoreInput;
                }
                self.finish_ris_run(run)
            }
            BackwardState::CountRisWaitLeadSurrogate { run, trail } => {
                if is_lead_surrogate(code_unit)
                    && self
                        .props
                        .is_regional_indicator(supplementary_code_point(code_unit, trail))
                {
                    self.state = BackwardState::CountRis { run: run + 1 };
                    return MachineState::NeedMoreInput;
                }
                self.finish_ris_run(run)
            }
            BackwardState::Finished => self.reject(ContractViolation::FedAfterFinished(MACHINE)),
        }
    }

    /// Signals that the start of the text was reached.
    pub fn tell_end_of_preceding_text(&mut self) -> MachineState {
        match self.state {
            BackwardState::Start => {
                debug_assert_eq!(self.boundary_offset, 0);
                self.finish()
            }
            BackwardState::StartWaitLeadSurrogate { .. } => {
                self.boundary_offset = -1;
                self.finish()
            }
            BackwardState::Search { .. } | BackwardState::SearchWaitLeadSurrogate { .. } => {
                self.finish()
            }
            BackwardState::CountRis { run } | BackwardState::CountRisWaitLeadSurrogate { run, .. } => {
                self.finish_ris_run(run)
            }
            BackwardState::Finished => self.reject(ContractViolation::EndAfterFinished(MACHINE)),
        }
    }

    /// This machine only scans backward; always a contract violation.
    pub fn feed_following_code_unit(&mut self, _code_unit: u16) -> MachineState {
        self.reject(ContractViolation::FollowingInputUnsupported(MACHINE))
    }

    /// Returns the backward boundary offset, finishing the machine as if the
    /// start of the text was reached. Idempotent.
    pub fn finalize_and_get_boundary_offset(&mut self) -> i32 {
        if self.state != BackwardState::Finished {
            self.tell_end_of_preceding_text();
        }
        debug_assert!(self.boundary_offset <= 0);
        self.boundary_offset
    }

    /// Returns the machine to its initial state.
    pub fn reset(&mut self) {
        self.state = BackwardState::Start;
        self.boundary_offset = 0;
        self.last_violation = None;
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
        self.state == BackwardState::Finished
    }

    /// An odd run means the regional indicator at the current offset is the
    /// second half of a flag, so its first half joins the cluster.
    fn finish_ris_run(&mut self, run: u32) -> MachineState {
        debug_assert!(run > 0);
        if run % 2 != 0 {
            self.boundary_offset -= 2;
        }
        self.finish()
    }

    fn finish(&mut self) -> MachineState {
        debug_assert_ne!(self.state, BackwardState::Finished);
        tracing::trace!(machine = MACHINE, offset = self.boundary_offset, "boundary found");
        self.state = BackwardState::Finished;
        MachineState::Finished
    }

    fn reject(&mut self, violation: ContractViolation) -> MachineState {
        reject(&self.options, &mut self.last_violation, violation)
    }
}

impl<P: CharProperties> SegmentationMachine for BackwardGraphemeBoundaryStateMachine<P> {
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
