//! How much a single backspace keystroke deletes.
//!
//! This is an editing convention, not grapheme segmentation. Some rules
//! resemble the Unicode ones (CR LF, keycaps, emoji modifiers, ZWJ
//! sequences) but they are applied one keystroke at a time: a run of flags
//! loses one flag per keystroke, a modifier without a valid base is deleted
//! on its own, and so on. The ruleset is selected with [`BackspacePolicy`].

use crate::{
    BackspacePolicy, ContractViolation, MachineOptions, MachineState, SegmentationMachine,
    machine::reject,
    properties::{
        CANCEL_TAG, COMBINING_ENCLOSING_KEYCAP, CARRIAGE_RETURN, CharProperties, LINE_FEED,
        UnicodeProperties, ZERO_WIDTH_JOINER, is_e_base_gaz, is_keycap_base, is_tag_spec_char,
    },
    utf16::{code_unit_len, is_lead_surrogate, is_trail_surrogate, supplementary_code_point},
};

const MACHINE: &str = "BackspaceStateMachine";

/// Code units of a regional indicator symbol.
const RIS_CODE_UNITS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackspaceState {
    /// Initial state.
    Start,
    /// The offset is just before a line feed.
    BeforeLf,
    /// The offset is just before a keycap.
    BeforeKeycap,
    /// The offset is just before a variation selector and a keycap.
    BeforeVsAndKeycap,
    /// The offset is just before an emoji modifier.
    BeforeEmojiModifier,
    /// The offset is just before a variation selector and an emoji modifier.
    BeforeVsAndEmojiModifier,
    /// The offset is just before a variation selector.
    BeforeVs,
    /// The offset is just before an emoji that may end a ZWJ sequence.
    BeforeZwjEmoji,
    /// The offset is just before a ZWJ.
    BeforeZwj,
    /// The offset is just before a variation selector and a ZWJ.
    BeforeVsAndZwj,
    /// An odd number of regional indicators precede the caret.
    OddNumberedRis,
    /// An even number of regional indicators precede the caret.
    EvenNumberedRis,
    /// Inside an emoji tag sequence, after its CANCEL TAG.
    InTagSequence,
    Finished,
}

/// Computes how many code units one backspace keystroke deletes.
///
/// Fed the code units before the caret in reverse document order. The
/// reported offset is `-code_units_to_be_deleted`.
///
/// # Examples
///
/// ```rust
/// use grapheme_machines::{BackspaceStateMachine, MachineState};
///
/// // "0" + COMBINING ENCLOSING KEYCAP deletes together.
/// let mut machine = BackspaceStateMachine::new();
/// assert_eq!(machine.feed_preceding_code_unit(0x20E3), MachineState::NeedMoreInput);
/// assert_eq!(machine.feed_preceding_code_unit(u16::from(b'0')), MachineState::Finished);
/// assert_eq!(machine.finalize_and_get_boundary_offset(), -2);
/// ```
#[derive(Debug)]
pub struct BackspaceStateMachine<P = UnicodeProperties> {
    props: P,
    options: MachineOptions,
    state: BackspaceState,
    code_units_to_be_deleted: i32,
    trail_surrogate: Option<u16>,
    last_seen_vs_code_units: i32,
    last_violation: Option<ContractViolation>,
}

impl Default for BackspaceStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl BackspaceStateMachine {
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

impl<P: CharProperties> BackspaceStateMachine<P> {
    /// Creates a machine that classifies code points with `props`.
    #[must_use]
    pub fn with_properties(props: P, options: MachineOptions) -> Self {
        Self {
            props,
            options,
            state: BackspaceState::Start,
            code_units_to_be_deleted: 0,
            trail_surrogate: None,
            last_seen_vs_code_units: 0,
            last_violation: None,
        }
    }

    /// The ruleset this machine applies.
    #[must_use]
    pub fn policy(&self) -> BackspacePolicy {
        self.options.backspace_policy
    }

    /// Feeds the code unit before everything fed so far.
    #[allow(clippy::too_many_lines)]
    pub fn feed_preceding_code_unit(&mut self, code_unit: u16) -> MachineState {
        if self.state == BackspaceState::Finished {
            return self.reject(ContractViolation::FedAfterFinished(MACHINE));
        }

        let code_point = if is_lead_surrogate(code_unit) {
            let Some(trail) = self.trail_surrogate.take() else {
                tracing::debug!(code_unit, "unpaired lead surrogate");
                return self.finish_with_broken_surrogate();
            };
            supplementary_code_point(code_unit, trail)
        } else if is_trail_surrogate(code_unit) {
            if self.trail_surrogate.is_some() {
                tracing::debug!(code_unit, "unpaired trail surrogate");
                return self.finish_with_broken_surrogate();
            }
            self.trail_surrogate = Some(code_unit);
            return MachineState::NeedMoreInput;
        } else {
            if self.trail_surrogate.is_some() {
                tracing::debug!(code_unit, "unpaired trail surrogate");
                return self.finish_with_broken_surrogate();
            }
            u32::from(code_unit)
        };
        let len = code_unit_len(code_point);

        match self.state {
            BackspaceState::Start => {
                self.code_units_to_be_deleted = len;
                if code_point == LINE_FEED {
                    return self.move_to(BackspaceState::BeforeLf);
                }
                if self.props.is_variation_selector(code_point) {
                    return self.move_to(BackspaceState::BeforeVs);
                }
                if self.props.is_regional_indicator(code_point) {
                    return self.move_to(BackspaceState::OddNumberedRis);
                }
                if self.props.is_emoji_modifier(code_point) {
                    return self.move_to(BackspaceState::BeforeEmojiModifier);
                }
                if code_point == COMBINING_ENCLOSING_KEYCAP {
                    return self.move_to(BackspaceState::BeforeKeycap);
                }
                if self.props.is_emoji(code_point) {
                    return self.move_to(BackspaceState::BeforeZwjEmoji);
                }
                if code_point == CANCEL_TAG && self.policy().delete_tag_sequences {
                    return self.move_to(BackspaceState::InTagSequence);
                }
                self.finish()
            }
            BackspaceState::BeforeLf => {
                if code_point == CARRIAGE_RETURN {
                    self.code_units_to_be_deleted += 1;
                }
                self.finish()
            }
            BackspaceState::BeforeKeycap => {
                if self.props.is_variation_selector(code_point) {
                    debug_assert_eq!(self.last_seen_vs_code_units, 0);
                    self.last_seen_vs_code_units = len;
                    return self.move_to(BackspaceState::BeforeVsAndKeycap);
                }
                if is_keycap_base(code_point) {
                    self.code_units_to_be_deleted += len;
                }
                self.finish()
            }
            BackspaceState::BeforeVsAndKeycap => {
                if is_keycap_base(code_point) {
                    self.code_units_to_be_deleted += self.last_seen_vs_code_units + len;
                }
                self.finish()
            }
            BackspaceState::BeforeEmojiModifier => {
                if self.props.is_variation_selector(code_point) {
                    debug_assert_eq!(self.last_seen_vs_code_units, 0);
                    self.last_seen_vs_code_units = len;
                    return self.move_to(BackspaceState::BeforeVsAndEmojiModifier);
                }
                if self.is_emoji_modifier_base(code_point) {
                    self.code_units_to_be_deleted += len;
                    return self.move_to(BackspaceState::BeforeZwjEmoji);
                }
                self.finish()
            }
            BackspaceState::BeforeVsAndEmojiModifier => {
                if self.is_emoji_modifier_base(code_point) {
                    self.code_units_to_be_deleted += self.last_seen_vs_code_units + len;
                }
                self.finish()
            }
            BackspaceState::BeforeVs => {
                if self.props.is_emoji(code_point) {
                    self.code_units_to_be_deleted += len;
                    return self.move_to(BackspaceState::BeforeZwjEmoji);
                }
                if !self.props.is_variation_selector(code_point)
                    && self.props.is_starter(code_point)
                {
                    self.code_units_to_be_deleted += len;
                }
                self.finish()
            }
            BackspaceState::BeforeZwjEmoji => {
                if code_point == ZERO_WIDTH_JOINER {
                    return self.move_to(BackspaceState::BeforeZwj);
                }
                self.finish()
            }
            BackspaceState::BeforeZwj => {
                if self.props.is_emoji(code_point) {
                    // The emoji and the ZWJ after it.
                    self.code_units_to_be_deleted += len + 1;
                    return if self.props.is_emoji_modifier(code_point) {
                        self.move_to(BackspaceState::BeforeEmojiModifier)
                    } else {
                        self.move_to(BackspaceState::BeforeZwjEmoji)
                    };
                }
                if self.props.is_variation_selector(code_point) {
                    debug_assert_eq!(self.last_seen_vs_code_units, 0);
                    self.last_seen_vs_code_units = len;
                    return self.move_to(BackspaceState::BeforeVsAndZwj);
                }
                self.finish()
            }
            BackspaceState::BeforeVsAndZwj => {
                if self.props.is_emoji(code_point) {
                    self.code_units_to_be_deleted += len + 1 + self.last_seen_vs_code_units;
                    self.last_seen_vs_code_units = 0;
                    return self.move_to(BackspaceState::BeforeZwjEmoji);
                }
                self.finish()
            }
            BackspaceState::OddNumberedRis => {
                if !self.props.is_regional_indicator(code_point) {
                    return self.finish();
                }
                self.code_units_to_be_deleted += RIS_CODE_UNITS;
                self.move_to(BackspaceState::EvenNumberedRis)
            }
            BackspaceState::EvenNumberedRis => {
                if !self.props.is_regional_indicator(code_point) {
                    return self.finish();
                }
                self.code_units_to_be_deleted -= RIS_CODE_UNITS;
                self.move_to(BackspaceState::OddNumberedRis)
            }
            BackspaceState::InTagSequence => {
                if is_tag_spec_char(code_point) {
                    self.code_units_to_be_deleted += len;
                    return MachineState::NeedMoreInput;
                }
                if self.props.is_emoji(code_point) {
                    self.code_units_to_be_deleted += len;
                } else {
                    self.drop_incomplete_tag_sequence();
                }
                self.finish()
            }
            BackspaceState::Finished => self.reject(ContractViolation::FedAfterFinished(MACHINE)),
        }
    }

    /// Signals that the start of the text was reached.
    pub fn tell_end_of_preceding_text(&mut self) -> MachineState {
        if self.state == BackspaceState::Finished {
            return self.reject(ContractViolation::EndAfterFinished(MACHINE));
        }
        self.finish_at_end_of_text()
    }

    /// This machine only scans backward; always a contract violation.
    pub fn feed_following_code_unit(&mut self, _code_unit: u16) -> MachineState {
        self.reject(ContractViolation::FollowingInputUnsupported(MACHINE))
    }

    /// Returns `-code_units_to_be_deleted`, finishing the machine as if the
    /// start of the text was reached. Idempotent.
    pub fn finalize_and_get_boundary_offset(&mut self) -> i32 {
        if self.state != BackspaceState::Finished {
            self.finish_at_end_of_text();
        }
        debug_assert!(self.code_units_to_be_deleted >= 0);
        -self.code_units_to_be_deleted
    }

    /// Returns the machine to its initial state.
    pub fn reset(&mut self) {
        self.state = BackspaceState::Start;
        self.code_units_to_be_deleted = 0;
        self.trail_surrogate = None;
        self.last_seen_vs_code_units = 0;
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
        self.state == BackspaceState::Finished
    }

    fn is_emoji_modifier_base(&self, code_point: u32) -> bool {
        self.props.is_emoji_modifier_base(code_point) || is_e_base_gaz(code_point)
    }

    fn finish_at_end_of_text(&mut self) -> MachineState {
        if self.trail_surrogate.is_some() {
            tracing::debug!("unpaired trail surrogate at start of text");
            return self.finish_with_broken_surrogate();
        }
        if self.state == BackspaceState::InTagSequence {
            self.drop_incomplete_tag_sequence();
        }
        self.finish()
    }

    /// A broken surrogate right before the caret is deleted on its own; one
    /// found further back just ends the scan.
    fn finish_with_broken_surrogate(&mut self) -> MachineState {
        self.trail_surrogate = None;
        match self.state {
            BackspaceState::Start => self.code_units_to_be_deleted = 1,
            BackspaceState::InTagSequence => self.drop_incomplete_tag_sequence(),
            _ => {}
        }
        self.finish()
    }

    /// Without a tag base only the CANCEL TAG goes.
    fn drop_incomplete_tag_sequence(&mut self) {
        self.code_units_to_be_deleted = code_unit_len(CANCEL_TAG);
    }

    fn move_to(&mut self, next: BackspaceState) -> MachineState {
        debug_assert_ne!(next, BackspaceState::Finished, "use finish()");
        debug_assert_ne!(next, self.state);
        self.state = next;
        MachineState::NeedMoreInput
    }

    fn finish(&mut self) -> MachineState {
        debug_assert_ne!(self.state, BackspaceState::Finished);
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(
            self.code_units_to_be_deleted >= 0,
            "Internal error: negative deletion length {}",
            self.code_units_to_be_deleted
        );
        tracing::trace!(
            machine = MACHINE,
            code_units = self.code_units_to_be_deleted,
            "deletion length found"
        );
        self.state = BackspaceState::Finished;
        self.last_seen_vs_code_units = 0;
        MachineState::Finished
    }

    fn reject(&mut self, violation: ContractViolation) -> MachineState {
        reject(&self.options, &mut self.last_violation, violation)
    }
}

impl<P: CharProperties> SegmentationMachine for BackspaceStateMachine<P> {
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
