use crate::{ContractViolation, MachineOptions, MachineState};

/// The feed protocol shared by all segmentation machines.
///
/// Callers feed preceding code units in reverse document order starting
/// next to the offset, signal the start of the text with
/// [`tell_end_of_preceding_text`](Self::tell_end_of_preceding_text), and (for
/// the forward machine) continue with following code units in document order
/// once [`MachineState::NeedFollowingInput`] was returned. The result is read
/// with [`finalize_and_get_boundary_offset`](Self::finalize_and_get_boundary_offset)
/// whether or not the machine reported [`MachineState::Finished`].
///
/// The [`boundary`](crate::boundary) drivers run this protocol over a whole
/// buffer for any implementor.
pub trait SegmentationMachine {
    /// Feeds the code unit just before everything fed so far.
    fn feed_preceding_code_unit(&mut self, code_unit: u16) -> MachineState;

    /// Feeds the code unit just after everything fed so far.
    fn feed_following_code_unit(&mut self, code_unit: u16) -> MachineState;

    /// Signals that the start of the text was reached.
    fn tell_end_of_preceding_text(&mut self) -> MachineState;

    /// Finishes the machine if needed and returns the boundary offset in code
    /// units relative to the starting position. Idempotent.
    fn finalize_and_get_boundary_offset(&mut self) -> i32;

    /// Returns the machine to its initial state.
    fn reset(&mut self);
}

/// Records, logs and (optionally) panics on a protocol violation.
///
/// The caller must not change its state after a rejection so that a lenient
/// machine stays usable for `finalize_and_get_boundary_offset`.
pub(crate) fn reject(
    options: &MachineOptions,
    last_violation: &mut Option<ContractViolation>,
    violation: ContractViolation,
) -> MachineState {
    tracing::error!(machine = violation.machine(), %violation, "segmentation machine misuse");
    *last_violation = Some(violation);
    assert!(!options.panic_on_misuse, "{violation}");
    MachineState::Invalid
}
