#![expect(missing_docs)]

use grapheme_machines::{
    BackspaceStateMachine, BackwardGraphemeBoundaryStateMachine, ContractViolation,
    ForwardGraphemeBoundaryStateMachine, MachineOptions, MachineState,
};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn lenient_misuse_is_logged_as_error() {
    let mut machine = ForwardGraphemeBoundaryStateMachine::with_options(MachineOptions::lenient());
    assert_eq!(
        machine.feed_following_code_unit(u16::from(b'a')),
        MachineState::Invalid
    );
    assert!(logs_contain("segmentation machine misuse"));
    assert!(logs_contain(
        "following code unit fed before the preceding text was closed"
    ));
    assert!(logs_contain("ForwardGraphemeBoundaryStateMachine"));
}

#[traced_test]
#[test]
fn backward_only_machines_log_following_input() {
    let mut backward =
        BackwardGraphemeBoundaryStateMachine::with_options(MachineOptions::lenient());
    let mut backspace = BackspaceStateMachine::with_options(MachineOptions::lenient());
    assert_eq!(backward.feed_following_code_unit(0x61), MachineState::Invalid);
    assert_eq!(backspace.feed_following_code_unit(0x61), MachineState::Invalid);
    assert_eq!(
        backspace.last_violation(),
        Some(ContractViolation::FollowingInputUnsupported(
            "BackspaceStateMachine"
        ))
    );
    assert!(logs_contain("BackwardGraphemeBoundaryStateMachine"));
    assert!(logs_contain("BackspaceStateMachine"));
}

#[traced_test]
#[test]
fn lone_surrogates_are_logged_at_debug() {
    let mut machine = BackwardGraphemeBoundaryStateMachine::with_options(MachineOptions::lenient());
    assert_eq!(machine.feed_preceding_code_unit(0xD800), MachineState::Finished);
    assert_eq!(machine.finalize_and_get_boundary_offset(), -1);
    assert!(logs_contain("lone lead surrogate at start"));
    assert!(!logs_contain("segmentation machine misuse"));
}

#[traced_test]
#[test]
fn finished_machines_trace_their_offset() {
    let mut machine = BackspaceStateMachine::new();
    machine.feed_preceding_code_unit(u16::from(b'\n'));
    machine.feed_preceding_code_unit(u16::from(b'\r'));
    assert_eq!(machine.finalize_and_get_boundary_offset(), -2);
    assert!(logs_contain("deletion length found"));
    assert!(logs_contain("code_units=2"));
}

#[test]
fn violations_display_the_machine_name() {
    let violation = ContractViolation::EndAfterFinished("BackspaceStateMachine");
    assert_eq!(
        violation.to_string(),
        "BackspaceStateMachine: end of preceding text signalled after the machine finished"
    );
    assert_eq!(violation.machine(), "BackspaceStateMachine");
}
