#![expect(missing_docs)]

use grapheme_machines::{BackspacePolicy, MachineOptions, MachineState};

#[test]
fn options_round_trip_through_json() {
    let options = MachineOptions {
        panic_on_misuse: false,
        backspace_policy: BackspacePolicy::CLASSIC,
    };
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(
        json,
        r#"{"panic_on_misuse":false,"backspace_policy":{"delete_tag_sequences":false}}"#
    );
    let back: MachineOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn policy_from_config() {
    let policy: BackspacePolicy = serde_json::from_str(r#"{"delete_tag_sequences":true}"#).unwrap();
    assert_eq!(policy, BackspacePolicy::EXTENDED);
}

#[test]
fn machine_state_serializes_as_variant_name() {
    assert_eq!(
        serde_json::to_string(&MachineState::NeedFollowingInput).unwrap(),
        r#""NeedFollowingInput""#
    );
    let state: MachineState = serde_json::from_str(r#""Finished""#).unwrap();
    assert_eq!(state, MachineState::Finished);
}
