#![no_main]

use arbitrary::Arbitrary;
use grapheme_machines::{
    BackspacePolicy, BackspaceStateMachine, BackwardGraphemeBoundaryStateMachine,
    ForwardGraphemeBoundaryStateMachine, MachineOptions, SegmentationMachine,
    boundary::{find_backward_boundary, find_forward_boundary, grapheme_cluster_ranges},
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    /// Raw code units; lone surrogates are fair game.
    units: Vec<u16>,
    split: usize,
    delete_tag_sequences: bool,
}

fn finalize_twice<M: SegmentationMachine>(machine: &mut M) -> i32 {
    let first = machine.finalize_and_get_boundary_offset();
    assert_eq!(first, machine.finalize_and_get_boundary_offset());
    first
}

fn check(input: &Input) {
    let options = MachineOptions {
        panic_on_misuse: true,
        backspace_policy: BackspacePolicy {
            delete_tag_sequences: input.delete_tag_sequences,
        },
    };
    let at = input.split % (input.units.len() + 1);
    let (preceding, following) = input.units.split_at(at);
    let preceding_len = i32::try_from(preceding.len()).unwrap();
    let following_len = i32::try_from(following.len()).unwrap();

    let mut forward = ForwardGraphemeBoundaryStateMachine::with_options(options);
    let ahead = find_forward_boundary(&mut forward, preceding, following);
    assert!((0..=following_len).contains(&ahead));
    assert!(following.is_empty() || ahead > 0);
    assert_eq!(ahead, finalize_twice(&mut forward));

    let mut backward = BackwardGraphemeBoundaryStateMachine::with_options(options);
    let behind = find_backward_boundary(&mut backward, preceding);
    assert!((-preceding_len..=0).contains(&behind));
    assert!(preceding.is_empty() || behind < 0);
    assert_eq!(behind, finalize_twice(&mut backward));

    let mut backspace = BackspaceStateMachine::with_options(options);
    let deleted = find_backward_boundary(&mut backspace, preceding);
    assert!((-preceding_len..=0).contains(&deleted));
    assert!(preceding.is_empty() || deleted < 0);
    assert_eq!(deleted, finalize_twice(&mut backspace));

    let mut end = 0;
    for range in grapheme_cluster_ranges(&input.units) {
        assert_eq!(range.start, end);
        assert!(!range.is_empty());
        end = range.end;
    }
    assert_eq!(end, input.units.len());
}

fuzz_target!(|input: Input| check(&input));
