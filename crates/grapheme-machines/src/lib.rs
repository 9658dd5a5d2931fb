//! Incremental, code-unit-at-a-time state machines for finding extended
//! grapheme cluster boundaries and backspace deletion extents in UTF-16 text.
//!
//! The crate offers three independent machines:
//!
//! - [`ForwardGraphemeBoundaryStateMachine`] finds the end of the grapheme
//!   cluster that starts at an offset.
//! - [`BackwardGraphemeBoundaryStateMachine`] finds the start of the grapheme
//!   cluster that ends at an offset.
//! - [`BackspaceStateMachine`] finds how many code units a single backspace
//!   keystroke removes in front of the caret.
//!
//! Each machine is fed one `u16` at a time and answers with a
//! [`MachineState`] telling the caller whether to keep feeding. Once it
//! reports [`MachineState::Finished`] (or the text runs out), the boundary
//! offset is read with `finalize_and_get_boundary_offset`.
//!
//! # Examples
//!
//! ```rust
//! use grapheme_machines::{ForwardGraphemeBoundaryStateMachine, MachineState};
//!
//! // "e" followed by COMBINING ACUTE ACCENT, then "x".
//! let text: Vec<u16> = "e\u{301}x".encode_utf16().collect();
//!
//! let mut machine = ForwardGraphemeBoundaryStateMachine::new();
//! assert_eq!(machine.tell_end_of_preceding_text(), MachineState::NeedFollowingInput);
//! for &unit in &text {
//!     if machine.feed_following_code_unit(unit) == MachineState::Finished {
//!         break;
//!     }
//! }
//! assert_eq!(machine.finalize_and_get_boundary_offset(), 2);
//! ```
//!
//! For whole buffers the [`boundary`] drivers run the feed loop for you:
//!
//! ```rust
//! use grapheme_machines::boundary::{backspace_deletion_start, previous_grapheme_boundary};
//!
//! let text: Vec<u16> = "1\u{20E3}".encode_utf16().collect();
//! assert_eq!(backspace_deletion_start(&text, text.len()), 0);
//! assert_eq!(previous_grapheme_boundary(&text, text.len()), 0);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod backspace;
mod backward;
pub mod boundary;
mod error;
mod forward;
mod grapheme_break;
mod machine;
mod options;
pub mod properties;
mod state;
pub mod utf16;

#[cfg(test)]
mod tests;

pub use backspace::BackspaceStateMachine;
pub use backward::BackwardGraphemeBoundaryStateMachine;
pub use error::ContractViolation;
pub use forward::ForwardGraphemeBoundaryStateMachine;
pub use grapheme_break::{is_grapheme_break, is_grapheme_break_with};
pub use machine::SegmentationMachine;
pub use options::{BackspacePolicy, MachineOptions};
pub use properties::{CharProperties, GraphemeClusterBreak, UnicodeProperties};
pub use state::MachineState;
