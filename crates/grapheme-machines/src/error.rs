use thiserror::Error;

/// A caller broke the feed protocol of a segmentation machine.
///
/// These are programmer errors, not text errors: malformed UTF-16 (lone
/// surrogates) is always handled by the machines themselves. Depending on
/// [`MachineOptions::panic_on_misuse`](crate::MachineOptions::panic_on_misuse)
/// a violation either panics or makes the offending call return
/// [`MachineState::Invalid`](crate::MachineState::Invalid).
///
/// Every variant carries the name of the machine that rejected the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractViolation {
    /// A code unit arrived after the machine reported `Finished`.
    #[error("{0}: code unit fed after the machine finished")]
    FedAfterFinished(&'static str),
    /// The end of the preceding text was signalled after the machine
    /// reported `Finished`.
    #[error("{0}: end of preceding text signalled after the machine finished")]
    EndAfterFinished(&'static str),
    /// A preceding code unit arrived once the forward machine had moved on to
    /// the following text.
    #[error("{0}: preceding code unit fed during the following phase")]
    PrecedingDuringFollowingPhase(&'static str),
    /// A following code unit arrived while the forward machine was still
    /// counting preceding regional indicators.
    #[error("{0}: following code unit fed before the preceding text was closed")]
    FollowingDuringPrecedingPhase(&'static str),
    /// The end of the preceding text was signalled after following code
    /// units had already been fed.
    #[error("{0}: end of preceding text signalled after following input began")]
    EndOfPrecedingDuringFollowingPhase(&'static str),
    /// A following code unit was fed to a machine that only scans backward.
    #[error("{0}: machine only scans backward and takes no following code units")]
    FollowingInputUnsupported(&'static str),
}

impl ContractViolation {
    /// Name of the machine type that rejected the call.
    #[must_use]
    pub fn machine(&self) -> &'static str {
        match *self {
            Self::FedAfterFinished(machine)
            | Self::EndAfterFinished(machine)
            | Self::PrecedingDuringFollowingPhase(machine)
            | Self::FollowingDuringPrecedingPhase(machine)
            | Self::EndOfPrecedingDuringFollowingPhase(machine)
            | Self::FollowingInputUnsupported(machine) => machine,
        }
    }
}
