/// The ruleset the backspace machine applies on top of plain code point
/// deletion.
///
/// Backspace is an editing convention rather than a Unicode segmentation
/// rule, so the extra behaviors are spelled out here and can be switched per
/// machine. Rulesets only ever grow; each named constant is a fixed version.
///
/// # Examples
///
/// ```rust
/// use grapheme_machines::{BackspacePolicy, BackspaceStateMachine, MachineOptions};
///
/// let machine = BackspaceStateMachine::with_options(MachineOptions {
///     backspace_policy: BackspacePolicy::CLASSIC,
///     ..Default::default()
/// });
/// assert_eq!(machine.policy(), BackspacePolicy::CLASSIC);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct BackspacePolicy {
    /// Delete a whole emoji tag sequence (tag base, tag characters and
    /// CANCEL TAG) in one keystroke.
    ///
    /// When `false` a CANCEL TAG is deleted on its own like any other code
    /// point.
    pub delete_tag_sequences: bool,
}

impl BackspacePolicy {
    /// CR LF pairs, keycaps, emoji modifiers, variation selectors,
    /// regional indicator pairs and ZWJ emoji sequences.
    pub const CLASSIC: Self = Self {
        delete_tag_sequences: false,
    };

    /// [`CLASSIC`](Self::CLASSIC) plus emoji tag sequences.
    pub const EXTENDED: Self = Self {
        delete_tag_sequences: true,
    };
}

impl Default for BackspacePolicy {
    fn default() -> Self {
        Self::EXTENDED
    }
}

/// Configuration shared by all segmentation machines.
///
/// # Default
///
/// `panic_on_misuse` follows `debug_assertions`; `backspace_policy` is
/// [`BackspacePolicy::EXTENDED`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct MachineOptions {
    /// Panic when a caller breaks the feed protocol instead of returning
    /// [`MachineState::Invalid`](crate::MachineState::Invalid).
    ///
    /// Either way the violation is logged and recorded.
    pub panic_on_misuse: bool,

    /// Backspace ruleset. Only the backspace machine reads it.
    pub backspace_policy: BackspacePolicy,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            panic_on_misuse: cfg!(debug_assertions),
            backspace_policy: BackspacePolicy::default(),
        }
    }
}

impl MachineOptions {
    /// Options that report misuse through
    /// [`MachineState::Invalid`](crate::MachineState::Invalid) in every
    /// build profile.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            panic_on_misuse: false,
            ..Self::default()
        }
    }
}
