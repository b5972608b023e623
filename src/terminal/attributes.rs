//! Terminal mode flags and the raw-mode transformation.

use nix::sys::termios::{ControlFlags, InputFlags, LocalFlags, OutputFlags, Termios};

/// Input flags cleared in raw mode: no CR to NL translation, no XON/XOFF
/// flow control, no parity checking, no 8th-bit stripping, no SIGINT on break.
const RAW_CLEARED_INPUT: InputFlags = InputFlags::BRKINT
    .union(InputFlags::ICRNL)
    .union(InputFlags::INPCK)
    .union(InputFlags::ISTRIP)
    .union(InputFlags::IXON);

/// Local flags cleared in raw mode: no echo, no line buffering, no
/// implementation-defined input processing, no signal-generating characters.
const RAW_CLEARED_LOCAL: LocalFlags = LocalFlags::ECHO
    .union(LocalFlags::ICANON)
    .union(LocalFlags::IEXTEN)
    .union(LocalFlags::ISIG);

/// Snapshot of the four termios flag sets.
///
/// This is the part of the terminal mode that raw mode changes. Devices are
/// expected to keep the remaining state (control characters, line speed)
/// untouched when these attributes are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attributes {
    pub input: InputFlags,
    pub output: OutputFlags,
    pub control: ControlFlags,
    pub local: LocalFlags,
}

impl Attributes {
    /// Derive the raw-mode attributes from an original snapshot.
    pub fn raw(&self) -> Self {
        Self {
            input: self.input.difference(RAW_CLEARED_INPUT),
            output: self.output.difference(OutputFlags::OPOST),
            control: self.control.union(ControlFlags::CS8),
            local: self.local.difference(RAW_CLEARED_LOCAL),
        }
    }

    /// True when every raw-mode property holds for these attributes.
    pub fn is_raw(&self) -> bool {
        !self.input.intersects(RAW_CLEARED_INPUT)
            && !self.output.contains(OutputFlags::OPOST)
            && self.control.contains(ControlFlags::CS8)
            && !self.local.intersects(RAW_CLEARED_LOCAL)
    }

    /// Overwrite the flag sets of a full termios record.
    pub fn apply_to(&self, termios: &mut Termios) {
        termios.input_flags = self.input;
        termios.output_flags = self.output;
        termios.control_flags = self.control;
        termios.local_flags = self.local;
    }
}

impl From<&Termios> for Attributes {
    fn from(termios: &Termios) -> Self {
        Self {
            input: termios.input_flags,
            output: termios.output_flags,
            control: termios.control_flags,
            local: termios.local_flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cooked() -> Attributes {
        Attributes {
            input: InputFlags::ICRNL | InputFlags::IXON | InputFlags::BRKINT | InputFlags::IMAXBEL,
            output: OutputFlags::OPOST | OutputFlags::ONLCR,
            control: ControlFlags::CS7 | ControlFlags::CREAD,
            local: LocalFlags::ECHO
                | LocalFlags::ICANON
                | LocalFlags::ISIG
                | LocalFlags::IEXTEN
                | LocalFlags::ECHOE,
        }
    }

    #[test]
    fn test_raw_clears_translation_and_flow_control() {
        let raw = cooked().raw();
        assert!(!raw.input.contains(InputFlags::ICRNL));
        assert!(!raw.input.contains(InputFlags::IXON));
        assert!(!raw.input.contains(InputFlags::BRKINT));
        // Flags outside the raw-mode set survive untouched
        assert!(raw.input.contains(InputFlags::IMAXBEL));
    }

    #[test]
    fn test_raw_disables_output_processing() {
        let raw = cooked().raw();
        assert!(!raw.output.contains(OutputFlags::OPOST));
        assert!(raw.output.contains(OutputFlags::ONLCR));
    }

    #[test]
    fn test_raw_disables_echo_canonical_and_signals() {
        let raw = cooked().raw();
        assert!(!raw.local.contains(LocalFlags::ECHO));
        assert!(!raw.local.contains(LocalFlags::ICANON));
        assert!(!raw.local.contains(LocalFlags::ISIG));
        assert!(!raw.local.contains(LocalFlags::IEXTEN));
        assert!(raw.local.contains(LocalFlags::ECHOE));
    }

    #[test]
    fn test_raw_forces_eight_bit_characters() {
        let raw = cooked().raw();
        assert!(raw.control.contains(ControlFlags::CS8));
        assert!(raw.control.contains(ControlFlags::CREAD));
    }

    #[test]
    fn test_is_raw() {
        let original = cooked();
        assert!(!original.is_raw());
        assert!(original.raw().is_raw());
        assert_eq!(original.raw().raw(), original.raw());
    }
}
