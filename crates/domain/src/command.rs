//! Vendor commands — the closed set of endpoints the cloud API exposes.

use std::fmt;

/// One of the three vendor API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Turn the switch on.
    On,
    /// Turn the switch off.
    Off,
    /// Query the current power state.
    Status,
}

impl Command {
    /// The path segment appended to the base URL.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Status => "status",
        }
    }

    /// Map a requested power value onto its write command.
    #[must_use]
    pub fn for_power(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
