//! crates/sink/src/host.rs
//! Status codes returned to the host runtime's session contract.

use std::fmt;

/// Status handed back to the host runtime when the facility intercepts one of
/// the host's own text streams.
///
/// The host's session contract expects a small integer per received string;
/// `0` means the text was accepted. Failures to write the forwarded text are
/// reported as [`HostStatus::REJECTED`] rather than surfaced as errors, since
/// the host side has no recovery path beyond its own logging.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct HostStatus(i32);

impl HostStatus {
    /// The text was accepted and forwarded (or deliberately dropped).
    pub const ACCEPTED: Self = Self(0);

    /// The text could not be written to the facility's sink.
    pub const REJECTED: Self = Self(1);

    /// Reports whether the host should treat the hand-off as successful.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw integer expected by the host session contract.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<HostStatus> for i32 {
    fn from(status: HostStatus) -> Self {
        status.as_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_is_zero() {
        assert_eq!(HostStatus::ACCEPTED.as_i32(), 0);
        assert!(HostStatus::ACCEPTED.is_accepted());
    }

    #[test]
    fn rejected_is_nonzero() {
        assert_ne!(HostStatus::REJECTED.as_i32(), 0);
        assert!(!HostStatus::REJECTED.is_accepted());
    }

    #[test]
    fn converts_to_raw_integer() {
        let raw: i32 = HostStatus::ACCEPTED.into();
        assert_eq!(raw, 0);
    }
}
