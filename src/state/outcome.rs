/// Classification outcome definitions
///
/// An outcome is derived per URL from up to two fetch attempts and is
/// discarded once reported.
use std::fmt;

/// Final classification of one probed URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationOutcome {
    /// The direct request returned JSON
    DirectOk,

    /// The direct request failed, the relayed request returned JSON
    ProxyOk,

    /// Neither attempt returned JSON
    Failed,
}

impl ClassificationOutcome {
    /// Returns true if the URL was reachable by either route
    pub fn is_success(&self) -> bool {
        matches!(self, Self::DirectOk | Self::ProxyOk)
    }

    /// Returns true if the relay was needed
    pub fn used_relay(&self) -> bool {
        !matches!(self, Self::DirectOk)
    }

    /// Short machine-friendly label, used as a structured log field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirectOk => "direct_ok",
            Self::ProxyOk => "proxy_ok",
            Self::Failed => "failed",
        }
    }

    /// Returns all possible outcomes
    pub fn all() -> [Self; 3] {
        [Self::DirectOk, Self::ProxyOk, Self::Failed]
    }
}

impl fmt::Display for ClassificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectOk => write!(f, "Direct OK"),
            Self::ProxyOk => write!(f, "Proxy OK"),
            Self::Failed => write!(f, "Direct & Proxy failed"),
        }
    }
}
