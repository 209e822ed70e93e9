//! Configuration for anchor resolution

/// What to do when a segment command is outside the supported set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Use the origin for the unresolved corner and keep going (legacy data relies on this)
    #[default]
    ZeroFallback,
    /// Fail with `AnchorError::Degenerate`
    Reject,
}

/// Configuration options for anchor resolution
#[derive(Debug, Clone, Default)]
pub struct AnchorConfig {
    pub degenerate: DegeneratePolicy,
}

impl AnchorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the degenerate segment policy
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Shorthand for rejecting degenerate segments
    pub fn strict() -> Self {
        Self::new().with_degenerate_policy(DegeneratePolicy::Reject)
    }
}
