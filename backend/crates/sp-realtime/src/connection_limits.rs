/// Configuration for stream limits
#[derive(Debug, Clone)]
pub struct ConnectionLimits {
    /// Maximum open streams across all users
    pub max_total: usize,
}

impl Default for ConnectionLimits {
    fn default() -> Self {
        Self { max_total: 10_000 }
    }
}
