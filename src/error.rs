use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while setting up a simulation.
///
/// Ticking never fails: every coordinate is clamped into range, so the only
/// failure path is a bad configuration caught by `Simulation::initialize`.
#[derive(Debug, Error)]
pub enum Error {
    /// Area, bucket or physics parameters that would produce an inconsistent grid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
