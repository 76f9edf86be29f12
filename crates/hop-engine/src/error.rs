use thiserror::Error;

/// Errors surfaced outside the per-tick hot path.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The level was queried or simulated before `end_build` froze its colliders.
    #[error("level has not finished building; call end_build() first")]
    LevelNotBuilt,

    /// Static geometry was added after `end_build`.
    #[error("level colliders are frozen; static geometry can only be added while building")]
    LevelFrozen,

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
