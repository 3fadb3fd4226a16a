use crate::version::EngineVersion;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The host engine is older than the extension supports. Raised at
    /// construction time; the extension never runs partially against an
    /// incompatible engine.
    #[error("engine version {found} is too old, the extension requires at least {required}")]
    IncompatibleEngine {
        required: EngineVersion,
        found: EngineVersion,
    },

    #[error("invalid engine version string: {0:?}")]
    InvalidEngineVersion(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
