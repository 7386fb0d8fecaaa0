use thiserror::Error;

/// Errors raised while turning text into a [`Version`](crate::Version).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersionString(String),

    #[error("Invalid identifier (part {position}): \"{identifier}\"")]
    InvalidIdentifier { position: usize, identifier: String },
}

pub type Result<T> = std::result::Result<T, VersionError>;
