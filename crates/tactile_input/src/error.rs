//! Motion event error types

use thiserror::Error;

/// Errors raised by motion event operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    /// The abstract base kind was requested; only concrete kinds exist
    #[error("motion event kind `motion` is abstract, use a concrete kind")]
    AbstractInstantiation,

    /// A provider asked for a kind name that is not known
    #[error("unknown motion event kind: {0}")]
    UnknownKind(String),

    /// Grab attempted on an event without the `pos` capability
    #[error("grab works only for touch motion events")]
    NotGrabbable,

    /// Grab attempted while an exclusive claim is held
    #[error("cannot grab the touch, it is grabbed exclusively")]
    AlreadyExclusive,

    /// Snapshot pop without a matching push
    #[error("snapshot stack is empty")]
    EmptyStack,

    /// Screen rotation outside 0, 90, 180 and 270 degrees
    #[error("unsupported screen rotation: {0} degrees")]
    UnsupportedRotation(u32),

    /// Attribute name not present in any manifest
    #[error("unknown motion event attribute: {0}")]
    UnknownAttribute(String),
}

/// Errors raised while loading input configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read input config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse input config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid screen configuration: {0}")]
    Rotation(#[from] MotionError),
}

/// Result type for motion event operations
pub type Result<T> = std::result::Result<T, MotionError>;
