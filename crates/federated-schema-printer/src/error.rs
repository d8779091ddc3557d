use std::fmt;

/// The federated schema printer error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested type is not part of the schema
    #[error("Unknown type: {0}.")]
    UnknownType(String),
    /// A key, provides or requires field set has an unsupported shape
    #[error("Invalid keyField config: {0}")]
    InvalidKeyFields(String),
    /// A type reference such as `[Episode!]!` could not be parsed
    #[error("invalid type reference: {0}")]
    InvalidTypeReference(String),
    /// Print options could not be deserialized
    #[error("invalid print options: {0}")]
    InvalidOptions(#[source] serde_json::Error),
    #[error(transparent)]
    Format(#[from] fmt::Error),
}
