//! Error types for remap

use thiserror::Error;

/// Result type alias using remap's Error
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of symbol a lookup was after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    Class,
    Method,
    Field,
}

impl MappingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Method => "method",
            Self::Field => "field",
        }
    }
}

impl std::fmt::Display for MappingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// remap error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed mappings at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("{kind} mapping not found: {name}")]
    MappingNotFound { kind: MappingKind, name: String },

    #[error("ambiguous mapping for {name}: {count} candidates")]
    AmbiguousMapping { name: String, count: usize },

    #[error("no known mapping format claims the given resource")]
    UnclaimedResource,

    #[error("invalid resource: {location}")]
    InvalidResource { location: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
