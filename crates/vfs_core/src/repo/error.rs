//! Store error kinds.
//!
//! # Invariants
//! - Errors are structured; rendering for humans happens in `Display` and
//!   at the shell boundary, never inside registries.
//! - A failed operation leaves the store unchanged.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by every store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Namespace level an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    User,
    Folder,
    File,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from user directory, folder and file registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Name fails the shared name policy.
    InvalidName { kind: NodeKind, name: String },
    /// Name exceeds the level-specific length ceiling.
    TooLong {
        kind: NodeKind,
        name: String,
        max: usize,
    },
    /// Name is already taken within its scope.
    AlreadyExists { kind: NodeKind, name: String },
    /// Lookup miss.
    NotFound { kind: NodeKind, name: String },
    /// Unrecognized sort key or sort order token.
    InvalidArgument(String),
}

impl StoreError {
    /// Stable machine-readable code used in diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName { .. } => "invalid_name",
            Self::TooLong { .. } => "too_long",
            Self::AlreadyExists { .. } => "already_exists",
            Self::NotFound { .. } => "not_found",
            Self::InvalidArgument(_) => "invalid_argument",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { kind, name } if name.is_empty() => {
                write!(f, "the {kind} name cannot be empty")
            }
            Self::InvalidName { kind, name } => {
                write!(f, "the {kind} name {name} contains invalid chars")
            }
            Self::TooLong { kind, max, .. } => {
                write!(f, "{kind} name is too long, max length allowed is {max}")
            }
            Self::AlreadyExists { kind, name } => {
                write!(f, "the {kind} {name} has already existed")
            }
            Self::NotFound { kind, name } => write!(f, "the {kind} {name} doesn't exist"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

impl Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::{NodeKind, StoreError};

    #[test]
    fn messages_name_the_level_and_the_offending_name() {
        let err = StoreError::AlreadyExists {
            kind: NodeKind::Folder,
            name: "docs".to_string(),
        };
        assert_eq!(err.to_string(), "the folder docs has already existed");

        let err = StoreError::TooLong {
            kind: NodeKind::User,
            name: "x".repeat(30),
            max: 25,
        };
        assert_eq!(
            err.to_string(),
            "user name is too long, max length allowed is 25"
        );
    }

    #[test]
    fn empty_invalid_name_has_its_own_message() {
        let err = StoreError::InvalidName {
            kind: NodeKind::User,
            name: String::new(),
        };
        assert_eq!(err.to_string(), "the user name cannot be empty");
        assert_eq!(err.code(), "invalid_name");
    }

    #[test]
    fn codes_are_stable() {
        let err = StoreError::NotFound {
            kind: NodeKind::File,
            name: "a".to_string(),
        };
        assert_eq!(err.code(), "not_found");
        assert_eq!(
            StoreError::InvalidArgument("x".to_string()).code(),
            "invalid_argument"
        );
    }
}
