//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Coarse error taxonomy shared by every layer
///
/// Callers that only need to branch on the category of a failure match on
/// this instead of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An id or guid does not resolve to a live row
    NotFound,
    /// A uniqueness constraint was violated
    AlreadyExists,
    /// Caller input is malformed
    ValidationFailed,
    /// An ownership check failed
    PermissionDenied,
    /// Authentication failed; never says why
    CredentialMismatch,
    /// The backing store failed
    Store,
    /// Anything else
    Internal,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(RecordId),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Passwords don't match")]
    PasswordMismatch,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You don't have permission to delete this comment")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username is taken")]
    UsernameAlreadyExists,

    #[error("Email address is already registered")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",

            // Authorization
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            // Conflict
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the coarse category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_) | Self::PostNotFound(_) | Self::CommentNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::InvalidEmail | Self::PasswordMismatch => ErrorKind::ValidationFailed,
            Self::NotCommentAuthor => ErrorKind::PermissionDenied,
            Self::UsernameAlreadyExists | Self::EmailAlreadyExists => ErrorKind::AlreadyExists,
            Self::DatabaseError(_) => ErrorKind::Store,
            Self::InternalError(_) => ErrorKind::Internal,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::ValidationFailed
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        self.kind() == ErrorKind::PermissionDenied
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::AlreadyExists
    }
}
