// Copyright 2025 Cowboy AI, LLC.

//! Error types for composition and forwarding

use thiserror::Error;

/// Errors that can occur while composing sources or forwarding through a composite
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CooperateError {
    /// Malformed or missing input to a public entry point
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: String,
        /// Why the argument was rejected
        reason: String,
    },

    /// Two or more members resolve to the same exposed name
    #[error(
        "Naming collision: member '{source_name}' would override the existing member '{exposed_name}'; \
         rename it with map_members(..).map(\"{source_name}\").to(..) or remove it with hide(\"{source_name}\")"
    )]
    NamingCollision {
        /// Member name on the source that lost the claim
        source_name: String,
        /// Exposed name that was already taken
        exposed_name: String,
    },

    /// No forwarding member with this name exists
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    /// The member has no getter
    #[error("Member is not readable: {0}")]
    NotReadable(String),

    /// The member has no setter
    #[error("Member is not writable: {0}")]
    NotWritable(String),

    /// The member is an accessor, not a method
    #[error("Member is not callable: {0}")]
    NotCallable(String),

    /// A source member failed while handling a forwarded call
    #[error("Invocation of '{member}' failed: {message}")]
    Invocation {
        /// Member that raised the error
        member: String,
        /// Error message from the member
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for composition and forwarding
pub type CooperateResult<T> = Result<T, CooperateError>;

impl From<serde_json::Error> for CooperateError {
    fn from(err: serde_json::Error) -> Self {
        CooperateError::Serialization(err.to_string())
    }
}

impl CooperateError {
    /// Create an invalid argument error
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        CooperateError::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Create an invocation error, for use by source members
    pub fn invocation(member: impl Into<String>, message: impl Into<String>) -> Self {
        CooperateError::Invocation {
            member: member.into(),
            message: message.into(),
        }
    }

    /// Check if this is a naming collision
    pub fn is_collision(&self) -> bool {
        matches!(self, CooperateError::NamingCollision { .. })
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CooperateError::InvalidArgument { .. })
    }

    /// Check if this error came from dispatching to a member that cannot serve the request
    pub fn is_dispatch_error(&self) -> bool {
        matches!(
            self,
            CooperateError::MemberNotFound(_)
                | CooperateError::NotReadable(_)
                | CooperateError::NotWritable(_)
                | CooperateError::NotCallable(_)
        )
    }
}
