//! Client error types.
//!
//! Every operation returns a [`ClientResult`]; the catalog and auth clients
//! additionally record the message into their state so views can render it
//! without handling the result.

use gameshelf_shared::ErrorBody;

pub const MSG_NOT_AUTHENTICATED: &str = "Not authenticated!";
pub const MSG_NO_USER_ID: &str = "No user id available!";
pub const MSG_NO_PLATFORM: &str = "Please select at least one platform!";
pub const MSG_NO_DATA: &str = "No data available!";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const MSG_LOGIN_FAILED: &str = "Failed to login";
pub const MSG_REGISTER_FAILED: &str = "Failed to register";
pub const MSG_SESSION_NOT_SAVED: &str = "Failed to save session";

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthenticated,
    Validation,
    Transport,
    Rejected,
    Decode,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Transport(String),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Built through [`ClientError::decode`]; holds the full message.
    #[error("{0}")]
    Decode(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Unauthenticated(_) => ErrorKind::Unauthenticated,
            ClientError::Validation(_) => ErrorKind::Validation,
            ClientError::Transport(_) => ErrorKind::Transport,
            ClientError::Rejected { .. } => ErrorKind::Rejected,
            ClientError::Decode(_) => ErrorKind::Decode,
        }
    }

    pub fn decode(detail: impl std::fmt::Display) -> Self {
        ClientError::Decode(format!("invalid response: {detail}"))
    }

    /// Build a rejection from a non-success body, preferring the server's
    /// `error` field and falling back to `fallback`.
    pub fn rejected(status: u16, body: &str, fallback: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| fallback.to_string());
        ClientError::Rejected { status, message }
    }

    /// Prefix the message with operation context, keeping the kind.
    pub fn context(self, prefix: &str) -> Self {
        let join = |m: String| format!("{prefix} {m}");
        match self {
            ClientError::Unauthenticated(m) => ClientError::Unauthenticated(m),
            ClientError::Validation(m) => ClientError::Validation(m),
            ClientError::Transport(m) => ClientError::Transport(join(m)),
            ClientError::Rejected { status, message } => ClientError::Rejected {
                status,
                message: join(message),
            },
            ClientError::Decode(m) => ClientError::Decode(join(m)),
        }
    }
}

/// The `error` string of a JSON error body, if there is one.
pub fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_prefers_server_error() {
        let err = ClientError::rejected(404, r#"{"error":"not found"}"#, "fallback");
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.kind(), ErrorKind::Rejected);
    }

    #[test]
    fn rejected_falls_back_on_plain_text() {
        let err = ClientError::rejected(500, "Internal Server Error", MSG_INVALID_CREDENTIALS);
        assert_eq!(err.to_string(), MSG_INVALID_CREDENTIALS);

        let err = ClientError::rejected(400, r#"{"error":""}"#, "fallback");
        assert_eq!(err.to_string(), "fallback");
    }

    #[test]
    fn context_leaves_precondition_messages_alone() {
        let err = ClientError::Unauthenticated(MSG_NOT_AUTHENTICATED.into())
            .context("Failed to add game!");
        assert_eq!(err.to_string(), MSG_NOT_AUTHENTICATED);

        let err = ClientError::rejected(400, r#"{"error":"bad price"}"#, "")
            .context("Failed to add game!");
        assert_eq!(err.to_string(), "Failed to add game! bad price");
        assert_eq!(err.kind(), ErrorKind::Rejected);
    }

    #[test]
    fn context_goes_in_front_of_decode_message() {
        let err = ClientError::decode("expected value at line 1 column 1")
            .context("Failed to delete game!");
        assert_eq!(
            err.to_string(),
            "Failed to delete game! invalid response: expected value at line 1 column 1"
        );
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
