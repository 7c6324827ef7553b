//! Marquee Core - Data model, configuration and session seam
//!
//! Shared building blocks for the Marquee catalog service: content and
//! account records, the subscription tier ordering, configuration, runtime
//! mode, tracing setup, and the session provider abstraction.

pub mod account;
pub mod config;
pub mod content;
pub mod mode;
pub mod session;
pub mod tier;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use account::{Plan, SubscriptionStatus, UserAccount};
pub use config::{ConfigError, MarqueeConfig};
pub use content::{Category, ContentItem};
pub use mode::RuntimeMode;
pub use session::{InMemorySessionProvider, Session, SessionError, SessionProvider};
pub use tier::SubscriptionTier;

/// Errors that can bubble up from any Marquee subsystem.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {reason}")]
    Server { reason: String },
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Config(e) => format!("Configuration problem: {e}"),
            MarqueeError::Session(e) if e.is_user_error() => e.to_string(),
            MarqueeError::Session(_) => "Sign-in is temporarily unavailable".to_string(),
            MarqueeError::Io(_) => "File system error occurred".to_string(),
            MarqueeError::Server { reason } => format!("Server error: {reason}"),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        match self {
            MarqueeError::Config(_) => true,
            MarqueeError::Session(e) => e.is_user_error(),
            MarqueeError::Io(_) | MarqueeError::Server { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_transport_errors_hide_details() {
        let err = MarqueeError::from(SessionError::Transport {
            reason: "tls handshake failed".to_string(),
        });

        assert!(!err.is_user_error());
        assert_eq!(err.user_message(), "Sign-in is temporarily unavailable");
    }

    #[test]
    fn test_credential_errors_are_user_errors() {
        let err = MarqueeError::from(SessionError::InvalidCredentials);

        assert!(err.is_user_error());
        assert_eq!(err.user_message(), "Invalid email or password");
    }
}
