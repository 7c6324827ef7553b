//! Session provider seam and the in-memory development provider.
//!
//! The site delegates sign-in to an external authentication service. The core
//! only needs to turn a bearer token into a `UserAccount`, so the provider is a
//! trait; `InMemorySessionProvider` stands in for the real service during
//! development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::account::{SubscriptionStatus, UserAccount};
use crate::tier::SubscriptionTier;

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token
    pub token: String,
    pub user: UserAccount,
}

/// Errors from the session provider.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account already exists for {email}")]
    EmailTaken { email: String },

    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    #[error("Session not found")]
    SessionNotFound,

    #[error("Session service unavailable: {reason}")]
    Transport { reason: String },
}

impl SessionError {
    /// Whether the caller supplied bad input, as opposed to the service failing.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Transport { .. })
    }
}

/// Trait for authentication session backends.
#[async_trait]
pub trait SessionProvider: Send + Sync + std::fmt::Debug {
    /// Look up the session for a bearer token. `Ok(None)` means signed out.
    ///
    /// # Errors
    /// - `SessionError::Transport` - Provider unreachable
    async fn current_session(&self, token: &str) -> Result<Option<Session>, SessionError>;

    /// Start a session for existing credentials.
    ///
    /// # Errors
    /// - `SessionError::InvalidCredentials` - Unknown email or wrong password
    /// - `SessionError::Transport` - Provider unreachable
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError>;

    /// Create an account and start a session for it.
    ///
    /// # Errors
    /// - `SessionError::InvalidEmail` - Malformed address
    /// - `SessionError::EmailTaken` - Address already registered
    /// - `SessionError::InvalidCredentials` - Empty password
    /// - `SessionError::Transport` - Provider unreachable
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Session, SessionError>;

    /// End the session for a bearer token.
    ///
    /// # Errors
    /// - `SessionError::SessionNotFound` - Token is not signed in
    /// - `SessionError::Transport` - Provider unreachable
    async fn sign_out(&self, token: &str) -> Result<(), SessionError>;
}

/// Resolve the tier a request browses with.
///
/// No token, no session, or a failing provider all resolve to `default_tier`;
/// provider failures are logged and never surfaced.
pub async fn resolve_tier(
    provider: &dyn SessionProvider,
    token: Option<&str>,
    default_tier: SubscriptionTier,
) -> SubscriptionTier {
    let Some(token) = token else {
        return default_tier;
    };

    match provider.current_session(token).await {
        Ok(Some(session)) => session.user.effective_tier(),
        Ok(None) => default_tier,
        Err(e) => {
            tracing::warn!("Session lookup failed, browsing as {default_tier}: {e}");
            default_tier
        }
    }
}

#[derive(Debug, Clone)]
struct Credential {
    user: UserAccount,
    /// `None` for seeded accounts, which accept any non-empty password
    password: Option<String>,
}

/// Development session provider backed by process memory.
///
/// Every sign-in or sign-up opens a new session, so one account may hold
/// several tokens at once. Sessions have no expiry; a token lives until
/// `sign_out` or the end of the process, and the table grows with each
/// sign-in until then.
#[derive(Debug, Default)]
pub struct InMemorySessionProvider {
    accounts: RwLock<HashMap<String, Credential>>,
    /// Token to account key
    sessions: RwLock<HashMap<String, String>>,
}

impl InMemorySessionProvider {
    /// Creates a provider with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider seeded with accounts that accept any non-empty password.
    pub fn with_users(users: Vec<UserAccount>) -> Self {
        let accounts = users
            .into_iter()
            .map(|user| {
                (
                    user.email.to_lowercase(),
                    Credential {
                        user,
                        password: None,
                    },
                )
            })
            .collect();

        Self {
            accounts: RwLock::new(accounts),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Number of live sessions.
    pub fn active_sessions(&self) -> usize {
        self.sessions.read().len()
    }

    fn open_session(&self, user: UserAccount) -> Session {
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions
            .write()
            .insert(token.clone(), user.email.to_lowercase());
        Session { token, user }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn current_session(&self, token: &str) -> Result<Option<Session>, SessionError> {
        let email = match self.sessions.read().get(token) {
            Some(email) => email.clone(),
            None => return Ok(None),
        };

        Ok(self.accounts.read().get(&email).map(|credential| Session {
            token: token.to_string(),
            user: credential.user.clone(),
        }))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        if password.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }

        let user = {
            let accounts = self.accounts.read();
            let credential = accounts
                .get(&email.trim().to_lowercase())
                .ok_or(SessionError::InvalidCredentials)?;

            if let Some(expected) = &credential.password {
                if expected != password {
                    return Err(SessionError::InvalidCredentials);
                }
            }
            credential.user.clone()
        };

        tracing::debug!("Signed in {}", user.email);
        Ok(self.open_session(user))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Session, SessionError> {
        let email = email.trim();
        if !is_plausible_email(email) {
            return Err(SessionError::InvalidEmail {
                email: email.to_string(),
            });
        }
        if password.is_empty() {
            return Err(SessionError::InvalidCredentials);
        }

        let key = email.to_lowercase();
        let user = {
            let mut accounts = self.accounts.write();
            if accounts.contains_key(&key) {
                return Err(SessionError::EmailTaken {
                    email: email.to_string(),
                });
            }

            let user = UserAccount {
                id: uuid::Uuid::new_v4().to_string(),
                email: email.to_string(),
                full_name: full_name.trim().to_string(),
                avatar_url: None,
                subscription_tier: SubscriptionTier::Basic,
                subscription_status: SubscriptionStatus::Active,
                created_at: Utc::now(),
            };
            accounts.insert(
                key,
                Credential {
                    user: user.clone(),
                    password: Some(password.to_string()),
                },
            );
            user
        };

        tracing::info!("Created account for {}", user.email);
        Ok(self.open_session(user))
    }

    async fn sign_out(&self, token: &str) -> Result<(), SessionError> {
        self.sessions
            .write()
            .remove(token)
            .map(|_| ())
            .ok_or(SessionError::SessionNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_user(id: &str, email: &str, tier: SubscriptionTier) -> UserAccount {
        UserAccount {
            id: id.to_string(),
            email: email.to_string(),
            full_name: "Test User".to_string(),
            avatar_url: None,
            subscription_tier: tier,
            subscription_status: SubscriptionStatus::Active,
            created_at: Utc::now(),
        }
    }

    fn provider() -> InMemorySessionProvider {
        InMemorySessionProvider::with_users(vec![
            seeded_user("1", "test1@example.com", SubscriptionTier::Basic),
            seeded_user("2", "premium@example.com", SubscriptionTier::Premium),
        ])
    }

    #[derive(Debug)]
    struct UnreachableProvider;

    #[async_trait]
    impl SessionProvider for UnreachableProvider {
        async fn current_session(&self, _token: &str) -> Result<Option<Session>, SessionError> {
            Err(SessionError::Transport {
                reason: "connection refused".to_string(),
            })
        }

        async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, SessionError> {
            Err(SessionError::Transport {
                reason: "connection refused".to_string(),
            })
        }

        async fn sign_up(
            &self,
            _email: &str,
            _password: &str,
            _full_name: &str,
        ) -> Result<Session, SessionError> {
            Err(SessionError::Transport {
                reason: "connection refused".to_string(),
            })
        }

        async fn sign_out(&self, _token: &str) -> Result<(), SessionError> {
            Err(SessionError::Transport {
                reason: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_seeded_account_signs_in_with_any_password() {
        let provider = provider();
        let session = provider
            .sign_in("Premium@Example.com", "hunter2")
            .await
            .unwrap();

        assert_eq!(session.user.id, "2");
        assert_eq!(provider.active_sessions(), 1);

        let current = provider.current_session(&session.token).await.unwrap();
        assert_eq!(current, Some(session));
    }

    #[tokio::test]
    async fn test_sign_in_rejects_unknown_email_and_empty_password() {
        let provider = provider();

        assert!(matches!(
            provider.sign_in("nobody@example.com", "secret").await,
            Err(SessionError::InvalidCredentials)
        ));
        assert!(matches!(
            provider.sign_in("test1@example.com", "").await,
            Err(SessionError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_sign_up_creates_basic_account_with_password() {
        let provider = provider();
        let session = provider
            .sign_up("new@example.com", "s3cret", "New Viewer")
            .await
            .unwrap();

        assert_eq!(session.user.subscription_tier, SubscriptionTier::Basic);
        assert_eq!(session.user.full_name, "New Viewer");

        assert!(provider.sign_in("new@example.com", "s3cret").await.is_ok());
        assert!(matches!(
            provider.sign_in("new@example.com", "wrong").await,
            Err(SessionError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_sign_up_rejects_duplicates_and_bad_email() {
        let provider = provider();

        assert!(matches!(
            provider.sign_up("TEST1@example.com", "pw", "Dup").await,
            Err(SessionError::EmailTaken { .. })
        ));
        assert!(matches!(
            provider.sign_up("not-an-email", "pw", "Bad").await,
            Err(SessionError::InvalidEmail { .. })
        ));
        assert!(matches!(
            provider.sign_up("a@localhost", "pw", "Bad").await,
            Err(SessionError::InvalidEmail { .. })
        ));
    }

    #[tokio::test]
    async fn test_sign_out_ends_session() {
        let provider = provider();
        let session = provider.sign_in("test1@example.com", "pw").await.unwrap();

        provider.sign_out(&session.token).await.unwrap();

        assert_eq!(provider.current_session(&session.token).await.unwrap(), None);
        assert!(matches!(
            provider.sign_out(&session.token).await,
            Err(SessionError::SessionNotFound)
        ));
    }

    #[tokio::test]
    async fn test_sessions_live_until_sign_out() {
        let provider = provider();
        let first = provider.sign_in("test1@example.com", "pw").await.unwrap();
        let second = provider.sign_in("test1@example.com", "pw").await.unwrap();

        assert_ne!(first.token, second.token);
        assert_eq!(provider.active_sessions(), 2);

        provider.sign_out(&first.token).await.unwrap();
        assert_eq!(provider.active_sessions(), 1);
        assert!(provider.current_session(&second.token).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_resolve_tier_paths() {
        let provider = provider();
        let premium = provider.sign_in("premium@example.com", "pw").await.unwrap();

        assert_eq!(
            resolve_tier(&provider, Some(&premium.token), SubscriptionTier::Basic).await,
            SubscriptionTier::Premium
        );
        assert_eq!(
            resolve_tier(&provider, Some("stale-token"), SubscriptionTier::Basic).await,
            SubscriptionTier::Basic
        );
        assert_eq!(
            resolve_tier(&provider, None, SubscriptionTier::Standard).await,
            SubscriptionTier::Standard
        );
    }

    #[test]
    fn test_resolve_tier_falls_back_when_provider_fails() {
        let tier = tokio_test::block_on(resolve_tier(
            &UnreachableProvider,
            Some("token"),
            SubscriptionTier::Basic,
        ));
        assert_eq!(tier, SubscriptionTier::Basic);
    }

    #[test]
    fn test_transport_errors_are_not_user_errors() {
        assert!(SessionError::InvalidCredentials.is_user_error());
        assert!(
            !SessionError::Transport {
                reason: "down".to_string()
            }
            .is_user_error()
        );
    }
}
