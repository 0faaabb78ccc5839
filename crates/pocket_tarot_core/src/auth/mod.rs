//! Identity provider contract and local implementation.
//!
//! # Responsibility
//! - Authenticate users and yield a stable opaque user id.
//! - Map provider failures onto a small, user-presentable error taxonomy.
//!
//! # Invariants
//! - User ids never change once issued.
//! - Auth failures are recoverable by retry and never touch journal state.

pub mod credentials;
mod local;

pub use local::LocalIdentityProvider;

use crate::model::profile::UserId;
use crate::repo::journal_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shown after a reset request, whether or not the address is registered.
pub const PASSWORD_RESET_SENT_MESSAGE: &str = "Password reset link sent! Check your email.";

/// Authenticated user as seen by the rest of the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: UserId,
    pub email: String,
}

/// Outcome of a federated sign-in popup, reported by the UI shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FederatedSignIn {
    /// Provider confirmed the identity.
    Completed {
        provider: String,
        subject: String,
        email: String,
    },
    /// Browser blocked the popup.
    PopupBlocked,
    /// User closed the popup or another attempt was already in progress.
    PopupCancelled,
}

/// Identity provider failures.
#[derive(Debug)]
pub enum AuthError {
    InvalidCredentials,
    EmailAlreadyRegistered,
    WeakPassword,
    InvalidEmail,
    PopupBlocked,
    PopupCancelled,
    PasswordHash,
    Repo(RepoError),
}

impl AuthError {
    /// Message suitable for showing next to the login form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Failed to log in. Please check your credentials.",
            Self::EmailAlreadyRegistered => {
                "This email is already registered. Please log in or use a different email."
            }
            Self::WeakPassword => "Password should be at least 6 characters long.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::PopupBlocked => "Popup blocked. Please allow popups for this site.",
            Self::PopupCancelled => "A sign-in attempt was already in progress.",
            Self::PasswordHash | Self::Repo(_) => "An error occurred. Please try again.",
        }
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::EmailAlreadyRegistered => write!(f, "email already registered"),
            Self::WeakPassword => write!(f, "weak password"),
            Self::InvalidEmail => write!(f, "invalid email"),
            Self::PopupBlocked => write!(f, "sign-in popup blocked"),
            Self::PopupCancelled => write!(f, "sign-in popup cancelled"),
            Self::PasswordHash => write!(f, "password hashing failed"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Operations the core consumes from an identity provider.
pub trait IdentityProvider {
    fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<AuthUser>;
    fn register(&self, email: &str, password: &str) -> AuthResult<AuthUser>;
    fn sign_in_with_federated(&self, outcome: FederatedSignIn) -> AuthResult<AuthUser>;
    fn sign_out(&self) -> AuthResult<()>;
    /// Requests a reset email. Succeeds for unknown addresses too.
    fn send_password_reset(&self, email: &str) -> AuthResult<()>;
    /// Currently signed-in user, if any.
    fn current_user(&self) -> AuthResult<Option<AuthUser>>;
}
