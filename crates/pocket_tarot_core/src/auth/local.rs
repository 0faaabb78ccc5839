//! Identity provider backed by the local account tables.
//!
//! # Invariants
//! - Passwords are only stored as Argon2id PHC strings.
//! - A federated identity never takes over an account it did not create.
//! - A successful sign-in or registration replaces the persisted session.
//! - Log lines carry user ids only, never emails or passwords.

use crate::auth::credentials::{
    hash_password, is_strong_enough, is_valid_email, normalize_email, verify_password,
};
use crate::auth::{AuthError, AuthResult, AuthUser, FederatedSignIn, IdentityProvider};
use crate::repo::account_repo::{AccountRecord, AccountRepository};
use crate::repo::journal_repo::RepoError;
use log::{info, warn};
use uuid::Uuid;

/// Local identity provider over an `AccountRepository`.
pub struct LocalIdentityProvider<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> LocalIdentityProvider<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Number of reset requests recorded for `user_id`.
    pub fn password_reset_count(&self, user_id: &str) -> AuthResult<u32> {
        Ok(self.repo.password_reset_count(user_id)?)
    }

    fn start_session(&self, account: &AccountRecord, method: &str) -> AuthResult<AuthUser> {
        self.repo.set_session(account.user_id.as_str())?;
        info!(
            "event=auth_sign_in module=auth status=ok method={method} user_id={}",
            account.user_id
        );
        Ok(AuthUser {
            user_id: account.user_id.clone(),
            email: account.email.clone(),
        })
    }
}

impl<R: AccountRepository> IdentityProvider for LocalIdentityProvider<R> {
    fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<AuthUser> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail);
        }

        let Some(account) = self.repo.find_by_email(&email)? else {
            warn!("event=auth_sign_in module=auth status=error method=password error_code=unknown_account");
            return Err(AuthError::InvalidCredentials);
        };
        let Some(hash) = account.password_hash.as_deref() else {
            // Federated-only account.
            return Err(AuthError::InvalidCredentials);
        };

        if let Err(err) = verify_password(password, hash) {
            warn!(
                "event=auth_sign_in module=auth status=error method=password error_code=bad_password user_id={}",
                account.user_id
            );
            return Err(err);
        }

        self.start_session(&account, "password")
    }

    fn register(&self, email: &str, password: &str) -> AuthResult<AuthUser> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail);
        }
        if !is_strong_enough(password) {
            return Err(AuthError::WeakPassword);
        }
        if self.repo.find_by_email(&email)?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let account = AccountRecord {
            user_id: Uuid::new_v4().to_string(),
            email,
            password_hash: Some(hash_password(password)?),
            federated_key: None,
        };
        match self.repo.insert_account(&account) {
            Ok(()) => {}
            Err(RepoError::Db(err)) if err.is_constraint_violation() => {
                return Err(AuthError::EmailAlreadyRegistered);
            }
            Err(err) => return Err(err.into()),
        }

        info!(
            "event=auth_register module=auth status=ok user_id={}",
            account.user_id
        );
        self.start_session(&account, "register")
    }

    fn sign_in_with_federated(&self, outcome: FederatedSignIn) -> AuthResult<AuthUser> {
        let (provider, subject, email) = match outcome {
            FederatedSignIn::Completed {
                provider,
                subject,
                email,
            } => (provider, subject, normalize_email(&email)),
            FederatedSignIn::PopupBlocked => return Err(AuthError::PopupBlocked),
            FederatedSignIn::PopupCancelled => return Err(AuthError::PopupCancelled),
        };
        if provider.trim().is_empty() || subject.trim().is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail);
        }

        let federated_key = format!("{}:{}", provider.trim(), subject.trim());
        if let Some(account) = self.repo.find_by_federated_key(&federated_key)? {
            return self.start_session(&account, "federated");
        }

        // Never attach a provider identity to an account found by email.
        if let Some(existing) = self.repo.find_by_email(&email)? {
            warn!(
                "event=auth_sign_in module=auth status=error method=federated error_code=email_taken user_id={}",
                existing.user_id
            );
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let account = AccountRecord {
            user_id: Uuid::new_v4().to_string(),
            email,
            password_hash: None,
            federated_key: Some(federated_key),
        };
        match self.repo.insert_account(&account) {
            Ok(()) => {}
            Err(RepoError::Db(err)) if err.is_constraint_violation() => {
                return Err(AuthError::EmailAlreadyRegistered);
            }
            Err(err) => return Err(err.into()),
        }
        self.start_session(&account, "federated_new")
    }

    fn sign_out(&self) -> AuthResult<()> {
        self.repo.clear_session()?;
        info!("event=auth_sign_out module=auth status=ok");
        Ok(())
    }

    fn send_password_reset(&self, email: &str) -> AuthResult<()> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail);
        }

        if let Some(account) = self.repo.find_by_email(&email)? {
            let token = Uuid::new_v4().simple().to_string();
            self.repo
                .record_password_reset(account.user_id.as_str(), &token)?;
            info!(
                "event=auth_password_reset module=auth status=ok user_id={}",
                account.user_id
            );
        }
        Ok(())
    }

    fn current_user(&self) -> AuthResult<Option<AuthUser>> {
        let Some(user_id) = self.repo.session_user_id()? else {
            return Ok(None);
        };
        Ok(self
            .repo
            .find_by_user_id(&user_id)?
            .map(|account| AuthUser {
                user_id: account.user_id,
                email: account.email,
            }))
    }
}
