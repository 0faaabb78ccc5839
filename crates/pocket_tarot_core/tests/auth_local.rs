use pocket_tarot_core::db::open_db_in_memory;
use pocket_tarot_core::{
    AuthError, FederatedSignIn, IdentityProvider, LocalIdentityProvider, SqliteAccountRepository,
};

fn google(subject: &str, email: &str) -> FederatedSignIn {
    FederatedSignIn::Completed {
        provider: "google".to_string(),
        subject: subject.to_string(),
        email: email.to_string(),
    }
}

#[test]
fn register_then_sign_in_yields_the_same_user() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalIdentityProvider::new(SqliteAccountRepository::try_new(&conn).unwrap());

    let registered = auth.register(" Seer@Example.com ", "moonlight").unwrap();
    assert_eq!(registered.email, "seer@example.com");
    assert_eq!(auth.current_user().unwrap(), Some(registered.clone()));

    auth.sign_out().unwrap();
    assert_eq!(auth.current_user().unwrap(), None);

    let signed_in = auth
        .sign_in_with_password("seer@example.com", "moonlight")
        .unwrap();
    assert_eq!(signed_in.user_id, registered.user_id);
    assert_eq!(auth.current_user().unwrap(), Some(signed_in));
}

#[test]
fn passwords_are_not_stored_in_plain_text() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalIdentityProvider::new(SqliteAccountRepository::try_new(&conn).unwrap());
    auth.register("seer@example.com", "moonlight").unwrap();

    let stored: String = conn
        .query_row("SELECT password_hash FROM accounts;", [], |row| row.get(0))
        .unwrap();
    assert_ne!(stored, "moonlight");
    assert!(stored.starts_with("$argon2id$"));
    assert!(!stored.contains("moonlight"));
}

#[test]
fn wrong_password_and_unknown_email_are_invalid_credentials() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalIdentityProvider::new(SqliteAccountRepository::try_new(&conn).unwrap());
    auth.register("seer@example.com", "moonlight").unwrap();
    auth.sign_out().unwrap();

    let wrong = auth
        .sign_in_with_password("seer@example.com", "sunlight")
        .unwrap_err();
    assert!(matches!(wrong, AuthError::InvalidCredentials));
    assert_eq!(
        wrong.user_message(),
        "Failed to log in. Please check your credentials."
    );

    let unknown = auth
        .sign_in_with_password("nobody@example.com", "moonlight")
        .unwrap_err();
    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert_eq!(auth.current_user().unwrap(), None);
}

#[test]
fn registration_validates_email_password_and_uniqueness() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalIdentityProvider::new(SqliteAccountRepository::try_new(&conn).unwrap());

    assert!(matches!(
        auth.register("not-an-email", "moonlight"),
        Err(AuthError::InvalidEmail)
    ));
    assert!(matches!(
        auth.register("seer@example.com", "12345"),
        Err(AuthError::WeakPassword)
    ));

    auth.register("seer@example.com", "moonlight").unwrap();
    let duplicate = auth.register("SEER@example.com", "another1").unwrap_err();
    assert!(matches!(duplicate, AuthError::EmailAlreadyRegistered));
    assert!(duplicate.user_message().contains("already registered"));
}

#[test]
fn federated_sign_in_is_stable_per_provider_subject() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalIdentityProvider::new(SqliteAccountRepository::try_new(&conn).unwrap());

    let first = auth
        .sign_in_with_federated(google("g-456", "oracle@example.com"))
        .unwrap();
    auth.sign_out().unwrap();
    let again = auth
        .sign_in_with_federated(google("g-456", "oracle@example.com"))
        .unwrap();
    assert_eq!(again.user_id, first.user_id);
    assert_eq!(auth.current_user().unwrap(), Some(again));

    // Federated-only accounts have no password to check.
    assert!(matches!(
        auth.sign_in_with_password("oracle@example.com", "anything"),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn federated_sign_in_cannot_claim_a_registered_email() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalIdentityProvider::new(SqliteAccountRepository::try_new(&conn).unwrap());
    let owner = auth.register("victim@example.com", "s3cret-pass").unwrap();
    auth.sign_out().unwrap();

    let claimed = auth
        .sign_in_with_federated(FederatedSignIn::Completed {
            provider: "made-up".to_string(),
            subject: "x".to_string(),
            email: " Victim@Example.com ".to_string(),
        })
        .unwrap_err();
    assert!(matches!(claimed, AuthError::EmailAlreadyRegistered));
    assert_eq!(auth.current_user().unwrap(), None);

    let federated_key: Option<String> = conn
        .query_row(
            "SELECT federated_key FROM accounts WHERE user_id = ?1;",
            [owner.user_id.as_str()],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(federated_key, None);

    let signed_in = auth
        .sign_in_with_password("victim@example.com", "s3cret-pass")
        .unwrap();
    assert_eq!(signed_in.user_id, owner.user_id);
}

#[test]
fn popup_failures_map_to_user_messages() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalIdentityProvider::new(SqliteAccountRepository::try_new(&conn).unwrap());

    let blocked = auth
        .sign_in_with_federated(FederatedSignIn::PopupBlocked)
        .unwrap_err();
    assert!(matches!(blocked, AuthError::PopupBlocked));
    assert!(blocked.user_message().contains("allow popups"));

    let cancelled = auth
        .sign_in_with_federated(FederatedSignIn::PopupCancelled)
        .unwrap_err();
    assert!(matches!(cancelled, AuthError::PopupCancelled));
    assert_eq!(auth.current_user().unwrap(), None);
}

#[test]
fn password_reset_is_silent_for_unknown_addresses() {
    let conn = open_db_in_memory().unwrap();
    let auth = LocalIdentityProvider::new(SqliteAccountRepository::try_new(&conn).unwrap());
    let user = auth.register("seer@example.com", "moonlight").unwrap();

    auth.send_password_reset("seer@example.com").unwrap();
    auth.send_password_reset("Seer@Example.com").unwrap();
    auth.send_password_reset("nobody@example.com").unwrap();
    assert_eq!(auth.password_reset_count(&user.user_id).unwrap(), 2);

    assert!(matches!(
        auth.send_password_reset("broken"),
        Err(AuthError::InvalidEmail)
    ));
}
