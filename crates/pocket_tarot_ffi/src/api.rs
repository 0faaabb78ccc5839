//! FFI use-case API for the UI shell.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Translate core errors into envelopes carrying user-facing messages.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every envelope has `ok` and a UTF-8 `message`; diagnostics go to logs.
//! - Access state strings are `free|locked|unlimited`.
//! - Journal and payment calls act on the persisted session user only.

use log::{error, warn};
use pocket_tarot_core::db::open_db;
use pocket_tarot_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, AccessState,
    AddEntryOutcome, AuthError, AuthUser, CardBack, DeckService, DrawnCard, EntryCard,
    EntryDraft, FederatedSignIn, IdentityProvider, JournalAction, JournalEntry, JournalError,
    JournalFilter, JournalService, LocalIdentityProvider, PaymentOutcome, PaymentService,
    ReadingType, Spread, SpreadKind, SqliteAccountRepository, SqliteEntryStore,
    SqlitePreferenceRepository, UserProfile, LOGIN_REQUIRED_MESSAGE,
    PASSWORD_RESET_SENT_MESSAGE, QUOTA_EXCEEDED_MESSAGE,
};
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const DB_FILE_NAME: &str = "pocket_tarot.sqlite3";
const DB_PATH_ENV: &str = "POCKET_TAROT_DB_PATH";
const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Signed-in user plus journal access snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub ok: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
    /// `free|locked|unlimited` after profile bootstrap.
    pub access: Option<String>,
    pub message: String,
}

impl AuthResponse {
    fn success(user: AuthUser, profile: &UserProfile) -> Self {
        Self {
            ok: true,
            user_id: Some(user.user_id),
            email: Some(user.email),
            access: Some(profile.access_state().as_str().to_string()),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            user_id: None,
            email: None,
            access: None,
            message: message.into(),
        }
    }
}

/// Result of a command without payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub message: String,
}

impl ActionResponse {
    fn from_result(result: Result<String, String>) -> Self {
        match result {
            Ok(message) => Self { ok: true, message },
            Err(message) => Self { ok: false, message },
        }
    }
}

/// One card as shown in a spread slot or a saved entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub image: String,
    /// Card name, suffixed with ` Reversed` when reversed.
    pub title: String,
    pub description: Option<String>,
    pub is_reversed: bool,
}

/// Freshly drawn spread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadResponse {
    pub ok: bool,
    /// Reading type label recorded when the spread is saved.
    pub reading_type: String,
    pub cards: Vec<CardView>,
    pub message: String,
}

/// One saved journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub entry_id: String,
    pub reading_type: String,
    pub timestamp_ms: i64,
    pub cards: Vec<CardView>,
    pub notes: String,
}

/// Journal access snapshot returned after every journal mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalAccessResponse {
    pub ok: bool,
    pub access: String,
    pub entry_count: u32,
    /// `None` when access is unlimited.
    pub remaining_free_entries: Option<u32>,
    pub message: String,
}

impl JournalAccessResponse {
    fn from_profile(profile: &UserProfile, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            access: profile.access_state().as_str().to_string(),
            entry_count: profile.entry_count,
            remaining_free_entries: profile.remaining_free_entries(),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            access: String::new(),
            entry_count: 0,
            remaining_free_entries: None,
            message: message.into(),
        }
    }
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalSaveResponse {
    /// `false` only on errors; a quota refusal is `ok=true, saved=false`.
    pub ok: bool,
    pub saved: bool,
    pub entry_id: Option<String>,
    pub access: String,
    pub entry_count: u32,
    pub message: String,
}

impl JournalSaveResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            saved: false,
            entry_id: None,
            access: String::new(),
            entry_count: 0,
            message: message.into(),
        }
    }
}

/// One page of the journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalListResponse {
    pub ok: bool,
    pub items: Vec<EntryView>,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    pub access: String,
    pub message: String,
}

impl JournalListResponse {
    fn failure(page: u32, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            page,
            total_pages: 0,
            total_items: 0,
            access: String::new(),
            message: message.into(),
        }
    }
}

/// Outcome of a payment widget callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentResponse {
    pub ok: bool,
    pub unlocked: bool,
    pub message: String,
}

/// Selected card back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardBackResponse {
    pub ok: bool,
    /// `classic|alternate|custom`.
    pub kind: String,
    pub image: String,
    pub message: String,
}

impl CardBackResponse {
    fn from_back(back: &CardBack) -> Self {
        let kind = match back {
            CardBack::Classic => "classic",
            CardBack::Alternate => "alternate",
            CardBack::Custom(_) => "custom",
        };
        Self {
            ok: true,
            kind: kind.to_string(),
            image: back.image().to_string(),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            kind: String::new(),
            image: String::new(),
            message: message.into(),
        }
    }
}

/// Registers an email/password account and signs it in.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Creates the journal profile (`free`, 0 entries) on first sign-in.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_register(email: String, password: String) -> AuthResponse {
    complete_sign_in("register", |provider| {
        provider.register(email.as_str(), password.as_str())
    })
}

/// Signs in with email and password.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_login(email: String, password: String) -> AuthResponse {
    complete_sign_in("password", |provider| {
        provider.sign_in_with_password(email.as_str(), password.as_str())
    })
}

/// Completes a federated sign-in reported by the UI popup.
///
/// Input semantics:
/// - `popup_status`: `completed|blocked|cancelled`.
/// - `provider`, `subject`, `email`: only read when completed.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_federated_login(
    popup_status: String,
    provider: String,
    subject: String,
    email: String,
) -> AuthResponse {
    let outcome = match popup_status.trim().to_ascii_lowercase().as_str() {
        "completed" => FederatedSignIn::Completed {
            provider,
            subject,
            email,
        },
        "blocked" => FederatedSignIn::PopupBlocked,
        "cancelled" | "canceled" => FederatedSignIn::PopupCancelled,
        _ => return AuthResponse::failure(UNEXPECTED_ERROR_MESSAGE),
    };
    complete_sign_in("federated", |auth| auth.sign_in_with_federated(outcome))
}

/// Clears the persisted session.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_logout() -> ActionResponse {
    ActionResponse::from_result(
        with_identity(|provider| provider.sign_out())
            .map(|()| String::new())
            .map_err(|_| "Failed to log out. Please try again.".to_string()),
    )
}

/// Requests a password reset email.
///
/// Reports success for unknown addresses too.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_reset_password(email: String) -> ActionResponse {
    ActionResponse::from_result(
        with_identity(|provider| provider.send_password_reset(email.as_str()))
            .map(|()| PASSWORD_RESET_SENT_MESSAGE.to_string())
            .map_err(|err| match err {
                AuthError::InvalidEmail => err.user_message().to_string(),
                _ => "Error sending reset email. Please try again.".to_string(),
            }),
    )
}

/// Draws a fully revealed spread.
///
/// Input semantics:
/// - `kind`: reading type label or alias (`single|day`, `three`, `five`).
#[flutter_rust_bridge::frb(sync)]
pub fn draw_spread(kind: String) -> SpreadResponse {
    let Some(kind) = SpreadKind::parse(kind.as_str()) else {
        return SpreadResponse {
            ok: false,
            reading_type: String::new(),
            cards: Vec::new(),
            message: format!("Unknown spread `{}`.", kind.trim()),
        };
    };

    let mut spread = Spread::new(kind);
    match spread.draw_all(&mut rand::thread_rng()) {
        Ok(()) => SpreadResponse {
            ok: true,
            reading_type: kind.reading_type().label().to_string(),
            cards: spread.slots().iter().flatten().map(to_drawn_view).collect(),
            message: String::new(),
        },
        Err(err) => {
            error!("event=ffi_call module=ffi status=error call=draw_spread error={err}");
            SpreadResponse {
                ok: false,
                reading_type: String::new(),
                cards: Vec::new(),
                message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            }
        }
    }
}

/// Saves a revealed spread to the signed-in user's journal.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - A locked user gets `ok=true, saved=false` and the upgrade prompt.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_save(
    reading_type: String,
    cards: Vec<CardView>,
    notes: String,
) -> JournalSaveResponse {
    let Some(reading_type) = ReadingType::parse(reading_type.as_str()) else {
        return JournalSaveResponse::failure(JournalAction::Add.failure_message());
    };
    let draft = EntryDraft {
        reading_type,
        cards: cards.into_iter().map(to_entry_card).collect(),
        notes,
    };

    match with_journal(JournalAction::Add, |journal, user_id| {
        journal.add_entry(user_id, draft)
    }) {
        Ok(AddEntryOutcome::Saved { entry, profile }) => JournalSaveResponse {
            ok: true,
            saved: true,
            entry_id: Some(entry.id.to_string()),
            access: profile.access_state().as_str().to_string(),
            entry_count: profile.entry_count,
            message: "Reading saved to your journal.".to_string(),
        },
        Ok(AddEntryOutcome::QuotaExceeded { profile }) => JournalSaveResponse {
            ok: true,
            saved: false,
            entry_id: None,
            access: profile.access_state().as_str().to_string(),
            entry_count: profile.entry_count,
            message: QUOTA_EXCEEDED_MESSAGE.to_string(),
        },
        Err(message) => JournalSaveResponse::failure(message),
    }
}

/// Lists one page of the signed-in user's journal, newest first.
///
/// Input semantics:
/// - `reading_type`: exact label or alias; `None` for all types.
/// - `start_ms`/`end_ms`: inclusive epoch-ms bounds.
/// - `page`: 1-based; `0` is treated as `1`.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_list(
    reading_type: Option<String>,
    start_ms: Option<i64>,
    end_ms: Option<i64>,
    page: u32,
) -> JournalListResponse {
    let reading_type = match reading_type.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match ReadingType::parse(raw) {
            Some(parsed) => Some(parsed),
            None => {
                return JournalListResponse::failure(
                    page,
                    format!("Unknown reading type `{raw}`."),
                )
            }
        },
    };
    let filter = JournalFilter {
        reading_type,
        start_ms,
        end_ms,
    };

    match with_journal(JournalAction::Load, |journal, user_id| {
        journal.list_entries(user_id, &filter, page)
    }) {
        Ok(listed) => JournalListResponse {
            ok: true,
            items: listed.items.into_iter().map(to_entry_view).collect(),
            page: listed.page,
            total_pages: listed.total_pages,
            total_items: listed.total_items,
            access: listed.profile.access_state().as_str().to_string(),
            message: String::new(),
        },
        Err(message) => JournalListResponse::failure(page, message),
    }
}

/// Replaces the notes of one of the signed-in user's entries.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_update_notes(entry_id: String, notes: String) -> ActionResponse {
    let result = parse_entry_id(entry_id.as_str(), JournalAction::Update).and_then(|entry_id| {
        with_journal(JournalAction::Update, |journal, user_id| {
            journal.update_entry_notes(user_id, entry_id, notes)
        })
    });
    ActionResponse::from_result(result.map(|_| "Notes updated.".to_string()))
}

/// Deletes one of the signed-in user's entries and returns the access state
/// after it.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_delete(entry_id: String) -> JournalAccessResponse {
    let result = parse_entry_id(entry_id.as_str(), JournalAction::Delete).and_then(|entry_id| {
        with_journal(JournalAction::Delete, |journal, user_id| {
            journal.delete_entry(user_id, entry_id)
        })
    });
    match result {
        Ok(profile) => JournalAccessResponse::from_profile(&profile, "Entry deleted."),
        Err(message) => JournalAccessResponse::failure(message),
    }
}

/// Current journal access for the signed-in user.
#[flutter_rust_bridge::frb(sync)]
pub fn journal_access() -> JournalAccessResponse {
    match with_journal(JournalAction::Load, |journal, user_id| journal.profile(user_id)) {
        Ok(profile) => {
            let message = match profile.access_state() {
                AccessState::Locked => QUOTA_EXCEEDED_MESSAGE,
                AccessState::Free | AccessState::Unlimited => "",
            };
            JournalAccessResponse::from_profile(&profile, message)
        }
        Err(message) => JournalAccessResponse::failure(message),
    }
}

/// Handles the payment widget's completion callback for the signed-in user.
///
/// Input semantics:
/// - `status`: `succeeded|failed|cancelled`.
/// - `detail`: payment reference on success, failure reason otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn payment_complete(status: String, detail: String) -> PaymentResponse {
    let outcome = match status.trim().to_ascii_lowercase().as_str() {
        "succeeded" | "success" => PaymentOutcome::Succeeded { reference: detail },
        "failed" => PaymentOutcome::Failed { reason: detail },
        "cancelled" | "canceled" => PaymentOutcome::Cancelled,
        _ => {
            return PaymentResponse {
                ok: false,
                unlocked: false,
                message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            }
        }
    };

    let mut conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => {
            return PaymentResponse {
                ok: false,
                unlocked: false,
                message,
            }
        }
    };
    let user_id = match session_user_id(&conn, "payment_complete") {
        Ok(user_id) => user_id,
        Err(message) => {
            return PaymentResponse {
                ok: false,
                unlocked: false,
                message,
            }
        }
    };
    let store = match SqliteEntryStore::try_new(&mut conn) {
        Ok(store) => store,
        Err(err) => {
            error!("event=ffi_call module=ffi status=error call=payment_complete error={err}");
            return PaymentResponse {
                ok: false,
                unlocked: false,
                message: UNEXPECTED_ERROR_MESSAGE.to_string(),
            };
        }
    };

    let mut payments = PaymentService::new(JournalService::new(store));
    match payments.handle(user_id.as_str(), outcome) {
        Ok(receipt) => PaymentResponse {
            ok: true,
            unlocked: receipt.unlocked,
            message: receipt.message,
        },
        Err(err) => PaymentResponse {
            ok: false,
            unlocked: false,
            message: err.user_message().to_string(),
        },
    }
}

/// Currently selected card back.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_card_back() -> CardBackResponse {
    match with_deck(|deck| deck.card_back()) {
        Ok(back) => CardBackResponse::from_back(&back),
        Err(message) => CardBackResponse::failure(message),
    }
}

/// Selects a card back.
///
/// Input semantics:
/// - `kind`: `classic|alternate|custom`.
/// - `custom_image`: image reference, required for `custom`.
#[flutter_rust_bridge::frb(sync)]
pub fn deck_set_card_back(kind: String, custom_image: Option<String>) -> CardBackResponse {
    let result = with_deck(|deck| match kind.trim().to_ascii_lowercase().as_str() {
        "custom" => deck.set_custom_image(custom_image.unwrap_or_default()),
        other => CardBack::parse_builtin(other).and_then(|back| deck.set_card_back(back)),
    });
    match result {
        Ok(back) => CardBackResponse::from_back(&back),
        Err(message) => CardBackResponse::failure(message),
    }
}

fn complete_sign_in(
    method: &'static str,
    sign_in: impl FnOnce(
        &LocalIdentityProvider<SqliteAccountRepository<'_>>,
    ) -> Result<AuthUser, AuthError>,
) -> AuthResponse {
    let mut conn = match open_app_db() {
        Ok(conn) => conn,
        Err(message) => return AuthResponse::failure(message),
    };

    let user = {
        let repo = match SqliteAccountRepository::try_new(&conn) {
            Ok(repo) => repo,
            Err(err) => {
                error!("event=ffi_call module=ffi status=error call=auth method={method} error={err}");
                return AuthResponse::failure(UNEXPECTED_ERROR_MESSAGE);
            }
        };
        match sign_in(&LocalIdentityProvider::new(repo)) {
            Ok(user) => user,
            Err(err) => {
                warn!("event=ffi_call module=ffi status=error call=auth method={method} error={err}");
                return AuthResponse::failure(err.user_message());
            }
        }
    };

    let profile = SqliteEntryStore::try_new(&mut conn)
        .map_err(JournalError::from)
        .and_then(|store| {
            JournalService::new(store).ensure_profile(user.user_id.as_str(), user.email.as_str())
        });
    match profile {
        Ok(profile) => AuthResponse::success(user, &profile),
        Err(err) => {
            error!(
                "event=ffi_call module=ffi status=error call=auth method={method} stage=ensure_profile error={err}"
            );
            AuthResponse::failure(UNEXPECTED_ERROR_MESSAGE)
        }
    }
}

fn with_identity<T>(
    f: impl FnOnce(&LocalIdentityProvider<SqliteAccountRepository<'_>>) -> Result<T, AuthError>,
) -> Result<T, AuthError> {
    let conn = open_db(resolve_db_path()).map_err(|err| {
        error!("event=ffi_call module=ffi status=error call=db_open error={err}");
        AuthError::Repo(err.into())
    })?;
    let repo = SqliteAccountRepository::try_new(&conn)?;
    let result = f(&LocalIdentityProvider::new(repo));
    if let Err(err) = &result {
        warn!("event=ffi_call module=ffi status=error call=auth error={err}");
    }
    result
}

fn with_journal<T>(
    action: JournalAction,
    f: impl FnOnce(&mut JournalService<SqliteEntryStore<'_>>, &str) -> Result<T, JournalError>,
) -> Result<T, String> {
    let mut conn = open_app_db()?;
    let user_id = session_user_id(&conn, "journal")?;
    let store = SqliteEntryStore::try_new(&mut conn).map_err(|err| {
        error!("event=ffi_call module=ffi status=error call=journal action={action:?} error={err}");
        action.failure_message().to_string()
    })?;
    let mut journal = JournalService::new(store);
    f(&mut journal, user_id.as_str()).map_err(|err| {
        warn!("event=ffi_call module=ffi status=error call=journal action={action:?} error={err}");
        err.user_message(action).to_string()
    })
}

fn session_user_id(conn: &Connection, call: &str) -> Result<String, String> {
    let repo = SqliteAccountRepository::try_new(conn).map_err(|err| {
        error!("event=ffi_call module=ffi status=error call={call} stage=session error={err}");
        UNEXPECTED_ERROR_MESSAGE.to_string()
    })?;
    match LocalIdentityProvider::new(repo).current_user() {
        Ok(Some(user)) => Ok(user.user_id),
        Ok(None) => {
            warn!("event=ffi_call module=ffi status=error call={call} error_code=no_session");
            Err(LOGIN_REQUIRED_MESSAGE.to_string())
        }
        Err(err) => {
            error!("event=ffi_call module=ffi status=error call={call} stage=session error={err}");
            Err(UNEXPECTED_ERROR_MESSAGE.to_string())
        }
    }
}

fn with_deck<T>(
    f: impl FnOnce(
        &DeckService<SqlitePreferenceRepository<'_>>,
    ) -> Result<T, pocket_tarot_core::DeckError>,
) -> Result<T, String> {
    let conn = open_app_db()?;
    let repo = SqlitePreferenceRepository::try_new(&conn).map_err(|err| {
        error!("event=ffi_call module=ffi status=error call=deck error={err}");
        UNEXPECTED_ERROR_MESSAGE.to_string()
    })?;
    f(&DeckService::new(repo)).map_err(|err| err.to_string())
}

fn open_app_db() -> Result<Connection, String> {
    open_db(resolve_db_path()).map_err(|err| {
        error!("event=ffi_call module=ffi status=error call=db_open error={err}");
        UNEXPECTED_ERROR_MESSAGE.to_string()
    })
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn parse_entry_id(raw: &str, action: JournalAction) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| action.failure_message().to_string())
}

fn to_drawn_view(drawn: &DrawnCard) -> CardView {
    CardView {
        image: drawn.card.image.to_string(),
        title: drawn.title(),
        description: Some(drawn.meaning().to_string()),
        is_reversed: drawn.is_reversed,
    }
}

fn to_entry_card(view: CardView) -> EntryCard {
    EntryCard {
        image: view.image,
        title: view.title,
        description: view.description,
    }
}

fn to_entry_view(entry: JournalEntry) -> EntryView {
    EntryView {
        entry_id: entry.id.to_string(),
        reading_type: entry.reading_type.label().to_string(),
        timestamp_ms: entry.timestamp,
        cards: entry
            .cards
            .into_iter()
            .map(|card| CardView {
                is_reversed: card.title.ends_with(" Reversed"),
                image: card.image,
                title: card.title,
                description: card.description,
            })
            .collect(),
        notes: entry.notes,
    }
}
