//! Pocket Tarot command-line shell.
//!
//! # Responsibility
//! - Drive the core use cases from a terminal: draw spreads, sign in,
//!   manage the journal, simulate the payment callback, pick a card back.
//! - Print the same user-facing messages the app shows.
//!
//! # Invariants
//! - Journal commands act on the persisted session user only.
//! - Exit code is non-zero whenever a command reports an error.

use chrono::{DateTime, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use pocket_tarot_core::db::open_db;
use pocket_tarot_core::{
    core_version, default_log_level, init_logging, AccessState, AddEntryOutcome, AuthUser,
    CardBack, DeckService, DrawnCard, FederatedSignIn, IdentityProvider, JournalAction,
    JournalEntry, JournalFilter, JournalService, LocalIdentityProvider, PaymentOutcome,
    PaymentService, ReadingType, Spread, SpreadKind, SqliteAccountRepository, SqliteEntryStore,
    SqlitePreferenceRepository, UserProfile, PASSWORD_RESET_SENT_MESSAGE,
    QUOTA_EXCEEDED_MESSAGE,
};
use rusqlite::Connection;
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

const DB_FILE_NAME: &str = "pocket_tarot.sqlite3";
const DATE_FORMAT: &str = "%Y-%m-%d";
const LOGIN_FIRST_MESSAGE: &str = "Please log in first (`pocket-tarot login`).";

type CliResult = Result<(), String>;

/// Draw tarot spreads and keep a reading journal.
#[derive(Parser)]
#[command(name = "pocket-tarot", version, about)]
struct Cli {
    /// SQLite database file.
    #[arg(long, global = true, env = "POCKET_TAROT_DB_PATH")]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a spread without saving it
    Draw {
        /// single|three|five, or a reading type label
        #[arg(default_value = "single")]
        kind: String,
    },
    /// Print the core version
    Version,
    #[command(flatten)]
    Stored(StoredCommand),
}

/// Commands that read or write the database.
#[derive(Subcommand)]
enum StoredCommand {
    /// Create an account and sign in
    Register { email: String, password: String },
    /// Sign in with email and password, or through a federated provider
    Login(LoginArgs),
    /// Sign out
    Logout,
    /// Send a password reset link
    ResetPassword { email: String },
    /// Journal entries of the signed-in user
    Journal {
        #[command(subcommand)]
        action: JournalCommand,
    },
    /// Complete the one-time payment for unlimited journal entries
    Upgrade {
        #[arg(long, value_enum, default_value_t = PaymentStatus::Succeeded)]
        status: PaymentStatus,
        /// Payment reference, or the failure reason for `--status failed`
        #[arg(long, default_value = "cli")]
        detail: String,
    },
    /// Card back customization
    Deck {
        #[command(subcommand)]
        action: DeckCommand,
    },
}

#[derive(Args)]
struct LoginArgs {
    email: String,
    /// Required unless `--provider` is given
    password: Option<String>,
    /// Federated provider name, e.g. `google`
    #[arg(long, requires = "subject")]
    provider: Option<String>,
    /// Provider subject id
    #[arg(long)]
    subject: Option<String>,
}

#[derive(Subcommand)]
enum JournalCommand {
    /// Draw a spread and save it
    Save {
        #[arg(default_value = "single")]
        kind: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List entries, newest first
    List {
        /// Exact reading type (label or alias)
        #[arg(long = "type")]
        reading_type: Option<String>,
        /// First day, YYYY-MM-DD (UTC)
        #[arg(long)]
        from: Option<String>,
        /// Last day, YYYY-MM-DD (UTC), inclusive
        #[arg(long)]
        to: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Replace the notes of an entry
    Notes { entry_id: String, notes: String },
    /// Delete an entry
    Delete { entry_id: String },
    /// Show journal access
    Status,
}

#[derive(Subcommand)]
enum DeckCommand {
    /// Show the selected card back
    Show,
    /// Select a built-in back or a custom image
    Set {
        /// classic|alternate
        #[arg(required_unless_present = "custom")]
        back: Option<String>,
        /// Custom image path or data URL
        #[arg(long, conflicts_with = "back")]
        custom: Option<String>,
    },
    /// Drop the custom image
    ClearCustom,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaymentStatus {
    Succeeded,
    Failed,
    Cancelled,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    match cli.command {
        Command::Draw { kind } => draw(&kind),
        Command::Version => {
            println!("pocket_tarot_core version={}", core_version());
            Ok(())
        }
        Command::Stored(command) => {
            let db_path = cli
                .db
                .unwrap_or_else(|| std::env::temp_dir().join(DB_FILE_NAME));
            let mut conn = open_db(&db_path)
                .map_err(|err| format!("cannot open {}: {err}", db_path.display()))?;
            info!(
                "event=cli_command module=cli status=start db={}",
                db_path.display()
            );
            dispatch(&mut conn, command)
        }
    }
}

fn dispatch(conn: &mut Connection, command: StoredCommand) -> CliResult {
    match command {
        StoredCommand::Register { email, password } => {
            let user = with_identity(conn, |auth| auth.register(&email, &password))?;
            finish_sign_in(conn, &user)
        }
        StoredCommand::Login(args) => {
            let user = with_identity(conn, |auth| match (args.provider, args.password) {
                (Some(provider), _) => auth.sign_in_with_federated(FederatedSignIn::Completed {
                    provider,
                    subject: args.subject.unwrap_or_default(),
                    email: args.email.clone(),
                }),
                (None, Some(password)) => auth.sign_in_with_password(&args.email, &password),
                (None, None) => auth.sign_in_with_password(&args.email, ""),
            })?;
            finish_sign_in(conn, &user)
        }
        StoredCommand::Logout => {
            with_identity(conn, |auth| auth.sign_out())?;
            println!("Signed out.");
            Ok(())
        }
        StoredCommand::ResetPassword { email } => {
            with_identity(conn, |auth| auth.send_password_reset(&email))?;
            println!("{PASSWORD_RESET_SENT_MESSAGE}");
            Ok(())
        }
        StoredCommand::Journal { action } => {
            let user = session_user(conn)?;
            journal(conn, &user, action)
        }
        StoredCommand::Upgrade { status, detail } => {
            let user = session_user(conn)?;
            upgrade(conn, &user, status, detail)
        }
        StoredCommand::Deck { action } => deck(conn, action),
    }
}

fn draw(kind: &str) -> CliResult {
    let spread = draw_spread(kind)?;
    println!("{}", spread.kind().reading_type());
    for (position, drawn) in spread.slots().iter().flatten().enumerate() {
        print_drawn(position + 1, drawn);
    }
    Ok(())
}

fn draw_spread(kind: &str) -> Result<Spread, String> {
    let kind = SpreadKind::parse(kind)
        .ok_or_else(|| format!("unknown spread `{kind}`; expected single|three|five"))?;
    let mut spread = Spread::new(kind);
    spread
        .draw_all(&mut rand::thread_rng())
        .map_err(|err| err.to_string())?;
    Ok(spread)
}

fn journal(conn: &mut Connection, user: &AuthUser, action: JournalCommand) -> CliResult {
    let store = SqliteEntryStore::try_new(conn).map_err(|err| err.to_string())?;
    let mut journal = JournalService::new(store);

    match action {
        JournalCommand::Save { kind, notes } => {
            let spread = draw_spread(&kind)?;
            let draft = spread.to_draft(notes).map_err(|err| err.to_string())?;
            let outcome = journal
                .add_entry(&user.user_id, draft)
                .map_err(|err| err.user_message(JournalAction::Add).to_string())?;
            match outcome {
                AddEntryOutcome::Saved { entry, profile } => {
                    print_entry(&entry);
                    println!("Saved. {}", describe_access(&profile));
                    Ok(())
                }
                AddEntryOutcome::QuotaExceeded { .. } => Err(QUOTA_EXCEEDED_MESSAGE.to_string()),
            }
        }
        JournalCommand::List {
            reading_type,
            from,
            to,
            page,
        } => {
            let filter = JournalFilter {
                reading_type: reading_type.as_deref().map(parse_reading_type).transpose()?,
                start_ms: from.as_deref().map(start_of_day_ms).transpose()?,
                end_ms: to.as_deref().map(end_of_day_ms).transpose()?,
            };
            let listed = journal
                .list_entries(&user.user_id, &filter, page)
                .map_err(|err| err.user_message(JournalAction::Load).to_string())?;
            if listed.items.is_empty() {
                println!("No journal entries.");
            }
            for entry in &listed.items {
                print_entry(entry);
            }
            println!(
                "Page {} of {} ({} entries). {}",
                listed.page,
                listed.total_pages.max(1),
                listed.total_items,
                describe_access(&listed.profile)
            );
            Ok(())
        }
        JournalCommand::Notes { entry_id, notes } => {
            let entry_id = parse_entry_id(&entry_id, JournalAction::Update)?;
            journal
                .update_entry_notes(&user.user_id, entry_id, notes)
                .map_err(|err| err.user_message(JournalAction::Update).to_string())?;
            println!("Notes updated.");
            Ok(())
        }
        JournalCommand::Delete { entry_id } => {
            let entry_id = parse_entry_id(&entry_id, JournalAction::Delete)?;
            let profile = journal
                .delete_entry(&user.user_id, entry_id)
                .map_err(|err| err.user_message(JournalAction::Delete).to_string())?;
            println!("Entry deleted. {}", describe_access(&profile));
            Ok(())
        }
        JournalCommand::Status => {
            let profile = journal
                .profile(&user.user_id)
                .map_err(|err| err.user_message(JournalAction::Load).to_string())?;
            println!("{} ({})", describe_access(&profile), user.email);
            Ok(())
        }
    }
}

fn upgrade(
    conn: &mut Connection,
    user: &AuthUser,
    status: PaymentStatus,
    detail: String,
) -> CliResult {
    let store = SqliteEntryStore::try_new(conn).map_err(|err| err.to_string())?;
    let mut payments = PaymentService::new(JournalService::new(store));
    let outcome = match status {
        PaymentStatus::Succeeded => PaymentOutcome::Succeeded { reference: detail },
        PaymentStatus::Failed => PaymentOutcome::Failed { reason: detail },
        PaymentStatus::Cancelled => PaymentOutcome::Cancelled,
    };
    let receipt = payments
        .handle(&user.user_id, outcome)
        .map_err(|err| err.user_message().to_string())?;
    println!("{}", receipt.message);
    Ok(())
}

fn deck(conn: &Connection, action: DeckCommand) -> CliResult {
    let repo = SqlitePreferenceRepository::try_new(conn).map_err(|err| err.to_string())?;
    let deck = DeckService::new(repo);
    let back = match action {
        DeckCommand::Show => deck.card_back(),
        DeckCommand::Set {
            custom: Some(reference),
            ..
        } => deck.set_custom_image(reference),
        DeckCommand::Set { back, custom: None } => {
            CardBack::parse_builtin(back.as_deref().unwrap_or_default())
                .and_then(|back| deck.set_card_back(back))
        }
        DeckCommand::ClearCustom => deck.clear_custom_image(),
    }
    .map_err(|err| err.to_string())?;
    println!("Card back: {}", back.image());
    Ok(())
}

fn with_identity<T>(
    conn: &Connection,
    f: impl FnOnce(
        &LocalIdentityProvider<SqliteAccountRepository<'_>>,
    ) -> Result<T, pocket_tarot_core::AuthError>,
) -> Result<T, String> {
    let repo = SqliteAccountRepository::try_new(conn).map_err(|err| err.to_string())?;
    f(&LocalIdentityProvider::new(repo)).map_err(|err| err.user_message().to_string())
}

fn session_user(conn: &Connection) -> Result<AuthUser, String> {
    with_identity(conn, |auth| auth.current_user())?
        .ok_or_else(|| LOGIN_FIRST_MESSAGE.to_string())
}

fn finish_sign_in(conn: &mut Connection, user: &AuthUser) -> CliResult {
    let store = SqliteEntryStore::try_new(conn).map_err(|err| err.to_string())?;
    let profile = JournalService::new(store)
        .ensure_profile(&user.user_id, &user.email)
        .map_err(|err| err.to_string())?;
    println!("Signed in as {}. {}", user.email, describe_access(&profile));
    Ok(())
}

fn describe_access(profile: &UserProfile) -> String {
    match profile.access_state() {
        AccessState::Unlimited => "Unlimited journal access.".to_string(),
        AccessState::Locked => QUOTA_EXCEEDED_MESSAGE.to_string(),
        AccessState::Free => format!(
            "{} of {} free entries left.",
            profile.remaining_free_entries().unwrap_or_default(),
            pocket_tarot_core::FREE_ENTRY_QUOTA
        ),
    }
}

fn parse_reading_type(raw: &str) -> Result<ReadingType, String> {
    ReadingType::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = ReadingType::ALL.iter().map(|kind| kind.label()).collect();
        format!(
            "unknown reading type `{raw}`; expected one of: {}",
            known.join(", ")
        )
    })
}

fn parse_entry_id(raw: &str, action: JournalAction) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| action.failure_message().to_string())
}

fn start_of_day_ms(raw: &str) -> Result<i64, String> {
    let date = parse_date(raw)?;
    date.and_hms_milli_opt(0, 0, 0, 0)
        .map(|start| start.and_utc().timestamp_millis())
        .ok_or_else(|| format!("invalid date `{raw}`"))
}

fn end_of_day_ms(raw: &str) -> Result<i64, String> {
    let date = parse_date(raw)?;
    date.and_hms_milli_opt(23, 59, 59, 999)
        .map(|end| end.and_utc().timestamp_millis())
        .ok_or_else(|| format!("invalid date `{raw}`"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| format!("invalid date `{raw}`; expected YYYY-MM-DD"))
}

fn print_drawn(position: usize, drawn: &DrawnCard) {
    println!("  {position}. {}", drawn.title());
    println!("     {}", drawn.meaning());
}

fn print_entry(entry: &JournalEntry) {
    let when = DateTime::from_timestamp_millis(entry.timestamp)
        .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| entry.timestamp.to_string());
    println!("{}  {}  {}", entry.id, when, entry.reading_type);
    for card in &entry.cards {
        println!("  - {}", card.title);
    }
    if !entry.notes.is_empty() {
        println!("  notes: {}", entry.notes);
    }
}

#[cfg(test)]
mod tests {
    use super::{end_of_day_ms, parse_reading_type, start_of_day_ms, Cli};
    use pocket_tarot_core::ReadingType;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn date_range_covers_whole_days() {
        let start = start_of_day_ms("2024-03-01").unwrap();
        let end = end_of_day_ms("2024-03-01").unwrap();
        assert_eq!(start, 1_709_251_200_000);
        assert_eq!(end - start, 86_400_000 - 1);
        assert!(start_of_day_ms("03/01/2024").is_err());
    }

    #[test]
    fn reading_type_filter_lists_known_labels_on_error() {
        assert_eq!(parse_reading_type("three"), Ok(ReadingType::ThreeCard));
        let err = parse_reading_type("celtic").unwrap_err();
        assert!(err.contains("Card of the Day, Three Card Reading, Five Card Reading"));
    }
}
