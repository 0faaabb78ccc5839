//! Card-back customization.
//!
//! # Responsibility
//! - Persist the selected card back and an optional custom image.
//!
//! # Invariants
//! - A missing or unreadable selection falls back to `CardBack::Classic`.
//! - Clearing the custom image never leaves `Custom` selected.

use crate::repo::journal_repo::RepoError;
use crate::repo::preference_repo::PreferenceRepository;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CARD_BACK_KEY: &str = "deck.card_back";
const CUSTOM_IMAGE_KEY: &str = "deck.custom_image";

const CLASSIC_IMAGE: &str = "/assets/images/back-card.png";
const ALTERNATE_IMAGE: &str = "/assets/images/back-two.png";

/// Card back shown on undrawn slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardBack {
    #[default]
    Classic,
    Alternate,
    /// User-supplied image reference (path or data URL).
    Custom(String),
}

impl CardBack {
    pub fn image(&self) -> &str {
        match self {
            Self::Classic => CLASSIC_IMAGE,
            Self::Alternate => ALTERNATE_IMAGE,
            Self::Custom(reference) => reference.as_str(),
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Alternate => "alternate",
            Self::Custom(_) => "custom",
        }
    }

    /// Parses a built-in back name (`classic`, `alternate`).
    pub fn parse_builtin(value: &str) -> Result<Self, DeckError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "alternate" => Ok(Self::Alternate),
            other => Err(DeckError::UnknownCardBack(other.to_string())),
        }
    }
}

/// Deck customization errors.
#[derive(Debug)]
pub enum DeckError {
    EmptyCustomImage,
    UnknownCardBack(String),
    Repo(RepoError),
}

impl Display for DeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCustomImage => write!(f, "custom card back image is empty"),
            Self::UnknownCardBack(value) => {
                write!(f, "unknown card back `{value}`; expected classic|alternate")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DeckError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for DeckError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Card-back preference service.
pub struct DeckService<R: PreferenceRepository> {
    repo: R,
}

impl<R: PreferenceRepository> DeckService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Currently selected card back.
    pub fn card_back(&self) -> Result<CardBack, DeckError> {
        let selected = self.repo.get_preference(CARD_BACK_KEY)?;
        let back = match selected.as_deref() {
            None | Some("classic") => CardBack::Classic,
            Some("alternate") => CardBack::Alternate,
            Some("custom") => match self.custom_image()? {
                Some(reference) => CardBack::Custom(reference),
                None => CardBack::Classic,
            },
            Some(other) => {
                warn!("event=deck_load module=deck status=fallback stored={other}");
                CardBack::Classic
            }
        };
        Ok(back)
    }

    /// Stored custom image, if any.
    pub fn custom_image(&self) -> Result<Option<String>, DeckError> {
        Ok(self.repo.get_preference(CUSTOM_IMAGE_KEY)?)
    }

    /// Selects a card back. `Custom` also stores its image.
    pub fn set_card_back(&self, back: CardBack) -> Result<CardBack, DeckError> {
        if let CardBack::Custom(reference) = &back {
            let trimmed = reference.trim();
            if trimmed.is_empty() {
                return Err(DeckError::EmptyCustomImage);
            }
            self.repo.set_preference(CUSTOM_IMAGE_KEY, trimmed)?;
        }
        self.repo.set_preference(CARD_BACK_KEY, back.key())?;
        info!(
            "event=deck_select module=deck status=ok card_back={}",
            back.key()
        );
        self.card_back()
    }

    /// Stores a custom image and selects it.
    pub fn set_custom_image(&self, reference: impl Into<String>) -> Result<CardBack, DeckError> {
        self.set_card_back(CardBack::Custom(reference.into()))
    }

    /// Drops the custom image; falls back to `Classic` if it was selected.
    pub fn clear_custom_image(&self) -> Result<CardBack, DeckError> {
        let was_selected = matches!(self.card_back()?, CardBack::Custom(_));
        self.repo.remove_preference(CUSTOM_IMAGE_KEY)?;
        if was_selected {
            self.repo
                .set_preference(CARD_BACK_KEY, CardBack::Classic.key())?;
        }
        self.card_back()
    }

    /// Backs the user can pick from: built-ins plus the stored custom image.
    pub fn available_backs(&self) -> Result<Vec<CardBack>, DeckError> {
        let mut backs = vec![CardBack::Classic, CardBack::Alternate];
        if let Some(reference) = self.custom_image()? {
            backs.push(CardBack::Custom(reference));
        }
        Ok(backs)
    }
}
