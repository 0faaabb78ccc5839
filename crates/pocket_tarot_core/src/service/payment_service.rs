//! Payment confirmation handler.
//!
//! # Responsibility
//! - Translate the external payment widget's completion signal into a
//!   `confirm_payment` transition.
//!
//! # Invariants
//! - Failed or cancelled payments never change journal state.
//! - Re-delivered success signals are harmless (`confirm_payment` is
//!   idempotent).

use crate::model::profile::UserProfile;
use crate::repo::journal_repo::EntryStore;
use crate::service::clock::{Clock, SystemClock};
use crate::service::journal_service::{JournalError, JournalService};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const PAYMENT_SUCCESS_MESSAGE: &str =
    "Payment successful! You now have unlimited journal access.";
pub const PAYMENT_ACCESS_UPDATE_FAILED_MESSAGE: &str =
    "Payment was successful, but there was an issue updating your access. Please refresh the page.";
pub const PAYMENT_CANCELLED_MESSAGE: &str = "Payment was cancelled. Your journal access is unchanged.";

/// Completion signal from the payment widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Succeeded { reference: String },
    Failed { reason: String },
    Cancelled,
}

/// What the user is told after a payment callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Whether unlimited access was granted by this callback.
    pub unlocked: bool,
    /// Profile after the grant, when one happened.
    pub profile: Option<UserProfile>,
    pub message: String,
}

/// Payment succeeded externally but access could not be updated.
#[derive(Debug)]
pub struct PaymentError {
    pub reference: String,
    pub source: JournalError,
}

impl PaymentError {
    pub fn user_message(&self) -> &'static str {
        PAYMENT_ACCESS_UPDATE_FAILED_MESSAGE
    }
}

impl Display for PaymentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "payment {} succeeded but access update failed: {}",
            self.reference, self.source
        )
    }
}

impl Error for PaymentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Routes payment widget callbacks into the journal controller.
pub struct PaymentService<S: EntryStore, C: Clock = SystemClock> {
    journal: JournalService<S, C>,
}

impl<S: EntryStore, C: Clock> PaymentService<S, C> {
    pub fn new(journal: JournalService<S, C>) -> Self {
        Self { journal }
    }

    /// Handles one payment completion signal for `user_id`.
    pub fn handle(
        &mut self,
        user_id: &str,
        outcome: PaymentOutcome,
    ) -> Result<PaymentReceipt, PaymentError> {
        match outcome {
            PaymentOutcome::Succeeded { reference } => {
                match self.journal.confirm_payment(user_id) {
                    Ok(profile) => {
                        info!(
                            "event=payment_callback module=payment status=ok user_id={} reference={}",
                            user_id, reference
                        );
                        Ok(PaymentReceipt {
                            unlocked: true,
                            profile: Some(profile),
                            message: PAYMENT_SUCCESS_MESSAGE.to_string(),
                        })
                    }
                    Err(source) => {
                        warn!(
                            "event=payment_callback module=payment status=error user_id={} reference={} error={}",
                            user_id, reference, source
                        );
                        Err(PaymentError { reference, source })
                    }
                }
            }
            PaymentOutcome::Failed { reason } => {
                warn!(
                    "event=payment_callback module=payment status=failed user_id={}",
                    user_id
                );
                Ok(PaymentReceipt {
                    unlocked: false,
                    profile: None,
                    message: format!("Payment failed: {reason}. Your journal access is unchanged."),
                })
            }
            PaymentOutcome::Cancelled => {
                info!(
                    "event=payment_callback module=payment status=cancelled user_id={}",
                    user_id
                );
                Ok(PaymentReceipt {
                    unlocked: false,
                    profile: None,
                    message: PAYMENT_CANCELLED_MESSAGE.to_string(),
                })
            }
        }
    }

    pub fn journal(&self) -> &JournalService<S, C> {
        &self.journal
    }

    pub fn into_journal(self) -> JournalService<S, C> {
        self.journal
    }
}
