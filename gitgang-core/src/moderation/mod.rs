// gitgang-core/src/moderation/mod.rs
//! Profanity screening through an external moderation service.
//!
//! The service is not a correctness dependency. Each field is retried under a
//! [`RetryPolicy`]; when every attempt fails the field is reported as profane
//! so the contribution is routed to manual review instead of slipping through.

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::ModerationConfig;
use crate::errors::ModerationError;

pub mod purgomalum;
pub mod retry;

pub use purgomalum::PurgoMalumTransport;
pub use retry::{AttemptFailure, RetryPolicy};

/// A single request to a moderation service.
#[async_trait]
pub trait ModerationTransport: Send + Sync {
    fn name(&self) -> &str;

    /// Sends one query and returns the raw response body.
    async fn query(&self, text: &str) -> Result<String, ModerationError>;
}

/// Interprets a `containsprofanity` body. Anything but `true`/`false` is an error.
pub fn parse_verdict(body: &str) -> Result<bool, ModerationError> {
    let trimmed = body.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ModerationError::UnexpectedBody(trimmed.chars().take(64).collect()))
    }
}

/// Per-field profanity flags for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfanityVerdict {
    pub has_profanity: bool,
    pub profanity_in_name: bool,
    pub profanity_in_message: bool,
}

impl ProfanityVerdict {
    pub fn new(profanity_in_name: bool, profanity_in_message: bool) -> Self {
        Self {
            has_profanity: profanity_in_name || profanity_in_message,
            profanity_in_name,
            profanity_in_message,
        }
    }
}

/// Checks entry fields against a moderation transport, failing closed.
#[derive(Clone)]
pub struct ProfanityChecker {
    transport: Arc<dyn ModerationTransport>,
    policy: RetryPolicy,
}

impl ProfanityChecker {
    pub fn new(transport: Arc<dyn ModerationTransport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Checker backed by the configured HTTP endpoint.
    pub fn from_config(config: &ModerationConfig) -> Self {
        Self::new(
            Arc::new(PurgoMalumTransport::new(config.endpoint.clone())),
            RetryPolicy::from_config(config),
        )
    }

    /// `true` if `text` is flagged, or if the service could not be reached.
    /// Blank text is never sent and is reported clean.
    pub async fn check_text(&self, field: &str, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let transport = &self.transport;
        let label = format!("{} check of {} field", transport.name(), field);
        let outcome = self
            .policy
            .run(&label, |_| async move {
                let body = transport.query(text).await?;
                parse_verdict(&body)
            })
            .await;

        match outcome {
            Ok(flagged) => {
                debug!("{}: flagged={}", label, flagged);
                flagged
            }
            Err(e) => {
                warn!(
                    "Profanity API unavailable after {} attempts ({}). Flagging {} for manual review.",
                    self.policy.max_attempts.max(1),
                    e,
                    field
                );
                true
            }
        }
    }

    /// Checks name and message concurrently and aggregates the flags.
    pub async fn check_entry(&self, name: &str, message: &str) -> ProfanityVerdict {
        let (in_name, in_message) = tokio::join!(
            self.check_text("name", name),
            self.check_text("message", message),
        );
        ProfanityVerdict::new(in_name, in_message)
    }
}
