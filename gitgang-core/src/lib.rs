// gitgang-core/src/lib.rs
//! # Git Gang Core Library
//!
//! `gitgang-core` holds the logic behind the Git Gang "add your name"
//! contribution workflow: reading a contributor's entry from the staging
//! document, validating and canonicalizing it, screening it with an external
//! profanity service, and maintaining the contributors ledger and README badge.
//!
//! The library works on strings. It never touches the filesystem or process
//! state; the `gitgang` CLI does that and passes the text in.
//!
//! ## Modules
//!
//! * `config`: [`GitGangConfig`] with maintainers, template markers, ledger layout and moderation settings.
//! * `sanitizers`: shell metacharacter stripping and display name capitalization.
//! * `entry`: the [`Entry`] model and the list/legacy grammars behind [`parse_entry`].
//! * `validators`: GitHub username syntax and [`validate_entry`].
//! * `ledger`: the [`Ledger`] document model and [`DuplicateChecker`].
//! * `staging`: template checks, entry section extraction and template rendering.
//! * `badge`: contributor count badge rewriting.
//! * `moderation`: [`ProfanityChecker`], its transport seam and [`RetryPolicy`].
//! * `pipeline`: end-to-end workflows composed from the above.
//!
//! ## Usage Example
//!
//! ```rust
//! use gitgang_core::{validate_submission, GitGangConfig};
//!
//! let staging = "# Add Your Name Here\n\
//!                Want to join the Git Gang?\n\
//!                ## Add your entry below this line\n\
//!                - Name: jane doe\n\
//!                - Username: janedoe\n\
//!                - Message: hello\n";
//!
//! let validated = validate_submission(staging, "", &GitGangConfig::default()).unwrap();
//! assert_eq!(validated.entry, "[Jane Doe](https://github.com/janedoe) - hello");
//! ```
//!
//! ## Error Handling
//!
//! Terminal failures are [`GitGangError`] values; format problems carry a
//! [`FormatError`]. Moderation outages never surface as errors: they resolve
//! to a flagged verdict.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod badge;
pub mod config;
pub mod entry;
pub mod errors;
pub mod ledger;
pub mod moderation;
pub mod pipeline;
pub mod sanitizers;
pub mod staging;
pub mod validators;

pub use badge::{badge_markdown, contributor_count, update_badge, BadgeUpdate};
pub use config::{GitGangConfig, LedgerConfig, ModerationConfig, StagingConfig};
pub use entry::{display_fields, parse_entry, Entry, ParsedEntry};
pub use errors::{FormatError, GitGangError, ModerationError};
pub use ledger::{is_existing_contributor, DuplicateChecker, Ledger, LedgerEntry};
pub use moderation::{
    parse_verdict, ModerationTransport, ProfanityChecker, ProfanityVerdict, PurgoMalumTransport,
    RetryPolicy,
};
pub use pipeline::{
    process_entry, sort_ledger, validate_submission, validate_submission_with_moderation,
    SortSummary, ValidationReport,
};
pub use sanitizers::names::capitalize_words;
pub use sanitizers::shell::sanitize_input;
pub use staging::{check_template, extract_entry_section, render_template};
pub use validators::{is_valid_github_username, validate_entry, validate_format, ValidatedEntry};
