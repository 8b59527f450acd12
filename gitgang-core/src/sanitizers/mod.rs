//! Text clean-up applied to contributor fields before they are validated.
//!
//! `shell` strips characters that must never reach CI output or generated
//! markdown; `names` normalizes display name capitalization.

pub mod names;
pub mod shell;
