//! badge.rs - Keeps the README contributors badge in sync with the ledger.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

static CONTRIBUTORS_BADGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"!\[Contributors\]\(https://img\.shields\.io/badge/contributors-\d+-brightgreen\.svg\?style=flat-square\)",
    )
    .expect("badge pattern is valid")
});

/// Outcome of [`update_badge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeUpdate {
    /// The README text changed; carries the new document.
    Updated { count: u64, readme: String },
    /// The badge already showed `count`, or there is no badge.
    Unchanged { count: u64 },
}

/// Renders the badge markdown for `count` contributors.
pub fn badge_markdown(count: u64) -> String {
    format!(
        "![Contributors](https://img.shields.io/badge/contributors-{}-brightgreen.svg?style=flat-square)",
        count
    )
}

/// Reads `<total_prefix> N` from a ledger document, `0` when absent.
pub fn contributor_count(ledger_text: &str, total_prefix: &str) -> u64 {
    let pattern = format!(r"{}\s*(\d+)", regex::escape(total_prefix));
    Regex::new(&pattern)
        .ok()
        .and_then(|re| re.captures(ledger_text))
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Rewrites the first contributors badge in `readme` to show `count`.
pub fn update_badge(readme: &str, count: u64) -> BadgeUpdate {
    let badge = badge_markdown(count);
    let updated = CONTRIBUTORS_BADGE.replace(readme, regex::NoExpand(&badge));
    if updated == readme {
        BadgeUpdate::Unchanged { count }
    } else {
        BadgeUpdate::Updated {
            count,
            readme: updated.into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "# Git Gang\n\n![Contributors](https://img.shields.io/badge/contributors-3-brightgreen.svg?style=flat-square)\n";

    #[test]
    fn test_count_from_ledger() {
        assert_eq!(contributor_count("## Our Contributors\n\nTotal contributors: 42\n", "Total contributors:"), 42);
        assert_eq!(contributor_count("no total here", "Total contributors:"), 0);
    }

    #[test]
    fn test_badge_is_rewritten() {
        match update_badge(README, 7) {
            BadgeUpdate::Updated { count, readme } => {
                assert_eq!(count, 7);
                assert!(readme.contains("contributors-7-brightgreen.svg"));
                assert!(!readme.contains("contributors-3-"));
            }
            other => panic!("expected an update, got {:?}", other),
        }
    }

    #[test]
    fn test_same_count_is_a_no_op() {
        assert_eq!(update_badge(README, 3), BadgeUpdate::Unchanged { count: 3 });
        assert_eq!(update_badge("no badge", 3), BadgeUpdate::Unchanged { count: 3 });
    }
}
