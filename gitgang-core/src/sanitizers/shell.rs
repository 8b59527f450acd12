//! shell.rs - Strips shell metacharacters from free-text fields.
//!
//! Values end up in CI output files and in generated commit content, so the
//! characters a shell or a markdown link would interpret are removed outright.
//!
//! License: MIT OR APACHE 2.0

/// Characters removed by [`sanitize_input`].
pub const SHELL_METACHARACTERS: &[char] = &[';', '&', '|', '`', '$', '(', ')', '{', '}', '[', ']', '<', '>'];

/// Removes shell metacharacters and trims surrounding whitespace.
pub fn sanitize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !SHELL_METACHARACTERS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_metacharacters() {
        assert_eq!(sanitize_input("hello; rm -rf /"), "hello rm -rf /");
        assert_eq!(sanitize_input("$(whoami)`id`"), "whoamiid");
        assert_eq!(sanitize_input("a|b&c<d>e{f}[g]"), "abcdefg");
    }

    #[test]
    fn test_trims_after_stripping() {
        assert_eq!(sanitize_input("  (hi)  "), "hi");
        assert_eq!(sanitize_input("()"), "");
    }

    #[test]
    fn test_leaves_plain_text_alone() {
        assert_eq!(sanitize_input("Mary-Jane O'Brien"), "Mary-Jane O'Brien");
        assert_eq!(sanitize_input("Hello, world! :)"), "Hello, world! :");
    }
}
