//! Literal marker predicates

use serde::{Deserialize, Serialize};

/// How a marker pattern is matched against a document line.
///
/// Markers are literal text, never structure: `Contains` is substring
/// containment, `Exact` is whole-line equality with indentation included.
/// Lines are compared without their terminators, so patterns are newline
/// agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", content = "pattern", rename_all = "snake_case")]
pub enum Matcher {
    /// The line contains the pattern as a substring.
    Contains(String),
    /// The line equals the pattern exactly.
    Exact(String),
}

impl Matcher {
    /// Check a single line against this predicate.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::Contains(pattern) => line.contains(pattern.as_str()),
            Self::Exact(pattern) => line == pattern,
        }
    }

    /// The literal pattern text.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Contains(pattern) | Self::Exact(pattern) => pattern,
        }
    }

    /// An empty pattern would match every line; plans reject it.
    pub fn is_empty(&self) -> bool {
        self.pattern().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  <Panel kind=\"feed\">", "<Panel", true)]
    #[case("  <Panel kind=\"feed\">", "</Panel>", false)]
    #[case("plain text", "plain text", true)]
    #[case("", "x", false)]
    fn contains_is_substring_containment(
        #[case] line: &str,
        #[case] pattern: &str,
        #[case] expected: bool,
    ) {
        let matcher = Matcher::Contains(pattern.to_string());
        assert_eq!(matcher.matches(line), expected);
    }

    #[rstest]
    #[case("          </Panel>", "          </Panel>", true)]
    // Indentation is part of the pattern: two extra spaces must not match.
    #[case("            </Panel>", "          </Panel>", false)]
    #[case("</Panel>", "          </Panel>", false)]
    fn exact_is_whole_line_equality(
        #[case] line: &str,
        #[case] pattern: &str,
        #[case] expected: bool,
    ) {
        let matcher = Matcher::Exact(pattern.to_string());
        assert_eq!(matcher.matches(line), expected);
    }

    #[test]
    fn deeper_indented_close_contains_the_shallower_pattern() {
        // This is why close markers use Exact: a nested close line contains
        // the shallower close as a substring.
        let nested = "            </Panel>";
        assert!(Matcher::Contains("          </Panel>".to_string()).matches(nested));
        assert!(!Matcher::Exact("          </Panel>".to_string()).matches(nested));
    }

    #[test]
    fn empty_pattern_is_flagged() {
        assert!(Matcher::Contains(String::new()).is_empty());
        assert!(!Matcher::Exact(" ".to_string()).is_empty());
    }
}
