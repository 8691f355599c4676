use std::fmt;
use std::hash::{Hash, Hasher};

use memchr::memchr3;

use super::Token;
use super::compiler::parse_pattern;
use crate::engine;

/// A compiled wildcard pattern.
///
/// Compilation happens once; the resulting value is immutable and safe to
/// share across threads and match calls. Identity (`Eq`, `Hash`, `Display`)
/// is defined by the original pattern text plus the separator, so compiled
/// patterns can be cached by their source.
///
/// Recognized syntax:
///
/// | syntax | meaning |
/// |--------|---------|
/// | `*`    | zero or more characters within one segment |
/// | `**`   | zero or more characters, may cross the separator |
/// | `?`    | exactly one character, never the separator |
/// | `+`    | exactly one character, never the separator |
/// | `\`    | escapes the next character as a literal |
///
/// Any other character, including the configured separator, matches itself.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    separator: Option<char>,
    tokens: Box<[Token]>,
    weight: f32,
}

impl WildcardPattern {
    /// Compile a pattern with an optional segment separator. Without a
    /// separator the pattern is matched in plain wildcard mode and `**`
    /// behaves like an unbounded `*`.
    pub fn compile(source: &str, separator: Option<char>) -> Self {
        let (tokens, weight) = parse_pattern(source, separator);
        Self {
            source: source.to_string(),
            separator,
            tokens,
            weight,
        }
    }

    /// The original pattern text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The configured segment separator, if any.
    pub fn separator(&self) -> Option<char> {
        self.separator
    }

    /// Specificity score for ranking competing patterns; higher means more
    /// specific. Purely heuristic.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// The compacted token sequence, in pattern order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Test the given input against this pattern.
    pub fn matches(&self, input: &str) -> bool {
        engine::matches(self, Some(input))
    }

    /// Whether this pattern could match an absent input, which only a
    /// pattern made of non-binding wildcard tokens can. Equivalent to
    /// `engine::matches(self, None)`.
    pub fn matches_absent(&self) -> bool {
        engine::matches(self, None)
    }

    /// Extract the substring consumed by wildcard tokens, or `None` when the
    /// input does not match. `mask` succeeds exactly when [`matches`] does.
    ///
    /// [`matches`]: WildcardPattern::matches
    pub fn mask(&self, input: &str) -> Option<String> {
        engine::mask(self, input)
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for WildcardPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.separator == other.separator
    }
}

impl Eq for WildcardPattern {}

impl Hash for WildcardPattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.separator.hash(state);
    }
}

/// Fast pre-check for the presence of any wildcard character (`*`, `?`,
/// `+`). Escapes are not taken into account; this is a coarse filter for
/// callers that want to skip compilation of purely literal strings.
pub fn has_wildcards(s: &str) -> bool {
    memchr3(b'*', b'?', b'+', s.as_bytes()).is_some()
}
