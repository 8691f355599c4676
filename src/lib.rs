//! Segment-aware wildcard pattern matching.
//!
//! A glob-like pattern string is compiled once into a compact token
//! sequence, then evaluated against inputs with a single-pass, two-cursor
//! automaton: no regex machinery, no whole-string backtracking.
//!
//! - `*` matches zero or more characters within one segment
//! - `**` matches zero or more characters and may cross the separator
//! - `?` matches exactly one character, never the separator
//! - `+` matches exactly one character, never the separator
//! - `\` escapes the next character as a literal
//!
//! Beyond the yes/no answer, the engine can [`mask`] an input (keep only the
//! characters the wildcards consumed) and, through [`WildcardMatcher`],
//! iterate over the separator-delimited segments of the last matched input.
//! [`WildcardPatterns`] and [`IncludeExcludeWildcardPatterns`] layer
//! "matches any" and "include unless excluded" policies over several
//! compiled patterns.
//!
//! ```
//! use wildmask::WildcardPattern;
//!
//! let pattern = WildcardPattern::compile("/api/**/users", Some('/'));
//! assert!(pattern.matches("/api/v1/users"));
//! assert!(pattern.matches("/api/users"));
//!
//! let plain = WildcardPattern::compile("*.txt", None);
//! assert_eq!(plain.mask("report.txt"), Some("report".to_string()));
//! ```

pub mod engine;
pub mod matcher;
pub mod pattern;
pub mod patterns;

pub use engine::{mask, matches};
pub use matcher::{SegmentError, WildcardMatcher};
pub use pattern::{Token, WildcardPattern, has_wildcards};
pub use patterns::{
    IncludeExcludeWildcardPatterns, RelativeComplementWildcardPatterns, WildcardPatterns,
};
