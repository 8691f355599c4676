use crate::pattern::WildcardPattern;

/// A non-empty set of compiled patterns evaluated as "matches any".
///
/// Emptiness is deliberately unrepresentable: constructors collapse an empty
/// pattern list to `None`, so "no patterns configured" stays a distinguished
/// value at the caller (an absent set means "no constraint", which is not
/// the same as a set that never matches).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPatterns {
    patterns: Vec<WildcardPattern>,
}

impl WildcardPatterns {
    /// Compile every pattern string with the given separator. Returns
    /// `None` when the iterator yields nothing.
    pub fn compile<I>(patterns: I, separator: Option<char>) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let patterns: Vec<WildcardPattern> = patterns
            .into_iter()
            .map(|p| WildcardPattern::compile(p.as_ref(), separator))
            .collect();
        Self::from_patterns(patterns)
    }

    /// Wrap already compiled patterns; `None` when the vector is empty.
    pub fn from_patterns(patterns: Vec<WildcardPattern>) -> Option<Self> {
        if patterns.is_empty() {
            None
        } else {
            Some(Self { patterns })
        }
    }

    pub fn patterns(&self) -> &[WildcardPattern] {
        &self.patterns
    }

    /// True iff any contained pattern matches the input.
    #[tracing::instrument(level = "trace", skip(self), fields(patterns = self.patterns.len()))]
    pub fn matches_any(&self, input: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(input))
    }
}

/// Include-unless-excluded filtering over two optional pattern sets.
///
/// An absent include set accepts everything; an absent exclude set rejects
/// nothing. Built once from configuration strings and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeExcludeWildcardPatterns {
    include: Option<WildcardPatterns>,
    exclude: Option<WildcardPatterns>,
}

/// Historical name for the same combinator; the semantics are identical.
pub type RelativeComplementWildcardPatterns = IncludeExcludeWildcardPatterns;

impl IncludeExcludeWildcardPatterns {
    /// Compile include and exclude pattern lists with a shared separator.
    /// Empty lists collapse to absent sets.
    pub fn compile<I, E>(include: I, exclude: E, separator: Option<char>) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            include: WildcardPatterns::compile(include, separator),
            exclude: WildcardPatterns::compile(exclude, separator),
        }
    }

    /// Combine pre-built sets.
    pub fn from_patterns(
        include: Option<WildcardPatterns>,
        exclude: Option<WildcardPatterns>,
    ) -> Self {
        Self { include, exclude }
    }

    /// True iff the input is covered by the include side (or no includes
    /// are configured) and not matched by any exclude pattern.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn matches(&self, input: &str) -> bool {
        let included = self
            .include
            .as_ref()
            .is_none_or(|set| set.matches_any(input));
        let excluded = self
            .exclude
            .as_ref()
            .is_some_and(|set| set.matches_any(input));
        included && !excluded
    }

    pub fn has_include_patterns(&self) -> bool {
        self.include.is_some()
    }

    pub fn has_exclude_patterns(&self) -> bool {
        self.exclude.is_some()
    }

    pub fn has_patterns(&self) -> bool {
        self.include.is_some() || self.exclude.is_some()
    }

    pub fn include_patterns(&self) -> Option<&WildcardPatterns> {
        self.include.as_ref()
    }

    pub fn exclude_patterns(&self) -> Option<&WildcardPatterns> {
        self.exclude.as_ref()
    }
}
