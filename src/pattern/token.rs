/// One classified unit of a compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Matches exactly this character.
    Literal(char),
    /// `*` — zero or more characters within one segment.
    Star,
    /// `**` — zero or more characters, may cross the separator.
    StarStar,
    /// `?` — exactly one character, never the separator.
    Question,
    /// `+` — exactly one character, never the separator.
    Plus,
    /// The configured separator character itself.
    Separator,
}

impl Token {
    /// The star tokens, which consume a variable (possibly empty) run of
    /// characters.
    pub fn is_optional(self) -> bool {
        matches!(self, Token::Star | Token::StarStar)
    }

    /// Tokens that can never match an absent input.
    pub fn binds_input(self) -> bool {
        matches!(self, Token::Literal(_) | Token::Plus | Token::Separator)
    }

    /// Numeric factor used by the specificity weight. The values are fixed
    /// for weight stability across releases, not an ordering of their own.
    pub(crate) fn weight_factor(self) -> f32 {
        match self {
            Token::Literal(_) => 1.0,
            Token::Star => 2.0,
            Token::StarStar => 3.0,
            Token::Question => 4.0,
            Token::Plus => 5.0,
            Token::Separator => 9.0,
        }
    }
}
