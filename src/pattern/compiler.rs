use super::Token;

/// Transient classification of one source position. `Skip` marks positions
/// that are consumed by escapes or degenerate wildcard runs and never
/// survives compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Raw {
    Literal,
    Star,
    StarStar,
    Question,
    Plus,
    Separator,
    Skip,
}

/// Compile a raw pattern string into its compacted token sequence and
/// specificity weight. Never fails: a degenerate pattern still compiles and
/// simply rejects inputs at match time.
#[tracing::instrument(level = "trace", fields(pattern = %source))]
pub fn parse_pattern(source: &str, separator: Option<char>) -> (Box<[Token]>, f32) {
    let chars: Vec<char> = source.chars().collect();
    let mut kinds = vec![Raw::Skip; chars.len()];

    // `star` tracks an unresolved single `*` from the previous position,
    // `esc` a pending backslash, `prev` the last non-skip classification.
    let mut star = false;
    let mut esc = false;
    let mut prev: Option<(usize, Raw)> = None;

    for (i, &c) in chars.iter().enumerate() {
        if separator == Some(c) {
            // The separator is structural and cannot be escaped; a pending
            // escape before it is abandoned.
            esc = false;
            kinds[i] = Raw::Separator;
        } else if esc {
            esc = false;
            kinds[i] = Raw::Literal;
        } else {
            match c {
                '*' => {
                    if star {
                        kinds[i - 1] = Raw::Skip;
                        kinds[i] = Raw::StarStar;
                    } else {
                        kinds[i] = Raw::Star;
                        // `?` directly before a fresh `*` adds nothing the
                        // star would not already match.
                        if let Some((pi, Raw::Question)) = prev {
                            kinds[pi] = Raw::Skip;
                        }
                    }
                }
                '?' => {
                    kinds[i] = match prev {
                        Some((_, Raw::Star)) => Raw::Skip,
                        _ => Raw::Question,
                    };
                }
                '+' => {
                    kinds[i] = match prev {
                        Some((_, Raw::Star)) => Raw::Skip,
                        _ => Raw::Plus,
                    };
                }
                '\\' => {
                    kinds[i] = Raw::Skip;
                    esc = true;
                }
                _ => {
                    kinds[i] = Raw::Literal;
                }
            }
        }

        star = kinds[i] == Raw::Star;
        if kinds[i] != Raw::Skip {
            prev = Some((i, kinds[i]));
        }
    }

    // Compaction: skipped positions are simply never emitted.
    let tokens: Vec<Token> = chars
        .iter()
        .zip(kinds.iter())
        .filter_map(|(&c, &kind)| match kind {
            Raw::Literal => Some(Token::Literal(c)),
            Raw::Star => Some(Token::Star),
            Raw::StarStar => Some(Token::StarStar),
            Raw::Question => Some(Token::Question),
            Raw::Plus => Some(Token::Plus),
            Raw::Separator => Some(Token::Separator),
            Raw::Skip => None,
        })
        .collect();

    let weight = specificity_weight(&tokens);

    (tokens.into_boxed_slice(), weight)
}

/// Heuristic ranking score: later tokens weigh more, and each kind carries
/// its own factor. Used only to prefer one matching pattern over another,
/// never for correctness.
fn specificity_weight(tokens: &[Token]) -> f32 {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| (i as f32 + 1.0) * token.weight_factor() / 10.0)
        .sum()
}
