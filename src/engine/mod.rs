//! The single canonical traversal behind both matching and masking.
//!
//! There is exactly one decision tree, `scan`, and the match/mask
//! difference is confined to a [`Sink`] that observes which characters each
//! wildcard token consumed. Whatever one caller accepts, the other accepts;
//! the mirror property cannot drift.

use smallvec::SmallVec;

use crate::pattern::{Token, WildcardPattern};

/// Stack buffer for the decoded input; typical paths fit without heap spill.
pub(crate) type InputBuf = SmallVec<[char; 64]>;

pub(crate) fn decode(input: &str) -> InputBuf {
    input.chars().collect()
}

/// Observer of the traversal. `pos` is always a character index into the
/// input. Implementations only listen to the events they care about.
pub(crate) trait Sink {
    /// A character was consumed by a wildcard token (`*`, `**`, `?`, `+`).
    fn wildcard(&mut self, pos: usize, c: char) {
        let _ = (pos, c);
    }

    /// A previously consumed character was handed back (the `**` re-anchor
    /// steps the input cursor back one position).
    fn erase(&mut self, pos: usize) {
        let _ = pos;
    }

    /// A separator character was swallowed inside a `**` range. `ordinal`
    /// is 1-based over all separators consumed so far.
    fn crossed(&mut self, pos: usize, ordinal: usize) {
        let _ = (pos, ordinal);
    }

    /// A `Separator` token consumed its character. `after_star` reports
    /// whether the directly preceding token was `*` or `**`.
    fn separator(&mut self, pos: usize, c: char, ordinal: usize, after_star: bool) {
        let _ = (pos, c, ordinal, after_star);
    }
}

/// Sink for plain yes/no matching.
struct NoopSink;

impl Sink for NoopSink {}

/// Records the 1-based ordinal of every separator the input consumed, at the
/// character position where it occurred. Slot value 0 means "not a
/// separator". Used by the stateful matcher for segment navigation.
struct FlagSink<'a> {
    flags: &'a mut [usize],
}

impl Sink for FlagSink<'_> {
    fn crossed(&mut self, pos: usize, ordinal: usize) {
        self.flags[pos] = ordinal;
    }

    fn separator(&mut self, pos: usize, _c: char, ordinal: usize, _after_star: bool) {
        self.flags[pos] = ordinal;
    }
}

/// Collects the characters consumed by wildcard tokens, in input order.
struct MaskSink {
    masks: Vec<Option<char>>,
}

impl Sink for MaskSink {
    fn wildcard(&mut self, pos: usize, c: char) {
        self.masks[pos] = Some(c);
    }

    fn erase(&mut self, pos: usize) {
        self.masks[pos] = None;
    }

    fn separator(&mut self, pos: usize, c: char, _ordinal: usize, after_star: bool) {
        // A separator directly after a star that consumed something belongs
        // to the masked run, so `a*/b` over `ax/b` keeps the `/`.
        if after_star && pos > 0 && self.masks[pos - 1].is_some() {
            self.masks[pos] = Some(c);
        }
    }
}

/// Stateless match. An absent input matches only a pattern whose tokens are
/// all non-binding wildcards.
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn matches(pattern: &WildcardPattern, input: Option<&str>) -> bool {
    match input {
        Some(input) => scan(pattern, &decode(input), &mut NoopSink),
        None => pattern.tokens().iter().all(|t| !t.binds_input()),
    }
}

/// Match while recording separator ordinals into `flags`, which must be as
/// long as `chars`. Wrapper over the same traversal as [`matches`].
pub(crate) fn matches_recording(
    pattern: &WildcardPattern,
    chars: &[char],
    flags: &mut [usize],
) -> bool {
    debug_assert_eq!(chars.len(), flags.len());
    scan(pattern, chars, &mut FlagSink { flags })
}

/// Extract the wildcard-consumed substring, or `None` when the input does
/// not match. Succeeds exactly when [`matches`] succeeds.
#[tracing::instrument(level = "trace", skip(pattern), fields(pattern = %pattern))]
pub fn mask(pattern: &WildcardPattern, input: &str) -> Option<String> {
    let chars = decode(input);
    let mut sink = MaskSink {
        masks: vec![None; chars.len()],
    };

    if !scan(pattern, &chars, &mut sink) {
        return None;
    }

    let mut out: String = sink.masks.iter().flatten().collect();

    // A leading `*`/`**` can swallow separators before the first real
    // segment; the mask starts at the first non-separator character.
    if let (Some(first), Some(sep)) = (pattern.tokens().first(), pattern.separator())
        && first.is_optional()
        && let Some(start) = out.find(|c| c != sep)
    {
        out.drain(..start);
    }

    Some(out)
}

/// The two-cursor greedy automaton. Single pass over the input; every token
/// commits immediately using bounded lookahead over the pattern, never
/// backtracking across the whole string.
fn scan<S: Sink>(pattern: &WildcardPattern, input: &[char], sink: &mut S) -> bool {
    let tokens = pattern.tokens();
    let separator = pattern.separator();
    let token_count = tokens.len();
    let input_len = input.len();

    // 1-based ordinal shared by Separator tokens and separators crossed
    // inside a `**` range, so segment numbering follows input order.
    let mut sep_ordinal = 0usize;

    let mut ti = 0usize;
    let mut ci = 0usize;

    while ti < token_count && ci < input_len {
        match tokens[ti] {
            Token::Literal(want) => {
                if input[ci] != want {
                    return false;
                }
                ti += 1;
                ci += 1;
            }
            Token::Star => {
                let run_start = ti + 1;
                let run_end = literal_run_end(tokens, run_start);
                if run_start == run_end {
                    // prefix*: nothing literal follows within this segment,
                    // consume up to (not including) the next separator.
                    while ci < input_len {
                        let c = input[ci];
                        if separator == Some(c) {
                            break;
                        }
                        sink.wildcard(ci, c);
                        ci += 1;
                    }
                    ti += 1;
                } else {
                    // *suffix: scan forward for the literal run; crossing a
                    // separator first is fatal. The scan re-anchors on
                    // mismatch without re-checking the current character.
                    let mut st = run_start;
                    loop {
                        let c = input[ci];
                        if separator == Some(c) {
                            return false;
                        }
                        match tokens[st] {
                            Token::Literal(want) if want == c => st += 1,
                            _ => {
                                st = run_start;
                                sink.wildcard(ci, c);
                            }
                        }
                        ci += 1;
                        if st >= run_end || ci >= input_len {
                            break;
                        }
                    }
                    if st < run_end {
                        return false;
                    }
                    ti = run_end;
                }
            }
            Token::StarStar => {
                if let Some(sep) = separator {
                    if let Some((run_start, run_end)) = bounded_literal_run(tokens, ti + 1) {
                        // A literal anchor follows: scan forward across
                        // separators until the run completes.
                        let range_start = ci;
                        let mut range_end = ci;
                        let mut st = run_start;
                        while st <= run_end && range_end < input_len {
                            let c = input[range_end];
                            match tokens[st] {
                                Token::Literal(want) if want == c => st += 1,
                                _ => {
                                    st = run_start;
                                    sink.wildcard(range_end, c);
                                }
                            }
                            range_end += 1;
                        }
                        if st <= run_end {
                            // Anchor never completed: park the token cursor
                            // on the run's last literal and hand one
                            // consumed character back.
                            ti = run_end;
                            if ci > 0 {
                                ci -= 1;
                                sink.erase(ci);
                            }
                        } else {
                            for pos in range_start..range_end {
                                if input[pos] == sep {
                                    sep_ordinal += 1;
                                    sink.crossed(pos, sep_ordinal);
                                }
                            }
                            ci = range_end;
                            ti = run_end + 1;
                        }
                    } else {
                        ti += 1;
                        let pending = tokens[ti..]
                            .iter()
                            .filter(|t| matches!(t, Token::Separator))
                            .count();
                        if pending > 0 {
                            // No anchor, but the rest of the pattern still
                            // needs separators: leave exactly that many at
                            // the tail, counted from the right.
                            let range_start = ci;
                            let mut range_end = input_len;
                            let mut found = 0usize;
                            while range_end > 0 && range_start <= range_end {
                                range_end -= 1;
                                if input[range_end] == sep {
                                    found += 1;
                                }
                                if found == pending {
                                    break;
                                }
                            }
                            if found == pending {
                                for pos in range_start..range_end {
                                    let c = input[pos];
                                    sink.wildcard(pos, c);
                                    if c == sep {
                                        sep_ordinal += 1;
                                        sink.crossed(pos, sep_ordinal);
                                    }
                                }
                                ci = range_end;
                            }
                        } else {
                            // Swallow the rest, flagging every separator
                            // crossed so segment navigation still works for
                            // patterns ending in `**`.
                            while ci < input_len {
                                let c = input[ci];
                                sink.wildcard(ci, c);
                                if c == sep {
                                    sep_ordinal += 1;
                                    sink.crossed(ci, sep_ordinal);
                                }
                                ci += 1;
                            }
                        }
                    }
                } else {
                    // No separator configured: `**` swallows the rest.
                    while ci < input_len {
                        sink.wildcard(ci, input[ci]);
                        ci += 1;
                    }
                    ti += 1;
                }
            }
            Token::Question => {
                let c = input[ci];
                // `?` never consumes the separator; the token still
                // advances, leaving the separator for a later token.
                if separator != Some(c) {
                    sink.wildcard(ci, c);
                    ci += 1;
                }
                ti += 1;
            }
            Token::Plus => {
                let c = input[ci];
                if separator == Some(c) {
                    return false;
                }
                sink.wildcard(ci, c);
                ci += 1;
                ti += 1;
            }
            Token::Separator => {
                let c = input[ci];
                if Some(c) != separator {
                    return false;
                }
                let after_star = ti > 0 && tokens[ti - 1].is_optional();
                sep_ordinal += 1;
                sink.separator(ci, c, sep_ordinal, after_star);
                ti += 1;
                ci += 1;
            }
        }
    }

    if ci < input_len {
        return false;
    }

    // Leftover tokens must not demand input; `?` accepts zero characters
    // here, the same set of kinds that matches an absent input.
    tokens[ti..].iter().all(|t| !t.binds_input())
}

/// End (exclusive) of the literal run starting at `from`; equals `from`
/// when the next token is not a literal.
fn literal_run_end(tokens: &[Token], from: usize) -> usize {
    let mut end = from;
    while end < tokens.len() && matches!(tokens[end], Token::Literal(_)) {
        end += 1;
    }
    end
}

/// First literal run at or after `from`, as `(start, last)` inclusive. The
/// run is bounded by the next non-literal token or by the end of the
/// pattern; `None` means no literal follows at all and `**` falls back to
/// separator counting.
fn bounded_literal_run(tokens: &[Token], from: usize) -> Option<(usize, usize)> {
    let mut start = None;
    for (i, token) in tokens.iter().enumerate().skip(from) {
        match (start, matches!(token, Token::Literal(_))) {
            (None, true) => start = Some(i),
            (Some(s), false) => return Some((s, i - 1)),
            _ => {}
        }
    }
    start.map(|s| (s, tokens.len() - 1))
}
