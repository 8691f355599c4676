use crate::engine;
use crate::pattern::WildcardPattern;

use super::SegmentError;

/// Stateful matcher bound to one compiled pattern.
///
/// Reusable serially across many inputs: every call to [`matches`] or
/// [`separate`] fully replaces the per-input state, so nothing leaks from
/// one input to the next. Not thread-safe; instances are cheap and meant to
/// be created per matching task.
///
/// After a successful [`matches`] (or any [`separate`]), the input's
/// separator positions are known and its segments can be navigated: group
/// `0` lies before the first separator, group `separator_count()` after the
/// last.
///
/// [`matches`]: WildcardMatcher::matches
/// [`separate`]: WildcardMatcher::separate
#[derive(Debug)]
pub struct WildcardMatcher<'a> {
    pattern: &'a WildcardPattern,
    input: Option<String>,
    chars: Vec<char>,
    /// 1-based separator ordinal per character position, 0 = not a separator.
    flags: Vec<usize>,
    /// `None` until an input has been successfully scanned.
    count: Option<usize>,
    /// Segment cursor; may step one past either end during iteration.
    cursor: isize,
}

impl<'a> WildcardMatcher<'a> {
    pub fn new(pattern: &'a WildcardPattern) -> Self {
        Self {
            pattern,
            input: None,
            chars: Vec::new(),
            flags: Vec::new(),
            count: None,
            cursor: 0,
        }
    }

    /// Match `input` against the bound pattern, resetting and recomputing
    /// all segment state. An absent input never matches here (the stateless
    /// [`engine::matches`] keeps the wildcard-only-pattern rule for that).
    pub fn matches(&mut self, input: Option<&str>) -> bool {
        self.reset();

        let Some(input) = input else {
            return false;
        };

        self.input = Some(input.to_string());
        self.chars = input.chars().collect();
        self.flags = vec![0; self.chars.len()];

        let matched = engine::matches_recording(self.pattern, &self.chars, &mut self.flags);
        if matched {
            let count = self.flags.iter().rev().find(|&&f| f > 0).copied();
            self.count = Some(count.unwrap_or(0));
        }
        matched
    }

    /// Record separator positions without performing any wildcard matching,
    /// and return the number of separators found. Enables segment
    /// navigation over inputs that were never matched.
    pub fn separate(&mut self, input: Option<&str>) -> usize {
        self.reset();

        let Some(input) = input else {
            return 0;
        };

        self.input = Some(input.to_string());
        self.chars = input.chars().collect();
        self.flags = vec![0; self.chars.len()];

        let mut found = 0usize;
        if let Some(sep) = self.pattern.separator() {
            for (i, &c) in self.chars.iter().enumerate() {
                if c == sep {
                    found += 1;
                    self.flags[i] = found;
                }
            }
        }
        self.count = Some(found);
        found
    }

    /// Move the segment cursor to the first group.
    pub fn first(&mut self) -> &mut Self {
        self.cursor = 0;
        self
    }

    /// Move the segment cursor to the last group, when known.
    pub fn last(&mut self) -> &mut Self {
        if let Some(count) = self.count {
            self.cursor = count as isize;
        }
        self
    }

    pub fn has_next(&self) -> bool {
        match self.count {
            Some(count) => self.cursor <= count as isize,
            None => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.cursor >= 0
    }

    /// Return the segment at the cursor and advance it.
    pub fn next(&mut self) -> Option<String> {
        if !self.has_next() {
            return None;
        }
        let group = self.cursor;
        self.cursor += 1;
        self.locate_or_panic(group)
    }

    /// Return the segment at the cursor and move it backwards.
    pub fn previous(&mut self) -> Option<String> {
        if self.cursor < 0 {
            return None;
        }
        let group = self.cursor;
        self.cursor -= 1;
        self.locate_or_panic(group)
    }

    /// Peek at the segment under the cursor without moving it.
    pub fn current(&self) -> Option<String> {
        self.locate_or_panic(self.cursor)
    }

    /// Segment lookup by absolute group index; the cursor is untouched.
    ///
    /// An input without separators yields the whole input. `None` means the
    /// group's bounds were never recorded (e.g. the flags stop short of it).
    ///
    /// # Panics
    ///
    /// Panics when `group` exceeds the separator count, or when no input
    /// has been scanned yet. Use [`try_find`] for a fallible lookup.
    ///
    /// [`try_find`]: WildcardMatcher::try_find
    pub fn find(&self, group: usize) -> Option<String> {
        self.locate_or_panic(group as isize)
    }

    /// Non-panicking form of [`find`].
    ///
    /// [`find`]: WildcardMatcher::find
    pub fn try_find(&self, group: usize) -> Result<Option<String>, SegmentError> {
        self.locate(group as isize)
    }

    /// Number of separators in the last scanned input; `None` until an
    /// input has been matched or separated successfully.
    pub fn separator_count(&self) -> Option<usize> {
        self.count
    }

    pub fn pattern(&self) -> &WildcardPattern {
        self.pattern
    }

    fn reset(&mut self) {
        self.count = None;
        self.cursor = 0;
        self.input = None;
        self.chars.clear();
        self.flags.clear();
    }

    fn locate_or_panic(&self, group: isize) -> Option<String> {
        match self.locate(group) {
            Ok(segment) => segment,
            Err(err) => panic!("{err}"),
        }
    }

    fn locate(&self, group: isize) -> Result<Option<String>, SegmentError> {
        let Some(count) = self.count else {
            return Err(SegmentError::NoScannedInput);
        };

        // A separator-free input is one single group, whatever the index.
        if count == 0 {
            return Ok(self.input.clone());
        }

        if group < 0 || group > count as isize {
            return Err(SegmentError::GroupOutOfRange { group, max: count });
        }
        let group = group as usize;

        let mut start = 0usize;
        let mut offset = None;

        if group == 0 {
            offset = Some(
                self.flags
                    .iter()
                    .position(|&f| f == 1)
                    .unwrap_or(self.flags.len()),
            );
        } else {
            let mut started = false;
            for (i, &flag) in self.flags.iter().enumerate() {
                if flag == group {
                    start = i + 1;
                    started = true;
                } else if started && flag == group + 1 {
                    offset = Some(i);
                    break;
                }
            }
            if started && offset.is_none() {
                offset = Some(self.flags.len());
            }
        }

        Ok(match offset {
            None => None,
            Some(0) => Some(String::new()),
            Some(end) => Some(self.chars[start..end].iter().collect()),
        })
    }
}
