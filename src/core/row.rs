//! A single guess slot on the board

use super::LetterStatus;

/// One row of the board: typed letters plus statuses once evaluated
///
/// A row is empty, filling, or resolved. Only unresolved rows accept edits;
/// a resolved row always holds exactly as many letters as it has statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    letters: String,
    statuses: Option<Vec<LetterStatus>>,
}

impl Row {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: String::new(),
            statuses: None,
        }
    }

    /// Typed letters, uppercase
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Statuses aligned with `letters`, or `None` if not yet evaluated
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> Option<&[LetterStatus]> {
        self.statuses.as_deref()
    }

    /// Number of typed letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        // Letters are ASCII, so bytes == chars
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.statuses.is_some()
    }

    /// True if the row was evaluated and every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses
            .as_deref()
            .is_some_and(|s| !s.is_empty() && s.iter().all(|&st| st == LetterStatus::Correct))
    }

    /// Append an uppercase ASCII letter
    pub(crate) fn push(&mut self, letter: char) {
        debug_assert!(letter.is_ascii_uppercase());
        debug_assert!(!self.is_resolved());
        self.letters.push(letter);
    }

    /// Remove the last letter, if any
    pub(crate) fn pop(&mut self) -> Option<char> {
        debug_assert!(!self.is_resolved());
        self.letters.pop()
    }

    /// Fix the row's statuses; the row is immutable afterwards
    pub(crate) fn resolve(&mut self, statuses: Vec<LetterStatus>) {
        debug_assert_eq!(statuses.len(), self.len());
        debug_assert!(!self.is_resolved());
        self.statuses = Some(statuses);
    }

    /// Emoji rendering of a resolved row, e.g. "🟩⬜🟨⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> Option<String> {
        self.statuses
            .as_deref()
            .map(|s| s.iter().map(|st| st.to_emoji()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    fn filled(word: &str) -> Row {
        let mut row = Row::new();
        for ch in word.chars() {
            row.push(ch);
        }
        row
    }

    #[test]
    fn row_starts_empty_and_unresolved() {
        let row = Row::new();
        assert!(row.is_empty());
        assert!(!row.is_resolved());
        assert_eq!(row.statuses(), None);
        assert_eq!(row.to_emoji(), None);
    }

    #[test]
    fn row_push_pop() {
        let mut row = filled("CR");
        assert_eq!(row.letters(), "CR");
        assert_eq!(row.pop(), Some('R'));
        assert_eq!(row.pop(), Some('C'));
        assert_eq!(row.pop(), None);
        assert!(row.is_empty());
    }

    #[test]
    fn row_resolve() {
        let mut row = filled("CRANE");
        row.resolve(vec![Correct, Absent, Present, Absent, Absent]);

        assert!(row.is_resolved());
        assert!(!row.is_solved());
        assert_eq!(row.statuses().map(<[LetterStatus]>::len), Some(5));
        assert_eq!(row.to_emoji().as_deref(), Some("🟩⬜🟨⬜⬜"));
    }

    #[test]
    fn row_solved_requires_all_correct() {
        let mut row = filled("CRANE");
        row.resolve(vec![Correct; 5]);
        assert!(row.is_solved());

        let unresolved = filled("CRANE");
        assert!(!unresolved.is_solved());
    }
}
