//! Character set membership tests for one-of patterns.

/// A single member of a character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Single(char),
    /// Inclusive range, `lo <= ch <= hi`.
    Range(char, char),
}

impl CharClass {
    pub fn contains(&self, ch: char) -> bool {
        match self {
            Self::Single(c) => *c == ch,
            Self::Range(lo, hi) => *lo <= ch && ch <= *hi,
        }
    }
}

/// A set of characters, optionally negated.
///
/// Membership is exact-character only; ranges compare by scalar value. A
/// `CharSet` never has an empty class list — the parser rejects `[]`, and
/// the constructors here are only reachable with at least one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    negated: bool,
    classes: Vec<CharClass>,
}

impl CharSet {
    pub fn new(classes: Vec<CharClass>) -> Self {
        Self {
            negated: false,
            classes,
        }
    }

    pub fn negated(classes: Vec<CharClass>) -> Self {
        Self {
            negated: true,
            classes,
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        let member = self.classes.iter().any(|c| c.contains(ch));
        member != self.negated
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(CharClass::Single).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singles_membership() {
        let set = CharSet::from("abc");
        assert!(set.contains('a'));
        assert!(set.contains('b'));
        assert!(!set.contains('d'));
    }

    #[test]
    fn range_membership() {
        let set = CharSet::new(vec![CharClass::Range('a', 'z')]);
        assert!(set.contains('a'));
        assert!(set.contains('m'));
        assert!(set.contains('z'));
        assert!(!set.contains('A'));
        assert!(!set.contains('0'));
    }

    #[test]
    fn negated_set() {
        let set = CharSet::negated(vec![CharClass::Single('x')]);
        assert!(!set.contains('x'));
        assert!(set.contains('y'));
    }

    #[test]
    fn mixed_singles_and_ranges() {
        let set = CharSet::new(vec![
            CharClass::Range('0', '9'),
            CharClass::Single('_'),
        ]);
        assert!(set.contains('5'));
        assert!(set.contains('_'));
        assert!(!set.contains('a'));
    }
}
