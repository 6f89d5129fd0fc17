//! The pattern algebra: a closed set of seven node shapes.
//!
//! A [`Pattern`] is an immutable tree built once and never mutated. Because
//! the shapes form a closed enum, a malformed pattern is unrepresentable and
//! evaluation can dispatch with an exhaustive match.

use crate::char_set::CharSet;

/// One node of a pattern tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches exactly the characters of the string (the empty string
    /// matches everywhere, consuming nothing).
    Literal(String),
    /// Matches the first pattern followed by the second.
    Sequence(Box<Pattern>, Box<Pattern>),
    /// Matches either pattern.
    Alternation(Box<Pattern>, Box<Pattern>),
    /// Matches exactly one arbitrary character.
    Wildcard,
    /// Matches exactly one character that is a member of the set.
    OneOf(CharSet),
    /// Matches only at the end of the text (consumes nothing).
    EndOfLine,
    /// Matches zero or more repetitions of the sub-pattern.
    Star(Box<Pattern>),
}

impl Pattern {
    pub fn literal(s: impl Into<String>) -> Self {
        Self::Literal(s.into())
    }

    pub fn sequence(x: Pattern, y: Pattern) -> Self {
        Self::Sequence(Box::new(x), Box::new(y))
    }

    pub fn alternation(x: Pattern, y: Pattern) -> Self {
        Self::Alternation(Box::new(x), Box::new(y))
    }

    pub fn one_of(set: impl Into<CharSet>) -> Self {
        Self::OneOf(set.into())
    }

    pub fn star(x: Pattern) -> Self {
        Self::Star(Box::new(x))
    }

    /// One or more repetitions: `x` followed by `x*`.
    pub fn plus(x: Pattern) -> Self {
        Self::sequence(x.clone(), Self::star(x))
    }

    /// Zero or one occurrence: the empty literal or `x`.
    pub fn opt(x: Pattern) -> Self {
        Self::alternation(Self::literal(""), x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_desugars_to_sequence_with_star() {
        let p = Pattern::plus(Pattern::literal("c"));
        assert_eq!(
            p,
            Pattern::sequence(
                Pattern::literal("c"),
                Pattern::star(Pattern::literal("c"))
            )
        );
    }

    #[test]
    fn opt_desugars_to_alternation_with_empty() {
        let p = Pattern::opt(Pattern::literal("x"));
        assert_eq!(
            p,
            Pattern::alternation(Pattern::literal(""), Pattern::literal("x"))
        );
    }

    #[test]
    fn one_of_from_str() {
        let p = Pattern::one_of("abc");
        match p {
            Pattern::OneOf(set) => {
                assert!(set.contains('a'));
                assert!(set.contains('c'));
                assert!(!set.contains('d'));
            }
            _ => panic!("expected OneOf"),
        }
    }
}
