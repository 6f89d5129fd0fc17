//! Recursive descent parser for textual pattern strings.
//!
//! The surface syntax is deliberately small; see the table in the crate
//! docs. Precedence, loosest first: alternation, concatenation, postfix
//! quantifiers. A quantifier after a bare literal run binds to the last
//! character only, so `abc*` parses as `ab` followed by `c*`.

use std::iter::Peekable;
use std::str::Chars;

use itertools::Itertools;
use phf::{Map, phf_map};

use crate::ast::Pattern;
use crate::char_set::{CharClass, CharSet};

/// Errors that can occur while parsing a pattern string.
///
/// These are the construction-time face of a malformed pattern; once a
/// [`Pattern`] value exists it is well-formed by type.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    UnexpectedChar(char),
    UnexpectedEnd,
    UnclosedGroup,
    UnclosedSet,
    EmptySet,
    MisplacedQuantifier(char),
    InvalidRange(char, char),
    UnknownEscape(char),
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedChar(c) => write!(f, "Unexpected character in pattern: {c:?}"),
            Self::UnexpectedEnd => write!(f, "Unexpected end of pattern"),
            Self::UnclosedGroup => write!(f, "Unclosed group '(' in pattern"),
            Self::UnclosedSet => write!(f, "Unclosed character set '[' in pattern"),
            Self::EmptySet => write!(f, "Empty character set '[]' in pattern"),
            Self::MisplacedQuantifier(c) => {
                write!(f, "Quantifier {c:?} with nothing to repeat")
            }
            Self::InvalidRange(lo, hi) => {
                write!(f, "Invalid character range {lo:?}-{hi:?} in set")
            }
            Self::UnknownEscape(c) => write!(f, "Unknown escape sequence \\{c}"),
        }
    }
}

impl std::error::Error for PatternError {}

/// Shorthand classes reachable by escape: `\d`, `\s`, `\w`.
static SHORTHAND_CLASSES: Map<char, &'static [(char, char)]> = phf_map! {
    'd' => &[('0', '9')],
    's' => &[(' ', ' '), ('\t', '\t'), ('\n', '\n'), ('\r', '\r')],
    'w' => &[('a', 'z'), ('A', 'Z'), ('0', '9'), ('_', '_')],
};

/// Parse a pattern string into a [`Pattern`] tree.
pub fn parse(input: &str) -> Result<Pattern, PatternError> {
    let mut parser = Parser {
        chars: input.chars().peekable(),
    };
    let pattern = parser.parse_alternation()?;
    match parser.chars.next() {
        None => Ok(pattern),
        // Only a stray ')' can stop the grammar early.
        Some(c) => Err(PatternError::UnexpectedChar(c)),
    }
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    fn parse_alternation(&mut self) -> Result<Pattern, PatternError> {
        let first = self.parse_sequence()?;
        if self.chars.peek() == Some(&'|') {
            self.chars.next(); // consume '|'
            let rest = self.parse_alternation()?;
            Ok(Pattern::alternation(first, rest))
        } else {
            Ok(first)
        }
    }

    fn parse_sequence(&mut self) -> Result<Pattern, PatternError> {
        let mut terms = Vec::new();
        loop {
            match self.chars.peek() {
                None | Some('|') | Some(')') => break,
                _ => self.parse_term(&mut terms)?,
            }
        }
        // Right-fold into nested pairs; an empty sequence is the empty
        // literal, which matches everywhere and consumes nothing.
        Ok(terms
            .into_iter()
            .rev()
            .reduce(|acc, term| Pattern::sequence(term, acc))
            .unwrap_or_else(|| Pattern::literal("")))
    }

    /// Parse one quantified term, pushing one or two patterns onto `terms`
    /// (two when a literal run splits before a trailing quantifier).
    fn parse_term(&mut self, terms: &mut Vec<Pattern>) -> Result<(), PatternError> {
        let mut atom = if matches!(self.chars.peek(), Some(&c) if !is_special(c)) {
            let mut run: String = self
                .chars
                .peeking_take_while(|&c| !is_special(c))
                .collect();
            if is_quantifier(self.chars.peek())
                && run.chars().count() > 1
                && let Some(last) = run.pop()
            {
                terms.push(Pattern::literal(run));
                Pattern::literal(String::from(last))
            } else {
                Pattern::literal(run)
            }
        } else {
            self.parse_atom()?
        };

        while let Some(&q) = self.chars.peek() {
            match q {
                '*' => atom = Pattern::star(atom),
                '+' => atom = Pattern::plus(atom),
                '?' => atom = Pattern::opt(atom),
                _ => break,
            }
            self.chars.next(); // consume the quantifier
        }
        terms.push(atom);
        Ok(())
    }

    fn parse_atom(&mut self) -> Result<Pattern, PatternError> {
        match self.chars.next() {
            None => Err(PatternError::UnexpectedEnd),
            Some('(') => {
                let inner = self.parse_alternation()?;
                match self.chars.next() {
                    Some(')') => Ok(inner),
                    _ => Err(PatternError::UnclosedGroup),
                }
            }
            Some('[') => Ok(Pattern::OneOf(self.parse_set()?)),
            Some('.') => Ok(Pattern::Wildcard),
            Some('$') => Ok(Pattern::EndOfLine),
            Some('\\') => self.parse_escape(),
            Some(c @ ('*' | '+' | '?')) => Err(PatternError::MisplacedQuantifier(c)),
            Some(c) => Ok(Pattern::literal(String::from(c))),
        }
    }

    fn parse_escape(&mut self) -> Result<Pattern, PatternError> {
        let c = self.chars.next().ok_or(PatternError::UnexpectedEnd)?;
        if let Some(ranges) = SHORTHAND_CLASSES.get(&c) {
            let classes = ranges
                .iter()
                .map(|&(lo, hi)| {
                    if lo == hi {
                        CharClass::Single(lo)
                    } else {
                        CharClass::Range(lo, hi)
                    }
                })
                .collect();
            return Ok(Pattern::OneOf(CharSet::new(classes)));
        }
        Ok(Pattern::literal(String::from(escape_char(c)?)))
    }

    /// Parse a `[...]` set body (the `[` has already been consumed).
    fn parse_set(&mut self) -> Result<CharSet, PatternError> {
        let negated = if self.chars.peek() == Some(&'^') {
            self.chars.next();
            true
        } else {
            false
        };

        let mut classes = Vec::new();
        loop {
            match self.chars.next() {
                None => return Err(PatternError::UnclosedSet),
                Some(']') => break,
                Some(c) => {
                    let lo = if c == '\\' { self.set_escape()? } else { c };
                    if self.chars.peek() == Some(&'-') {
                        self.chars.next(); // consume '-'
                        match self.chars.peek() {
                            // Trailing '-' before ']' is a plain member.
                            Some(&']') => {
                                classes.push(CharClass::Single(lo));
                                classes.push(CharClass::Single('-'));
                            }
                            None => return Err(PatternError::UnclosedSet),
                            Some(&c2) => {
                                self.chars.next();
                                let hi = if c2 == '\\' { self.set_escape()? } else { c2 };
                                if hi < lo {
                                    return Err(PatternError::InvalidRange(lo, hi));
                                }
                                classes.push(CharClass::Range(lo, hi));
                            }
                        }
                    } else {
                        classes.push(CharClass::Single(lo));
                    }
                }
            }
        }

        if classes.is_empty() {
            return Err(PatternError::EmptySet);
        }
        Ok(if negated {
            CharSet::negated(classes)
        } else {
            CharSet::new(classes)
        })
    }

    fn set_escape(&mut self) -> Result<char, PatternError> {
        match self.chars.next() {
            None => Err(PatternError::UnclosedSet),
            Some(c) => escape_char(c),
        }
    }
}

fn escape_char(c: char) -> Result<char, PatternError> {
    match c {
        'n' => Ok('\n'),
        't' => Ok('\t'),
        'r' => Ok('\r'),
        ']' | '-' | '^' => Ok(c),
        c if is_special(c) => Ok(c),
        c => Err(PatternError::UnknownEscape(c)),
    }
}

/// True for characters with syntactic meaning outside a set.
fn is_special(c: char) -> bool {
    matches!(
        c,
        '|' | '*' | '+' | '?' | '(' | ')' | '[' | '.' | '$' | '\\'
    )
}

fn is_quantifier(peeked: Option<&char>) -> bool {
    matches!(peeked, Some('*' | '+' | '?'))
}
