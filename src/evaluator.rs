//! Remainder-set evaluation.
//!
//! `evaluate` answers a richer question than "does this match": it returns
//! every suffix of the text that can remain after the pattern consumes some
//! prefix. An empty set means no match is possible. Threading these sets
//! through sequence nodes is what lets alternation and star explore every
//! parse without any backtracking machinery.

use std::collections::BTreeSet;

use crate::ast::Pattern;

/// Match `pattern` at the start of `text`; return the set of remainders.
///
/// Every element is a suffix of `text` (and borrows from it), so string
/// equality coincides with how much was consumed. The set is produced fresh
/// on every call and owned by the caller.
///
/// Termination: a `Star` repetition step is only expanded when it strictly
/// shortens the remaining text, so recursion depth is bounded by the text
/// length; zero-width matches of the repeated pattern never loop.
pub fn evaluate<'t>(pattern: &Pattern, text: &'t str) -> BTreeSet<&'t str> {
    match pattern {
        Pattern::Literal(s) => text.strip_prefix(s.as_str()).into_iter().collect(),
        Pattern::Sequence(x, y) => evaluate(x, text)
            .into_iter()
            .flat_map(|r1| evaluate(y, r1))
            .collect(),
        Pattern::Alternation(x, y) => {
            let mut set = evaluate(x, text);
            set.extend(evaluate(y, text));
            set
        }
        Pattern::Wildcard => match text.chars().next() {
            Some(ch) => BTreeSet::from([&text[ch.len_utf8()..]]),
            None => BTreeSet::new(),
        },
        Pattern::OneOf(set) => match text.chars().next() {
            Some(ch) if set.contains(ch) => BTreeSet::from([&text[ch.len_utf8()..]]),
            _ => BTreeSet::new(),
        },
        Pattern::EndOfLine => {
            if text.is_empty() {
                BTreeSet::from([text])
            } else {
                BTreeSet::new()
            }
        }
        Pattern::Star(x) => {
            // Zero repetitions always contribute the text unchanged. Each
            // further repetition must consume at least one character, so a
            // remainder as long as the input is not expanded again.
            let mut set = BTreeSet::from([text]);
            for r1 in evaluate(x, text) {
                if r1.len() < text.len() {
                    set.extend(evaluate(pattern, r1));
                }
            }
            set
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Pattern;

    fn set<'a>(items: &[&'a str]) -> BTreeSet<&'a str> {
        items.iter().copied().collect()
    }

    // --- Literal ---

    #[test]
    fn literal_consumes_prefix() {
        assert_eq!(
            evaluate(&Pattern::literal("abc"), "abcdef"),
            set(&["def"])
        );
    }

    #[test]
    fn literal_no_match_is_empty_set() {
        assert_eq!(evaluate(&Pattern::literal("abc"), "abd"), set(&[]));
    }

    #[test]
    fn empty_literal_consumes_nothing() {
        assert_eq!(evaluate(&Pattern::literal(""), "xyz"), set(&["xyz"]));
    }

    // --- Sequence ---

    #[test]
    fn sequence_threads_remainders() {
        let p = Pattern::sequence(Pattern::literal("hi "), Pattern::literal("there "));
        assert_eq!(
            evaluate(&p, "hi there nice to meet you"),
            set(&["nice to meet you"])
        );
    }

    #[test]
    fn sequence_fails_when_second_part_fails() {
        let p = Pattern::sequence(Pattern::literal("a"), Pattern::literal("c"));
        assert_eq!(evaluate(&p, "ab"), set(&[]));
    }

    // --- Alternation ---

    #[test]
    fn alternation_first_branch() {
        let p = Pattern::alternation(Pattern::literal("dog"), Pattern::literal("cat"));
        assert_eq!(evaluate(&p, "dog and cat"), set(&[" and cat"]));
    }

    #[test]
    fn alternation_is_union_of_branches() {
        let x = Pattern::literal("a");
        let y = Pattern::literal("aa");
        let both = Pattern::alternation(x.clone(), y.clone());
        for text in ["aaa", "ab", ""] {
            let mut expected = evaluate(&x, text);
            expected.extend(evaluate(&y, text));
            assert_eq!(evaluate(&both, text), expected, "text: {text:?}");
        }
    }

    // --- Wildcard / OneOf ---

    #[test]
    fn wildcard_consumes_one_char() {
        assert_eq!(
            evaluate(&Pattern::Wildcard, "am i missing something?"),
            set(&["m i missing something?"])
        );
    }

    #[test]
    fn wildcard_fails_on_empty() {
        assert_eq!(evaluate(&Pattern::Wildcard, ""), set(&[]));
    }

    #[test]
    fn one_of_member() {
        assert_eq!(
            evaluate(&Pattern::one_of("a"), "aabc123"),
            set(&["abc123"])
        );
    }

    #[test]
    fn one_of_non_member() {
        assert_eq!(evaluate(&Pattern::one_of("xyz"), "abc"), set(&[]));
    }

    #[test]
    fn multibyte_chars_consume_whole_scalar() {
        assert_eq!(evaluate(&Pattern::Wildcard, "éclair"), set(&["clair"]));
        assert_eq!(evaluate(&Pattern::one_of("é"), "éclair"), set(&["clair"]));
    }

    // --- EndOfLine ---

    #[test]
    fn end_of_line_only_on_empty() {
        assert_eq!(evaluate(&Pattern::EndOfLine, ""), set(&[""]));
        assert_eq!(evaluate(&Pattern::EndOfLine, "not end"), set(&[]));
    }

    // --- Star ---

    #[test]
    fn star_yields_every_repetition_count() {
        let p = Pattern::star(Pattern::literal("hey"));
        assert_eq!(
            evaluate(&p, "heyhey!"),
            set(&["!", "heyhey!", "hey!"])
        );
    }

    #[test]
    fn star_matches_zero_times_on_mismatch() {
        let p = Pattern::star(Pattern::literal("z"));
        assert_eq!(evaluate(&p, "abc"), set(&["abc"]));
    }

    #[test]
    fn star_terminates_on_nullable_sub_pattern() {
        // opt("a") can match the empty string; only the shortening
        // remainders may be expanded, so this must still terminate.
        let p = Pattern::star(Pattern::opt(Pattern::literal("a")));
        assert_eq!(evaluate(&p, "aaa"), set(&["aaa", "aa", "a", ""]));
    }

    #[test]
    fn star_of_empty_literal_terminates() {
        let p = Pattern::star(Pattern::literal(""));
        assert_eq!(evaluate(&p, "ab"), set(&["ab"]));
    }

    #[test]
    fn closure_unrolls_to_alternation() {
        // star(x) == alt(lit(""), seq(x, star(x))) when x is not nullable.
        let x = Pattern::literal("ab");
        let rolled = Pattern::star(x.clone());
        let unrolled = Pattern::alternation(
            Pattern::literal(""),
            Pattern::sequence(x, Pattern::star(Pattern::literal("ab"))),
        );
        for text in ["ababab", "abX", "", "xyz"] {
            assert_eq!(
                evaluate(&rolled, text),
                evaluate(&unrolled, text),
                "text: {text:?}"
            );
        }
    }

    #[test]
    fn nested_star_and_alternation() {
        // (a|bb)* on "abba" — consumes "a", "abb", nothing; never "abba"
        // since the final "a" follows only after "bb".
        let p = Pattern::star(Pattern::alternation(
            Pattern::literal("a"),
            Pattern::literal("bb"),
        ));
        assert_eq!(evaluate(&p, "abba"), set(&["abba", "bba", "a", ""]));
    }
}
