//! Match and search entry points built on the remainder-set evaluator.

use crate::ast::Pattern;
use crate::evaluator::evaluate;

/// A successful search: where the match starts and what it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    /// Byte offset of the match within the searched text.
    pub start: usize,
    /// The matched slice (may be empty, e.g. for `a*` or `$`).
    pub text: &'t str,
}

/// Match `pattern` against the start of `text`; return the longest prefix it
/// can consume, or `None` if no match is possible.
///
/// More consumed means less remains, so the longest match corresponds to the
/// shortest remainder. Among equal-length remainders any parse may win; only
/// the consumed length is guaranteed.
pub fn match_prefix<'t>(pattern: &Pattern, text: &'t str) -> Option<&'t str> {
    let remainders = evaluate(pattern, text);
    let shortest = remainders.into_iter().min_by_key(|r| r.len())?;
    Some(&text[..text.len() - shortest.len()])
}

/// Find `pattern` anywhere in `text`: leftmost start offset first, longest
/// match at that offset.
///
/// Candidate offsets run from `0` through `text.len()` inclusive, so
/// patterns that match only the empty string (`$` in particular) can still
/// match at the very end of the text.
pub fn search_anywhere<'t>(pattern: &Pattern, text: &'t str) -> Option<Match<'t>> {
    for start in 0..=text.len() {
        if !text.is_char_boundary(start) {
            continue;
        }
        if let Some(matched) = match_prefix(pattern, &text[start..]) {
            return Some(Match {
                start,
                text: matched,
            });
        }
    }
    None
}
