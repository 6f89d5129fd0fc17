//! A remainder-set regular expression matching engine.
//!
//! Instead of a yes/no answer, the evaluator computes every suffix of the
//! text that can remain after the pattern consumes some prefix (the
//! "remainder set"). Matching and searching are thin layers over that: the
//! longest match is the shortest remainder, and a search scans start
//! offsets left to right.
//!
//! # Example
//!
//! ```rust
//! use remex::{Pattern, evaluate, parse, search_anywhere};
//!
//! // Build patterns directly...
//! let p = Pattern::star(Pattern::literal("hey"));
//! let remainders = evaluate(&p, "heyhey!");
//! let expected: std::collections::BTreeSet<&str> =
//!     ["heyhey!", "hey!", "!"].into_iter().collect();
//! assert_eq!(remainders, expected);
//!
//! // ...or parse the textual syntax.
//! let p = parse("ba*!").unwrap();
//! let m = search_anywhere(&p, "Sheep said baaaa!").unwrap();
//! assert_eq!((m.start, m.text), (11, "baaaa!"));
//! ```
//!
//! # Pattern syntax
//!
//! | Token    | Meaning                                   |
//! |----------|-------------------------------------------|
//! | `abc`    | Literal run                               |
//! | `X\|Y`   | Alternation                               |
//! | `(…)`    | Grouping                                  |
//! | `X*`     | Zero or more                              |
//! | `X+`     | One or more                               |
//! | `X?`     | Zero or one                               |
//! | `.`      | One arbitrary character                   |
//! | `[abc]`  | One of the listed characters              |
//! | `[a-z]`  | One character in the range                |
//! | `[^…]`   | Negated set                               |
//! | `$`      | End of text                               |
//! | `\d` `\s` `\w` | Digit, whitespace, word character   |
//! | `\*` etc | Escaped special character                 |
//!
//! A quantifier after a literal run binds to its last character: `abc*` is
//! `ab` followed by `c*`.

mod ast;
mod char_set;
mod evaluator;
mod matcher;
mod parser;

pub use ast::Pattern;
pub use char_set::{CharClass, CharSet};
pub use evaluator::evaluate;
pub use matcher::{Match, match_prefix, search_anywhere};
pub use parser::{PatternError, parse};
