// Simplified regex matching implementation
//
// Pattern syntax:
// - Literal characters: anything except '*'
// - Wildcard: . (matches any single character)
// - Repetition: * (zero or more of the preceding element)
//
// Matching is anchored at both ends: the pattern must consume the whole
// subject, never a prefix or substring. A '*' with no preceding element
// (leading, or right after another '*') is a parse error.

mod matcher;
mod parser;

pub use matcher::{match_elements, matches};
pub use parser::{Element, PatternError, PatternErrorKind, Token, parse_pattern};
