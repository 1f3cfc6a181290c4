// dotstar
// Full-string matching for a tiny regex subset (. and *), plus
// stair-climbing counters kept as recursion-strategy comparisons


pub mod pattern;
pub mod stairs;

pub use pattern::{
    Element, PatternError, PatternErrorKind, Token, match_elements, matches, parse_pattern,
};
pub use stairs::{climb_stairs, climb_stairs_accum, climb_stairs_memo};
