// Pattern matcher
// Memoized matching over (element index, subject position) pairs

use ahash::AHashMap;

use super::parser::{Element, PatternError, parse_pattern};

/// Match subject against pattern over their full lengths
/// Positions are char indices (not byte indices)
pub fn matches(subject: &str, pattern: &str) -> Result<bool, PatternError> {
    let elements = parse_pattern(pattern)?;
    let subject_chars: Vec<char> = subject.chars().collect();
    Ok(match_elements(&subject_chars, &elements))
}

/// Match a subject against an already parsed pattern
pub fn match_elements(subject: &[char], elements: &[Element]) -> bool {
    let mut memo = AHashMap::new();
    match_from(subject, elements, 0, 0, &mut memo)
}

// Each (ei, si) pair is solved at most once, so the repeated-element
// disjunction below costs O(|subject| * |elements|) overall rather than
// re-running a greedy walk per branch.
fn match_from(
    subject: &[char],
    elements: &[Element],
    ei: usize,
    si: usize,
    memo: &mut AHashMap<(usize, usize), bool>,
) -> bool {
    if let Some(&known) = memo.get(&(ei, si)) {
        return known;
    }

    let element = match elements.get(ei) {
        Some(element) => *element,
        // Pattern exhausted: success iff the subject is too
        None => return si == subject.len(),
    };

    let accepts_here = si < subject.len() && element.token.accepts(subject[si]);

    let matched = if element.repeated {
        // Zero occurrences, or consume one char and stay on this element.
        // Covers trailing x* groups for free: the skip branch fires even
        // when the subject is already exhausted.
        match_from(subject, elements, ei + 1, si, memo)
            || (accepts_here && match_from(subject, elements, ei, si + 1, memo))
    } else {
        // A literal or '.' mismatch kills this branch outright
        accepts_here && match_from(subject, elements, ei + 1, si + 1, memo)
    };

    memo.insert((ei, si), matched);
    matched
}
