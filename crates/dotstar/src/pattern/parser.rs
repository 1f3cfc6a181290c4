// Pattern parser
// Parses pattern strings into a flat element list

use std::fmt;

/// A single pattern atom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// Literal character
    Literal(char),
    /// Any character (.)
    Any,
}

impl Token {
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Token::Literal(l) => *l == c,
            Token::Any => true,
        }
    }
}

/// A pattern atom together with its repetition flag.
///
/// `a*b` parses to two elements: `a` repeated and `b` not. Folding the `*`
/// into the element here means the matcher never has to peek ahead in the
/// raw pattern for a repetition marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub token: Token,
    pub repeated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternErrorKind {
    LeadingRepeat,
    DoubleRepeat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternError {
    pub kind: PatternErrorKind,
    pub message: String,
    pub pos: usize,
}

impl PatternError {
    pub fn new(kind: PatternErrorKind, message: &str, pos: usize) -> Self {
        PatternError {
            kind,
            message: message.to_string(),
            pos,
        }
    }

    fn leading_repeat(pos: usize) -> Self {
        PatternError::new(
            PatternErrorKind::LeadingRepeat,
            "repetition marker '*' has no preceding element",
            pos,
        )
    }

    fn double_repeat(pos: usize) -> Self {
        PatternError::new(
            PatternErrorKind::DoubleRepeat,
            "repetition marker '*' follows an already repeated element",
            pos,
        )
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pattern error at char {}: {}", self.pos, self.message)
    }
}

impl std::error::Error for PatternError {}

/// Parse a pattern string into elements
/// Positions in errors are char indices (not byte indices)
pub fn parse_pattern(pattern: &str) -> Result<Vec<Element>, PatternError> {
    let mut elements: Vec<Element> = Vec::new();

    for (pos, c) in pattern.chars().enumerate() {
        match c {
            '*' => match elements.last_mut() {
                None => return Err(PatternError::leading_repeat(pos)),
                Some(last) if last.repeated => return Err(PatternError::double_repeat(pos)),
                Some(last) => last.repeated = true,
            },
            '.' => elements.push(Element {
                token: Token::Any,
                repeated: false,
            }),
            _ => elements.push(Element {
                token: Token::Literal(c),
                repeated: false,
            }),
        }
    }

    Ok(elements)
}
