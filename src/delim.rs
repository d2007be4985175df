//! Field delimiter inference
//!
//! Candidate delimiters are tested in a fixed priority order (tab, comma,
//! semicolon). A delimiter qualifies when it occurs a nonzero number of times
//! on the first data line and exactly as often on every other sampled line.

use std::fmt;

/// A candidate field delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Tab,
    Comma,
    Semicolon,
}
impl Delimiter {
    /// Candidates in the order they are tested
    pub const PRIORITY: [Delimiter; 3] = [Self::Tab, Self::Comma, Self::Semicolon];

    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Tab => b'\t',
            Self::Comma => b',',
            Self::Semicolon => b';',
        }
    }

    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'\t' => Some(Self::Tab),
            b',' => Some(Self::Comma),
            b';' => Some(Self::Semicolon),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        self.as_byte() as char
    }
}
impl fmt::Display for Delimiter {
    /// Writes the delimiter as an escaped character (`\t`, `,` or `;`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char().escape_default())
    }
}

/// Per-line occurrence counts of every candidate delimiter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimiterCounts {
    tab: Vec<usize>,
    comma: Vec<usize>,
    semicolon: Vec<usize>,
}
impl DelimiterCounts {
    /// Counts the candidate delimiters of one line and appends the counts
    pub fn record(&mut self, line: &[u8]) {
        let (mut tab, mut comma, mut semicolon) = (0, 0, 0);
        for byte in line {
            match Delimiter::from_byte(*byte) {
                Some(Delimiter::Tab) => tab += 1,
                Some(Delimiter::Comma) => comma += 1,
                Some(Delimiter::Semicolon) => semicolon += 1,
                None => {}
            }
        }
        self.tab.push(tab);
        self.comma.push(comma);
        self.semicolon.push(semicolon);
    }

    /// Per-line counts of a single delimiter
    #[must_use]
    pub fn get(&self, delim: Delimiter) -> &[usize] {
        match delim {
            Delimiter::Tab => &self.tab,
            Delimiter::Comma => &self.comma,
            Delimiter::Semicolon => &self.semicolon,
        }
    }
}

/// Returns the per-line count if the first count is nonzero and every other
/// count is identical to it
#[must_use]
pub fn consistent_count(counts: &[usize]) -> Option<usize> {
    let (&first, rest) = counts.split_first()?;
    if first == 0 || rest.iter().any(|&count| count != first) {
        return None;
    }
    Some(first)
}

/// An inferred delimiter together with the field count it implies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferredDelimiter {
    pub delimiter: Delimiter,
    pub num_fields: usize,
}

/// Tests the candidates in priority order and returns the first that qualifies
///
/// Lower-priority candidates are not considered once one qualifies.
#[must_use]
pub fn infer_delimiter(counts: &DelimiterCounts) -> Option<InferredDelimiter> {
    Delimiter::PRIORITY.into_iter().find_map(|delimiter| {
        consistent_count(counts.get(delimiter)).map(|count| InferredDelimiter {
            delimiter,
            num_fields: count + 1,
        })
    })
}
