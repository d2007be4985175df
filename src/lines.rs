//! Line segmentation of a sampled buffer
//!
//! A buffer is split on `\n` into [`LineSpan`]s that index back into the buffer,
//! so no line bytes are copied. The scan then classifies each line as blank,
//! header, or candidate data and collects per-line delimiter counts for the
//! first few candidate data lines.

use std::ops::Range;

use auto_impl::auto_impl;
use log::trace;
use memchr::memchr_iter;

use crate::delim::DelimiterCounts;
use crate::types::RecordType;

/// Byte range of one line inside the buffer it was split from
///
/// The range excludes the newline and a single trailing carriage return.
pub type LineSpan = Range<usize>;

/// Decides whether a line belongs to the header section of a file
#[auto_impl(&, Box, Arc)]
pub trait HeaderPredicate {
    /// Returns `true` if `line` is a header line
    ///
    /// `line` is never empty.
    fn is_header(&self, line: &[u8]) -> bool;
}

/// Header predicate matching a fixed set of line prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMarkers {
    prefixes: Vec<&'static [u8]>,
}
impl Default for HeaderMarkers {
    /// Markers of the BED family: `#`, `track` and `browser`
    fn default() -> Self {
        Self::for_record_type(RecordType::Bed3)
    }
}
impl HeaderMarkers {
    #[must_use]
    pub fn new(prefixes: Vec<&'static [u8]>) -> Self {
        Self { prefixes }
    }

    /// Markers of the standard header convention of a record family
    #[must_use]
    pub fn for_record_type(rtype: RecordType) -> Self {
        Self::new(rtype.header_markers().to_vec())
    }

    /// Union of the markers of several record families
    #[must_use]
    pub fn for_record_types(rtypes: &[RecordType]) -> Self {
        let mut prefixes: Vec<&'static [u8]> = Vec::new();
        for marker in rtypes.iter().flat_map(|rtype| rtype.header_markers()) {
            if !prefixes.contains(marker) {
                prefixes.push(*marker);
            }
        }
        Self::new(prefixes)
    }

    #[must_use]
    pub fn prefixes(&self) -> &[&'static [u8]] {
        &self.prefixes
    }
}
impl HeaderPredicate for HeaderMarkers {
    fn is_header(&self, line: &[u8]) -> bool {
        self.prefixes.iter().any(|prefix| line.starts_with(prefix))
    }
}

/// Splits `buffer` on `\n`
///
/// `\n` is a strict separator: `n` newlines yield `n + 1` lines, except that a
/// buffer ending in `\n` does not produce a trailing empty line.
#[must_use]
pub fn split_lines(buffer: &[u8]) -> Vec<LineSpan> {
    let mut spans = Vec::new();
    let mut start = 0;
    for pos in memchr_iter(b'\n', buffer) {
        spans.push(trim_cr(buffer, start..pos));
        start = pos + 1;
    }
    if start < buffer.len() {
        spans.push(trim_cr(buffer, start..buffer.len()));
    }
    spans
}

fn trim_cr(buffer: &[u8], span: LineSpan) -> LineSpan {
    if span.end > span.start && buffer[span.end - 1] == b'\r' {
        span.start..span.end - 1
    } else {
        span
    }
}

/// Result of scanning the lines of one buffer
#[derive(Debug, Clone, Default)]
pub struct LineScan {
    /// Every line of the buffer, in order
    pub lines: Vec<LineSpan>,
    /// Index into `lines` of the first candidate data line
    pub first_data_line: Option<usize>,
    /// Number of candidate data lines retained
    pub valid_lines: usize,
    /// Number of header lines seen (including invalidated data lines)
    pub header_lines: usize,
    /// Number of empty lines seen
    pub blank_lines: usize,
    /// Delimiter counts of every candidate data line seen, including
    /// invalidated ones
    pub counts: DelimiterCounts,
}
impl LineScan {
    /// True when every line of the buffer was a header or blank line
    #[must_use]
    pub fn is_insufficient(&self) -> bool {
        self.header_lines + self.blank_lines == self.lines.len()
    }
}

/// Scans the lines of `buffer`, stopping once `max_data_lines` candidate data
/// lines were found
///
/// Headers may only precede data: a header line found after a provisional first
/// data line invalidates that line. The delimiter counts already recorded are
/// kept, so data lines on both sides of a late header must agree.
pub fn scan_lines<H: HeaderPredicate>(
    buffer: &[u8],
    headers: &H,
    max_data_lines: usize,
) -> LineScan {
    let mut scan = LineScan {
        lines: split_lines(buffer),
        ..LineScan::default()
    };

    for (idx, span) in scan.lines.iter().enumerate() {
        if scan.valid_lines >= max_data_lines {
            break;
        }
        let line = &buffer[span.clone()];
        if line.is_empty() {
            scan.blank_lines += 1;
            continue;
        }

        if headers.is_header(line) {
            if let Some(first) = scan.first_data_line.take() {
                trace!("Header at line {idx} invalidates provisional data line {first}");
                scan.valid_lines = scan.valid_lines.saturating_sub(1);
                scan.header_lines += 1;
            }
            scan.header_lines += 1;
            continue;
        }

        if !line.iter().any(u8::is_ascii_alphanumeric) {
            continue;
        }

        scan.valid_lines += 1;
        if scan.first_data_line.is_none() {
            scan.first_data_line = Some(idx);
        }
        scan.counts.record(line);
    }

    scan
}
