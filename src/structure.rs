//! Structural classification of a tokenized data line
//!
//! BED is tested first, then GFF. Both tests treat a pair of columns as genomic
//! coordinates that must be numeric and ordered (`end >= start`).

use crate::types::RecordType;

/// Record structure recognized from one data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structure {
    pub record_type: RecordType,
    /// Set for four-column BED lines whose fourth column is numeric
    pub fourth_field_numeric: bool,
}

/// Splits `line` on `delim`, keeping empty fields
#[must_use]
pub fn tokenize(line: &[u8], delim: u8) -> Vec<&[u8]> {
    line.split(|&byte| byte == delim).collect()
}

/// Whether `field` reads as a number (integer or decimal, optional sign and exponent)
#[must_use]
pub fn is_numeric(field: &[u8]) -> bool {
    if !field.iter().any(u8::is_ascii_digit) {
        return false;
    }
    if !field
        .iter()
        .all(|&byte| byte.is_ascii_digit() || matches!(byte, b'-' | b'+' | b'.' | b'e' | b'E'))
    {
        return false;
    }
    std::str::from_utf8(field)
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .is_some()
}

/// Parses `field` as an integer chromosome position
#[must_use]
pub fn parse_position(field: &[u8]) -> Option<i64> {
    std::str::from_utf8(field).ok()?.parse().ok()
}

/// Whether the columns at `start` and `end` hold an ordered coordinate pair
fn is_ordered_interval(fields: &[&[u8]], start: usize, end: usize) -> bool {
    if !is_numeric(fields[start]) || !is_numeric(fields[end]) {
        return false;
    }
    match (parse_position(fields[start]), parse_position(fields[end])) {
        (Some(start), Some(end)) => end >= start,
        _ => false,
    }
}

/// Resolves the BED subtype of `fields`, or `None` if the line is not BED
///
/// Requires at least three columns with an ordered interval in columns 2 and 3.
/// The subtype depends on the column count only.
#[must_use]
pub fn classify_bed(fields: &[&[u8]]) -> Option<Structure> {
    if fields.len() < 3 || !is_ordered_interval(fields, 1, 2) {
        return None;
    }
    let mut fourth_field_numeric = false;
    let record_type = match fields.len() {
        3 => RecordType::Bed3,
        4 => {
            fourth_field_numeric = is_numeric(fields[3]);
            if fourth_field_numeric {
                RecordType::BedGraph
            } else {
                RecordType::Bed4
            }
        }
        5 => RecordType::Bed5,
        6 => RecordType::Bed6,
        12 => RecordType::Bed12,
        _ => RecordType::BedPlus,
    };
    Some(Structure {
        record_type,
        fourth_field_numeric,
    })
}

/// Whether `fields` is a GFF line: 7 to 9 columns with an ordered interval in
/// columns 4 and 5
#[must_use]
pub fn is_gff(fields: &[&[u8]]) -> bool {
    (7..=9).contains(&fields.len()) && is_ordered_interval(fields, 3, 4)
}

/// Classifies a tokenized data line, testing BED before GFF
#[must_use]
pub fn classify_fields(fields: &[&[u8]]) -> Option<Structure> {
    classify_bed(fields).or_else(|| {
        is_gff(fields).then_some(Structure {
            record_type: RecordType::Gff,
            fourth_field_numeric: false,
        })
    })
}
