//! Binary versus text detection
//!
//! A buffer is first offered to a [`SignatureProbe`] that recognizes a known
//! binary format by its magic bytes. Failing that, the buffer is binary when
//! too few of its bytes are printable.

use auto_impl::auto_impl;
use byteorder::{ByteOrder, LittleEndian};

/// Fraction of printable bytes below which a buffer is considered binary
pub const PRINTABLE_THRESHOLD: f32 = 0.90;

/// BAM magic number: "BAM\1" in ASCII (in little-endian byte order)
#[allow(clippy::unreadable_literal)]
const BAM_MAGIC: u32 = 0x014D4142;

/// Size of the BAM magic number in bytes
pub const SIZE_BAM_MAGIC: usize = 4;

/// Recognizes a binary alignment format from the first bytes of a buffer
#[auto_impl(&, Box, Arc)]
pub trait SignatureProbe {
    /// Returns `true` if `buffer` starts with the format's signature
    fn matches(&self, buffer: &[u8]) -> bool;
}

/// Probe for the BAM magic number
#[derive(Debug, Clone, Copy, Default)]
pub struct BamProbe;
impl SignatureProbe for BamProbe {
    fn matches(&self, buffer: &[u8]) -> bool {
        buffer.len() >= SIZE_BAM_MAGIC && LittleEndian::read_u32(&buffer[..SIZE_BAM_MAGIC]) == BAM_MAGIC
    }
}

/// Verdict of the binary detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryVerdict {
    /// The signature probe recognized a binary alignment file
    Alignment,
    /// Too few printable bytes, format not recognized
    UnknownBinary,
    Text,
}

/// Alphanumeric, whitespace or punctuation (C locale)
fn is_printable(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || byte.is_ascii_whitespace()
        || byte == 0x0B
        || byte.is_ascii_punctuation()
}

/// Fraction of bytes in `buffer` that are alphanumeric, whitespace or punctuation
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn printable_fraction(buffer: &[u8]) -> f32 {
    if buffer.is_empty() {
        return 0.0;
    }
    let printable = buffer.iter().filter(|&&byte| is_printable(byte)).count();
    printable as f32 / buffer.len() as f32
}

/// Decides whether `buffer` is binary
///
/// The signature probe takes precedence over the printable-character ratio.
pub fn detect_binary<P: SignatureProbe>(probe: &P, buffer: &[u8], threshold: f32) -> BinaryVerdict {
    if probe.matches(buffer) {
        return BinaryVerdict::Alignment;
    }
    if printable_fraction(buffer) < threshold {
        BinaryVerdict::UnknownBinary
    } else {
        BinaryVerdict::Text
    }
}
