//! File and record type definitions
//!
//! [`FileType`] describes the container of an input source, [`RecordType`] the
//! structural family of one data row. Each record type carries a fixed set of
//! capabilities (name, score, strand columns) held in a static table.

use std::fmt;

/// Container-level classification of an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    #[default]
    Unknown,
    /// Line-oriented text with a single field delimiter
    DelimitedText,
    /// Gzip (or BGZF) compressed content, not yet decompressed
    Gzip,
    /// Binary alignment (BAM) content
    AlignmentBinary,
    /// Variant Call Format text
    Vcf,
}
impl FileType {
    /// Human-readable label of the file type
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown file type",
            Self::DelimitedText => "Delimited text file type",
            Self::Gzip => "Gzip file type",
            Self::AlignmentBinary => "BAM file type",
            Self::Vcf => "VCF file type",
        }
    }

    #[must_use]
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}
impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structural family of a data row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    #[default]
    Unknown,
    Bed3,
    Bed4,
    Bed5,
    Bed6,
    Bed12,
    BedGraph,
    /// BED with more than six columns, other than exactly twelve
    BedPlus,
    Alignment,
    Vcf,
    Gff,
}

/// Static capabilities of a record type
#[derive(Debug, Clone, Copy)]
struct Capabilities {
    name: bool,
    score: bool,
    strand: bool,
    label: &'static str,
}
impl Capabilities {
    const fn new(name: bool, score: bool, strand: bool, label: &'static str) -> Self {
        Self {
            name,
            score,
            strand,
            label,
        }
    }
}

/// Capability table indexed by the discriminant of [`RecordType`]
///
/// Bed4, Bed5 and bedGraph report the optional columns their layouts actually
/// carry (name; name and score; score) rather than none at all.
const CAPABILITIES: [Capabilities; 11] = [
    Capabilities::new(false, false, false, "Unknown record type"),
    Capabilities::new(false, false, false, "Bed3 record type"),
    Capabilities::new(true, false, false, "Bed4 record type"),
    Capabilities::new(true, true, false, "Bed5 record type"),
    Capabilities::new(true, true, true, "Bed6 record type"),
    Capabilities::new(true, true, true, "Bed12 record type"),
    Capabilities::new(false, true, false, "BedGraph record type"),
    Capabilities::new(true, true, true, "BedPlus record type"),
    Capabilities::new(true, true, true, "BAM record type"),
    Capabilities::new(true, true, true, "VCF record type"),
    Capabilities::new(true, true, true, "GFF record type"),
];

/// Header markers of the BED family (also used for bedGraph)
const BED_MARKERS: &[&[u8]] = &[b"#", b"track", b"browser"];

/// Header markers of formats using `#` comments only
const HASH_MARKERS: &[&[u8]] = &[b"#"];

/// Header markers of SAM-style text headers
const SAM_MARKERS: &[&[u8]] = &[b"@"];

impl RecordType {
    /// Every record type, in table order
    pub const ALL: [RecordType; 11] = [
        Self::Unknown,
        Self::Bed3,
        Self::Bed4,
        Self::Bed5,
        Self::Bed6,
        Self::Bed12,
        Self::BedGraph,
        Self::BedPlus,
        Self::Alignment,
        Self::Vcf,
        Self::Gff,
    ];

    fn capabilities(self) -> &'static Capabilities {
        &CAPABILITIES[self as usize]
    }

    /// Whether records of this type carry a name column
    #[must_use]
    pub fn has_name(self) -> bool {
        self.capabilities().name
    }

    /// Whether records of this type carry a score column
    #[must_use]
    pub fn has_score(self) -> bool {
        self.capabilities().score
    }

    /// Whether records of this type carry a strand column
    #[must_use]
    pub fn has_strand(self) -> bool {
        self.capabilities().strand
    }

    /// Human-readable label of the record type
    #[must_use]
    pub fn label(self) -> &'static str {
        self.capabilities().label
    }

    #[must_use]
    pub fn is_bed(self) -> bool {
        matches!(
            self,
            Self::Bed3
                | Self::Bed4
                | Self::Bed5
                | Self::Bed6
                | Self::Bed12
                | Self::BedGraph
                | Self::BedPlus
        )
    }

    /// Line prefixes that mark a header line for this record family
    ///
    /// Empty for record types without a text header convention.
    #[must_use]
    pub fn header_markers(self) -> &'static [&'static [u8]] {
        match self {
            Self::Gff | Self::Vcf => HASH_MARKERS,
            Self::Alignment => SAM_MARKERS,
            Self::Unknown => &[],
            _ => BED_MARKERS,
        }
    }
}
impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
