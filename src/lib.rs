//! # bedsniff
//!
//! Content-based type detection for genomic interval files.
//!
//! `bedsniff` looks at a small byte sample from the start of a file and decides
//! what it holds, without relying on the file extension:
//!
//! - gzip compressed or plain
//! - binary (BAM or unknown) or text
//! - for text: the field delimiter (tab, comma or semicolon), the number of
//!   fields and the record shape (BED3/4/5/6/12, bedGraph, BED+, GFF, VCF)
//!
//! The core is [`BufferClassifier`], which works on in-memory buffers only.
//! The [`probe`] module adds the filesystem side: regular-file and gzip checks,
//! bounded decompression, and sniffing of one or many paths.
//!
//! ## Usage
//!
//! ```
//! use bedsniff::{BufferClassifier, Delimiter, FileType, RecordType};
//!
//! let classifier = BufferClassifier::new();
//! let sample = b"track name=genes\nchr1\t11873\t14409\tDDX11L1\t0\t+\n";
//!
//! let (outcome, _state) = classifier.sniff(sample)?;
//! let result = outcome.classification().expect("classified");
//!
//! assert_eq!(result.file_type, FileType::DelimitedText);
//! assert_eq!(result.record_type, RecordType::Bed6);
//! assert_eq!(result.delimiter, Some(Delimiter::Tab));
//! assert!(result.has_strand());
//! # Ok::<(), bedsniff::Error>(())
//! ```

mod binary;
mod classifier;
mod config;
mod delim;
mod error;
mod lines;
pub mod probe;
mod structure;
mod types;

pub use binary::{BamProbe, SignatureProbe, PRINTABLE_THRESHOLD};
pub use classifier::{
    BufferClassifier, Classification, ClassificationState, Outcome, GZIP_MAGIC_BYTE,
    VCF_SIGNATURE,
};
pub use config::{
    ClassifierConfig, ClassifierConfigBuilder, DEFAULT_MAX_DATA_LINES, DEFAULT_MAX_SAMPLE_SIZE,
    DEFAULT_SAMPLE_SIZE,
};
pub use delim::Delimiter;
pub use error::{BuilderError, ClassifyError, Error, ProbeError, Result};
pub use lines::{HeaderMarkers, HeaderPredicate, LineSpan};
pub use probe::SniffReport;
pub use types::{FileType, RecordType};

#[cfg(test)]
mod testing {

    use super::*;
    use anyhow::Result;

    fn sniff(buffer: &[u8]) -> Result<Outcome> {
        let (outcome, _) = BufferClassifier::new().sniff(buffer)?;
        Ok(outcome)
    }

    #[test]
    fn test_bed_family() -> Result<()> {
        let cases: [(&[u8], RecordType); 3] = [
            (b"chr1\t10\t20", RecordType::Bed3),
            (b"chr1\t10\t20\t0.5", RecordType::BedGraph),
            (b"chr1\t10\t20\tgeneA", RecordType::Bed4),
        ];
        for (buffer, expected) in cases {
            let outcome = sniff(buffer)?;
            assert_eq!(
                outcome.classification().map(|r| r.record_type),
                Some(expected)
            );
        }
        Ok(())
    }

    #[test]
    fn test_gff_when_not_bed() -> Result<()> {
        let buffer = b"chr1\tensembl\tgene\t100\t200\t.\t+\t.\tgene_id=X";
        let outcome = sniff(buffer)?;
        let result = outcome.classification().copied().unwrap();
        assert_eq!(result.record_type, RecordType::Gff);
        assert_eq!(result.num_fields, Some(9));
        Ok(())
    }

    #[test]
    fn test_vcf_has_strand() -> Result<()> {
        let buffer = b"##fileformat=VCFv4.3\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\nchr1\t5\t.\tA\tT\t.\tPASS\t.\n";
        let result = sniff(buffer)?.classification().copied().unwrap();
        assert_eq!(result.file_type, FileType::Vcf);
        assert_eq!(result.record_type, RecordType::Vcf);
        assert!(result.has_strand());
        Ok(())
    }

    #[test]
    fn test_headers_only() -> Result<()> {
        assert_eq!(sniff(b"#a\n\n#b\n")?, Outcome::InsufficientData);
        Ok(())
    }

    #[test]
    fn test_fresh_state_is_idempotent() -> Result<()> {
        let buffer = b"chr2;5;10;x;1;-\nchr2;15;20;y;1;+\n";
        let first = sniff(buffer)?;
        let second = sniff(buffer)?;
        assert_eq!(first, second);
        assert_eq!(
            first.classification().and_then(|r| r.delimiter),
            Some(Delimiter::Semicolon)
        );
        Ok(())
    }
}
