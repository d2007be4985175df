//! Buffer classification
//!
//! [`BufferClassifier`] turns a byte sample into a file type, record type,
//! field count and delimiter. The checks run in a fixed order, each assuming
//! the earlier ones failed:
//!
//! 1. gzip magic byte (the caller decompresses and resubmits)
//! 2. binary signature probe, then the printable-character ratio
//! 3. VCF header signature
//! 4. delimiter inference over the first few data lines
//! 5. BED structure, then GFF structure
//!
//! All working state lives in a [`ClassificationState`] owned by the caller,
//! one per input source. The same state is passed again when resubmitting
//! decompressed bytes, so facts learned from the compressed buffer persist.
//!
//! # Example
//!
//! ```
//! use bedsniff::{BufferClassifier, ClassificationState, Outcome, RecordType};
//!
//! let classifier = BufferClassifier::new();
//! let mut state = ClassificationState::new();
//!
//! let outcome = classifier.classify(&mut state, b"chr1\t10\t20\nchr1\t30\t40\n")?;
//! match outcome {
//!     Outcome::Classified(result) => assert_eq!(result.record_type, RecordType::Bed3),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! # Ok::<(), bedsniff::Error>(())
//! ```

use log::debug;
use memchr::memchr;

use crate::binary::{detect_binary, BamProbe, BinaryVerdict, SignatureProbe};
use crate::config::ClassifierConfig;
use crate::delim::{infer_delimiter, Delimiter, InferredDelimiter};
use crate::error::{ClassifyError, Result};
use crate::lines::{scan_lines, HeaderMarkers, HeaderPredicate, LineSpan};
use crate::structure::{classify_fields, tokenize};
use crate::types::{FileType, RecordType};

/// First byte of every gzip (and BGZF) stream
pub const GZIP_MAGIC_BYTE: u8 = 0x1F;

/// Leading bytes of every VCF file
pub const VCF_SIGNATURE: &[u8; 16] = b"##fileformat=VCF";

/// Result of classifying one buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The buffer is gzip compressed: decompress it and resubmit with the same state
    NeedsMoreData,
    /// File and record type were resolved
    Classified(Classification),
    /// Every sampled line was a header or blank line; a longer sample may resolve it
    InsufficientData,
    /// The buffer matches no known format
    Unclassifiable,
}
impl Outcome {
    #[must_use]
    pub fn classification(&self) -> Option<&Classification> {
        match self {
            Self::Classified(result) => Some(result),
            _ => None,
        }
    }
}

/// Fully resolved classification of an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub file_type: FileType,
    pub record_type: RecordType,
    /// Number of fields per line (text formats only)
    pub num_fields: Option<usize>,
    /// Field delimiter (text formats only)
    pub delimiter: Option<Delimiter>,
    /// Whether the content was gzip compressed
    pub is_gzipped: bool,
}
impl Classification {
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.record_type.has_name()
    }
    #[must_use]
    pub fn has_score(&self) -> bool {
        self.record_type.has_score()
    }
    #[must_use]
    pub fn has_strand(&self) -> bool {
        self.record_type.has_strand()
    }
}

/// Working set of one input source's classification
///
/// File type, record type, delimiter and field count are written at most once.
/// The boolean facts only ever flip from `false` to `true`, except for the
/// binary/text pair which reflects the last buffer scanned.
#[derive(Debug, Clone, Default)]
pub struct ClassificationState {
    file_type: FileType,
    record_type: RecordType,
    is_binary: bool,
    is_text: bool,
    is_gzipped: bool,
    is_bam: bool,
    is_vcf: bool,
    is_gff: bool,
    is_bed: bool,
    is_delimited: bool,
    delimiter: Option<Delimiter>,
    num_fields: Option<usize>,
    lines: Vec<LineSpan>,
    first_data_line: Option<usize>,
    insufficient_data: bool,
    fourth_field_numeric: bool,
}
impl ClassificationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved file type
    ///
    /// Reports [`FileType::Gzip`] while compressed content has been seen but its
    /// decompressed bytes have not resolved a concrete type yet.
    #[must_use]
    pub fn file_type(&self) -> FileType {
        if self.file_type == FileType::Unknown && self.is_gzipped {
            FileType::Gzip
        } else {
            self.file_type
        }
    }
    #[must_use]
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }
    #[must_use]
    pub fn is_binary(&self) -> bool {
        self.is_binary
    }
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.is_text
    }
    #[must_use]
    pub fn is_gzipped(&self) -> bool {
        self.is_gzipped
    }
    #[must_use]
    pub fn is_bam(&self) -> bool {
        self.is_bam
    }
    #[must_use]
    pub fn is_vcf(&self) -> bool {
        self.is_vcf
    }
    #[must_use]
    pub fn is_gff(&self) -> bool {
        self.is_gff
    }
    #[must_use]
    pub fn is_bed(&self) -> bool {
        self.is_bed
    }
    #[must_use]
    pub fn is_delimited(&self) -> bool {
        self.is_delimited
    }
    #[must_use]
    pub fn delimiter(&self) -> Option<Delimiter> {
        self.delimiter
    }
    #[must_use]
    pub fn num_fields(&self) -> Option<usize> {
        self.num_fields
    }
    /// Lines of the last text buffer scanned
    #[must_use]
    pub fn lines(&self) -> &[LineSpan] {
        &self.lines
    }
    /// Index into [`lines`](Self::lines) of the first valid data line
    #[must_use]
    pub fn first_data_line(&self) -> Option<usize> {
        self.first_data_line
    }
    #[must_use]
    pub fn insufficient_data(&self) -> bool {
        self.insufficient_data
    }
    #[must_use]
    pub fn fourth_field_numeric(&self) -> bool {
        self.fourth_field_numeric
    }

    /// Snapshot of the resolved results, if a record type was resolved
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        if self.record_type == RecordType::Unknown {
            return None;
        }
        Some(Classification {
            file_type: self.file_type,
            record_type: self.record_type,
            num_fields: self.num_fields,
            delimiter: self.delimiter,
            is_gzipped: self.is_gzipped,
        })
    }

    fn set_file_type(&mut self, file_type: FileType) {
        if self.file_type == FileType::Unknown {
            self.file_type = file_type;
        }
    }

    fn set_record_type(&mut self, record_type: RecordType) {
        debug_assert!(self.file_type.is_known());
        if self.record_type == RecordType::Unknown {
            self.record_type = record_type;
        }
    }

    fn set_delimiter(&mut self, inferred: InferredDelimiter) {
        self.is_delimited = true;
        if self.delimiter.is_none() {
            self.delimiter = Some(inferred.delimiter);
            self.num_fields = Some(inferred.num_fields);
        }
    }

    fn resolved(&self) -> Outcome {
        self.classification()
            .map_or(Outcome::Unclassifiable, Outcome::Classified)
    }

    fn unresolved(&self) -> Outcome {
        if self.insufficient_data {
            Outcome::InsufficientData
        } else {
            Outcome::Unclassifiable
        }
    }
}

/// Classifies byte samples of genomic interval files
///
/// The classifier itself is immutable and can be shared between threads; all
/// per-source state is passed in as a [`ClassificationState`].
#[derive(Debug, Clone)]
pub struct BufferClassifier<P = BamProbe, H = HeaderMarkers> {
    config: ClassifierConfig,
    probe: P,
    headers: H,
}
impl Default for BufferClassifier {
    fn default() -> Self {
        Self::new()
    }
}
impl BufferClassifier {
    /// Classifier with the default configuration, BAM probe and BED header markers
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    #[must_use]
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self::with_parts(config, BamProbe, HeaderMarkers::default())
    }
}
impl<P: SignatureProbe, H: HeaderPredicate> BufferClassifier<P, H> {
    /// Classifier with a custom binary signature probe and header predicate
    #[must_use]
    pub fn with_parts(config: ClassifierConfig, probe: P, headers: H) -> Self {
        Self {
            config,
            probe,
            headers,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies `buffer` with a fresh state
    pub fn sniff(&self, buffer: &[u8]) -> Result<(Outcome, ClassificationState)> {
        let mut state = ClassificationState::new();
        let outcome = self.classify(&mut state, buffer)?;
        Ok((outcome, state))
    }

    /// Classifies the whole of `buffer`
    pub fn classify(&self, state: &mut ClassificationState, buffer: &[u8]) -> Result<Outcome> {
        self.classify_with_len(state, buffer, buffer.len())
    }

    /// Classifies the first `known_len` bytes of `buffer`
    ///
    /// A `known_len` of zero means the buffer is NUL-terminated and its length
    /// is computed. An effective length of zero is a usage error.
    pub fn classify_with_len(
        &self,
        state: &mut ClassificationState,
        buffer: &[u8],
        known_len: usize,
    ) -> Result<Outcome> {
        let len = if known_len == 0 {
            memchr(0, buffer).unwrap_or(buffer.len())
        } else {
            known_len.min(buffer.len())
        };
        let buffer = &buffer[..len];
        if buffer.is_empty() {
            return Err(ClassifyError::EmptyBuffer.into());
        }

        if !state.is_gzipped && buffer[0] == GZIP_MAGIC_BYTE {
            debug!("Found gzip magic byte, awaiting decompressed data");
            state.is_gzipped = true;
            return Ok(Outcome::NeedsMoreData);
        }

        match detect_binary(&self.probe, buffer, self.config.printable_threshold) {
            BinaryVerdict::Alignment => {
                debug!("Signature probe matched binary alignment format");
                state.is_binary = true;
                state.is_text = false;
                state.is_bam = true;
                state.set_file_type(FileType::AlignmentBinary);
                state.set_record_type(RecordType::Alignment);
                Ok(state.resolved())
            }
            BinaryVerdict::UnknownBinary => {
                debug!("Buffer of {len} bytes is binary in an unknown format");
                state.is_binary = true;
                state.is_text = false;
                Ok(state.resolved())
            }
            BinaryVerdict::Text => {
                state.is_text = true;
                state.is_binary = false;
                self.classify_text(state, buffer)
            }
        }
    }

    fn classify_text(&self, state: &mut ClassificationState, buffer: &[u8]) -> Result<Outcome> {
        if state.is_vcf || buffer.starts_with(VCF_SIGNATURE) {
            if !state.is_vcf {
                debug!("Found VCF header signature");
                state.is_vcf = true;
                state.set_file_type(FileType::Vcf);
                state.set_record_type(RecordType::Vcf);
            }
            return Ok(if self.infer_delimited(state, buffer) {
                state.resolved()
            } else {
                state.unresolved()
            });
        }

        if !self.infer_delimited(state, buffer) {
            return Ok(state.unresolved());
        }
        state.set_file_type(FileType::DelimitedText);

        let (Some(first), Some(delimiter), Some(num_fields)) =
            (state.first_data_line, state.delimiter, state.num_fields)
        else {
            debug!("No valid data line left after header invalidation");
            return Ok(Outcome::Unclassifiable);
        };

        let line = &buffer[state.lines[first].clone()];
        let fields = tokenize(line, delimiter.as_byte());
        if fields.len() != num_fields {
            return Err(ClassifyError::FieldCountMismatch {
                expected: num_fields,
                got: fields.len(),
            }
            .into());
        }

        let Some(structure) = classify_fields(&fields) else {
            debug!("Delimited by '{delimiter}' with {num_fields} fields, but no known record structure");
            return Ok(Outcome::Unclassifiable);
        };
        if structure.record_type == RecordType::Gff {
            state.is_gff = true;
        } else {
            state.is_bed = true;
            state.fourth_field_numeric = structure.fourth_field_numeric;
        }
        debug!("Resolved {} ({num_fields} fields)", structure.record_type);
        state.set_record_type(structure.record_type);
        Ok(state.resolved())
    }

    /// Samples the lines of `buffer` and infers the field delimiter
    fn infer_delimited(&self, state: &mut ClassificationState, buffer: &[u8]) -> bool {
        let scan = scan_lines(buffer, &self.headers, self.config.max_data_lines);
        state.insufficient_data = scan.valid_lines == 0 && scan.is_insufficient();
        state.first_data_line = scan.first_data_line;
        state.lines = scan.lines;

        if scan.valid_lines == 0 {
            return false;
        }
        match infer_delimiter(&scan.counts) {
            Some(inferred) => {
                debug!(
                    "Inferred delimiter '{}' with {} fields",
                    inferred.delimiter, inferred.num_fields
                );
                state.set_delimiter(inferred);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use crate::Error;

    fn classify(buffer: &[u8]) -> Result<(Outcome, ClassificationState)> {
        BufferClassifier::new().sniff(buffer)
    }

    fn record_type_of(buffer: &[u8]) -> Result<RecordType> {
        let (outcome, _) = classify(buffer)?;
        Ok(outcome
            .classification()
            .map_or(RecordType::Unknown, |result| result.record_type))
    }

    #[test]
    fn test_bed3() -> Result<()> {
        let (outcome, state) = classify(b"chr1\t10\t20\n")?;
        let result = outcome.classification().copied().unwrap();
        assert_eq!(result.file_type, FileType::DelimitedText);
        assert_eq!(result.record_type, RecordType::Bed3);
        assert_eq!(result.num_fields, Some(3));
        assert_eq!(result.delimiter, Some(Delimiter::Tab));
        assert!(!result.has_name());
        assert!(state.is_text());
        assert!(state.is_bed());
        assert!(state.is_delimited());
        assert_eq!(state.first_data_line(), Some(0));
        Ok(())
    }

    #[test]
    fn test_four_column_variants() -> Result<()> {
        let (_, state) = classify(b"chr1\t10\t20\t0.5")?;
        assert_eq!(state.record_type(), RecordType::BedGraph);
        assert!(state.fourth_field_numeric());

        let (_, state) = classify(b"chr1\t10\t20\tgeneA")?;
        assert_eq!(state.record_type(), RecordType::Bed4);
        assert!(!state.fourth_field_numeric());
        Ok(())
    }

    #[test]
    fn test_bed_with_track_and_comments() -> Result<()> {
        let buffer = b"track name=pairedReads\nbrowser position chr7:127471196-127495720\n#c\nchr7\t127471196\t127472363\tPos1\t0\t+\nchr7\t127472363\t127473530\tPos2\t0\t+\n";
        let (outcome, state) = classify(buffer)?;
        let result = outcome.classification().copied().unwrap();
        assert_eq!(result.record_type, RecordType::Bed6);
        assert!(result.has_strand());
        assert_eq!(state.first_data_line(), Some(3));
        Ok(())
    }

    #[test]
    fn test_csv_bed() -> Result<()> {
        let (outcome, _) = classify(b"chr1,10,20,name,0,-\nchr2,5,8,other,1,+\n")?;
        let result = outcome.classification().copied().unwrap();
        assert_eq!(result.record_type, RecordType::Bed6);
        assert_eq!(result.delimiter, Some(Delimiter::Comma));
        Ok(())
    }

    #[test]
    fn test_gff() -> Result<()> {
        let buffer = b"##gff-version 3\nctg123\t.\tgene\t1000\t9000\t.\t+\t.\tID=gene00001\nctg123\t.\tmRNA\t1050\t9000\t.\t+\t.\tID=mRNA00001\n";
        let (outcome, state) = classify(buffer)?;
        assert_eq!(
            outcome.classification().map(|r| r.record_type),
            Some(RecordType::Gff)
        );
        assert!(state.is_gff());
        assert!(!state.is_bed());
        Ok(())
    }

    #[test]
    fn test_vcf() -> Result<()> {
        let buffer = b"##fileformat=VCFv4.2\n##source=test\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n1\t100\trs1\tA\tG\t50\tPASS\tDP=10\n1\t200\trs2\tC\tT\t60\tPASS\tDP=12\n";
        let (outcome, state) = classify(buffer)?;
        let result = outcome.classification().copied().unwrap();
        assert_eq!(result.file_type, FileType::Vcf);
        assert_eq!(result.record_type, RecordType::Vcf);
        assert_eq!(result.num_fields, Some(8));
        assert!(result.has_strand());
        assert!(state.is_vcf());
        Ok(())
    }

    #[test]
    fn test_vcf_headers_only() -> Result<()> {
        let buffer = b"##fileformat=VCFv4.2\n##source=test\n#CHROM\tPOS\tID\tREF\tALT\n";
        let (outcome, state) = classify(buffer)?;
        assert_eq!(outcome, Outcome::InsufficientData);
        assert_eq!(state.file_type(), FileType::Vcf);
        Ok(())
    }

    #[test]
    fn test_vcf_without_consistent_delimiter() -> Result<()> {
        let buffer = b"##fileformat=VCFv4.2\n1 100 rs1 A G\n";
        let (outcome, state) = classify(buffer)?;
        assert_eq!(outcome, Outcome::Unclassifiable);
        assert!(state.is_vcf());
        assert!(!state.is_delimited());
        Ok(())
    }

    #[test]
    fn test_headers_and_blanks_are_insufficient() -> Result<()> {
        let (outcome, state) = classify(b"#header one\n\ntrack name=x\n\n")?;
        assert_eq!(outcome, Outcome::InsufficientData);
        assert!(state.insufficient_data());
        assert_eq!(state.record_type(), RecordType::Unknown);
        assert!(state.classification().is_none());
        Ok(())
    }

    #[test]
    fn test_late_header_is_unclassifiable() -> Result<()> {
        let (outcome, state) = classify(b"first\tline\nsecond\tline\n#late header\n")?;
        assert_eq!(outcome, Outcome::Unclassifiable);
        assert_eq!(state.first_data_line(), None);
        assert!(!state.insufficient_data());
        Ok(())
    }

    #[test]
    fn test_data_around_late_header_must_agree() -> Result<()> {
        let (outcome, state) = classify(b"x\ty\nx\ty\n#h\nchr1\t1\t2\n")?;
        assert_eq!(outcome, Outcome::Unclassifiable);
        assert_eq!(state.first_data_line(), Some(3));
        assert_eq!(state.delimiter(), None);
        assert_eq!(state.record_type(), RecordType::Unknown);
        Ok(())
    }

    #[test]
    fn test_no_consistent_delimiter() -> Result<()> {
        let (outcome, state) = classify(b"a\tb\tc\nd\te\n")?;
        assert_eq!(outcome, Outcome::Unclassifiable);
        assert_eq!(state.delimiter(), None);
        assert_eq!(state.num_fields(), None);
        Ok(())
    }

    #[test]
    fn test_delimited_but_unknown_structure() -> Result<()> {
        let (outcome, state) = classify(b"name\tvalue\nfoo\tbar\n")?;
        assert_eq!(outcome, Outcome::Unclassifiable);
        assert_eq!(state.file_type(), FileType::DelimitedText);
        assert_eq!(state.delimiter(), Some(Delimiter::Tab));
        assert_eq!(state.num_fields(), Some(2));
        Ok(())
    }

    #[test]
    fn test_gzip_needs_more_data_once() -> Result<()> {
        let classifier = BufferClassifier::new();
        let mut state = ClassificationState::new();
        let buffer = b"\x1f\x8b\x08\x00\x00\x00\x00\x00";
        assert_eq!(classifier.classify(&mut state, buffer)?, Outcome::NeedsMoreData);
        assert!(state.is_gzipped());
        assert_eq!(state.file_type(), FileType::Gzip);
        assert!(!state.is_text());
        assert!(!state.is_binary());

        // a second 0x1F-led buffer on the same state is analyzed as content
        let outcome = classifier.classify(&mut state, buffer)?;
        assert_eq!(outcome, Outcome::Unclassifiable);
        assert!(state.is_binary());
        Ok(())
    }

    #[test]
    fn test_gzip_resubmission() -> Result<()> {
        let classifier = BufferClassifier::new();
        let mut state = ClassificationState::new();
        assert_eq!(
            classifier.classify(&mut state, b"\x1f\x8b\x08")?,
            Outcome::NeedsMoreData
        );
        let outcome = classifier.classify(&mut state, b"chr1\t1\t5\tx\t0\t+\n")?;
        let result = outcome.classification().copied().unwrap();
        assert_eq!(result.file_type, FileType::DelimitedText);
        assert_eq!(result.record_type, RecordType::Bed6);
        assert!(result.is_gzipped);
        assert_eq!(state.file_type(), FileType::DelimitedText);
        Ok(())
    }

    #[test]
    fn test_bam() -> Result<()> {
        let (outcome, state) = classify(b"BAM\x01\x10\x00\x00\x00@HD\tVN:1.6\n")?;
        let result = outcome.classification().copied().unwrap();
        assert_eq!(result.file_type, FileType::AlignmentBinary);
        assert_eq!(result.record_type, RecordType::Alignment);
        assert_eq!(result.num_fields, None);
        assert!(state.is_bam());
        assert!(state.is_binary());
        Ok(())
    }

    #[test]
    fn test_unknown_binary() -> Result<()> {
        let (outcome, state) = classify(&[0u8, 1, 2, 3, 200, 201, 202, 255, b'a', b'b'])?;
        assert_eq!(outcome, Outcome::Unclassifiable);
        assert!(state.is_binary());
        assert_eq!(state.file_type(), FileType::Unknown);
        Ok(())
    }

    #[test]
    fn test_empty_buffer() {
        let result = classify(b"");
        assert!(matches!(
            result,
            Err(Error::ClassifyError(ClassifyError::EmptyBuffer))
        ));
    }

    #[test]
    fn test_known_length() -> Result<()> {
        let classifier = BufferClassifier::new();

        // zero means NUL-terminated
        let mut state = ClassificationState::new();
        let outcome = classifier.classify_with_len(&mut state, b"chr1\t1\t2\n\0\xff\xfe", 0)?;
        assert_eq!(state.record_type(), RecordType::Bed3);
        assert!(matches!(outcome, Outcome::Classified(_)));

        // an explicit length truncates the buffer
        let mut state = ClassificationState::new();
        classifier.classify_with_len(&mut state, b"chr1\t1\t2\tname", 8)?;
        assert_eq!(state.record_type(), RecordType::Bed3);

        let mut state = ClassificationState::new();
        let result = classifier.classify_with_len(&mut state, b"\0chr1\t1\t2", 0);
        assert!(matches!(
            result,
            Err(Error::ClassifyError(ClassifyError::EmptyBuffer))
        ));
        Ok(())
    }

    #[test]
    fn test_field_count_mismatch_on_reused_state() -> Result<()> {
        let classifier = BufferClassifier::new();
        let mut state = ClassificationState::new();
        assert_eq!(
            classifier.classify(&mut state, b"a\tb\tc\n")?,
            Outcome::Unclassifiable
        );
        let result = classifier.classify(&mut state, b"chr1,1,2\n");
        assert!(matches!(
            result,
            Err(Error::ClassifyError(ClassifyError::FieldCountMismatch {
                expected: 3,
                got: 1
            }))
        ));
        Ok(())
    }

    #[test]
    fn test_only_four_lines_are_sampled() -> Result<()> {
        // the fifth line would break tab consistency if it were sampled
        let buffer = b"chr1\t1\t2\nchr1\t3\t4\nchr1\t5\t6\nchr1\t7\t8\nchr1\t9\t10\tx\tx\n";
        assert_eq!(record_type_of(buffer)?, RecordType::Bed3);

        let config = ClassifierConfig::builder().max_data_lines(5).build()?;
        let (outcome, _) = BufferClassifier::with_config(config).sniff(buffer)?;
        assert_eq!(outcome, Outcome::Unclassifiable);
        Ok(())
    }

    #[test]
    fn test_custom_header_predicate() -> Result<()> {
        let buffer = b"@HD\tVN:1.6\nchr1\t100\t200\n";
        assert_eq!(record_type_of(buffer)?, RecordType::Unknown);

        let headers = HeaderMarkers::for_record_types(&[RecordType::Bed3, RecordType::Alignment]);
        let classifier = BufferClassifier::with_parts(ClassifierConfig::default(), BamProbe, headers);
        let (outcome, _) = classifier.sniff(buffer)?;
        assert_eq!(
            outcome.classification().map(|r| r.record_type),
            Some(RecordType::Bed3)
        );
        Ok(())
    }
}
