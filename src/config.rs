use crate::binary::PRINTABLE_THRESHOLD;
use crate::error::{BuilderError, Result};

/// Default number of bytes sampled from the start of a source
pub const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Default upper bound on the sample when a file opens with a long header
pub const DEFAULT_MAX_SAMPLE_SIZE: usize = 1 << 20;

/// Default number of candidate data lines inspected for delimiter inference
pub const DEFAULT_MAX_DATA_LINES: usize = 4;

/// Tunables of the classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierConfig {
    /// Number of bytes read from a source before classifying it
    pub sample_size: usize,
    /// Largest sample a path is re-read with while only headers were seen
    pub max_sample_size: usize,
    /// Fraction of printable bytes below which a buffer is binary
    pub printable_threshold: f32,
    /// Number of candidate data lines sampled for delimiter inference
    pub max_data_lines: usize,
}
impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            max_sample_size: DEFAULT_MAX_SAMPLE_SIZE,
            printable_threshold: PRINTABLE_THRESHOLD,
            max_data_lines: DEFAULT_MAX_DATA_LINES,
        }
    }
}
impl ClassifierConfig {
    #[must_use]
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifierConfigBuilder {
    sample_size: Option<usize>,
    max_sample_size: Option<usize>,
    printable_threshold: Option<f32>,
    max_data_lines: Option<usize>,
}
impl ClassifierConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = Some(sample_size);
        self
    }
    #[must_use]
    pub fn max_sample_size(mut self, max_sample_size: usize) -> Self {
        self.max_sample_size = Some(max_sample_size);
        self
    }
    #[must_use]
    pub fn printable_threshold(mut self, threshold: f32) -> Self {
        self.printable_threshold = Some(threshold);
        self
    }
    #[must_use]
    pub fn max_data_lines(mut self, max_data_lines: usize) -> Self {
        self.max_data_lines = Some(max_data_lines);
        self
    }
    pub fn build(self) -> Result<ClassifierConfig> {
        let sample_size = self.sample_size.unwrap_or(DEFAULT_SAMPLE_SIZE);
        if sample_size == 0 {
            return Err(BuilderError::ZeroSampleSize.into());
        }
        let max_sample_size = match self.max_sample_size {
            Some(max_sample_size) if max_sample_size < sample_size => {
                return Err(BuilderError::SampleCapTooSmall {
                    sample_size,
                    max_sample_size,
                }
                .into());
            }
            Some(max_sample_size) => max_sample_size,
            None => DEFAULT_MAX_SAMPLE_SIZE.max(sample_size),
        };
        let printable_threshold = self.printable_threshold.unwrap_or(PRINTABLE_THRESHOLD);
        if !(printable_threshold > 0.0 && printable_threshold <= 1.0) {
            return Err(BuilderError::InvalidThreshold(printable_threshold).into());
        }
        let max_data_lines = self.max_data_lines.unwrap_or(DEFAULT_MAX_DATA_LINES);
        if max_data_lines == 0 {
            return Err(BuilderError::ZeroDataLines.into());
        }
        Ok(ClassifierConfig {
            sample_size,
            max_sample_size,
            printable_threshold,
            max_data_lines,
        })
    }
}
