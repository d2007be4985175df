/// Custom Result type for bedsniff operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bedsniff library, encompassing all possible error cases
/// that can occur while sniffing an input source.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors raised by the classifier on unusable input
    ClassifyError(#[from] ClassifyError),
    /// Errors raised by the filesystem collaborators
    ProbeError(#[from] ProbeError),
    /// Errors from building a classifier configuration
    BuilderError(#[from] BuilderError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
}

/// Usage errors raised while classifying a buffer
///
/// These are faults in how the classifier was called, not a failure to
/// recognize the input. An unrecognized input is reported through
/// [`Outcome::Unclassifiable`](crate::Outcome::Unclassifiable) instead.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ClassifyError {
    /// The buffer handed to the classifier holds no bytes
    #[error("Cannot classify an empty buffer")]
    EmptyBuffer,

    /// Splitting the first data line produced a different field count than
    /// the one inferred from the delimiter counts
    ///
    /// # Fields
    /// * `expected` - The field count inferred from the delimiter
    /// * `got` - The number of fields found when tokenizing the line
    #[error("Wrong number of fields while tokenizing data line ({got}), expected {expected}")]
    FieldCountMismatch { expected: usize, got: usize },
}

/// Errors that can occur while probing a path on the filesystem
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    /// The path is not a regular file (e.g., it might be a directory or special file)
    ///
    /// # Arguments
    /// * `String` - The offending path
    #[error("File is not regular: {0}")]
    IncompatibleFile(String),

    /// The file (or its decompressed content) holds no bytes
    ///
    /// # Arguments
    /// * `String` - The offending path
    #[error("{0} is an empty file")]
    EmptyFile(String),
}

/// Errors raised when building a [`ClassifierConfig`](crate::ClassifierConfig)
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BuilderError {
    /// The printable-character threshold must lie in `(0, 1]`
    #[error("Printable threshold must be within (0, 1], got {0}")]
    InvalidThreshold(f32),

    /// At least one byte must be sampled
    #[error("Sample size must be greater than zero")]
    ZeroSampleSize,

    /// At least one data line must be inspected
    #[error("Number of sampled data lines must be greater than zero")]
    ZeroDataLines,

    /// The retry cap must not be smaller than the initial sample
    #[error("Maximum sample size ({max_sample_size}) is smaller than the sample size ({sample_size})")]
    SampleCapTooSmall {
        sample_size: usize,
        max_sample_size: usize,
    },
}
