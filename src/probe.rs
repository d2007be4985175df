//! Filesystem collaborators of the classifier
//!
//! The classifier itself never touches the filesystem. This module provides the
//! pieces a caller needs around it: a regular-file check, a gzip signature
//! check, bounded decompression of a gzip sample, and a driver that sniffs a
//! path end to end (including the gzip resubmission loop).

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use log::debug;
use memmap2::Mmap;

use crate::binary::SignatureProbe;
use crate::classifier::{BufferClassifier, ClassificationState, Outcome};
use crate::error::{ProbeError, Result};
use crate::lines::HeaderPredicate;

/// Gzip header: magic bytes followed by the deflate compression method
pub const GZIP_HEADER: [u8; 3] = [0x1F, 0x8B, 0x08];

/// Whether `path` names a regular file
///
/// Fails if the path cannot be stat'ed.
pub fn is_regular_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.is_file())
}

/// Whether the file at `path` starts with the gzip header
///
/// Unreadable or short files are reported as not gzipped.
pub fn is_gzip_file<P: AsRef<Path>>(path: P) -> bool {
    let mut header = [0u8; GZIP_HEADER.len()];
    File::open(path)
        .and_then(|mut handle| handle.read_exact(&mut header))
        .is_ok_and(|()| header == GZIP_HEADER)
}

/// Decompresses at most `limit` bytes from a gzip (or BGZF) stream
///
/// A truncated stream is not an error as long as some bytes were recovered,
/// since callers routinely hand over only a prefix of a compressed file.
pub fn decompress_sample(compressed: &[u8], limit: usize) -> io::Result<Vec<u8>> {
    let mut sample = Vec::with_capacity(limit.min(compressed.len().saturating_mul(4)));
    let decoder = MultiGzDecoder::new(compressed);
    match decoder.take(limit as u64).read_to_end(&mut sample) {
        Ok(_) => Ok(sample),
        Err(e) if !sample.is_empty() => {
            debug!("Keeping {} decompressed bytes of a truncated stream: {e}", sample.len());
            Ok(sample)
        }
        Err(e) => Err(e),
    }
}

/// Classification of one path
#[derive(Debug)]
pub struct SniffReport {
    pub path: PathBuf,
    pub outcome: Outcome,
    pub state: ClassificationState,
}
impl fmt::Display for SniffReport {
    /// Tab-separated: path, file type, record type, fields, delimiter, name/score/strand
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rtype = self.state.record_type();
        let status = match self.outcome {
            Outcome::Classified(_) => "classified",
            Outcome::NeedsMoreData => "needs-more-data",
            Outcome::InsufficientData => "insufficient-data",
            Outcome::Unclassifiable => "unclassifiable",
        };
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.path.display(),
            status,
            self.state.file_type(),
            rtype,
            self.state
                .num_fields()
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            self.state
                .delimiter()
                .map_or_else(|| "-".to_string(), |d| d.to_string()),
            flag_string(rtype.has_name(), rtype.has_score(), rtype.has_strand()),
        )
    }
}

fn flag_string(name: bool, score: bool, strand: bool) -> String {
    [(name, 'N'), (score, 'S'), (strand, '+')]
        .iter()
        .map(|&(set, c)| if set { c } else { '-' })
        .collect()
}

impl<P: SignatureProbe, H: HeaderPredicate> BufferClassifier<P, H> {
    /// Classifies the file at `path` from a sample of its first bytes
    ///
    /// The file is memory-mapped and only the configured sample size is
    /// inspected. Gzip content is decompressed and resubmitted once. A sample
    /// holding nothing but header lines is doubled and classified again with a
    /// fresh state, until data is found, the content runs out, or the sample
    /// reaches `max_sample_size`.
    pub fn sniff_path<Q: AsRef<Path>>(&self, path: Q) -> Result<SniffReport> {
        let path = path.as_ref();
        let name = path.display().to_string();
        if !is_regular_file(path)? {
            return Err(ProbeError::IncompatibleFile(name).into());
        }

        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Err(ProbeError::EmptyFile(name).into());
        }

        // Safety: the file is opened read-only and the map does not outlive this call
        let mmap = unsafe { Mmap::map(&file)? };
        let max_sample_size = self.config().max_sample_size;
        let mut limit = self.config().sample_size;
        loop {
            let (outcome, state, exhausted) = self.sniff_prefix(&name, &mmap, limit)?;
            if outcome != Outcome::InsufficientData || exhausted || limit >= max_sample_size {
                return Ok(SniffReport {
                    path: path.to_path_buf(),
                    outcome,
                    state,
                });
            }
            limit = limit.saturating_mul(2).min(max_sample_size);
            debug!("{name} sample holds only headers, retrying with {limit} bytes");
        }
    }

    /// Classifies at most `limit` bytes of content from `data` with a fresh state
    ///
    /// The flag is set when `data` holds no content beyond the sample.
    fn sniff_prefix(
        &self,
        name: &str,
        data: &[u8],
        limit: usize,
    ) -> Result<(Outcome, ClassificationState, bool)> {
        let mut state = ClassificationState::new();
        let mut outcome = self.classify(&mut state, &data[..data.len().min(limit)])?;
        let mut exhausted = data.len() <= limit;
        if outcome == Outcome::NeedsMoreData {
            debug!("{name} is gzip compressed, sampling decompressed content");
            let inflated = decompress_sample(data, limit)?;
            if inflated.is_empty() {
                return Err(ProbeError::EmptyFile(name.to_string()).into());
            }
            exhausted = inflated.len() < limit;
            outcome = self.classify(&mut state, &inflated)?;
        }
        Ok((outcome, state, exhausted))
    }
}

impl<P, H> BufferClassifier<P, H>
where
    P: SignatureProbe + Sync,
    H: HeaderPredicate + Sync,
{
    /// Classifies many paths concurrently
    ///
    /// Each path gets its own [`ClassificationState`]. Paths are split into
    /// contiguous chunks, one per thread. Results are returned in input order.
    ///
    /// # Arguments
    ///
    /// * `paths` - The files to classify
    /// * `num_threads` - Number of threads to use (0 uses all available cores)
    pub fn sniff_paths<Q: AsRef<Path> + Sync>(
        &self,
        paths: &[Q],
        num_threads: usize,
    ) -> Vec<Result<SniffReport>> {
        if paths.is_empty() {
            return Vec::new();
        }

        // Calculate the number of threads to use
        let num_threads = if num_threads == 0 {
            num_cpus::get()
        } else {
            num_threads.min(num_cpus::get())
        };
        let paths_per_thread = paths.len().div_ceil(num_threads.max(1));

        std::thread::scope(|scope| {
            let handles: Vec<_> = paths
                .chunks(paths_per_thread)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|path| self.sniff_path(path))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| match handle.join() {
                    Ok(reports) => reports,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}
