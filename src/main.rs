use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use bedsniff::{BufferClassifier, ClassifierConfig};

/// Detect the type of genomic interval files from their content
#[derive(Parser, Debug)]
#[command(name = "bedsniff", version, about)]
struct Args {
    /// Files to classify
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Number of threads (0 uses all available cores)
    #[arg(short = 'T', long, default_value_t = 1)]
    threads: usize,

    /// Number of bytes sampled from the start of each file
    #[arg(short = 's', long, default_value_t = bedsniff::DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Largest sample re-read when the first one holds only header lines
    #[arg(short = 'm', long)]
    max_sample_size: Option<usize>,

    /// Number of data lines inspected for delimiter inference
    #[arg(short = 'n', long, default_value_t = bedsniff::DEFAULT_MAX_DATA_LINES)]
    data_lines: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = ClassifierConfig::builder()
        .sample_size(args.sample_size)
        .max_data_lines(args.data_lines);
    if let Some(max_sample_size) = args.max_sample_size {
        builder = builder.max_sample_size(max_sample_size);
    }
    let config = builder.build()?;
    let classifier = BufferClassifier::with_config(config);

    let mut failures = 0;
    for (path, report) in args
        .paths
        .iter()
        .zip(classifier.sniff_paths(&args.paths, args.threads))
    {
        match report {
            Ok(report) => println!("{report}"),
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} files could not be sniffed", args.paths.len());
    }
    Ok(())
}
