//! vcfseal command line: seal a variant text file into a stream of
//! independently encrypted frames.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use vcfseal_core::crypto::{parse_hex_key, INSECURE_TEST_KEY, KEY_LEN_16};
use vcfseal_core::stream::{EncryptPipeline, FrameWriter, PipelineConfig};
use vcfseal_core::vcf::VcfReader;

#[derive(Parser)]
#[command(
    name = "vcfseal",
    about = "Encrypt a variant text file into a block-framed AES-128-GCM stream"
)]
struct Args {
    /// Source text file, one variant per line; `#` lines are comments.
    input: PathBuf,

    /// Output file to create or overwrite with the frame stream.
    output: PathBuf,

    /// AES-128 key as exactly 32 hex characters.
    #[arg(long, value_name = "HEX32", conflicts_with = "insecure_test_key")]
    key: Option<String>,

    /// Use the embedded static test key. Anything sealed under it must
    /// be considered public; never use outside tests and demos.
    #[arg(long)]
    insecure_test_key: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn resolve_key(args: &Args) -> Result<[u8; KEY_LEN_16]> {
    match (&args.key, args.insecure_test_key) {
        (Some(hex), false) => parse_hex_key(hex).context("invalid --key"),
        (None, true) => {
            log::warn!("using the embedded test key; output is NOT confidential");
            Ok(INSECURE_TEST_KEY)
        }
        (None, false) => bail!("no key given: pass --key <HEX32> or --insecure-test-key"),
        (Some(_), true) => unreachable!("clap rejects --key with --insecure-test-key"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // Key errors are configuration errors: fail before touching any file.
    let key = resolve_key(&args)?;

    let input = File::open(&args.input)
        .with_context(|| format!("cannot open input {}", args.input.display()))?;
    let output = File::create(&args.output)
        .with_context(|| format!("cannot create output {}", args.output.display()))?;

    let records = VcfReader::new(BufReader::new(input));
    let mut writer = FrameWriter::new(BufWriter::new(output));

    let mut pipeline = EncryptPipeline::new(PipelineConfig::new(key))?;
    let summary = pipeline
        .run(records, &mut writer)
        .with_context(|| format!("sealing {} failed", args.input.display()))?;
    writer.finish()?;

    log::info!(
        "sealed {} -> {}: {} records in {} frames ({} bytes)",
        args.input.display(),
        args.output.display(),
        summary.records_read,
        summary.frames_written,
        summary.bytes_written
    );
    Ok(())
}
