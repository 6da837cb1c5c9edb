use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use raid5_rs::retention::array::ArrayParams;
use tracing_subscriber::EnvFilter;

/// Stripe a hex-encoded stream across RAID5 disk images with rotating parity.
#[derive(Parser, Debug)]
#[command(name = "raid5", author, version, about)]
pub struct Cli {
    /// Block size in bytes (1..=4096).
    pub block_size: usize,

    /// Length of the decoded input in bytes.
    pub input_len: usize,

    /// Hex-encoded input file, or `-` for stdin.
    pub input: PathBuf,

    /// Size of every disk image in bytes.
    pub disk_size: usize,

    /// Output path of each disk image, at least three.
    #[arg(required = true, num_args = 1..)]
    pub disks: Vec<PathBuf>,

    /// Log filter directive applied on top of `RUST_LOG`.
    #[arg(long, env = "RAID5_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    #[must_use]
    pub fn params(&self) -> ArrayParams {
        ArrayParams {
            block_size: self.block_size,
            input_len: self.input_len,
            disk_len: self.disk_size,
            disks: self.disks.len(),
        }
    }

    /// `RUST_LOG` filter with `--log-level` layered on top.
    pub fn log_filter(&self) -> anyhow::Result<EnvFilter> {
        let directive = self
            .log_level
            .parse()
            .with_context(|| format!("invalid log level {:?}", self.log_level))?;
        Ok(EnvFilter::from_default_env().add_directive(directive))
    }
}
