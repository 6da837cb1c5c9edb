
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use raid5_rs::codec;
use raid5_rs::retention::array::Array;
use raid5_rs::retention::disk::Disk;
use tracing::{debug, error, info};

use crate::cli::Cli;

/// Validates, reads, stripes and writes every disk image.
///
/// No output file is touched unless parameters, input and allocation all succeed.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    run_from(cli, io::stdin().lock())
}

/// Same as [`run`], with `stdin` standing in for the `-` input path.
pub fn run_from<R: Read>(cli: &Cli, stdin: R) -> anyhow::Result<()> {
    let params = cli.params();
    params.validate().context("rejected array parameters")?;

    let text = read_input(&cli.input, stdin)?;
    let (array, summary) =
        raid5_rs::encode_hex(&params, &text).context("failed to stripe input")?;
    debug!("disk status:\n{}", array.status_string());

    write_disks(&array, &cli.disks)?;
    info!(
        disks = cli.disks.len(),
        stripes = summary.stripes,
        "wrote disk images"
    );
    Ok(())
}

fn read_input<R: Read>(path: &Path, mut stdin: R) -> anyhow::Result<Vec<u8>> {
    let mut text = Vec::new();
    if path == Path::new("-") {
        stdin
            .read_to_end(&mut text)
            .context("failed to read input from stdin")?;
    } else {
        File::open(path)
            .with_context(|| format!("failed to open input file {}", path.display()))?
            .read_to_end(&mut text)
            .with_context(|| format!("failed to read input file {}", path.display()))?;
    }
    Ok(text)
}

/// Writes each disk to its destination independently.
///
/// A destination that cannot be written is logged and skipped so the remaining disks
/// are still produced; the call fails afterwards, naming every skipped destination.
pub fn write_disks(array: &Array, paths: &[PathBuf]) -> anyhow::Result<()> {
    let mut failed = Vec::new();
    for (i, (disk, path)) in array.iter().zip(paths).enumerate() {
        match write_disk(disk, path) {
            Ok(()) => debug!(disk = i, path = %path.display(), "disk image written"),
            Err(e) => {
                error!(disk = i, path = %path.display(), "{e:#}");
                failed.push(path.display().to_string());
            }
        }
    }

    if !failed.is_empty() {
        bail!(
            "failed to write {} of {} disk images: {}",
            failed.len(),
            paths.len(),
            failed.join(", ")
        );
    }
    Ok(())
}

fn write_disk(disk: &Disk, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create disk image {}", path.display()))?;
    let mut w = BufWriter::new(file);
    codec::encode_to(&mut w, disk.as_bytes())
        .with_context(|| format!("failed to write disk image {}", path.display()))?;
    w.flush()
        .with_context(|| format!("failed to flush disk image {}", path.display()))
}
