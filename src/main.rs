use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use drawable_audit::{run_audit, AuditOptions};

/// Audit density-bucketed drawables: every bucket copy of an asset must be
/// an exact scalar multiple of its baseline (mdpi) dimensions.
#[derive(Parser, Debug)]
#[command(name = "daudit")]
#[command(about = "Check drawable-* assets for consistent per-density sizes")]
#[command(long_about = "Scan the drawable-* bucket directories under a resource root, verify that \
every asset's dimensions scale exactly from its mdpi baseline (1, 1.5, 2, 3, 4), and write an \
index.html report to the current directory. Wrong-sized assets are a reporting outcome, not a \
failure: the exit code is nonzero only when the root is unusable or the report cannot be written.")]
struct Args {
    /// Resource root containing the drawable-* bucket directories
    #[arg(default_value = ".", help = "Directory to scan (defaults to the current directory)")]
    root: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The report lands in the invocation directory, not the scanned root.
    let output_dir = std::env::current_dir()?;

    let summary = run_audit(&AuditOptions {
        root: args.root,
        output_dir,
    })?;

    println!(
        "Audited {} assets: {} valid, {} wrong or unreadable, {} missing",
        summary.assets, summary.valid, summary.invalid, summary.missing
    );
    println!("Report written to {}", summary.report_path.display());
    Ok(())
}
