//! # Drawable Density Audit Library
//!
//! Audits a tree of density-bucketed image assets (Android `drawable-*`
//! layout) and reports, per asset and per bucket, whether the on-disk
//! dimensions are an exact scalar multiple of the asset's baseline (mdpi)
//! dimensions.
//!
//! ## Architecture
//!
//! The library is organized into small, single-purpose modules:
//! - `catalog`: asset discovery across bucket directories
//! - `probe`: injected image size probing (header-only, no pixel decode)
//! - `validator`: the classification engine
//! - `report`: HTML rendering of the finished result table
//!
//! The density tier table and exact scale arithmetic live in the
//! `dpi-scale` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use drawable_audit::{run_audit, AuditOptions};
//!
//! # fn main() -> drawable_audit::AuditResult<()> {
//! let summary = run_audit(&AuditOptions {
//!     root: "res".into(),
//!     output_dir: ".".into(),
//! })?;
//! println!("{} assets audited", summary.assets);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod catalog;
pub mod error;
pub mod probe;
pub mod report;
pub mod validator;

/// Re-export error types for convenience
pub use error::{AuditError, AuditResult};

use catalog::AssetCatalog;
use dpi_scale::tiers::TierTable;
use probe::ImageHeaderProbe;
use validator::{Classification, Validator};

/// Options for one audit run.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Root directory containing the `drawable-*` bucket subdirectories.
    pub root: PathBuf,

    /// Directory the report artifact is written to. This is the invocation
    /// working directory, not the scanned root.
    pub output_dir: PathBuf,
}

/// Counts from a finished run, plus where the report landed.
///
/// Invalid cells are a reporting outcome, never a process failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSummary {
    /// Distinct assets discovered across all buckets.
    pub assets: usize,
    /// Cells present with exactly the expected dimensions.
    pub valid: usize,
    /// Cells present but wrong-sized, unreadable, or indeterminate.
    pub invalid: usize,
    /// Cells whose bucket has no copy of the asset.
    pub missing: usize,
    /// Path of the written `index.html`.
    pub report_path: PathBuf,
}

/// Run a complete audit: scan, classify, render, write.
///
/// Fails only on an unusable root, an unenumerable bucket directory, or an
/// unwritable report; everything per-asset degrades into the report.
pub fn run_audit(options: &AuditOptions) -> AuditResult<AuditSummary> {
    let tiers = TierTable::android_drawables();
    let catalog = AssetCatalog::scan(&options.root, &tiers)?;
    let validator = Validator::new(options.root.clone(), tiers, ImageHeaderProbe);
    let results = validator.validate(&catalog);

    let html = report::render_document(&results);
    let report_path = report::write_report(&html, &options.output_dir)?;

    let mut summary = AuditSummary {
        assets: results.rows.len(),
        valid: 0,
        invalid: 0,
        missing: 0,
        report_path,
    };
    for row in &results.rows {
        for cell in &row.cells {
            match cell.state {
                Classification::Valid { .. } => summary.valid += 1,
                Classification::Invalid { .. } => summary.invalid += 1,
                Classification::Missing => summary.missing += 1,
            }
        }
    }
    Ok(summary)
}
