//! The validation engine: classifies every (asset, bucket) pair.
//!
//! For each cataloged asset the engine establishes baseline dimensions at
//! most once, derives the expected size for every tier from that single
//! value, and classifies each bucket's on-disk state against it. All
//! per-cell failures degrade locally; nothing in here aborts a run.

use std::path::PathBuf;

use dpi_scale::tiers::{Expected, Size, Tier, TierTable};

use crate::catalog::{Asset, AssetCatalog};
use crate::probe::SizeProbe;

/// Outcome for one (asset, bucket) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No file with the asset's name exists in this bucket.
    Missing,
    /// Present with exactly the expected dimensions.
    Valid { actual: Size },
    /// Present but non-conforming. `actual` is `None` when the file was
    /// unreadable at probe time, or when the baseline itself is unknown and
    /// observed dimensions are reported as indeterminate.
    Invalid { actual: Option<Size> },
}

/// One bucket cell of an asset's row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketCell {
    pub tier: Tier,
    /// Expected dimensions at this tier; `None` when the baseline copy is
    /// missing or unreadable.
    pub expected: Option<Expected>,
    pub state: Classification,
}

/// Bucket-ordered cells for one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    pub name: String,
    pub display_path: PathBuf,
    pub cells: Vec<BucketCell>,
}

/// Full classification output of a run, ordered by asset name.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub rows: Vec<AssetRow>,
}

/// Classifies catalog contents against the tier table using an injected
/// size probe.
pub struct Validator<P> {
    root: PathBuf,
    tiers: TierTable,
    probe: P,
}

impl<P: SizeProbe> Validator<P> {
    pub fn new(root: impl Into<PathBuf>, tiers: TierTable, probe: P) -> Self {
        Self {
            root: root.into(),
            tiers,
            probe,
        }
    }

    /// Classify every asset in the catalog against every tier.
    ///
    /// Classifications depend only on on-disk state at probe time; the
    /// iteration order of assets never influences an individual cell.
    pub fn validate(&self, catalog: &AssetCatalog) -> ValidationReport {
        let rows = catalog
            .iter()
            .map(|asset| self.validate_asset(asset))
            .collect();
        ValidationReport { rows }
    }

    fn validate_asset(&self, asset: &Asset) -> AssetRow {
        let baseline = self.baseline_size(asset);
        let cells = self
            .tiers
            .iter()
            .map(|tier| self.classify(asset, tier, baseline))
            .collect();
        AssetRow {
            name: asset.name().to_string(),
            display_path: asset.display_path().to_path_buf(),
            cells,
        }
    }

    /// Baseline dimensions, established at most once per asset.
    ///
    /// An absent or unreadable baseline copy leaves the whole row
    /// indeterminate; no expected size can be computed from it.
    fn baseline_size(&self, asset: &Asset) -> Option<Size> {
        let baseline = self.tiers.baseline();
        if !asset.is_present_in(baseline.dir) {
            return None;
        }
        self.probe.probe(&self.bucket_path(baseline, asset))
    }

    fn classify(&self, asset: &Asset, tier: Tier, baseline: Option<Size>) -> BucketCell {
        // Absent buckets are never probed: "missing" must stay
        // distinguishable from "present but zero-size or unreadable".
        if !asset.is_present_in(tier.dir) {
            return BucketCell {
                tier,
                expected: baseline.map(|size| tier.expected(size)),
                state: Classification::Missing,
            };
        }

        let Some(baseline) = baseline else {
            // Baseline unknown: the observed side is not probed either, and
            // the cell reports both values as indeterminate.
            return BucketCell {
                tier,
                expected: None,
                state: Classification::Invalid { actual: None },
            };
        };

        let expected = tier.expected(baseline);
        let state = match self.probe.probe(&self.bucket_path(tier, asset)) {
            // Cataloged as present but unreadable now (deleted since the
            // scan, or a corrupt header).
            None => Classification::Invalid { actual: None },
            Some(actual) => {
                // A fractional expected length can never equal an observed
                // whole-pixel value, so an unevenly scalable baseline
                // classifies every non-baseline copy as invalid.
                if expected.exact() == Some(actual) {
                    Classification::Valid { actual }
                } else {
                    Classification::Invalid {
                        actual: Some(actual),
                    }
                }
            }
        };
        BucketCell {
            tier,
            expected: Some(expected),
            state,
        }
    }

    fn bucket_path(&self, tier: Tier, asset: &Asset) -> PathBuf {
        self.root.join(tier.dir).join(asset.name())
    }
}
