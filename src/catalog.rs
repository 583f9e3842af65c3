//! Asset discovery across density bucket directories.
//!
//! The catalog records, per asset filename, which buckets contain a
//! same-named file. Filenames match exactly and case-sensitively across
//! buckets: `foo.png` and `Foo.png` are two distinct assets.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use dpi_scale::tiers::TierTable;

use crate::error::{AuditError, AuditResult};

/// Reserved suffix for stretchable nine-patch images. They have no fixed
/// scalable size and are excluded from validation in every bucket, even
/// when plain copies of the same name exist elsewhere.
const NINE_PATCH_SUFFIX: &str = ".9.png";

const PNG_SUFFIX: &str = ".png";

/// One logical image resource, keyed by exact filename across buckets.
#[derive(Debug, Clone)]
pub struct Asset {
    name: String,
    /// Absolute path of the first copy discovered, used for report previews.
    display_path: PathBuf,
    /// Bucket directories (by name) containing a same-named file.
    present_in: BTreeSet<&'static str>,
}

impl Asset {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_path(&self) -> &Path {
        &self.display_path
    }

    pub fn is_present_in(&self, bucket_dir: &str) -> bool {
        self.present_in.contains(bucket_dir)
    }
}

/// Per-asset bucket presence discovered by scanning a resource root.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    assets: BTreeMap<String, Asset>,
}

impl AssetCatalog {
    /// Scan every bucket directory under `root`.
    ///
    /// A bucket directory that does not exist contributes no assets. A root
    /// that is missing or is not a directory is fatal before any scanning
    /// happens; so is a bucket directory that exists but cannot be
    /// enumerated.
    pub fn scan(root: &Path, tiers: &TierTable) -> AuditResult<Self> {
        if !root.exists() {
            return Err(AuditError::root_not_found(root));
        }
        if !root.is_dir() {
            return Err(AuditError::root_not_a_directory(root));
        }
        // Preview paths in the report must stay valid regardless of where
        // the report is opened from.
        let root = fs::canonicalize(root).map_err(|e| AuditError::scan(root, e))?;

        let mut catalog = Self::default();
        for tier in tiers.iter() {
            let dir = root.join(tier.dir);
            if !dir.is_dir() {
                continue;
            }
            let entries = fs::read_dir(&dir).map_err(|e| AuditError::scan(&dir, e))?;
            for entry in entries {
                let entry = entry.map_err(|e| AuditError::scan(&dir, e))?;
                if entry.path().is_dir() {
                    continue;
                }
                // A non-UTF-8 name cannot be matched across buckets.
                let Ok(name) = entry.file_name().into_string() else {
                    continue;
                };
                if !is_validatable(&name) {
                    continue;
                }
                catalog.register(name, tier.dir, entry.path());
            }
        }
        Ok(catalog)
    }

    pub(crate) fn register(&mut self, name: String, bucket_dir: &'static str, full_path: PathBuf) {
        let asset = self.assets.entry(name.clone()).or_insert_with(|| Asset {
            name,
            display_path: full_path,
            present_in: BTreeSet::new(),
        });
        asset.present_in.insert(bucket_dir);
    }

    /// Assets in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.values()
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// `.png` files validate; the reserved `.9.png` suffix is skipped.
fn is_validatable(name: &str) -> bool {
    name.ends_with(PNG_SUFFIX) && !name.ends_with(NINE_PATCH_SUFFIX)
}
