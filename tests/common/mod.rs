//! Shared helpers for end-to-end audit tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Write a real PNG of the given dimensions, creating parent directories.
pub fn write_png(path: &Path, w: u32, h: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([40, 90, 160, 255]));
    img.save(path).unwrap();
}

/// Path of `name` inside one bucket directory under `root`.
pub fn bucket_file(root: &Path, bucket: &str, name: &str) -> PathBuf {
    root.join(bucket).join(name)
}
