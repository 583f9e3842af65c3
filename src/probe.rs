//! Image size probing.
//!
//! Validation never inspects pixel content; the only capability it needs is
//! "given a path, report width and height, or fail". That capability is a
//! trait so the engine can be exercised against in-memory probes in tests.

use std::path::Path;

use dpi_scale::tiers::Size;

/// Injected size-probing capability.
pub trait SizeProbe {
    /// Width and height of the image at `path`, or `None` when the file is
    /// absent or its header is unreadable.
    fn probe(&self, path: &Path) -> Option<Size>;
}

/// Production probe: reads dimensions from the image header without
/// decoding pixel data.
pub struct ImageHeaderProbe;

impl SizeProbe for ImageHeaderProbe {
    fn probe(&self, path: &Path) -> Option<Size> {
        image::image_dimensions(path)
            .ok()
            .map(|(w, h)| Size { w, h })
    }
}
