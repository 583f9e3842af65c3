// SPDX-License-Identifier: MIT
//! # Density Tiers and Expected-Size Computation
//!
//! The tier table maps each density bucket directory to its scale factor
//! relative to the baseline bucket (the first tier, ×1). Expected sizes for
//! every other tier are the baseline dimensions multiplied by that factor,
//! computed exactly: a product that does not land on a whole pixel is kept
//! as a fraction so callers can flag it instead of rounding.

use std::fmt;

/// A 2D pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.w, self.h)
    }
}

/// Scale factor of a density tier relative to the baseline tier.
///
/// Held as an exact rational (1.5 is 3/2) so that non-integral scaled
/// lengths stay detectable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleFactor {
    num: u32,
    den: u32,
}

impl ScaleFactor {
    pub const fn new(num: u32, den: u32) -> Self {
        Self { num, den }
    }

    /// Scale one side length.
    ///
    /// Exact arithmetic: a product that is not a whole number of pixels is
    /// returned as the fraction itself, never rounded or truncated.
    pub fn apply(self, len: u32) -> Scaled {
        let num = u64::from(len) * u64::from(self.num);
        let den = u64::from(self.den);
        if num % den == 0 {
            Scaled::Whole((num / den) as u32)
        } else {
            Scaled::Fraction { num, den: self.den }
        }
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}x", self.num)
        } else {
            write!(f, "{}x", f64::from(self.num) / f64::from(self.den))
        }
    }
}

/// One side length after scaling: a whole pixel count, or an exact fraction
/// when the baseline is not evenly scalable at this tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scaled {
    Whole(u32),
    Fraction { num: u64, den: u32 },
}

impl Scaled {
    /// The whole pixel value, if the scaled length landed on one.
    pub fn whole(self) -> Option<u32> {
        match self {
            Scaled::Whole(v) => Some(v),
            Scaled::Fraction { .. } => None,
        }
    }
}

impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scaled::Whole(v) => write!(f, "{v}"),
            Scaled::Fraction { num, den } => {
                write!(f, "{}", *num as f64 / f64::from(*den))
            }
        }
    }
}

/// Expected dimensions for one tier, derived from baseline dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expected {
    pub w: Scaled,
    pub h: Scaled,
}

impl Expected {
    /// Whole-pixel expectation, if both sides scale evenly.
    pub fn exact(self) -> Option<Size> {
        match (self.w.whole(), self.h.whole()) {
            (Some(w), Some(h)) => Some(Size { w, h }),
            _ => None,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.w, self.h)
    }
}

/// One density tier: bucket directory name plus its scale factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier {
    pub dir: &'static str,
    pub factor: ScaleFactor,
}

impl Tier {
    /// Expected dimensions in this tier for the given baseline dimensions.
    pub fn expected(self, baseline: Size) -> Expected {
        Expected {
            w: self.factor.apply(baseline.w),
            h: self.factor.apply(baseline.h),
        }
    }
}

/// Ordered density tier table, lowest to highest density.
///
/// Constructed once at startup and handed to the catalog and the validator;
/// the first tier is the baseline (factor 1).
#[derive(Clone, Copy, Debug)]
pub struct TierTable {
    tiers: [Tier; 5],
}

impl TierTable {
    /// The Android drawable bucket set: mdpi ×1, hdpi ×1.5, xhdpi ×2,
    /// xxhdpi ×3, xxxhdpi ×4.
    pub fn android_drawables() -> Self {
        Self {
            tiers: [
                Tier {
                    dir: "drawable-mdpi",
                    factor: ScaleFactor::new(1, 1),
                },
                Tier {
                    dir: "drawable-hdpi",
                    factor: ScaleFactor::new(3, 2),
                },
                Tier {
                    dir: "drawable-xhdpi",
                    factor: ScaleFactor::new(2, 1),
                },
                Tier {
                    dir: "drawable-xxhdpi",
                    factor: ScaleFactor::new(3, 1),
                },
                Tier {
                    dir: "drawable-xxxhdpi",
                    factor: ScaleFactor::new(4, 1),
                },
            ],
        }
    }

    /// The reference tier whose dimensions define correct sizes everywhere
    /// else.
    pub fn baseline(&self) -> Tier {
        self.tiers[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = Tier> + '_ {
        self.tiers.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
