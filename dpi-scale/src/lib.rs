// SPDX-License-Identifier: MIT
//! # dpi-scale: Density Tier Table and Exact Scale Arithmetic
//!
//! This crate provides the fixed density tier table used by drawable audits
//! and the arithmetic for deriving per-tier expected sizes from baseline
//! dimensions.
//!
//! ## Design
//!
//! Scale factors are exact rationals, never floats. The 1.5× tier makes the
//! distinction load-bearing: scaling an odd baseline length by 3/2 does not
//! land on a whole pixel, and that condition must be detected exactly rather
//! than silently rounded away.
//!
//! ## Key Components
//!
//! - [`tiers::TierTable`]: the ordered five-tier bucket table, constructed
//!   once and passed by value into consumers (no global state)
//! - [`tiers::ScaleFactor`]: exact rational factor with whole-or-fractional
//!   application
//! - [`tiers::Expected`]: per-tier expected dimensions derived from a
//!   baseline size
//!
//! ## Usage Example
//!
//! ```rust
//! use dpi_scale::tiers::{Size, TierTable};
//!
//! let tiers = TierTable::android_drawables();
//! let baseline = Size { w: 48, h: 48 };
//!
//! for tier in tiers.iter() {
//!     let expected = tier.expected(baseline);
//!     println!("{}: {}", tier.dir, expected);
//! }
//! ```

pub mod tiers;
