//! Glyph style classification for the autohinter.
//!
//! The autohinter hints each glyph according to a *style*: a script along
//! with a set of OpenType features that selects a subset of its glyphs,
//! such as small capitals. This crate computes which style each glyph of a
//! font belongs to by following the GSUB lookups that are reachable from
//! every style's script and features.
//!
//! Classification is driven by GSUB alone. Glyphs that no lookup produces,
//! including those only reachable through the character map, are given the
//! fallback style from [`CoverageOptions`].
//!
//! The main entry points are [`GlyphStyleMap::new`], which classifies every
//! glyph of a font, and [`compute_coverage`], which resolves a single style
//! against an existing assignment table.
//!
//! Layout queries go through the [`ShapingProvider`] trait. [`GsubShaper`]
//! implements it on top of [`read-fonts`](https://crates.io/crates/read-fonts).

#![forbid(unsafe_code)]

/// Expose our "raw" underlying parser crate.
pub extern crate read_fonts as raw;

pub mod coverage;
pub mod error;
pub mod options;
pub mod resolve;
pub mod script;
pub mod shape;
pub mod style;

#[cfg(test)]
mod testing;

pub use coverage::Coverage;
pub use error::CoverageError;
pub use options::CoverageOptions;
pub use resolve::{compute_coverage, CoverageKind};
pub use script::{ScriptClass, SCRIPT_CLASSES};
pub use shape::{FeatureFilter, GsubShaper, ScriptTagSlots, ShapingProvider};
pub use style::{GlyphStyle, GlyphStyleMap, StyleClass, STYLE_CLASSES};
