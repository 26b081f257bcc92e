//! Plot rendering for tsviz.
//!
//! Turns each group of the combined dataset into a line-plot PNG under the
//! output directory.

pub mod chart;

pub use chart::render_all;
