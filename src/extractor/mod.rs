//! Object extraction from room images
//!
//! This module provides the object rectangle type, the light/dark variant
//! naming rules and the extractor that crops objects to disk.

mod region;
mod variant;
mod region_extractor;

#[cfg(test)]
mod tests;

// Public exports
pub use region::Region;
pub use variant::{Variant, DARK_SUFFIX, IMAGE_EXTENSION};
pub use region_extractor::RegionExtractor;
