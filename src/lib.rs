pub mod errors;
pub mod config;
pub mod table;
pub mod extractor;
pub mod batch;
pub mod manifest;
pub mod utils;
pub mod cli;
pub mod commands;
pub mod api;

pub use crate::api::RoomKit;

pub use errors::{ExtractError, ExtractResult};
pub use config::AssetLayout;
pub use table::{builtin_table, ExtractionTable, RoomDefinition};
pub use extractor::{Region, RegionExtractor, Variant};
pub use batch::{BatchRunner, BatchSummary};
pub use manifest::{Manifest, ManifestWriter, RoomManifest};
