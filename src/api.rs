use std::path::Path;
use log::info;

use crate::batch::{BatchRunner, BatchSummary};
use crate::config::AssetLayout;
use crate::errors::ExtractResult;
use crate::extractor::{Region, RegionExtractor, Variant};
use crate::manifest::{Manifest, ManifestWriter, DEFAULT_EXTRACTION_DATE};
use crate::table::{builtin_table, ExtractionTable};

/// Main interface to the RoomKit library
pub struct RoomKit {
    layout: AssetLayout,
    table: ExtractionTable,
    extraction_date: String,
    show_progress: bool,
}

impl RoomKit {
    /// Create a RoomKit instance using the built-in extraction table
    ///
    /// # Arguments
    /// * `layout` - Asset directory layout
    pub fn new(layout: AssetLayout) -> Self {
        Self::with_table(layout, builtin_table().clone())
    }

    /// Create a RoomKit instance over a custom extraction table
    pub fn with_table(layout: AssetLayout, table: ExtractionTable) -> Self {
        RoomKit {
            layout,
            table,
            extraction_date: DEFAULT_EXTRACTION_DATE.to_string(),
            show_progress: false,
        }
    }

    /// Create a RoomKit instance whose table is read from a TOML file
    pub fn from_table_file<P: AsRef<Path>>(layout: AssetLayout, table_path: P) -> ExtractResult<Self> {
        let table_path = table_path.as_ref();
        info!("Loading extraction table from {}", table_path.display());
        let table = ExtractionTable::from_file(table_path)?;
        Ok(Self::with_table(layout, table))
    }

    /// Set the date recorded in the manifest
    pub fn set_extraction_date(&mut self, extraction_date: &str) {
        self.extraction_date = extraction_date.to_string();
    }

    /// Show a progress bar during batch extraction
    pub fn set_show_progress(&mut self, show_progress: bool) {
        self.show_progress = show_progress;
    }

    pub fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    pub fn table(&self) -> &ExtractionTable {
        &self.table
    }

    /// Extract a single object
    ///
    /// # Returns
    /// `true` if the object image was written
    pub fn extract_object(&self, room_id: &str, object_id: &str, region: Region, variant: Variant) -> bool {
        RegionExtractor::new(&self.layout).extract(room_id, object_id, region, variant)
    }

    /// Extract every object in the table, light and (where present) dark
    pub fn extract_all(&self) -> BatchSummary {
        BatchRunner::new(&self.table, &self.layout)
            .with_progress(self.show_progress)
            .run_all()
    }

    /// Write `object_manifest.json` for the table
    pub fn write_manifest(&self) -> ExtractResult<Manifest> {
        ManifestWriter::new(&self.table, &self.layout)
            .with_extraction_date(&self.extraction_date)
            .write_manifest()
    }

    /// Extract everything, then write the manifest
    pub fn run(&self) -> ExtractResult<(BatchSummary, Manifest)> {
        let summary = self.extract_all();
        let manifest = self.write_manifest()?;
        Ok((summary, manifest))
    }
}
