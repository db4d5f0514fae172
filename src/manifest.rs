//! Object manifest generation
//!
//! The manifest summarizes what the table defines for each room: the object
//! identifiers, how many there are and whether a dark rendering exists. It is
//! rebuilt from scratch on every run and overwrites the previous file.

use std::fs;
use std::path::Path;
use log::info;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::config::AssetLayout;
use crate::errors::ExtractResult;
use crate::table::ExtractionTable;

/// Extraction date written when none is supplied
pub const DEFAULT_EXTRACTION_DATE: &str = "2024-12-19";

/// Manifest entry for one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomManifest {
    /// Object identifiers in table order
    pub objects: Vec<String>,
    /// Number of objects defined for the room
    pub object_count: usize,
    /// Whether `<room>-dark.png` exists
    pub has_dark_mode: bool,
}

/// Summary of the extraction table written as `object_manifest.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Per-room entries, kept in table order
    #[serde(serialize_with = "serialize_rooms")]
    pub extracted_objects: Vec<(String, RoomManifest)>,
    /// Date string recorded verbatim, not read from the clock
    pub extraction_date: String,
    /// Number of rooms in the table
    pub total_rooms: usize,
}

fn serialize_rooms<S: Serializer>(rooms: &[(String, RoomManifest)], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(rooms.len()))?;
    for (room_id, entry) in rooms {
        map.serialize_entry(room_id, entry)?;
    }
    map.end()
}

impl Manifest {
    /// Build the manifest for a table against the files on disk
    ///
    /// # Arguments
    /// * `table` - Rooms and objects to describe
    /// * `layout` - Asset layout used to probe for dark sources
    /// * `extraction_date` - Date string recorded verbatim
    pub fn build(table: &ExtractionTable, layout: &AssetLayout, extraction_date: &str) -> Self {
        let extracted_objects = table.rooms().iter()
            .map(|room| {
                let entry = RoomManifest {
                    objects: room.object_names(),
                    object_count: room.object_count(),
                    has_dark_mode: layout.has_dark_source(&room.name),
                };
                (room.name.clone(), entry)
            })
            .collect();

        Manifest {
            extracted_objects,
            extraction_date: extraction_date.to_string(),
            total_rooms: table.room_count(),
        }
    }

    /// Look up a room's entry
    pub fn room(&self, room_id: &str) -> Option<&RoomManifest> {
        self.extracted_objects.iter()
            .find(|(name, _)| name == room_id)
            .map(|(_, entry)| entry)
    }

    /// Render as indented JSON
    pub fn to_json(&self) -> ExtractResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ExtractResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Builds and saves the manifest for a table
pub struct ManifestWriter<'a> {
    table: &'a ExtractionTable,
    layout: &'a AssetLayout,
    extraction_date: String,
}

impl<'a> ManifestWriter<'a> {
    /// Create a writer that records the default extraction date
    pub fn new(table: &'a ExtractionTable, layout: &'a AssetLayout) -> Self {
        ManifestWriter {
            table,
            layout,
            extraction_date: DEFAULT_EXTRACTION_DATE.to_string(),
        }
    }

    /// Record a different extraction date
    pub fn with_extraction_date(mut self, extraction_date: &str) -> Self {
        self.extraction_date = extraction_date.to_string();
        self
    }

    /// Build the manifest and write it to `<base_path>/object_manifest.json`
    ///
    /// # Returns
    /// The manifest that was written
    pub fn write_manifest(&self) -> ExtractResult<Manifest> {
        let manifest = Manifest::build(self.table, self.layout, &self.extraction_date);
        let path = self.layout.manifest_path();
        manifest.save(&path)?;

        info!("Object manifest saved to {}", path.display());
        Ok(manifest)
    }
}
