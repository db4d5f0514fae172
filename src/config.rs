//! Asset directory layout
//!
//! Resolves where room sources are read from and where object crops and the
//! manifest are written to. Everything hangs off a base path; the rooms and
//! objects directories can be overridden independently.

use std::path::{Path, PathBuf};

use crate::extractor::Variant;

/// Rooms directory relative to the base path
pub const DEFAULT_ROOMS_DIR: &str = "assets/images/rooms";

/// Objects directory relative to the base path
pub const DEFAULT_OBJECTS_DIR: &str = "assets/images/objects";

/// Manifest file name written into the base path
pub const MANIFEST_FILE_NAME: &str = "object_manifest.json";

/// Directory layout for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    /// Root of the asset tree; the manifest is written here
    pub base_path: PathBuf,
    /// Directory containing `<room>.png` and `<room>-dark.png`
    pub rooms_root: PathBuf,
    /// Directory receiving `<room>/<object>.png` crops
    pub objects_root: PathBuf,
}

impl AssetLayout {
    /// Create the default layout below a base path
    ///
    /// # Arguments
    /// * `base_path` - Root of the asset tree
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base_path = base_path.as_ref().to_path_buf();
        AssetLayout {
            rooms_root: base_path.join(DEFAULT_ROOMS_DIR),
            objects_root: base_path.join(DEFAULT_OBJECTS_DIR),
            base_path,
        }
    }

    /// Override the rooms directory
    pub fn with_rooms_root<P: AsRef<Path>>(mut self, rooms_root: P) -> Self {
        self.rooms_root = rooms_root.as_ref().to_path_buf();
        self
    }

    /// Override the objects directory
    pub fn with_objects_root<P: AsRef<Path>>(mut self, objects_root: P) -> Self {
        self.objects_root = objects_root.as_ref().to_path_buf();
        self
    }

    /// Path of a room source image
    pub fn room_source(&self, room_id: &str, variant: Variant) -> PathBuf {
        self.rooms_root.join(variant.source_file_name(room_id))
    }

    /// Whether the dark rendering of a room is present on disk
    pub fn has_dark_source(&self, room_id: &str) -> bool {
        self.room_source(room_id, Variant::Dark).exists()
    }

    /// Output directory for a room's objects
    pub fn room_output_dir(&self, room_id: &str) -> PathBuf {
        self.objects_root.join(room_id)
    }

    /// Output path of an extracted object image
    pub fn object_output(&self, room_id: &str, object_id: &str, variant: Variant) -> PathBuf {
        self.room_output_dir(room_id).join(variant.object_file_name(object_id))
    }

    /// Path of the JSON manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.base_path.join(MANIFEST_FILE_NAME)
    }
}

impl Default for AssetLayout {
    fn default() -> Self {
        AssetLayout::new(".")
    }
}
