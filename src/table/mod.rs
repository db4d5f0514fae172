//! Extraction table definitions
//!
//! The table maps every room to the objects cut out of it and the rectangle
//! each object occupies in the room image. The built-in table is compiled in
//! from `objects.toml` and parsed once on first use.

use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use log::debug;

use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::Region;

#[cfg(test)]
mod tests;

lazy_static! {
    // Parse the embedded table at startup
    static ref BUILTIN_TABLE: ExtractionTable = {
        let content = include_str!("../../objects.toml");
        ExtractionTable::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse built-in extraction table: {}", e);
                ExtractionTable::default()
            })
    };
}

/// Get the extraction table embedded in the binary
pub fn builtin_table() -> &'static ExtractionTable {
    &BUILTIN_TABLE
}

/// Objects defined for a single room, in definition order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomDefinition {
    /// Room identifier, also the stem of its source image
    pub name: String,
    /// Object identifiers paired with their rectangles
    pub objects: Vec<(String, Region)>,
}

impl RoomDefinition {
    /// Create an empty room
    pub fn new(name: &str) -> Self {
        RoomDefinition {
            name: name.to_string(),
            objects: Vec::new(),
        }
    }

    /// Add an object, builder style
    pub fn with_object(mut self, object_id: &str, region: Region) -> Self {
        self.objects.push((object_id.to_string(), region));
        self
    }

    /// Object identifiers in definition order
    pub fn object_names(&self) -> Vec<String> {
        self.objects.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Number of objects defined for the room
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Look up an object's rectangle
    pub fn get_object(&self, object_id: &str) -> Option<Region> {
        self.objects.iter()
            .find(|(name, _)| name == object_id)
            .map(|(_, region)| *region)
    }
}

/// Static room -> object -> rectangle mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionTable {
    rooms: Vec<RoomDefinition>,
}

impl ExtractionTable {
    /// Build a table from room definitions
    ///
    /// Room names must be unique, as must object names within a room.
    pub fn new(rooms: Vec<RoomDefinition>) -> ExtractResult<Self> {
        for (i, room) in rooms.iter().enumerate() {
            if rooms[..i].iter().any(|r| r.name == room.name) {
                return Err(ExtractError::InvalidTable(format!("duplicate room '{}'", room.name)));
            }
            for (j, (object_id, _)) in room.objects.iter().enumerate() {
                if room.objects[..j].iter().any(|(name, _)| name == object_id) {
                    return Err(ExtractError::InvalidTable(
                        format!("duplicate object '{}' in room '{}'", object_id, room.name)));
                }
            }
        }
        Ok(ExtractionTable { rooms })
    }

    /// Parse a table from TOML text
    ///
    /// Each top-level table is a room; each key in it is an object mapped to
    /// an inline table with `x`, `y`, `width` and `height`.
    pub fn from_str(content: &str) -> ExtractResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ExtractError::InvalidTable(format!("Failed to parse TOML: {}", e))),
        };

        let root = toml_value.as_table()
            .ok_or_else(|| ExtractError::InvalidTable("top level is not a table".to_string()))?;

        let mut rooms = Vec::with_capacity(root.len());
        for (room_name, objects) in root {
            let objects = objects.as_table().ok_or_else(|| {
                ExtractError::InvalidTable(format!("room '{}' is not a table", room_name))
            })?;

            let mut room = RoomDefinition::new(room_name);
            for (object_name, rect) in objects {
                let region = Self::parse_region(room_name, object_name, rect)?;
                room.objects.push((object_name.clone(), region));
            }

            debug!("Loaded room '{}' with {} objects", room.name, room.object_count());
            rooms.push(room);
        }

        Self::new(rooms)
    }

    /// Helper to parse a single rectangle entry
    fn parse_region(room: &str, object: &str, value: &toml::Value) -> ExtractResult<Region> {
        let field = |key: &str| -> ExtractResult<u32> {
            let raw = value.get(key)
                .and_then(|v| v.as_integer())
                .ok_or_else(|| ExtractError::InvalidTable(
                    format!("{}/{}: missing integer field '{}'", room, object, key)))?;
            u32::try_from(raw).map_err(|_| ExtractError::InvalidTable(
                format!("{}/{}: field '{}' out of range: {}", room, object, key, raw)))
        };

        Ok(Region::new(field("x")?, field("y")?, field("width")?, field("height")?))
    }

    /// Load a table from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Rooms in definition order
    pub fn rooms(&self) -> &[RoomDefinition] {
        &self.rooms
    }

    /// Look up a room by name
    pub fn get_room(&self, room_id: &str) -> Option<&RoomDefinition> {
        self.rooms.iter().find(|room| room.name == room_id)
    }

    /// Number of rooms in the table
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of objects across all rooms
    pub fn object_count(&self) -> usize {
        self.rooms.iter().map(RoomDefinition::object_count).sum()
    }
}
