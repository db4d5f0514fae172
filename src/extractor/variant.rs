//! Light and dark room renderings
//!
//! Every room has a light source image and may have a dark-palette one. The
//! variant decides both which source is read and how the cropped object file
//! is named.

use std::fmt;

/// Suffix appended to file stems for the dark variant
pub const DARK_SUFFIX: &str = "-dark";

/// Image file extension used for sources and outputs
pub const IMAGE_EXTENSION: &str = "png";

/// Rendering variant of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Normal palette (`<room>.png`)
    Light,
    /// Dark palette (`<room>-dark.png`)
    Dark,
}

impl Variant {
    /// File name of the room source image for this variant
    pub fn source_file_name(&self, room_id: &str) -> String {
        self.file_name(room_id)
    }

    /// File name of an extracted object image for this variant
    pub fn object_file_name(&self, object_id: &str) -> String {
        self.file_name(object_id)
    }

    fn file_name(&self, stem: &str) -> String {
        match self {
            Variant::Light => format!("{}.{}", stem, IMAGE_EXTENSION),
            Variant::Dark => format!("{}{}.{}", stem, DARK_SUFFIX, IMAGE_EXTENSION),
        }
    }

    /// Lowercase mode name used in log output
    pub fn mode_name(&self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mode", self.mode_name())
    }
}
