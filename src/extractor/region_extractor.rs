//! Object extraction from room images
//!
//! Crops one object rectangle out of a room source image and writes it to the
//! room's output directory. Failures for a single object are logged and
//! reported as `false`; they never abort a batch.

use std::fs;
use std::path::PathBuf;
use image::ImageReader;
use log::{debug, error, info, warn};

use crate::config::AssetLayout;
use crate::errors::{ExtractError, ExtractResult};

use super::region::Region;
use super::variant::Variant;

/// Crops object regions out of room images laid out by an [`AssetLayout`]
pub struct RegionExtractor<'a> {
    /// Where sources are read from and crops are written to
    layout: &'a AssetLayout,
}

impl<'a> RegionExtractor<'a> {
    /// Create a new region extractor
    ///
    /// # Arguments
    /// * `layout` - Asset directory layout
    pub fn new(layout: &'a AssetLayout) -> Self {
        RegionExtractor { layout }
    }

    /// Extract a single object, recovering from every per-object failure
    ///
    /// # Arguments
    /// * `room_id` - Room identifier, selects `<room_id>.png` or `<room_id>-dark.png`
    /// * `object_id` - Object identifier, names the output file
    /// * `region` - Object rectangle in source pixels (clamped to the image)
    /// * `variant` - Light or dark rendering
    ///
    /// # Returns
    /// `true` if the object image was written
    pub fn extract(&self, room_id: &str, object_id: &str, region: Region, variant: Variant) -> bool {
        match self.try_extract(room_id, object_id, region, variant) {
            Ok(_) => {
                info!("Extracted {} from {} ({})", object_id, room_id, variant);
                true
            },
            Err(ExtractError::MissingSourceImage(path)) => {
                warn!("{} not found", path.display());
                false
            },
            Err(e) => {
                error!("Error extracting {} from {}: {}", object_id, room_id, e);
                false
            }
        }
    }

    /// Extract a single object and surface the failure cause
    ///
    /// # Returns
    /// Path of the written object image, or the error that prevented it
    pub fn try_extract(&self, room_id: &str, object_id: &str,
                       region: Region, variant: Variant) -> ExtractResult<PathBuf> {
        let source_path = self.layout.room_source(room_id, variant);
        if !source_path.exists() {
            return Err(ExtractError::MissingSourceImage(source_path));
        }

        // Format comes from the file contents, not the extension
        debug!("Loading {}", source_path.display());
        let image = ImageReader::open(&source_path)?
            .with_guessed_format()?
            .decode()?;

        let clamped = region.clamp_to(image.width(), image.height());
        if clamped != region {
            debug!("Clamped {}/{} from {:?} to {:?} for {}x{} image",
                   room_id, object_id, region, clamped, image.width(), image.height());
        }
        if clamped.is_empty() {
            return Err(ExtractError::GenericError(
                format!("region {:?} is empty after clamping to {}x{}",
                        region, image.width(), image.height())));
        }

        let object_image = image.crop_imm(clamped.x, clamped.y, clamped.width, clamped.height);

        fs::create_dir_all(self.layout.room_output_dir(room_id))?;
        let output_path = self.layout.object_output(room_id, object_id, variant);
        object_image.save(&output_path)?;

        debug!("Saved {}x{} crop to {}", clamped.width, clamped.height, output_path.display());
        Ok(output_path)
    }
}
