//! Object extraction command
//!
//! Runs the full batch over the extraction table, writes the manifest and
//! prints a human-readable summary.

use log::{info, warn};

use crate::api::RoomKit;
use crate::batch::BatchSummary;
use crate::commands::command_traits::{Command, CommandOutcome};
use crate::errors::ExtractResult;
use crate::manifest::Manifest;

/// Command for extracting every object and writing the manifest
pub struct ExtractCommand {
    roomkit: RoomKit,
    /// Report partial failure to the caller instead of succeeding
    strict: bool,
}

impl ExtractCommand {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `roomkit` - Configured library facade
    /// * `strict` - Whether failed extractions make the command fail
    pub fn new(roomkit: RoomKit, strict: bool) -> Self {
        ExtractCommand { roomkit, strict }
    }

    /// Render the end-of-run summary
    pub fn format_summary(summary: &BatchSummary, manifest: &Manifest) -> String {
        let mut result = format!("Successfully extracted {}/{} objects\n", summary.successful, summary.total);
        result.push_str(&format!("Manifest covers {} rooms:\n", manifest.total_rooms));

        for (room_id, entry) in &manifest.extracted_objects {
            let dark = if entry.has_dark_mode { ", dark mode" } else { "" };
            result.push_str(&format!("  {}: {} objects{}\n", room_id, entry.object_count, dark));
        }

        if summary.is_complete() {
            result.push_str("All objects extracted successfully\n");
        } else {
            result.push_str(&format!("{} objects failed to extract\n", summary.failed()));
        }
        result
    }
}

impl Command for ExtractCommand {
    fn execute(&self) -> ExtractResult<CommandOutcome> {
        info!("Executing extract command (strict={})", self.strict);

        let (summary, manifest) = self.roomkit.run()?;
        print!("{}", Self::format_summary(&summary, &manifest));

        if !summary.is_complete() {
            warn!("{} of {} extractions failed", summary.failed(), summary.total);
            if self.strict {
                return Ok(CommandOutcome::PartialFailure);
            }
        }

        Ok(CommandOutcome::Success)
    }
}
