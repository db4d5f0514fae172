//! Batch extraction over a whole table
//!
//! Walks every room and object in table order, extracting the light variant
//! always and the dark variant whenever the room has a dark source image.
//! Failures are counted and skipped; the batch always runs to the end.

use log::{debug, info};

use crate::config::AssetLayout;
use crate::extractor::{RegionExtractor, Variant};
use crate::table::ExtractionTable;
use crate::utils::progress::ProgressTracker;

/// Outcome counters of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Extractions that wrote an object image
    pub successful: usize,
    /// Extractions attempted
    pub total: usize,
}

impl BatchSummary {
    /// Counters as `(successful, total)`
    pub fn counts(&self) -> (usize, usize) {
        (self.successful, self.total)
    }

    /// Number of attempted extractions that failed
    pub fn failed(&self) -> usize {
        self.total - self.successful
    }

    /// Whether every attempted extraction succeeded
    pub fn is_complete(&self) -> bool {
        self.successful == self.total
    }

    fn record(&mut self, succeeded: bool) {
        self.total += 1;
        if succeeded {
            self.successful += 1;
        }
    }
}

/// Runs the region extractor over every entry of a table
pub struct BatchRunner<'a> {
    table: &'a ExtractionTable,
    layout: &'a AssetLayout,
    show_progress: bool,
}

impl<'a> BatchRunner<'a> {
    /// Create a new batch runner
    ///
    /// # Arguments
    /// * `table` - Rooms and objects to extract
    /// * `layout` - Asset directory layout
    pub fn new(table: &'a ExtractionTable, layout: &'a AssetLayout) -> Self {
        BatchRunner {
            table,
            layout,
            show_progress: false,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Extract every object of every room
    ///
    /// # Returns
    /// Success and attempt counters over all light and dark extractions
    pub fn run_all(&self) -> BatchSummary {
        info!("Starting object extraction from room images");

        let extractor = RegionExtractor::new(self.layout);
        let object_count = self.table.object_count() as u64;
        let progress = if self.show_progress {
            ProgressTracker::new(object_count, "Extracting objects")
        } else {
            ProgressTracker::hidden(object_count)
        };

        let mut summary = BatchSummary::default();

        for room in self.table.rooms() {
            info!("Processing {}", room.name);
            progress.set_message(&room.name);

            for (object_id, region) in &room.objects {
                summary.record(extractor.extract(&room.name, object_id, *region, Variant::Light));

                if self.layout.has_dark_source(&room.name) {
                    summary.record(extractor.extract(&room.name, object_id, *region, Variant::Dark));
                } else {
                    debug!("No dark source for {}, skipping dark {}", room.name, object_id);
                }

                progress.increment(1);
            }
        }

        progress.finish();
        info!("Extraction complete: {}/{} objects", summary.successful, summary.total);

        summary
    }
}
