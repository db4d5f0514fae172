//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod list_command;

pub use command_traits::{Command, CommandFactory, CommandOutcome};
pub use extract_command::ExtractCommand;
pub use list_command::ListCommand;

use clap::ArgMatches;
use log::info;

use crate::api::RoomKit;
use crate::config::AssetLayout;
use crate::errors::{ExtractError, ExtractResult};


/// Factory for creating command instances based on CLI arguments
pub struct RoomkitCommandFactory;

impl RoomkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RoomkitCommandFactory
    }

    /// Resolve the asset layout from the layout options
    pub fn layout_from_args(args: &ArgMatches) -> ExtractResult<AssetLayout> {
        let base_path = args.get_one::<String>("base-path")
            .ok_or_else(|| ExtractError::GenericError("Missing base path".to_string()))?;
        let mut layout = AssetLayout::new(base_path);

        if let Some(rooms_dir) = args.get_one::<String>("rooms-dir") {
            layout = layout.with_rooms_root(rooms_dir);
        }
        if let Some(objects_dir) = args.get_one::<String>("objects-dir") {
            layout = layout.with_objects_root(objects_dir);
        }

        info!("Rooms: {}, objects: {}, manifest: {}",
              layout.rooms_root.display(), layout.objects_root.display(),
              layout.manifest_path().display());
        Ok(layout)
    }

    /// Build the library facade from CLI arguments
    pub fn roomkit_from_args(args: &ArgMatches) -> ExtractResult<RoomKit> {
        let layout = Self::layout_from_args(args)?;

        let mut roomkit = match args.get_one::<String>("table") {
            Some(table_path) => RoomKit::from_table_file(layout, table_path)?,
            None => RoomKit::new(layout),
        };

        if let Some(date) = args.get_one::<String>("extraction-date") {
            roomkit.set_extraction_date(date);
        }
        roomkit.set_show_progress(!args.get_flag("no-progress"));

        Ok(roomkit)
    }
}

impl Default for RoomkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for RoomkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> ExtractResult<Box<dyn Command>> {
        let roomkit = Self::roomkit_from_args(args)?;

        if args.get_flag("list") {
            Ok(Box::new(ListCommand::new(roomkit)))
        } else {
            // Default to full extraction
            Ok(Box::new(ExtractCommand::new(roomkit, args.get_flag("strict"))))
        }
    }
}
