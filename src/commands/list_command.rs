//! Table listing command

use crate::api::RoomKit;
use crate::commands::command_traits::{Command, CommandOutcome};
use crate::errors::ExtractResult;
use crate::table::ExtractionTable;

/// Command that prints the extraction table and the dark source status
pub struct ListCommand {
    roomkit: RoomKit,
}

impl ListCommand {
    pub fn new(roomkit: RoomKit) -> Self {
        ListCommand { roomkit }
    }

    /// Render one line per room followed by one line per object
    pub fn render_table(table: &ExtractionTable, dark_rooms: &[&str]) -> String {
        let mut result = format!("Extraction table: {} rooms, {} objects\n",
                                 table.room_count(), table.object_count());

        for room in table.rooms() {
            let dark = if dark_rooms.contains(&room.name.as_str()) { " [dark]" } else { "" };
            result.push_str(&format!("\n{}{}\n", room.name, dark));

            for (object_id, region) in &room.objects {
                result.push_str(&format!("  {:<20} x={:<5} y={:<5} {}x{}\n",
                                         object_id, region.x, region.y, region.width, region.height));
            }
        }
        result
    }
}

impl Command for ListCommand {
    fn execute(&self) -> ExtractResult<CommandOutcome> {
        let table = self.roomkit.table();
        let layout = self.roomkit.layout();

        let dark_rooms: Vec<&str> = table.rooms().iter()
            .filter(|room| layout.has_dark_source(&room.name))
            .map(|room| room.name.as_str())
            .collect();

        print!("{}", Self::render_table(table, &dark_rooms));
        Ok(CommandOutcome::Success)
    }
}
