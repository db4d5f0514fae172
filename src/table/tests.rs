//! Tests for extraction table parsing

use crate::errors::ExtractError;
use crate::extractor::Region;
use crate::table::{builtin_table, ExtractionTable, RoomDefinition};

#[test]
fn test_builtin_table_rooms() {
    let table = builtin_table();
    let names: Vec<&str> = table.rooms().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["living-room", "kitchen", "library", "workshop", "bedroom", "garden"]);
    assert_eq!(table.object_count(), 45);
}

#[test]
fn test_builtin_table_rectangles() {
    let table = builtin_table();

    let living_room = table.get_room("living-room").unwrap();
    assert_eq!(living_room.object_count(), 7);
    assert_eq!(living_room.objects[0].0, "fireplace");
    assert_eq!(living_room.get_object("fireplace"), Some(Region::new(50, 200, 200, 300)));

    let garden = table.get_room("garden").unwrap();
    assert_eq!(garden.get_object("large-tree"), Some(Region::new(600, 100, 200, 300)));
    assert_eq!(garden.object_names().last().map(String::as_str), Some("large-tree"));
}

#[test]
fn test_preserves_file_order() {
    let table = ExtractionTable::from_str(r#"
        [zeta]
        b = { x = 0, y = 0, width = 1, height = 1 }
        a = { x = 0, y = 0, width = 1, height = 1 }

        [alpha]
        c = { x = 1, y = 2, width = 3, height = 4 }
    "#).unwrap();

    assert_eq!(table.rooms()[0].name, "zeta");
    assert_eq!(table.rooms()[0].object_names(), vec!["b", "a"]);
    assert_eq!(table.rooms()[1].get_object("c"), Some(Region::new(1, 2, 3, 4)));
}

#[test]
fn test_rejects_negative_field() {
    let result = ExtractionTable::from_str(r#"
        [den]
        lamp = { x = -5, y = 0, width = 10, height = 10 }
    "#);
    assert!(matches!(result, Err(ExtractError::InvalidTable(_))));
}

#[test]
fn test_rejects_missing_field() {
    let result = ExtractionTable::from_str(r#"
        [den]
        lamp = { x = 5, y = 0, width = 10 }
    "#);
    match result {
        Err(ExtractError::InvalidTable(msg)) => assert!(msg.contains("height")),
        other => panic!("expected table error, got {:?}", other),
    }
}

#[test]
fn test_rejects_non_table_room() {
    let result = ExtractionTable::from_str("den = 3");
    assert!(matches!(result, Err(ExtractError::InvalidTable(_))));
}

#[test]
fn test_rejects_duplicate_room() {
    let rooms = vec![RoomDefinition::new("den"), RoomDefinition::new("den")];
    assert!(ExtractionTable::new(rooms).is_err());
}

#[test]
fn test_rejects_duplicate_object() {
    let room = RoomDefinition::new("den")
        .with_object("lamp", Region::new(0, 0, 1, 1))
        .with_object("lamp", Region::new(1, 1, 1, 1));
    assert!(ExtractionTable::new(vec![room]).is_err());
}
