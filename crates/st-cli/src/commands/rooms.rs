use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use st_core::World;

pub fn run(world: Option<&Path>) -> Result<(), String> {
    let config = super::load_config(world)?;
    let world = World::from_def(config.world).map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Exits", "Items", "Description"]);

    for room in world.rooms() {
        let exits = room
            .exits()
            .map(|(dir, target)| format!("{dir} → {target}"))
            .collect::<Vec<_>>()
            .join(", ");
        let items = if room.items().is_empty() {
            "—".to_string()
        } else {
            room.items().join(", ")
        };
        let desc = if room.description.chars().count() > 60 {
            let short: String = room.description.chars().take(57).collect();
            format!("{short}...")
        } else {
            room.description.clone()
        };

        let id = if room.id == *world.current_room_id() {
            format!("{} (start)", room.id)
        } else {
            room.id.to_string()
        };
        table.add_row(vec![&id, &exits, &items, &desc]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", world.room_count());

    Ok(())
}
