use std::path::Path;

use st_fiction::GameSession;

pub fn run(file: &Path) -> Result<(), String> {
    let config = super::load_config(Some(file))?;
    let session = GameSession::new(config).map_err(|e| e.to_string())?;
    let npcs = session.dialogue().table().npcs().count();
    let pickups = session.bridge().pickups().iter().count();

    println!("  All checks passed for '{}'.", file.display());
    println!(
        "  {} rooms, {} NPCs, {} pickups, starting in {}",
        session.world().room_count(),
        npcs,
        pickups,
        session.world().current_room_id()
    );

    Ok(())
}
