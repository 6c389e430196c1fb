use st_fiction::GameConfig;

pub fn run() -> Result<(), String> {
    let json = GameConfig::builtin().to_json().map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
