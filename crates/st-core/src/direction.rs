/// Map a compass abbreviation to its full name.
///
/// Matching is case-insensitive. Words that are not compass directions come
/// back unchanged, so worlds may use exits like `"hatch"` or `"ladder"`.
pub fn normalize_direction(input: &str) -> &str {
    match input.to_lowercase().as_str() {
        "n" | "north" => "north",
        "s" | "south" => "south",
        "e" | "east" => "east",
        "w" | "west" => "west",
        "u" | "up" => "up",
        "d" | "down" => "down",
        "ne" | "northeast" => "northeast",
        "nw" | "northwest" => "northwest",
        "se" | "southeast" => "southeast",
        "sw" | "southwest" => "southwest",
        _ => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations_expand() {
        assert_eq!(normalize_direction("n"), "north");
        assert_eq!(normalize_direction("SW"), "southwest");
        assert_eq!(normalize_direction("East"), "east");
    }

    #[test]
    fn custom_exits_pass_through() {
        assert_eq!(normalize_direction("hatch"), "hatch");
        assert_eq!(normalize_direction("Ladder"), "Ladder");
    }
}
