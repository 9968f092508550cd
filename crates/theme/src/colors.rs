use ratatui::style::Color;

/// Parse a colour string into a terminal colour.
///
/// Accepts the common colour names (`"cyan"`, `"yellow"`, ...) and CSS-style
/// hex (`#RRGGBB`). Returns `None` for anything else.
pub fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "white" => return Some(Color::White),
        _ => {}
    }
    from_hex(s)
}

/// Parse a `#RRGGBB` hex colour string.
pub fn from_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let byte = |s: &str| u8::from_str_radix(s, 16).ok();

    Some(Color::Rgb(
        byte(&hex[0..2])?,
        byte(&hex[2..4])?,
        byte(&hex[4..6])?,
    ))
}
