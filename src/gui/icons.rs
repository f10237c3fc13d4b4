/// Glyph for an icon name. Names missing from the catalog fall back to
/// their first letter so every launcher stays clickable.
pub fn glyph(name: &str) -> String {
    let known = match name {
        "file" | "file-text" => "📄",
        "star" => "⭐",
        "book" | "book-open" => "📖",
        "calendar" | "calendar-days" => "📅",
        "folder" => "📁",
        "home" | "house" => "🏠",
        "bookmark" => "🔖",
        "pin" => "📌",
        "inbox" => "📥",
        "list" | "list-todo" => "📋",
        "lightbulb" => "💡",
        "heart" => "❤",
        "flag" => "⚑",
        "clock" => "🕑",
        "pencil" | "pen" => "✏",
        "layout-dashboard" | "layout" => "▦",
        _ => "",
    };
    if !known.is_empty() {
        return known.to_string();
    }
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::glyph;

    #[test]
    fn known_and_unknown_names() {
        assert_eq!(glyph("file"), "📄");
        assert_eq!(glyph("rocket"), "R");
        assert_eq!(glyph(""), "?");
    }
}
