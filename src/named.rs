//! The basic CSS color keywords.

/// Keyword to hex mapping of the 17 basic colors.
pub const NAMED_COLORS: [(&str, &str); 17] = [
    ("maroon", "#800000"),
    ("red", "#ff0000"),
    ("orange", "#ffa500"),
    ("yellow", "#ffff00"),
    ("olive", "#808000"),
    ("purple", "#800080"),
    ("fuchsia", "#ff00ff"),
    ("white", "#ffffff"),
    ("lime", "#00ff00"),
    ("green", "#008000"),
    ("navy", "#000080"),
    ("blue", "#0000ff"),
    ("aqua", "#00ffff"),
    ("teal", "#008080"),
    ("black", "#000000"),
    ("silver", "#c0c0c0"),
    ("gray", "#808080"),
];

/// Look up the hex value of a color keyword, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static str> {
    let name = name.trim();
    NAMED_COLORS
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(name))
        .map(|&(_, hex)| hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup("teal"), Some("#008080"));
        assert_eq!(lookup("Fuchsia"), Some("#ff00ff"));
        assert_eq!(lookup(" GRAY "), Some("#808080"));
    }

    #[test]
    fn unknown_keywords_are_not_found() {
        assert_eq!(lookup("rebeccapurple"), None);
        assert_eq!(lookup("#ff0000"), None);
    }
}
