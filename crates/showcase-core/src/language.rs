pub const FALLBACK_COLOR: &str = "#8b949e";

const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("C", "#555555"),
    ("C#", "#178600"),
    ("C++", "#f34b7d"),
    ("CSS", "#563d7c"),
    ("Dart", "#00B4AB"),
    ("Elixir", "#6e4a7e"),
    ("Elm", "#60B5CC"),
    ("Go", "#00ADD8"),
    ("HTML", "#e34c26"),
    ("Haskell", "#5e5086"),
    ("Java", "#b07219"),
    ("JavaScript", "#f1e05a"),
    ("Kotlin", "#A97BFF"),
    ("PHP", "#4F5D95"),
    ("PureScript", "#1D222D"),
    ("Python", "#3572A5"),
    ("Ruby", "#701516"),
    ("Rust", "#dea584"),
    ("Scala", "#c22d40"),
    ("Shell", "#89e051"),
    ("Swift", "#F05138"),
    ("TypeScript", "#3178c6"),
];

/// Display color for a language label; unknown or missing labels get
/// [`FALLBACK_COLOR`].
pub fn language_color(language: Option<&str>) -> &'static str {
    language
        .and_then(|name| {
            LANGUAGE_COLORS
                .iter()
                .find(|(label, _)| *label == name)
                .map(|(_, color)| *color)
        })
        .unwrap_or(FALLBACK_COLOR)
}
