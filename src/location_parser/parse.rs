use regex::Regex;
use std::sync::OnceLock;

pub const MAX_SUGGESTIONS: usize = 3;

fn numbered_line() -> &'static Regex {
    static NUMBERED_LINE: OnceLock<Regex> = OnceLock::new();
    NUMBERED_LINE.get_or_init(|| {
        Regex::new(r"^\s*\d+\.(.*)$").expect("numbered list pattern is valid")
    })
}

/// Pulls up to three place names out of a free-text model reply.
///
/// A numbered list ("1. Foo") wins when it yields three names; anything less
/// and the reply is split on commas and newlines instead.
pub fn parse_suggestions(raw: &str) -> Vec<String> {
    let numbered: Vec<String> = raw
        .lines()
        .filter_map(|line| numbered_line().captures(line))
        .filter_map(|caps| caps.get(1).map(|m| clean(m.as_str())))
        .filter(|name| !name.is_empty())
        .take(MAX_SUGGESTIONS)
        .collect();

    if numbered.len() >= MAX_SUGGESTIONS {
        return numbered;
    }

    raw.split([',', '\n'])
        .map(clean)
        .filter(|name| !name.is_empty())
        .take(MAX_SUGGESTIONS)
        .collect()
}

// Models like to wrap names in quotes even when told not to.
fn clean(piece: &str) -> String {
    piece
        .trim()
        .trim_matches(|c: char| matches!(c, '"' | '「' | '」'))
        .trim()
        .to_string()
}
