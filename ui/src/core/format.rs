//! Formatting helpers for presenting verses and search hits.

use time::OffsetDateTime;

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

/// Shorten a search hit to at most `max_chars` characters, cutting on a word
/// boundary when possible.
pub fn preview(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let boundary = cut.rfind(char::is_whitespace);
    let trimmed = match boundary {
        Some(idx) if cut[..idx].chars().count() > max_chars / 2 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end())
}
