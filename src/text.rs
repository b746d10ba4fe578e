//! Helpers for turning API fields into terminal-friendly text.

pub fn format_points(score: i64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

/// Renders the HTML the API uses for comment, poll, and profile text as plain
/// text. Input that fails to render comes back unchanged.
pub fn plain_text(html: &str) -> String {
  if html.is_empty() {
    return String::new();
  }

  html2text::from_read(html.as_bytes(), usize::MAX)
    .map(|text| text.trim_end().to_owned())
    .unwrap_or_else(|_| html.to_owned())
}

/// Cuts `text` to at most `max_chars` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    None => text.to_string(),
    Some((end, _)) => format!("{}...", text[..end].trim_end()),
  }
}
