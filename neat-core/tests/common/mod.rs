/// Formats with the default 72-column margin.
pub fn fmt(text: &str) -> String {
    neat_core::format(text, 72).expect("Failed to format document")
}

/// Formats with an explicit margin.
pub fn fmt_at(text: &str, max_line_len: usize) -> String {
    neat_core::format(text, max_line_len).expect("Failed to format document")
}
