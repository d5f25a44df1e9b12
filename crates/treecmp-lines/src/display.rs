//! Terminal-safe rendering of individual lines for reports.

use treecmp_crypto::ContentHasher;

/// Longest decoded line shown before truncation, in characters.
pub const MAX_DISPLAY_CHARS: usize = 80;

/// Render a line with the default [`MAX_DISPLAY_CHARS`] limit.
pub fn render_line(line: &[u8]) -> String {
    render_line_with_width(line, MAX_DISPLAY_CHARS)
}

/// Render a line for display.
///
/// UTF-8 lines lose their trailing `\r`/`\n` and are cut to `max_chars`
/// characters with `...` appended. Other lines are never printed raw; they
/// become a placeholder carrying their 128-bit digest and byte length.
pub fn render_line_with_width(line: &[u8], max_chars: usize) -> String {
    let stripped = trim_line_end(line);
    match std::str::from_utf8(stripped) {
        Ok(text) => match text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        },
        Err(_) => format!(
            "<binary line digest:{} len:{}>",
            ContentHasher::LINE.hash(line),
            line.len()
        ),
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    &line[..end]
}
