/// First line of `text` word-wrapped at `width` characters.
///
/// Breaks happen on whitespace only, so words are never split: the line ends
/// at the last whitespace at or before column `width`. A word longer than the
/// line runs on to the next whitespace, and text without any usable break
/// point is returned whole. Whitespace at column 0 is never a break point.
pub(crate) fn first_line(text: &str, width: usize) -> &str {
    let mut last_break = None;

    for (column, (idx, ch)) in text.char_indices().enumerate() {
        if ch.is_whitespace() {
            if column >= width && column > 0 {
                return &text[..idx];
            }
            if column > 0 {
                last_break = Some(idx);
            }
        } else if column >= width {
            if let Some(end) = last_break {
                return &text[..end];
            }
        }
    }

    text
}
