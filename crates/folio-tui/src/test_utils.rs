//! Shared helpers for widget tests

use ratatui::buffer::Buffer;
use ratatui::text::Line;

/// Plain text of a line, styles dropped
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Buffer contents row by row, trailing spaces trimmed
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            let row: String = (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
