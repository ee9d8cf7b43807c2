//! Result Area Component
//!
//! Bordered box listing a screen's latest accepted result. Lines are
//! wrapped to the box width before rendering so the row count is exact,
//! which keeps the scroll offset in step with what is on screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::view_state::ResultScroll;

/// Split `lines` into rows of at most `width` columns, keeping span styles.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: u16) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    let mut rows = Vec::with_capacity(lines.len());

    for line in lines {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;

        for span in line.spans {
            let mut chunk = String::new();
            for c in span.content.chars() {
                let w = c.width().unwrap_or(0);
                if used + w > width && used > 0 {
                    if !chunk.is_empty() {
                        row.push(Span::styled(std::mem::take(&mut chunk), span.style));
                    }
                    rows.push(Line::from(std::mem::take(&mut row)));
                    used = 0;
                }
                chunk.push(c);
                used += w;
            }
            if !chunk.is_empty() {
                row.push(Span::styled(chunk, span.style));
            }
        }
        rows.push(Line::from(row));
    }
    rows
}

/// Render `lines` inside a titled box, scrolled by `scroll`.
///
/// Records the wrapped row count and visible height on `scroll` so key
/// handlers can clamp against this draw. When the listing overflows, the
/// title shows which rows are in view.
pub fn render_result_area(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    scroll: &ResultScroll,
) {
    if area.height == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);

    let rows = wrap_lines(lines, inner.width);
    let total = u16::try_from(rows.len()).unwrap_or(u16::MAX);
    scroll.record_viewport(total, inner.height);
    let offset = scroll.offset();

    let mut title_spans = vec![Span::styled(
        format!(" {} ", title),
        Style::default().fg(COLOR_HEADER),
    )];
    if total > inner.height && inner.height > 0 {
        let last = (offset + inner.height).min(total);
        title_spans.push(Span::styled(
            format!("{}-{} of {} ", offset + 1, last, total),
            Style::default().fg(COLOR_DIM),
        ));
    }

    frame.render_widget(
        Paragraph::new(rows)
            .block(block.title(Line::from(title_spans)))
            .scroll((offset, 0)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_short_lines_are_untouched() {
        let rows = wrap_lines(vec![Line::from("abc"), Line::from("de")], 10);
        assert_eq!(rows.len(), 2);
        assert_eq!(text(&rows[0]), "abc");
    }

    #[test]
    fn test_long_line_wraps_by_width() {
        let rows = wrap_lines(vec![Line::from("abcdefghij")], 4);
        let texts: Vec<String> = rows.iter().map(text).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_styles_and_wide_chars() {
        let red = Style::default().fg(Color::Red);
        let line = Line::from(vec![Span::raw("ab"), Span::styled("漢字x", red)]);
        let rows = wrap_lines(vec![line], 4);

        assert_eq!(text(&rows[0]), "ab漢");
        assert_eq!(rows[0].spans[1].style, red);
        assert_eq!(text(&rows[1]), "字x");
    }

    #[test]
    fn test_empty_line_keeps_a_row() {
        assert_eq!(wrap_lines(vec![Line::from("")], 5).len(), 1);
    }
}
