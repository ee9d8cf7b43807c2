//! Input Field Component
//!
//! A labelled text box with rounded borders. The focused field shows a block
//! cursor; values wider than the box are scrolled so the end stays visible.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    pub focused: bool,
    /// Shown dimmed when the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows taken by one field: label (1) + input box (3).
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Longest suffix of `value` that fits in `width` columns.
fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

/// Render an input field and return the height consumed, at most
/// [`INPUT_FIELD_HEIGHT`].
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    ctx: &LayoutContext,
) -> u16 {
    if area.height == 0 {
        return 0;
    }
    let margin = if ctx.is_extra_small() { 0 } else { 2 };
    let inner_width = area.width.saturating_sub(margin * 2);

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        x: area.x + margin,
        y: area.y,
        width: inner_width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        x: area.x + margin,
        y: area.y + 1,
        width: inner_width,
        height: 3.min(area.height.saturating_sub(1)),
    };

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    // Borders take two columns, the cursor one more.
    let text_width = inner_width.saturating_sub(3) as usize;

    let line = match (config.value.is_empty(), config.placeholder) {
        (true, Some(placeholder)) => {
            let mut spans = Vec::new();
            if config.focused {
                spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
            }
            spans.push(Span::styled(placeholder, Style::default().fg(COLOR_DIM)));
            Line::from(spans)
        }
        _ => {
            let style = if config.focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let mut content = visible_tail(config.value, text_width).to_string();
            if config.focused {
                content.push('\u{2588}');
            }
            Line::from(Span::styled(content, style))
        }
    };

    frame.render_widget(Paragraph::new(line).block(block), input_area);
    INPUT_FIELD_HEIGHT.min(area.height)
}
