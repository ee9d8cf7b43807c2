//! Tab Selector Component
//!
//! One tab per feature screen. The selected tab carries a `▶` marker and
//! short labels are used on compact terminals.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::Screen;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab in the selector
#[derive(Debug, Clone, Copy)]
pub struct TabItem {
    pub label: &'static str,
    /// Label used on compact terminals
    pub short_label: &'static str,
}

impl TabItem {
    pub fn new(label: &'static str, short_label: &'static str) -> Self {
        Self { label, short_label }
    }
}

impl From<Screen> for TabItem {
    fn from(screen: Screen) -> Self {
        Self::new(screen.title(), screen.short_title())
    }
}

/// Render a horizontal tab selector with `selected` highlighted.
pub fn render_tab_selector(items: &[TabItem], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        } else {
            let dim = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ", dim));
            spans.push(Span::styled(label, dim));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<TabItem> {
        Screen::ALL.iter().copied().map(TabItem::from).collect()
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_precedes_selected_tab() {
        let ctx = LayoutContext::new(120, 40);
        let line = text(&render_tab_selector(&items(), 1, &ctx));

        let marker = line.find('▶').unwrap();
        assert!(marker > line.find("Threat Detection").unwrap());
        assert!(marker < line.find("Port Scanner").unwrap());
    }

    #[test]
    fn test_compact_uses_short_labels() {
        let ctx = LayoutContext::new(50, 14);
        let line = text(&render_tab_selector(&items(), 0, &ctx));
        assert!(!line.contains("Threat Detection"));
        assert!(line.contains(Screen::ThreatDetection.short_title()));
    }
}
