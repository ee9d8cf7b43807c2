//! Threat detection panel.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{
    render_input_field, render_result_area, render_status_indicator, InputFieldConfig,
    INPUT_FIELD_HEIGHT,
};
use super::format::format_threat_line;
use super::layout::LayoutContext;
use super::panel_chunks;
use super::theme::{COLOR_DIM, COLOR_WARN};
use crate::models::ThreatFinding;
use crate::view_state::{PendingInput, ThreatField, ThreatScreen};

pub const RESULT_TITLE: &str = "Findings";

fn finding_line(finding: &ThreatFinding) -> Line<'static> {
    let style = match finding.is_threat {
        Some(true) => Style::default().fg(COLOR_WARN),
        _ => Style::default(),
    };
    Line::from(Span::styled(format_threat_line(finding), style))
}

pub fn render_threat_panel(
    frame: &mut Frame,
    area: Rect,
    screen: &ThreatScreen,
    tick: u64,
    ctx: &LayoutContext,
) {
    let status = render_status_indicator(screen.status(), "Analyzing message...", tick);
    let chunks = panel_chunks(area, INPUT_FIELD_HEIGHT + 1, status.len() as u16);

    let config = InputFieldConfig::new("Message", screen.pending().field(ThreatField::Text))
        .focused(true)
        .placeholder("Paste a suspicious message and press Enter");
    render_input_field(frame, chunks[0], &config, ctx);
    if chunks[0].height > INPUT_FIELD_HEIGHT {
        frame.render_widget(
            Line::from(Span::styled("  Enter: detect threats", Style::default().fg(COLOR_DIM))),
            Rect { y: chunks[0].y + INPUT_FIELD_HEIGHT, height: 1, ..chunks[0] },
        );
    }
    frame.render_widget(Paragraph::new(status), chunks[1]);

    // An empty list gets no box, same as no result.
    if let Some(findings) = screen.result().filter(|f| !f.is_empty()) {
        let lines = findings.iter().map(finding_line).collect();
        render_result_area(frame, chunks[2], RESULT_TITLE, lines, screen.scroll());
    }
}
