//! Port scanner panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{
    render_input_field, render_result_area, render_status_indicator, InputFieldConfig,
    INPUT_FIELD_HEIGHT,
};
use super::format::format_scan_message;
use super::layout::LayoutContext;
use super::panel_chunks;
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_OK};
use crate::models::PortScanResult;
use crate::view_state::{PendingInput, PortScanField, PortScanScreen};

pub const RESULT_TITLE: &str = "Scan Result";

fn scan_line(result: &PortScanResult) -> Line<'static> {
    let color = if result.open { COLOR_OK } else { COLOR_ERROR };
    Line::from(Span::styled(
        format_scan_message(result),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

pub fn render_port_scan_panel(
    frame: &mut Frame,
    area: Rect,
    screen: &PortScanScreen,
    focus: PortScanField,
    tick: u64,
    ctx: &LayoutContext,
) {
    let status = render_status_indicator(screen.status(), "Scanning...", tick);
    let chunks = panel_chunks(area, INPUT_FIELD_HEIGHT * 2 + 1, status.len() as u16);
    let inputs = chunks[0];

    let ip = InputFieldConfig::new("IP address", screen.pending().field(PortScanField::Ip))
        .focused(focus == PortScanField::Ip)
        .placeholder("e.g. 192.168.1.1");
    let used = render_input_field(frame, inputs, &ip, ctx);

    let port = InputFieldConfig::new("Port", screen.pending().field(PortScanField::Port))
        .focused(focus == PortScanField::Port);
    let port_area = Rect {
        y: inputs.y + used,
        height: inputs.height.saturating_sub(used),
        ..inputs
    };
    render_input_field(frame, port_area, &port, ctx);

    if inputs.height > INPUT_FIELD_HEIGHT * 2 {
        frame.render_widget(
            Line::from(Span::styled(
                "  Up/Down: switch field  Enter: scan",
                Style::default().fg(COLOR_DIM),
            )),
            Rect { y: inputs.y + INPUT_FIELD_HEIGHT * 2, height: 1, ..inputs },
        );
    }
    frame.render_widget(Paragraph::new(status), chunks[1]);

    if let Some(result) = screen.result() {
        render_result_area(
            frame,
            chunks[2],
            RESULT_TITLE,
            vec![scan_line(result)],
            screen.scroll(),
        );
    }
}
