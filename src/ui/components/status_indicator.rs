//! Status Indicator Component
//!
//! Renders the request status of a screen: a spinner while requests are in
//! flight and a red line when the newest one failed.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PENDING};
use crate::view_state::RequestStatus;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Get the spinner character for a tick count
pub fn get_spinner_char(tick: u64) -> char {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Lines describing `status`. `Idle` and `Resolved` render nothing.
pub fn render_status_indicator(status: &RequestStatus, pending_label: &str, tick: u64) -> Vec<Line<'static>> {
    match status {
        RequestStatus::Idle | RequestStatus::Resolved => Vec::new(),
        RequestStatus::Pending => vec![Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(tick)),
                Style::default().fg(COLOR_PENDING),
            ),
            Span::styled(pending_label.to_string(), Style::default().fg(COLOR_DIM)),
        ])],
        RequestStatus::Failed(err) => {
            let category = err.category();
            vec![
                Line::from(vec![
                    Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                    Span::styled(
                        err.user_message(),
                        Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", category.recovery_hint()),
                    Style::default().fg(COLOR_DIM),
                )),
            ]
        }
    }
}
