//! Per-algorithm color legend

use crate::sorting::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The legend entries that apply to `algorithm`
pub fn legend_entries(algorithm: Algorithm) -> Vec<(&'static str, Color)> {
    let mut entries = vec![("Current", DEFAULT_THEME.primary)];
    match algorithm {
        Algorithm::Bubble => {
            entries.push(("Compared", DEFAULT_THEME.secondary));
            entries.push(("Sorted", DEFAULT_THEME.success));
        }
        Algorithm::Quick => {
            entries.push(("Boundary", DEFAULT_THEME.boundary));
            entries.push(("Pivot *", DEFAULT_THEME.error));
        }
        Algorithm::Merge => {
            entries.push(("Compared", DEFAULT_THEME.secondary));
        }
    }
    entries.push(("Outside range", DEFAULT_THEME.bar_dimmed));
    entries
}

pub fn render_legend(frame: &mut Frame, area: Rect, algorithm: Algorithm) {
    let mut spans = Vec::new();
    for (label, color) in legend_entries(algorithm) {
        spans.push(Span::styled("■ ", Style::default().fg(color)));
        spans.push(Span::styled(
            format!("{}   ", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
