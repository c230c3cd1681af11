//! Progress gauge and the trailing window of step descriptions

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding},
    Frame,
};

/// Render the progress gauge above the step log (newest step first)
pub fn render_steps_pane(frame: &mut Frame, area: Rect, progress: u8, descriptions: &[String]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .gauge_style(Style::default().fg(DEFAULT_THEME.success))
        .percent(u16::from(progress.min(100)));
    frame.render_widget(gauge, rows[0]);

    let block = Block::default()
        .title(" Steps ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    let items: Vec<ListItem> = if descriptions.is_empty() {
        vec![ListItem::new("(press space to start)").style(Style::default().fg(DEFAULT_THEME.comment))]
    } else {
        descriptions
            .iter()
            .rev()
            .enumerate()
            .map(|(i, text)| {
                if i == 0 {
                    ListItem::new(Line::from(vec![
                        Span::styled("› ", Style::default().fg(DEFAULT_THEME.primary)),
                        Span::styled(
                            text.as_str(),
                            Style::default()
                                .fg(DEFAULT_THEME.fg)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]))
                } else {
                    ListItem::new(format!("  {}", text))
                        .style(Style::default().fg(DEFAULT_THEME.comment))
                }
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), rows[1]);
}
