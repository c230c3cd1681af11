//! Bar pane: one vertical bar per element of the working array
//!
//! Each bar is classified into a [`BarRole`] from the snapshot under the
//! cursor, then colored from the theme. Bars outside the active sub-range are
//! dimmed, and the pivot's label is marked with `*`.

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// What a single bar represents at the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Sorted,
    Boundary,
    Focus,
    Compared,
    Normal,
}

/// Classify index `index`; sorted wins over boundary, which wins over focus and compare
pub fn classify(snapshot: &Snapshot, index: usize) -> BarRole {
    if snapshot.is_sorted_at(index) {
        BarRole::Sorted
    } else if snapshot.boundary_index == Some(index) && snapshot.pivot_index.is_some() {
        BarRole::Boundary
    } else if snapshot.focus == Some(index) {
        BarRole::Focus
    } else if snapshot.compare_target == Some(index) {
        BarRole::Compared
    } else {
        BarRole::Normal
    }
}

/// Whether `index` lies inside the snapshot's active range (everything does when no range is set)
pub fn in_active_range(snapshot: &Snapshot, index: usize) -> bool {
    snapshot.range.map_or(true, |r| r.contains(index))
}

fn role_color(role: BarRole) -> Color {
    match role {
        BarRole::Sorted => DEFAULT_THEME.success,
        BarRole::Boundary => DEFAULT_THEME.boundary,
        BarRole::Focus => DEFAULT_THEME.primary,
        BarRole::Compared => DEFAULT_THEME.secondary,
        BarRole::Normal => DEFAULT_THEME.bar,
    }
}

/// Bar heights offset by the list minimum so negative values keep their order
pub fn bar_heights(values: &[i64]) -> Vec<u64> {
    let min = values.iter().copied().min().unwrap_or(0).min(0);
    values
        .iter()
        .map(|&v| (i128::from(v) - i128::from(min)) as u64)
        .collect()
}

/// Render the bar pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    values: &[i64],
    snapshot: Option<&Snapshot>,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    if values.is_empty() {
        let paragraph = Paragraph::new("(empty list: press ] to add elements or r to reset)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let heights = bar_heights(values);
    let bars: Vec<Bar> = values
        .iter()
        .zip(&heights)
        .enumerate()
        .map(|(index, (&value, &height))| {
            let (role, active) = match snapshot {
                Some(s) => (classify(s, index), in_active_range(s, index)),
                None => (BarRole::Normal, true),
            };
            let color = if active {
                role_color(role)
            } else {
                DEFAULT_THEME.bar_dimmed
            };
            let is_pivot = snapshot.is_some_and(|s| s.pivot_index == Some(index));
            let label = if is_pivot {
                Line::styled(
                    format!("{}*", value),
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::from(value.to_string())
            };

            Bar::default()
                .value(height)
                .text_value(String::new())
                .label(label)
                .style(Style::default().fg(color))
        })
        .collect();

    // Spread the bars over the inner width, one column of gap between them
    let inner_width = area.width.saturating_sub(2) as usize;
    let count = values.len();
    let gap = 1;
    let bar_width = (inner_width.saturating_sub(gap * (count - 1)) / count).clamp(1, 8) as u16;
    let max = heights.iter().copied().max().unwrap_or(0).max(1);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap as u16)
        .max(max);
    frame.render_widget(chart, area);
}
