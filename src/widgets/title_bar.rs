use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, LoadState};
use crate::theme;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let left_spans: Vec<Span> = vec![
        Span::styled(
            " quakes ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled(
            "Earthquakes",
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" > ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled(app.feed_label.as_str(), Style::default().fg(theme::TEXT_DIM)),
    ];

    let mut right_spans: Vec<Span> = Vec::new();

    let state_indicator = match &app.quakes {
        LoadState::Offline => Span::styled("○ Offline", Style::default().fg(theme::RED)),
        _ if app.is_refreshing() => {
            Span::styled("◌ Loading...", Style::default().fg(theme::YELLOW))
        }
        LoadState::Loaded(_) => Span::styled("● Up to date", Style::default().fg(theme::GREEN)),
        LoadState::NotLoaded | LoadState::Loading => {
            Span::styled("○ Idle", Style::default().fg(theme::TEXT_MUTED))
        }
    };
    right_spans.push(state_indicator);

    if let Some(quakes) = app.quakes.data() {
        right_spans.push(Span::styled(
            format!("  [{} events]", quakes.len()),
            Style::default().fg(theme::TEXT_MUTED),
        ));
    }
    right_spans.push(Span::raw(" "));

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let right_width: usize = right_spans.iter().map(|s| s.width()).sum();
    let gap = (area.width as usize).saturating_sub(left_width + right_width);

    let mut spans = left_spans;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right_spans);

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_BAR));
    frame.render_widget(widget, area);
}
