use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::format::{format_magnitude, magnitude_color_bucket};
use crate::theme;

/// One-line summary of the selected event: full place name and detail URL.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let line = match app.selected_quake() {
        Some(quake) => {
            let location = if quake.location.is_empty() {
                "Unknown location"
            } else {
                quake.location.as_str()
            };
            let url = if quake.detail_url.is_empty() {
                "no detail page"
            } else {
                quake.detail_url.as_str()
            };
            Line::from(vec![
                Span::styled(
                    format!(" M{} ", format_magnitude(quake.magnitude)),
                    Style::default()
                        .fg(theme::magnitude_color(magnitude_color_bucket(quake.magnitude)))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(location.to_string(), Style::default().fg(theme::TEXT)),
                Span::styled("  ", Style::default()),
                Span::styled(url.to_string(), Style::default().fg(theme::CYAN)),
            ])
        }
        None => Line::from(Span::styled(
            " no event selected",
            Style::default().fg(theme::TEXT_MUTED),
        )),
    };

    let widget = Paragraph::new(line).style(Style::default().bg(theme::BG_SURFACE));
    frame.render_widget(widget, area);
}
