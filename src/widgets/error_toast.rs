use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::theme;

/// Draws the last error over the selected-event row until it expires.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some((message, _)) = &app.last_error else {
        return;
    };
    if area.height < 2 {
        return;
    }
    let row = Rect::new(area.x, area.bottom() - 2, area.width, 1);

    let line = Line::from(vec![
        Span::styled(
            " ! ",
            Style::default()
                .fg(theme::BG_DARK)
                .bg(theme::RED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", message), Style::default().fg(theme::RED)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::BG_SURFACE)),
        row,
    );
}
