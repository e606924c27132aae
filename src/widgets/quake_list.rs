use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::{App, LoadState};
use crate::domain::Earthquake;
use crate::format::{format_date, format_magnitude, format_time, split_location};
use crate::render::{NO_EARTHQUAKES, NO_INTERNET};
use crate::theme;

pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let quakes = match &app.quakes {
        LoadState::Loaded(quakes) if !quakes.is_empty() => quakes,
        state => {
            let label = match state {
                LoadState::Loading | LoadState::NotLoaded => " Loading earthquakes...".to_string(),
                LoadState::Offline => format!(" {}", NO_INTERNET),
                LoadState::Loaded(_) => format!(" {}", NO_EARTHQUAKES),
            };
            let empty = Paragraph::new(label).style(Style::default().fg(theme::TEXT_MUTED));
            frame.render_widget(empty, area);
            return;
        }
    };

    let header = Row::new(vec![
        Cell::from(" Mag"),
        Cell::from("Offset"),
        Cell::from("Location"),
        Cell::from("Date"),
        Cell::from("Time"),
    ])
    .style(
        Style::default()
            .fg(theme::TEXT_DIM)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = quakes.iter().map(quake_row).collect();

    let widths = [
        Constraint::Length(7),
        Constraint::Length(16),
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::NONE))
        .row_highlight_style(
            Style::default()
                .bg(theme::BG_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn quake_row(quake: &Earthquake) -> Row<'static> {
    let location = split_location(&quake.location);
    Row::new(vec![
        Cell::from(magnitude_badge(quake)),
        Cell::from(location.offset).style(Style::default().fg(theme::TEXT_DIM)),
        Cell::from(location.primary).style(Style::default().fg(theme::TEXT)),
        Cell::from(format_date(quake.time_ms)).style(Style::default().fg(theme::TEXT_DIM)),
        Cell::from(format_time(quake.time_ms)).style(Style::default().fg(theme::TEXT_DIM)),
    ])
}

fn magnitude_badge(quake: &Earthquake) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {:>4} ", format_magnitude(quake.magnitude)),
        Style::default()
            .fg(theme::BG_DARK)
            .bg(theme::magnitude_color(quake.bucket()))
            .add_modifier(Modifier::BOLD),
    ))
}
