use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::domain::MagnitudeBucket;
use crate::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        section("Navigation"),
        binding("j / k / Up / Down", "Move selection"),
        binding("gg / G", "Go to top / bottom"),
        binding("Ctrl+D / Ctrl+U", "Page down / up"),
        Line::from(""),
        section("Events"),
        binding("Enter / o", "Open USGS detail page"),
        binding("r / Ctrl+R", "Reload feed"),
        Line::from(""),
        section("Magnitude"),
        scale(),
        Line::from(""),
        section("General"),
        binding("Esc", "Dismiss error"),
        binding("?", "Toggle this help"),
        binding("q / Ctrl+C", "Quit"),
    ];

    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(4));
    let modal_area = centered_rect(60, height, area);
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(" Help (? to close) ");

    frame.render_widget(Paragraph::new(lines).block(block), modal_area);
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    ))
}

fn binding<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {:<22}", key), Style::default().fg(theme::YELLOW)),
        Span::styled(desc, Style::default().fg(theme::TEXT)),
    ])
}

fn scale() -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    for bucket in (1..=9).map(MagnitudeBucket::Level) {
        spans.push(swatch(bucket));
    }
    spans.push(swatch(MagnitudeBucket::TenPlus));
    Line::from(spans)
}

fn swatch(bucket: MagnitudeBucket) -> Span<'static> {
    Span::styled(
        format!(" {} ", bucket),
        Style::default()
            .fg(theme::BG_DARK)
            .bg(theme::magnitude_color(bucket)),
    )
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0]);
    horizontal[0]
}
