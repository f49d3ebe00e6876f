use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::domain::model::Post;

/// Overlay showing one post's full content. Drawn last so it sits above the
/// detail view; the background underneath is cleared.
pub(crate) fn draw(f: &mut Frame, post: &Post) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::styled(
            post.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    lines.extend(post.body.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "[esc] close",
        Style::default().fg(Color::DarkGray),
    ));

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Post"));
    f.render_widget(panel, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
