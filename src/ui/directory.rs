use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::DirectoryState;

pub(crate) fn draw(f: &mut Frame, state: &DirectoryState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    let header = Paragraph::new("User Directory")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_users(f, chunks[1], state);
    render_footer(f, chunks[2]);
}

fn render_users(f: &mut Frame, area: Rect, state: &DirectoryState) {
    let items: Vec<ListItem> = state
        .users
        .iter()
        .map(|user| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("Name: {}", user.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("    Posts: {}", state.post_count(user.id)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Users"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.users.is_empty() {
        list_state.select(Some(state.cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Text::from(Line::from(
        "[↑/↓] select   [enter] open profile   [q] quit",
    )))
    .style(Style::default().fg(Color::DarkGray))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}
