use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::core::{DetailFocus, DetailState};

pub(crate) fn draw(f: &mut Frame, state: &DetailState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    // Everything above the footer waits for the user record.
    if state.user.is_some() {
        render_profile(f, chunks[0], state);
        render_clock(f, chunks[1], state);
        render_panes(f, chunks[2], state);
    }
    render_footer(f, chunks[3]);
}

fn render_profile(f: &mut Frame, area: Rect, state: &DetailState) {
    let Some(user) = &state.user else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Name: {}", user.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Username: {}", user.username)),
        Line::from(format!("Catch phrase: {}", user.company.catch_phrase)),
        Line::from(format!(
            "Address: {}, {}, {}",
            user.address.street, user.address.city, user.address.zipcode
        )),
        Line::from(format!("Email: {}", user.email)),
        Line::from(format!("Phone: {}", user.phone)),
    ];

    let profile = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Profile page"));
    f.render_widget(profile, area);
}

fn render_clock(f: &mut Frame, area: Rect, state: &DetailState) {
    let pause_label = if state.clock.is_paused() {
        "[p] Start"
    } else {
        "[p] Pause"
    };
    let zone_label = match &state.selected_timezone {
        Some(zone) => zone.as_str(),
        None => "no timezone selected",
    };

    let line = Line::from(vec![
        Span::raw("Digital clock: "),
        Span::styled(
            state.clock.display(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("   {}", zone_label), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("   {}", pause_label), Style::default().fg(Color::DarkGray)),
    ]);

    let clock = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(clock, area);
}

fn render_panes(f: &mut Frame, area: Rect, state: &DetailState) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_timezones(f, panes[0], state);
    render_posts(f, panes[1], state);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn render_timezones(f: &mut Frame, area: Rect, state: &DetailState) {
    let items: Vec<ListItem> = state
        .timezones
        .iter()
        .map(|zone| {
            let marker = if state.selected_timezone.as_deref() == Some(zone.as_str()) {
                "* "
            } else {
                "  "
            };
            ListItem::new(format!("{}{}", marker, zone))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block(
            "Select Country",
            state.focus == DetailFocus::Timezones,
        ))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.timezones.is_empty() {
        list_state.select(Some(state.tz_cursor));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_posts(f: &mut Frame, area: Rect, state: &DetailState) {
    if state.posts.is_empty() {
        let empty = Paragraph::new("")
            .block(pane_block("Posts", state.focus == DetailFocus::Posts));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .posts
        .iter()
        .map(|post| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    post.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    post.body.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("Posts", state.focus == DetailFocus::Posts))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.post_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(
        "[tab] switch pane   [↑/↓] move   [enter] select / open   [p] pause   [esc] back   [q] quit",
    ))
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}
