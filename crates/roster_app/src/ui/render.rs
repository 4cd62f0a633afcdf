use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use roster_core::{AppViewModel, Character};

/// Draws one frame from the view model. `scroll` is the card-list
/// offset in rows, owned by the shell.
pub fn render(frame: &mut Frame, view: &AppViewModel, scroll: u16) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(4),
    ])
    .areas(frame.area());

    frame.render_widget(header_widget(view), header);
    frame.render_widget(body_widget(view, scroll), body);
    frame.render_widget(footer_widget(view), footer);
}

fn header_widget(view: &AppViewModel) -> Paragraph<'static> {
    let search = Line::from(vec![
        Span::styled("Search: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(view.search_text.clone()),
        Span::styled("▏", Style::default().fg(Color::DarkGray)),
    ]);
    let filters = Line::from(vec![
        Span::raw(checkbox("filter dead", view.filter_dead)),
        Span::raw("   "),
        Span::raw(checkbox("filter alive", view.filter_alive)),
    ]);

    Paragraph::new(vec![search, filters]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Rick and Morty roster "),
    )
}

fn body_widget(view: &AppViewModel, scroll: u16) -> Paragraph<'static> {
    let block = Block::default().borders(Borders::ALL).title(format!(
        " Characters ({} of {} on this page) ",
        view.visible.len(),
        view.fetched_count
    ));

    if view.visible.is_empty() {
        return Paragraph::new("No characters found.").block(block);
    }

    let mut lines = Vec::new();
    for character in &view.visible {
        lines.extend(card_lines(character));
    }
    Paragraph::new(lines).scroll((scroll, 0)).block(block)
}

fn card_lines(character: &Character) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            character.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "  status: {} | species: {} | gender: {}",
            character.status.label(),
            character.species,
            character.gender
        )),
        Line::from(format!(
            "  origin: {} | location: {}",
            character.origin, character.location
        )),
        Line::from(Span::styled(
            format!("  image: {}", character.image),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ]
}

fn footer_widget(view: &AppViewModel) -> Paragraph<'static> {
    let enabled = Style::default();
    let disabled = Style::default().fg(Color::DarkGray);

    let nav = Line::from(vec![
        Span::raw(format!("Page {}   ", view.page)),
        Span::styled(
            "← Previous",
            if view.has_previous { enabled } else { disabled },
        ),
        Span::raw("   "),
        Span::styled("Next →", if view.has_next { enabled } else { disabled }),
    ]);

    let second = match view.failure {
        Some(failure) => Line::from(Span::styled(
            format!("Last fetch failed: {failure}. Showing the last loaded page."),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "type to search   Ctrl-D dead   Ctrl-A alive   ←/→ page   ↑/↓ scroll   Esc quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    Paragraph::new(vec![nav, second]).block(Block::default().borders(Borders::ALL))
}

fn checkbox(label: &str, checked: bool) -> String {
    format!("[{}] {label}", if checked { "x" } else { " " })
}
