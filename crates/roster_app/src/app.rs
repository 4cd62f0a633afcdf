use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use roster_core::{update, AppState, AppViewModel, Msg};
use roster_engine::FetchSettings;
use roster_logging::roster_info;

use crate::effects::EffectRunner;
use crate::ui;

const TICK: Duration = Duration::from_millis(50);

pub fn run() -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner =
        EffectRunner::new(msg_tx, FetchSettings::default()).context("start fetch engine")?;

    // Kick off the initial page load before the first frame.
    let state = dispatch(AppState::new(), Msg::Started, &runner);

    let mut terminal = ratatui::init();
    roster_info!("terminal ui started");
    let result = event_loop(&mut terminal, state, &msg_rx, &runner);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    mut state: AppState,
    msg_rx: &mpsc::Receiver<Msg>,
    runner: &EffectRunner,
) -> anyhow::Result<()> {
    let mut view = state.view();
    let mut scroll: u16 = 0;
    terminal.draw(|frame| ui::render(frame, &view, scroll))?;

    loop {
        let mut redraw = false;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_quit(&key) {
                        return Ok(());
                    }
                    match key.code {
                        // Scrolling is shell state, not controller state.
                        KeyCode::Up => {
                            scroll = scroll.saturating_sub(1);
                            redraw = true;
                        }
                        KeyCode::Down => {
                            scroll = scroll.saturating_add(1);
                            redraw = true;
                        }
                        _ => {
                            if let Some(msg) = map_key(&key, &view) {
                                state = dispatch(state, msg, runner);
                            }
                        }
                    }
                }
                Event::Resize(_, _) => redraw = true,
                _ => {}
            }
        }

        // Engine results arrive on the message channel.
        while let Ok(msg) = msg_rx.try_recv() {
            state = dispatch(state, msg, runner);
        }

        if state.consume_dirty() {
            let next = state.view();
            scroll = adjusted_scroll(&view, &next, scroll);
            view = next;
            redraw = true;
        }

        if redraw {
            terminal.draw(|frame| ui::render(frame, &view, scroll))?;
        }
    }
}

/// Keeps the scroll position across state updates that leave the card
/// list as it was (an error notice, a checkbox repaint); a changed list
/// starts back at the top.
fn adjusted_scroll(previous: &AppViewModel, next: &AppViewModel, scroll: u16) -> u16 {
    if next.visible == previous.visible {
        scroll
    } else {
        0
    }
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c')))
}

/// Maps a key press to a controller message. Keys the controller does
/// not care about (scrolling, quitting) are handled by the caller.
fn map_key(key: &KeyEvent, view: &AppViewModel) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('d') => Some(Msg::FilterDeadToggled),
            KeyCode::Char('a') => Some(Msg::FilterAliveToggled),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Left => Some(Msg::PreviousPage),
        KeyCode::Right => Some(Msg::NextPage),
        KeyCode::Backspace => {
            let mut text = view.search_text.clone();
            text.pop();
            Some(Msg::SearchChanged(text))
        }
        KeyCode::Char(c) => {
            let mut text = view.search_text.clone();
            text.push(c);
            Some(Msg::SearchChanged(text))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with_search(text: &str) -> AppViewModel {
        AppViewModel {
            search_text: text.to_string(),
            ..AppViewModel::default()
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_extends_the_search_text() {
        let msg = map_key(&key(KeyCode::Char('k')), &view_with_search("ric"));
        assert_eq!(msg, Some(Msg::SearchChanged("rick".to_string())));
    }

    #[test]
    fn backspace_trims_the_search_text() {
        let msg = map_key(&key(KeyCode::Backspace), &view_with_search("rick"));
        assert_eq!(msg, Some(Msg::SearchChanged("ric".to_string())));

        // On empty text the controller sees the same value and no-ops.
        let msg = map_key(&key(KeyCode::Backspace), &view_with_search(""));
        assert_eq!(msg, Some(Msg::SearchChanged(String::new())));
    }

    #[test]
    fn arrows_page_and_ctrl_keys_toggle_filters() {
        let view = view_with_search("");
        assert_eq!(map_key(&key(KeyCode::Left), &view), Some(Msg::PreviousPage));
        assert_eq!(map_key(&key(KeyCode::Right), &view), Some(Msg::NextPage));
        assert_eq!(map_key(&ctrl('d'), &view), Some(Msg::FilterDeadToggled));
        assert_eq!(map_key(&ctrl('a'), &view), Some(Msg::FilterAliveToggled));
    }

    #[test]
    fn ctrl_chars_do_not_edit_the_search_text() {
        assert_eq!(map_key(&ctrl('x'), &view_with_search("rick")), None);
    }

    #[test]
    fn scroll_survives_updates_that_keep_the_list() {
        let view = view_with_cards();
        let mut next = view.clone();
        next.failure = Some(roster_core::FetchFailure::Network);

        assert_eq!(adjusted_scroll(&view, &next, 7), 7);
    }

    #[test]
    fn scroll_resets_when_the_list_changes() {
        let view = view_with_cards();
        let mut next = view.clone();
        next.visible.clear();

        assert_eq!(adjusted_scroll(&view, &next, 7), 0);
    }

    fn view_with_cards() -> AppViewModel {
        AppViewModel {
            visible: vec![roster_core::Character {
                id: 1,
                name: "Rick Sanchez".to_string(),
                status: roster_core::CharacterStatus::Alive,
                species: "Human".to_string(),
                gender: "Male".to_string(),
                origin: "Earth (C-137)".to_string(),
                location: "Citadel of Ricks".to_string(),
                image: "https://example.com/avatar/1.jpeg".to_string(),
            }],
            fetched_count: 1,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert!(is_quit(&key(KeyCode::Esc)));
        assert!(is_quit(&ctrl('c')));
        assert!(!is_quit(&key(KeyCode::Char('q'))));
    }
}
