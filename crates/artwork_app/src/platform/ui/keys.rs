//! Maps key presses to core messages, given what is currently on screen.

use artwork_core::{BrowserViewModel, Msg, PageNav, SelectionMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent, view: &BrowserViewModel) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match &view.bulk_select {
        Some(overlay) => map_overlay_key(key, &overlay.input),
        None => map_table_key(key, view),
    }
}

fn map_overlay_key(key: KeyEvent, input: &str) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::Dispatch(Msg::BulkSelectSubmitted),
        KeyCode::Esc => KeyAction::Dispatch(Msg::BulkSelectDismissed),
        KeyCode::Backspace => {
            let mut next = input.to_string();
            next.pop();
            KeyAction::Dispatch(Msg::BulkInputChanged(next))
        }
        KeyCode::Char(c) if c.is_ascii_digit() || (c == '-' && input.is_empty()) => {
            let mut next = input.to_string();
            next.push(c);
            KeyAction::Dispatch(Msg::BulkInputChanged(next))
        }
        _ => KeyAction::Ignore,
    }
}

fn map_table_key(key: KeyEvent, view: &BrowserViewModel) -> KeyAction {
    let msg = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Left | KeyCode::PageUp => Msg::Navigate(PageNav::Previous),
        KeyCode::Right | KeyCode::PageDown => Msg::Navigate(PageNav::Next),
        KeyCode::Home => Msg::Navigate(PageNav::First),
        KeyCode::End => Msg::Navigate(PageNav::Last),
        KeyCode::Up | KeyCode::Char('k') => Msg::CursorMoved { delta: -1 },
        KeyCode::Down | KeyCode::Char('j') => Msg::CursorMoved { delta: 1 },
        KeyCode::Char('s') => Msg::PageSizeSelected(view.page_size.next()),
        KeyCode::Char('m') => Msg::SelectionModeChanged(match view.selection_mode {
            SelectionMode::Checkbox => SelectionMode::RowClick,
            SelectionMode::RowClick => SelectionMode::Checkbox,
        }),
        KeyCode::Char(' ') => {
            let Some(row) = view.cursor.and_then(|cursor| view.rows.get(cursor)) else {
                return KeyAction::Ignore;
            };
            Msg::RowToggled { id: row.id }
        }
        KeyCode::Char('a') => Msg::PageToggled,
        KeyCode::Char('c') => Msg::SelectionCleared,
        KeyCode::Char('n') => Msg::BulkSelectOpened,
        KeyCode::Char('r') => Msg::Started,
        _ => return KeyAction::Ignore,
    };
    KeyAction::Dispatch(msg)
}
