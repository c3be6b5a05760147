use crate::config::hotkeys::{get_action_for_event, HotkeyAction, HotkeyMode};
use crate::error::{AppError, AppResult};
use crate::state::State;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread. The
    /// thread stops once polling fails or the handler is dropped.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    let next = match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Input(key))
                        }
                        Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                        Ok(_) => None,
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    };
                    if let Some(next) = next {
                        if tx.send(next).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        let event = self
            .rx
            .recv()
            .map_err(|e| AppError::Terminal(format!("Terminal event channel closed: {}", e)))?;
        Ok(handle_event(event, state))
    }
}

/// Apply a single terminal event to state. Returns false if exit was
/// requested.
///
pub fn handle_event(event: Event, state: &mut State) -> bool {
    match event {
        Event::Input(key) => handle_key(key, state),
        Event::Mouse(mouse) => {
            state.handle_mouse(mouse);
            true
        }
        Event::Tick => true,
    }
}

fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    let Some(mode) = state.hotkey_mode() else {
        state.handle_rename_key(key);
        return true;
    };
    match get_action_for_event(&key, mode, state.hotkeys()) {
        Some(HotkeyAction::Quit) if mode == HotkeyMode::Navigator => {
            debug!("Processing exit terminal event '{:?}'...", key);
            false
        }
        Some(action) => {
            state.handle_action(action);
            true
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Mode;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Input(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        })
    }

    fn press(state: &mut State, c: char) -> bool {
        handle_event(key(KeyCode::Char(c), KeyModifiers::empty()), state)
    }

    #[test]
    fn test_quit_and_ctrl_c() {
        let mut state = State::default();
        assert!(handle_event(Event::Tick, &mut state));
        assert!(!press(&mut state, 'q'));
        assert!(!handle_event(
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state
        ));
    }

    #[test]
    fn test_keys_drive_navigator() {
        let mut state = State::default();
        assert!(press(&mut state, 'l'));
        assert!(handle_event(key(KeyCode::Right, KeyModifiers::empty()), &mut state));
        assert_eq!(state.cursor(), 2);
        assert!(handle_event(key(KeyCode::Enter, KeyModifiers::empty()), &mut state));
        assert_eq!(state.pages().active_page().unwrap().name(), "Other");
    }

    #[test]
    fn test_rename_mode_takes_raw_text() {
        let mut state = State::default();
        press(&mut state, 'l');
        press(&mut state, 'r');
        assert!(matches!(state.mode(), Mode::Rename { .. }));

        // 'q' is text here, not quit.
        assert!(press(&mut state, 'q'));
        assert!(handle_event(key(KeyCode::Enter, KeyModifiers::empty()), &mut state));
        assert_eq!(state.pages().get(1).unwrap().name(), "Detailsq");
    }

    #[test]
    fn test_quit_key_ignored_outside_navigator() {
        let mut state = State::default();
        press(&mut state, 'l');
        press(&mut state, '.');
        assert!(matches!(state.mode(), Mode::ContextMenu { .. }));
        assert!(press(&mut state, 'q'));
        assert!(handle_event(key(KeyCode::Esc, KeyModifiers::empty()), &mut state));
        assert_eq!(state.mode(), Mode::Navigate);
    }
}
