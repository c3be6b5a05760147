//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the navigator, including action
//! types, hotkey bindings, and default configurations per input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Navigator actions
    FocusNext,
    FocusPrev,
    Activate,
    AddAfter,
    AddAtEnd,
    OpenMenu,
    Rename,
    Duplicate,
    Delete,
    SetAsFirst,
    Grab,
    ScrollLeft,
    ScrollRight,
    CycleTheme,
    ToggleLog,
    Quit,

    // Drag mode actions
    DragNext,
    DragPrev,
    Drop,
    CancelDrag,

    // Context menu actions
    MenuNext,
    MenuPrev,
    MenuSelect,
    MenuClose,
}

/// Input modes that carry their own hotkey map.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyMode {
    Navigator,
    Drag,
    ContextMenu,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn char(c: char) -> Self {
        Hotkey::plain(KeyCode::Char(c))
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Delete => KeyCode::Delete,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Delete => KeyCodeSerde::Delete,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings for each input mode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeHotkeys {
    #[serde(default = "default_navigator_hotkeys")]
    pub navigator: HashMap<HotkeyAction, Hotkey>,
    #[serde(default = "default_drag_hotkeys")]
    pub drag: HashMap<HotkeyAction, Hotkey>,
    #[serde(default = "default_context_menu_hotkeys")]
    pub context_menu: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ModeHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl ModeHotkeys {
    /// Return the bindings active in `mode`.
    ///
    pub fn for_mode(&self, mode: HotkeyMode) -> &HashMap<HotkeyAction, Hotkey> {
        match mode {
            HotkeyMode::Navigator => &self.navigator,
            HotkeyMode::Drag => &self.drag,
            HotkeyMode::ContextMenu => &self.context_menu,
        }
    }
}

/// Returns default hotkey mappings for all modes.
///
pub fn default_hotkeys() -> ModeHotkeys {
    ModeHotkeys {
        navigator: default_navigator_hotkeys(),
        drag: default_drag_hotkeys(),
        context_menu: default_context_menu_hotkeys(),
    }
}

fn default_navigator_hotkeys() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::FocusNext, Hotkey::char('l')),
        (HotkeyAction::FocusPrev, Hotkey::char('h')),
        (HotkeyAction::Activate, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::AddAfter, Hotkey::char('a')),
        (HotkeyAction::AddAtEnd, Hotkey::char('A')),
        (HotkeyAction::OpenMenu, Hotkey::char('.')),
        (HotkeyAction::Rename, Hotkey::char('r')),
        (HotkeyAction::Duplicate, Hotkey::char('d')),
        (HotkeyAction::Delete, Hotkey::char('x')),
        (HotkeyAction::SetAsFirst, Hotkey::char('f')),
        (HotkeyAction::Grab, Hotkey::char('g')),
        (HotkeyAction::ScrollLeft, Hotkey::char('<')),
        (HotkeyAction::ScrollRight, Hotkey::char('>')),
        (HotkeyAction::CycleTheme, Hotkey::char('t')),
        (HotkeyAction::ToggleLog, Hotkey::char('L')),
        (HotkeyAction::Quit, Hotkey::char('q')),
    ])
}

fn default_drag_hotkeys() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::DragNext, Hotkey::char('l')),
        (HotkeyAction::DragPrev, Hotkey::char('h')),
        (HotkeyAction::Drop, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::CancelDrag, Hotkey::plain(KeyCode::Esc)),
    ])
}

fn default_context_menu_hotkeys() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::MenuNext, Hotkey::char('j')),
        (HotkeyAction::MenuPrev, Hotkey::char('k')),
        (HotkeyAction::MenuSelect, Hotkey::plain(KeyCode::Enter)),
        (HotkeyAction::MenuClose, Hotkey::plain(KeyCode::Esc)),
    ])
}

/// Checks if a KeyEvent matches a Hotkey. Shift is ignored for characters
/// since the character itself already carries the case.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    if event.code != hotkey.code {
        return false;
    }
    match event.code {
        KeyCode::Char(_) => {
            event.modifiers.difference(KeyModifiers::SHIFT)
                == hotkey.modifiers.difference(KeyModifiers::SHIFT)
        }
        _ => event.modifiers == hotkey.modifiers,
    }
}

/// Gets the action for a KeyEvent in a specific mode. Arrow keys act as
/// fixed aliases for the directional actions when nothing is bound to them.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    mode: HotkeyMode,
    hotkeys: &ModeHotkeys,
) -> Option<HotkeyAction> {
    let bound = hotkeys
        .for_mode(mode)
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action);
    if bound.is_some() || !event.modifiers.is_empty() {
        return bound;
    }
    match (mode, event.code) {
        (HotkeyMode::Navigator, KeyCode::Right) => Some(HotkeyAction::FocusNext),
        (HotkeyMode::Navigator, KeyCode::Left) => Some(HotkeyAction::FocusPrev),
        (HotkeyMode::Drag, KeyCode::Right) => Some(HotkeyAction::DragNext),
        (HotkeyMode::Drag, KeyCode::Left) => Some(HotkeyAction::DragPrev),
        (HotkeyMode::ContextMenu, KeyCode::Down) => Some(HotkeyAction::MenuNext),
        (HotkeyMode::ContextMenu, KeyCode::Up) => Some(HotkeyAction::MenuPrev),
        _ => None,
    }
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = hotkeys.get(action)?;
            let paired = (*paired_action).and_then(|paired| hotkeys.get(&paired));
            Some(match paired {
                Some(paired_hotkey) => format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                ),
                None => format!(" {}: {}", format_hotkey_display(hotkey), description),
            })
        })
        .collect();
    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
