use crate::config::{Config, HotkeyAction, HotkeyMode, ModeHotkeys};
use crate::pages::{Command, Page, PageCollection, PageId};
use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::*;
use tui_textarea::TextArea;

use super::form::{rename_input, validate_rename};
use super::navigation::{HitArea, MenuItem, Mode, StripTarget};
use super::StateError;

/// Houses the page collection and everything the navigator needs around it:
/// the keyboard cursor, the input mode, tab strip scrolling and the regions
/// recorded by the last draw for mouse input.
///
pub struct State {
    pages: PageCollection,
    cursor: usize,
    mode: Mode,
    rename_input: TextArea<'static>,
    scroll_offset: usize,
    scroll_step: usize,
    reveal_cursor: bool,
    hit_areas: Vec<HitArea>,
    pressed: Option<StripTarget>,
    theme: Theme,
    hotkeys: ModeHotkeys,
    show_log: bool,
}

impl Default for State {
    fn default() -> State {
        State {
            pages: PageCollection::seed(),
            cursor: 0,
            mode: Mode::Navigate,
            rename_input: TextArea::default(),
            scroll_offset: 0,
            scroll_step: 1,
            reveal_cursor: true,
            hit_areas: vec![],
            pressed: None,
            theme: Theme::default(),
            hotkeys: ModeHotkeys::default(),
            show_log: false,
        }
    }
}

impl State {
    /// Return the initial state for the given configuration.
    ///
    pub fn new(config: &Config) -> State {
        let theme = match Theme::resolve(&config.theme_name) {
            Ok(theme) => theme,
            Err(e) => {
                warn!("{}; falling back to '{}'", e, Theme::default().name);
                Theme::default()
            }
        };
        State {
            theme,
            hotkeys: config.hotkeys.clone(),
            scroll_step: config.scroll_step.max(1),
            show_log: config.show_log,
            ..State::default()
        }
    }

    pub fn pages(&self) -> &PageCollection {
        &self.pages
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_page(&self) -> Option<&Page> {
        self.pages.get(self.cursor)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Return the hotkey map that applies to the current mode, if any. The
    /// rename dialog takes raw text input instead.
    ///
    pub fn hotkey_mode(&self) -> Option<HotkeyMode> {
        match self.mode {
            Mode::Navigate => Some(HotkeyMode::Navigator),
            Mode::Drag { .. } => Some(HotkeyMode::Drag),
            Mode::ContextMenu { .. } => Some(HotkeyMode::ContextMenu),
            Mode::Rename { .. } => None,
        }
    }

    pub fn hotkeys(&self) -> &ModeHotkeys {
        &self.hotkeys
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn show_log(&self) -> bool {
        self.show_log
    }

    pub fn rename_input(&self) -> &TextArea<'static> {
        &self.rename_input
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Store the scroll offset chosen while drawing the strip.
    ///
    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.pages.len().saturating_sub(1));
    }

    /// Return whether the cursor moved since the last draw, clearing the flag.
    ///
    pub fn take_reveal_cursor(&mut self) -> bool {
        std::mem::replace(&mut self.reveal_cursor, false)
    }

    pub fn hit_areas(&self) -> &[HitArea] {
        &self.hit_areas
    }

    pub fn set_hit_areas(&mut self, hit_areas: Vec<HitArea>) {
        self.hit_areas = hit_areas;
    }

    /// Entries of the open context menu together with the selected index.
    ///
    pub fn context_menu(&self) -> Option<(&Page, &'static [MenuItem], usize)> {
        match self.mode {
            Mode::ContextMenu { page_id, selected } => {
                let page = self.pages.find(page_id)?;
                Some((page, MenuItem::for_page(page.is_fixed()), selected))
            }
            _ => None,
        }
    }

    /// Apply a command to the page collection and keep the cursor on a
    /// sensible tab afterwards.
    ///
    pub fn dispatch(&mut self, command: Command) {
        let cursor_id = self.cursor_page().map(|p| p.id());
        let follows_active = match &command {
            Command::SetActive(_) | Command::AddPage { .. } | Command::Duplicate(_) => true,
            Command::Delete(id) => Some(*id) == cursor_id,
            _ => false,
        };
        debug!("Dispatching {:?}", command);
        self.pages = self.pages.apply(command);

        let target = if follows_active {
            self.pages.index_of(self.pages.active_page_id())
        } else {
            cursor_id.and_then(|id| self.pages.index_of(id))
        };
        self.move_cursor_to(target.unwrap_or(self.cursor));
    }

    /// Single entry point for drag-and-drop, whichever gesture produced it.
    ///
    pub fn reorder_requested(&mut self, from: usize, to: usize) {
        let moved = self.pages.get(from).map(|p| p.id());
        self.dispatch(Command::Reorder { from, to });
        if let Some(index) = moved.and_then(|id| self.pages.index_of(id)) {
            self.move_cursor_to(index);
        }
    }

    /// Run a hotkey action in the current mode. Quitting is left to the caller.
    ///
    pub fn handle_action(&mut self, action: HotkeyAction) {
        match self.mode {
            Mode::Navigate => self.handle_navigator_action(action),
            Mode::Drag { from, to } => self.handle_drag_action(action, from, to),
            Mode::ContextMenu { page_id, selected } => {
                self.handle_menu_action(action, page_id, selected)
            }
            Mode::Rename { .. } => {}
        }
    }

    fn handle_navigator_action(&mut self, action: HotkeyAction) {
        let Some(page_id) = self.cursor_page().map(|p| p.id()) else {
            return;
        };
        match action {
            HotkeyAction::FocusNext => self.move_cursor_to(self.cursor + 1),
            HotkeyAction::FocusPrev => self.move_cursor_to(self.cursor.saturating_sub(1)),
            HotkeyAction::Activate => self.dispatch(Command::SetActive(page_id)),
            HotkeyAction::AddAfter => self.dispatch(Command::AddPage {
                after_index: self.cursor,
            }),
            HotkeyAction::AddAtEnd => self.dispatch(Command::AddPage {
                after_index: self.pages.len() - 1,
            }),
            HotkeyAction::OpenMenu => self.open_context_menu(page_id),
            HotkeyAction::Rename => self.open_rename(page_id),
            HotkeyAction::Duplicate => self.dispatch(Command::Duplicate(page_id)),
            HotkeyAction::Delete => self.dispatch(Command::Delete(page_id)),
            HotkeyAction::SetAsFirst => self.dispatch(Command::SetAsFirst(page_id)),
            HotkeyAction::Grab => {
                if let Err(e) = self.start_drag(self.cursor) {
                    warn!("{}", e);
                }
            }
            HotkeyAction::ScrollLeft => self.scroll_left(),
            HotkeyAction::ScrollRight => self.scroll_right(),
            HotkeyAction::CycleTheme => {
                self.theme = self.theme.next();
                info!("Switched to theme '{}'", self.theme.name);
            }
            HotkeyAction::ToggleLog => self.show_log = !self.show_log,
            _ => {}
        }
    }

    fn handle_drag_action(&mut self, action: HotkeyAction, from: usize, to: usize) {
        // Drop targets exclude both fixed positions.
        let last_target = self.pages.len().saturating_sub(2).max(1);
        match action {
            HotkeyAction::DragNext => {
                self.mode = Mode::Drag {
                    from,
                    to: (to + 1).min(last_target),
                };
            }
            HotkeyAction::DragPrev => {
                self.mode = Mode::Drag {
                    from,
                    to: to.saturating_sub(1).max(1),
                };
            }
            HotkeyAction::Drop => {
                self.mode = Mode::Navigate;
                self.reorder_requested(from, to);
            }
            HotkeyAction::CancelDrag => {
                debug!("Drag of tab {} cancelled", from);
                self.mode = Mode::Navigate;
            }
            _ => {}
        }
    }

    fn handle_menu_action(&mut self, action: HotkeyAction, page_id: PageId, selected: usize) {
        let Some(page) = self.pages.find(page_id) else {
            warn!("{}", StateError::PageNotFound(page_id));
            self.mode = Mode::Navigate;
            return;
        };
        let items = MenuItem::for_page(page.is_fixed());
        if items.is_empty() {
            self.mode = Mode::Navigate;
            return;
        }
        match action {
            HotkeyAction::MenuNext => {
                self.mode = Mode::ContextMenu {
                    page_id,
                    selected: (selected + 1) % items.len(),
                };
            }
            HotkeyAction::MenuPrev => {
                self.mode = Mode::ContextMenu {
                    page_id,
                    selected: (selected + items.len() - 1) % items.len(),
                };
            }
            HotkeyAction::MenuSelect => {
                self.mode = Mode::Navigate;
                if let Some(item) = items.get(selected) {
                    self.run_menu_item(*item, page_id);
                }
            }
            HotkeyAction::MenuClose => self.mode = Mode::Navigate,
            _ => {}
        }
    }

    fn run_menu_item(&mut self, item: MenuItem, page_id: PageId) {
        match item {
            MenuItem::SetAsFirst => self.dispatch(Command::SetAsFirst(page_id)),
            MenuItem::Rename => self.open_rename(page_id),
            MenuItem::Duplicate => self.dispatch(Command::Duplicate(page_id)),
            MenuItem::Delete => self.dispatch(Command::Delete(page_id)),
        }
    }

    fn open_context_menu(&mut self, page_id: PageId) {
        match self.pages.find(page_id) {
            Some(page) if page.is_fixed() => {
                debug!("{}", StateError::FixedPage(page.name().to_string()))
            }
            Some(_) => {
                self.mode = Mode::ContextMenu {
                    page_id,
                    selected: 0,
                }
            }
            None => warn!("{}", StateError::PageNotFound(page_id)),
        }
    }

    fn open_rename(&mut self, page_id: PageId) {
        match self.pages.find(page_id) {
            Some(page) if page.is_fixed() => {
                debug!("{}", StateError::FixedPage(page.name().to_string()))
            }
            Some(page) => {
                self.rename_input = rename_input(page.name());
                self.mode = Mode::Rename { page_id };
            }
            None => warn!("{}", StateError::PageNotFound(page_id)),
        }
    }

    /// Feed a key to the rename dialog. Enter submits, Esc cancels and
    /// everything else edits the text.
    ///
    pub fn handle_rename_key(&mut self, key: KeyEvent) {
        let Mode::Rename { page_id } = self.mode else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                self.mode = Mode::Navigate;
                if let Err(e) = self.submit_rename(page_id) {
                    debug!("Rename not applied: {}", e);
                }
            }
            KeyCode::Esc => self.mode = Mode::Navigate,
            _ => {
                self.rename_input.input(key);
            }
        }
    }

    fn submit_rename(&mut self, page_id: PageId) -> Result<(), StateError> {
        let current = self
            .pages
            .find(page_id)
            .ok_or(StateError::PageNotFound(page_id))?
            .name()
            .to_string();
        let typed = self.rename_input.lines().join(" ");
        let name = validate_rename(&current, &typed)?;
        self.dispatch(Command::Rename { id: page_id, name });
        Ok(())
    }

    /// Enter drag mode for the tab at `index`. Fixed tabs cannot be grabbed.
    ///
    pub fn start_drag(&mut self, index: usize) -> Result<(), StateError> {
        let page = self
            .pages
            .get(index)
            .ok_or(StateError::NoPageAt(index))?;
        if page.is_fixed() {
            return Err(StateError::FixedPage(page.name().to_string()));
        }
        self.mode = Mode::Drag {
            from: index,
            to: index,
        };
        Ok(())
    }

    /// Handle a mouse event against the regions of the last draw. Pressing
    /// and releasing on the same tab selects it; releasing on another tab
    /// drops the pressed one there.
    ///
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.mode != Mode::Navigate {
            return;
        }
        let target = self.target_at(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(StripTarget::Tab(index)) => {
                    self.pressed = Some(StripTarget::Tab(index));
                    self.move_cursor_to(index);
                }
                Some(other) => self.click(other),
                None => {}
            },
            MouseEventKind::Up(MouseButton::Left) => {
                if let (Some(StripTarget::Tab(from)), Some(StripTarget::Tab(to))) =
                    (self.pressed.take(), target)
                {
                    if from == to {
                        if let Some(id) = self.pages.get(from).map(|p| p.id()) {
                            self.dispatch(Command::SetActive(id));
                        }
                    } else {
                        self.reorder_requested(from, to);
                    }
                }
            }
            MouseEventKind::ScrollUp => self.scroll_left(),
            MouseEventKind::ScrollDown => self.scroll_right(),
            _ => {}
        }
    }

    fn target_at(&self, column: u16, row: u16) -> Option<StripTarget> {
        self.hit_areas
            .iter()
            .find(|hit| hit.contains(column, row))
            .map(|hit| hit.target)
    }

    fn click(&mut self, target: StripTarget) {
        match target {
            StripTarget::AddAfter(index) => self.dispatch(Command::AddPage { after_index: index }),
            StripTarget::AddAtEnd => self.dispatch(Command::AddPage {
                after_index: self.pages.len() - 1,
            }),
            StripTarget::ScrollLeft => self.scroll_left(),
            StripTarget::ScrollRight => self.scroll_right(),
            StripTarget::Tab(index) => self.move_cursor_to(index),
        }
    }

    fn move_cursor_to(&mut self, index: usize) {
        self.cursor = index.min(self.pages.len().saturating_sub(1));
        self.reveal_cursor = true;
    }

    fn scroll_left(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(self.scroll_step);
    }

    fn scroll_right(&mut self) {
        self.set_scroll_offset(self.scroll_offset + self.scroll_step);
    }
}
