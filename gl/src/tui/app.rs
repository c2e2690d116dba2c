//! Goal list application - event handling and state transitions
//!
//! The App struct owns the ScreenState and handles keyboard, mouse and paste
//! events. It does not do any rendering - that's delegated to the views
//! module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use goalstore::{GoalError, GoalId};
use tracing::{debug, info, trace};

use super::state::{ActionStyle, Dialog, DialogEffect, Focus, InteractionMode, ScreenState};
use crate::config::Config;

/// Goal list application
#[derive(Debug, Default)]
pub struct App {
    /// Screen state
    state: ScreenState,
}

impl App {
    /// Create a new application instance with default configuration
    pub fn new() -> Self {
        debug!("App::new: called");
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        debug!("App::from_config: called");
        Self {
            state: ScreenState::from_config(config),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &ScreenState {
        trace!("App::state: called");
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut ScreenState {
        trace!("App::state_mut: called");
        &mut self.state
    }

    // === Transitions ===

    /// Submit the draft as a new goal
    ///
    /// On success the draft is cleared. An empty draft opens the "Empty Goal"
    /// alert and leaves both the store and the draft untouched.
    pub fn add_goal(&mut self) -> Result<GoalId, GoalError> {
        debug!("App::add_goal: called");
        let state = &mut self.state;
        match state.goals.add(state.input.text()) {
            Ok(goal) => {
                let id = goal.id.clone();
                info!(id = %id.short(), count = state.goals.len(), "App::add_goal: goal added");
                state.input.reset();
                state.set_status("Goal added");
                Ok(id)
            }
            Err(e) => {
                info!(%e, "App::add_goal: rejected");
                state.mode = InteractionMode::Alert(Dialog::empty_goal());
                Err(e)
            }
        }
    }

    /// Open the removal confirmation for `id`
    ///
    /// The store is not touched until the user chooses "Delete".
    pub fn request_removal(&mut self, id: GoalId) {
        debug!(id = %id.short(), "App::request_removal: called");
        if !self.state.goals.contains(&id) {
            debug!("App::request_removal: id not in store, confirming will be a no-op");
        }
        self.state.press(id.clone());
        self.state.mode = InteractionMode::ConfirmingDeletion(Dialog::delete_goal(id));
    }

    /// Choose the dialog action at `index` and apply its effect
    pub fn choose_dialog_action(&mut self, index: usize) {
        debug!(index, "App::choose_dialog_action: called");
        let Some(effect) = self
            .state
            .mode
            .dialog()
            .and_then(|d| d.actions.get(index))
            .map(|a| a.effect.clone())
        else {
            debug!("App::choose_dialog_action: no such action");
            return;
        };
        self.state.mode = InteractionMode::Idle;
        self.apply_effect(effect);
    }

    /// Close the open dialog through its cancel path
    pub fn cancel_dialog(&mut self) {
        debug!("App::cancel_dialog: called");
        let Some(effect) = self.state.mode.dialog().map(Dialog::cancel_effect) else {
            return;
        };
        self.state.mode = InteractionMode::Idle;
        self.apply_effect(effect);
    }

    /// Remove the goal with `id` from the store
    pub fn remove_goal(&mut self, id: &GoalId) {
        debug!(id = %id.short(), "App::remove_goal: called");
        let index = self.state.goals.position(id);
        match (index, self.state.goals.remove(id)) {
            (Some(index), Some(goal)) => {
                info!(id = %id.short(), count = self.state.goals.len(), "App::remove_goal: goal removed");
                self.state.reselect_after_removal(id, index);
                if self.state.goals.is_empty() {
                    self.state.focus = Focus::Input;
                }
                self.state.set_status(format!("Removed \"{}\"", goal.text.trim()));
            }
            _ => {
                debug!("App::remove_goal: goal already gone, no-op");
            }
        }
    }

    fn apply_effect(&mut self, effect: DialogEffect) {
        debug!(?effect, "App::apply_effect: called");
        match effect {
            DialogEffect::Dismiss => {}
            DialogEffect::RemoveGoal(id) => self.remove_goal(&id),
        }
    }

    /// Advance time-based state
    pub fn tick(&mut self) {
        self.state.tick();
    }

    // === Keyboard ===

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_key: called");
        self.state.clear_status();

        if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            debug!("App::handle_key: force quit");
            self.state.should_quit = true;
            return true;
        }

        match &self.state.mode {
            InteractionMode::Idle => match self.state.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::List => self.handle_list_key(key),
            },
            InteractionMode::ConfirmingDeletion(_) => self.handle_confirm_key(key),
            InteractionMode::Alert(_) => self.handle_alert_key(key),
            InteractionMode::Help => self.handle_help_key(key),
        }

        self.state.should_quit
    }

    /// Keys shared by both focus targets
    fn handle_common_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::F(1) => {
                debug!("App::handle_common_key: showing help");
                self.state.mode = InteractionMode::Help;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.state.focus = self.state.focus.toggle();
                if self.state.focus == Focus::List && self.state.selected_index().is_none() {
                    self.state.select_first();
                }
                debug!(focus = ?self.state.focus, "App::handle_common_key: focus toggled");
            }
            KeyCode::Up => self.state.select_prev(),
            KeyCode::Down => self.state.select_next(),
            KeyCode::PageUp => self.state.select_first(),
            KeyCode::PageDown => self.state.select_last(),
            _ => return false,
        }
        true
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        trace!(?key, "App::handle_input_key: called");
        if self.handle_common_key(key) {
            return;
        }
        if key.code == KeyCode::Enter {
            // Rejection is surfaced through the alert
            let _ = self.add_goal();
            return;
        }
        let input = &mut self.state.input;
        match key.code {
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            KeyCode::Char(c) if is_text_entry(key.modifiers) => input.insert_char(c),
            _ => {
                debug!("App::handle_input_key: unhandled key");
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        trace!(?key, "App::handle_list_key: called");
        if self.handle_common_key(key) {
            return;
        }
        match key.code {
            KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Char('k') => self.state.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => self.state.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.state.select_last(),
            KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('x') => {
                if let Some(id) = self.state.selected.clone() {
                    self.request_removal(id);
                } else {
                    debug!("App::handle_list_key: nothing selected");
                }
            }
            KeyCode::Esc | KeyCode::Char('i') => {
                self.state.focus = Focus::Input;
            }
            _ => {
                debug!("App::handle_list_key: unhandled key");
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        debug!(?key, "App::handle_confirm_key: called");
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => self.cancel_dialog(),
            KeyCode::Enter => {
                if let Some(dialog) = self.state.mode.dialog() {
                    let index = dialog.selected;
                    self.choose_dialog_action(index);
                }
            }
            KeyCode::Left | KeyCode::BackTab => {
                if let Some(dialog) = self.state.mode.dialog_mut() {
                    dialog.select_prev();
                }
            }
            KeyCode::Right | KeyCode::Tab => {
                if let Some(dialog) = self.state.mode.dialog_mut() {
                    dialog.select_next();
                }
            }
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('d') => {
                if let Some(dialog) = self.state.mode.dialog_mut() {
                    dialog.select_style(ActionStyle::Destructive);
                }
            }
            _ => {
                debug!("App::handle_confirm_key: unhandled key");
            }
        }
    }

    fn handle_alert_key(&mut self, key: KeyEvent) {
        debug!(?key, "App::handle_alert_key: called");
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(dialog) = self.state.mode.dialog() {
                    let index = dialog.selected;
                    self.choose_dialog_action(index);
                }
            }
            KeyCode::Esc => self.cancel_dialog(),
            _ => {
                debug!("App::handle_alert_key: blocked while alert open");
            }
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        debug!(?key, "App::handle_help_key: called");
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter) {
            self.state.mode = InteractionMode::Idle;
        }
    }

    // === Mouse and paste ===

    /// Handle a mouse event using the hit map from the last render
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        debug!(?mouse, "App::handle_mouse: called");
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(x, y),
            MouseEventKind::ScrollUp if self.state.mode == InteractionMode::Idle => self.state.select_prev(),
            MouseEventKind::ScrollDown if self.state.mode == InteractionMode::Idle => self.state.select_next(),
            _ => {
                trace!("App::handle_mouse: not handled");
            }
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) {
        match &self.state.mode {
            InteractionMode::ConfirmingDeletion(_) | InteractionMode::Alert(_) => {
                if let Some(index) = self.state.hit_map.dialog_button_at(x, y) {
                    debug!(index, "App::handle_click: dialog button");
                    self.choose_dialog_action(index);
                }
            }
            InteractionMode::Help => {
                self.state.mode = InteractionMode::Idle;
            }
            InteractionMode::Idle => {
                let hit_map = &self.state.hit_map;
                let on_add = hit_map.add_button.contains((x, y).into());
                let on_input = hit_map.input.contains((x, y).into());
                let row = hit_map.goal_index_at(x, y, self.state.goals.len());

                if on_add {
                    debug!("App::handle_click: add button");
                    let _ = self.add_goal();
                } else if on_input {
                    self.state.focus = Focus::Input;
                } else if let Some(index) = row {
                    let id = self.state.goals.as_slice()[index].id.clone();
                    debug!(index, id = %id.short(), "App::handle_click: goal row tapped");
                    self.state.selected = Some(id.clone());
                    self.request_removal(id);
                }
            }
        }
    }

    /// Handle pasted text
    pub fn handle_paste(&mut self, text: &str) {
        debug!(len = text.len(), "App::handle_paste: called");
        if self.state.mode != InteractionMode::Idle {
            return;
        }
        // Newlines would submit in a single-line field
        let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.state.focus = Focus::Input;
        self.state.input.insert_str(&line);
    }
}

/// Plain or shifted keys type text; AltGr arrives as Ctrl+Alt
fn is_text_entry(modifiers: KeyModifiers) -> bool {
    let chord = modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT);
    chord.is_empty() || chord == KeyModifiers::CONTROL | KeyModifiers::ALT
}
