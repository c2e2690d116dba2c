//! Goal list screen state
//!
//! Pure data structures for the screen. No rendering logic and no key
//! handling here; see `app` and `views`.

use goalstore::{GoalId, GoalStore};
use ratatui::layout::Rect;
use tracing::debug;

use super::input::InputBinder;
use crate::config::Config;

/// Which part of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Goal text input (default)
    #[default]
    Input,
    /// Goal list navigation
    List,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Input => Self::List,
            Self::List => Self::Input,
        }
    }
}

/// Interaction mode (modal)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// No overlay open
    #[default]
    Idle,
    /// Waiting for the user to confirm or cancel a removal
    ConfirmingDeletion(Dialog),
    /// Blocking notification
    Alert(Dialog),
    /// Help overlay
    Help,
}

impl InteractionMode {
    /// The open dialog, if any
    pub fn dialog(&self) -> Option<&Dialog> {
        match self {
            Self::ConfirmingDeletion(d) | Self::Alert(d) => Some(d),
            _ => None,
        }
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        match self {
            Self::ConfirmingDeletion(d) | Self::Alert(d) => Some(d),
            _ => None,
        }
    }

    /// Id awaiting confirmation, if a removal is pending
    pub fn pending_removal(&self) -> Option<&GoalId> {
        match self {
            Self::ConfirmingDeletion(d) => d.pending_removal(),
            _ => None,
        }
    }
}

/// How a dialog button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Default,
    Cancel,
    Destructive,
}

/// What happens when a dialog action is chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEffect {
    /// Close the dialog only
    Dismiss,
    /// Close the dialog and remove the goal
    RemoveGoal(GoalId),
}

/// A labeled dialog button and its continuation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogAction {
    pub label: String,
    pub style: ActionStyle,
    pub effect: DialogEffect,
}

impl DialogAction {
    pub fn new(label: impl Into<String>, style: ActionStyle, effect: DialogEffect) -> Self {
        Self {
            label: label.into(),
            style,
            effect,
        }
    }
}

/// Modal dialog: title, message and labeled actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub actions: Vec<DialogAction>,
    /// Index into `actions` of the highlighted button
    pub selected: usize,
}

impl Dialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>, actions: Vec<DialogAction>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            actions,
            selected: 0,
        }
    }

    /// Confirmation before removing a goal; "Cancel" is highlighted
    pub fn delete_goal(id: GoalId) -> Self {
        Self::new(
            "Delete Goal",
            "Are you sure you want to remove this task?",
            vec![
                DialogAction::new("Cancel", ActionStyle::Cancel, DialogEffect::Dismiss),
                DialogAction::new("Delete", ActionStyle::Destructive, DialogEffect::RemoveGoal(id)),
            ],
        )
    }

    /// Notification for an empty submission
    pub fn empty_goal() -> Self {
        Self::new(
            "Empty Goal",
            "Please type something before adding.",
            vec![DialogAction::new("OK", ActionStyle::Default, DialogEffect::Dismiss)],
        )
    }

    pub fn pending_removal(&self) -> Option<&GoalId> {
        self.actions.iter().find_map(|a| match &a.effect {
            DialogEffect::RemoveGoal(id) => Some(id),
            DialogEffect::Dismiss => None,
        })
    }

    pub fn select_next(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + 1) % self.actions.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + self.actions.len() - 1) % self.actions.len();
        }
    }

    /// Highlight the first action with `style`, if there is one
    pub fn select_style(&mut self, style: ActionStyle) {
        if let Some(index) = self.actions.iter().position(|a| a.style == style) {
            self.selected = index;
        }
    }

    pub fn selected_action(&self) -> Option<&DialogAction> {
        self.actions.get(self.selected)
    }

    /// Effect used when the dialog is dismissed without a choice (Esc)
    pub fn cancel_effect(&self) -> DialogEffect {
        self.actions
            .iter()
            .find(|a| a.style == ActionStyle::Cancel)
            .map(|a| a.effect.clone())
            .unwrap_or(DialogEffect::Dismiss)
    }
}

/// Dimmed rendering of a row just tapped, keyed by goal id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressFeedback {
    pub id: GoalId,
    pub remaining_ticks: u8,
}

/// Screen rectangles recorded during the last render, for mouse routing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub input: Rect,
    pub add_button: Rect,
    /// Area holding goal rows, one terminal line per row
    pub list_body: Rect,
    /// Index of the goal drawn on the first line of `list_body`
    pub list_offset: usize,
    /// One rect per action of the open dialog
    pub dialog_buttons: Vec<Rect>,
}

impl HitMap {
    /// Index of the goal drawn at terminal row `y`, if any
    pub fn goal_index_at(&self, x: u16, y: u16, goal_count: usize) -> Option<usize> {
        if !self.list_body.contains((x, y).into()) {
            return None;
        }
        let index = self.list_offset + (y - self.list_body.y) as usize;
        (index < goal_count).then_some(index)
    }

    pub fn dialog_button_at(&self, x: u16, y: u16) -> Option<usize> {
        self.dialog_buttons.iter().position(|r| r.contains((x, y).into()))
    }
}

/// Goal list screen state
#[derive(Debug)]
pub struct ScreenState {
    /// Header text
    pub title: String,
    /// Placeholder shown while the draft is empty
    pub placeholder: String,
    /// Draft text
    pub input: InputBinder,
    /// Committed goals
    pub goals: GoalStore,
    /// Current interaction mode
    pub mode: InteractionMode,
    /// Which widget receives typed keys
    pub focus: Focus,
    /// Selected row, tracked by id so it follows the row
    pub selected: Option<GoalId>,
    /// Row being drawn with press feedback
    pub feedback: Option<PressFeedback>,
    /// How many ticks press feedback lasts
    pub feedback_ticks: u8,
    /// Transient footer message, cleared on the next key
    pub status_message: Option<String>,
    /// Should the app quit
    pub should_quit: bool,
    /// Layout cache written by the renderer
    pub hit_map: HitMap,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the screen: empty store, empty draft, `Idle`
    pub fn from_config(config: &Config) -> Self {
        debug!(?config.text_mode, "ScreenState::from_config: called");
        Self {
            title: config.title.clone(),
            placeholder: config.placeholder.clone(),
            input: InputBinder::new(),
            goals: GoalStore::with_text_mode(config.text_mode),
            mode: InteractionMode::Idle,
            focus: Focus::default(),
            selected: None,
            feedback: None,
            feedback_ticks: config.feedback_ticks,
            status_message: None,
            should_quit: false,
            hit_map: HitMap::default(),
        }
    }

    /// Position of the selected goal in the store
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().and_then(|id| self.goals.position(id))
    }

    fn select_index(&mut self, index: usize) {
        self.selected = self.goals.as_slice().get(index).map(|g| g.id.clone());
    }

    pub fn select_next(&mut self) {
        match self.selected_index() {
            Some(i) if i + 1 < self.goals.len() => self.select_index(i + 1),
            Some(_) => {}
            None => self.select_first(),
        }
    }

    pub fn select_prev(&mut self) {
        match self.selected_index() {
            Some(i) if i > 0 => self.select_index(i - 1),
            Some(_) => {}
            None => self.select_last(),
        }
    }

    pub fn select_first(&mut self) {
        self.select_index(0);
    }

    pub fn select_last(&mut self) {
        if !self.goals.is_empty() {
            self.select_index(self.goals.len() - 1);
        }
    }

    /// Repair the selection after the goal at `removed_index` went away
    ///
    /// Selection moves to the row now at the same position, else the new
    /// last row, else none.
    pub fn reselect_after_removal(&mut self, removed_id: &GoalId, removed_index: usize) {
        debug!(removed_index, "ScreenState::reselect_after_removal: called");
        if self.selected.as_ref() != Some(removed_id) {
            return;
        }
        if self.goals.is_empty() {
            self.selected = None;
        } else {
            self.select_index(removed_index.min(self.goals.len() - 1));
        }
    }

    /// Start press feedback on a row
    pub fn press(&mut self, id: GoalId) {
        if self.feedback_ticks == 0 {
            return;
        }
        self.feedback = Some(PressFeedback {
            id,
            remaining_ticks: self.feedback_ticks,
        });
    }

    /// Is `id` currently showing press feedback
    pub fn is_pressed(&self, id: &GoalId) -> bool {
        self.feedback.as_ref().is_some_and(|f| &f.id == id)
    }

    /// Advance time-based state by one tick
    pub fn tick(&mut self) {
        if let Some(feedback) = &mut self.feedback {
            feedback.remaining_ticks = feedback.remaining_ticks.saturating_sub(1);
            if feedback.remaining_ticks == 0 {
                self.feedback = None;
            }
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(texts: &[&str]) -> (ScreenState, Vec<GoalId>) {
        let mut state = ScreenState::new();
        let ids = texts
            .iter()
            .map(|t| state.goals.add(t).unwrap().id.clone())
            .collect();
        (state, ids)
    }

    #[test]
    fn test_mount_state() {
        let state = ScreenState::new();
        assert!(state.goals.is_empty());
        assert!(state.input.is_empty());
        assert_eq!(state.mode, InteractionMode::Idle);
        assert_eq!(state.focus, Focus::Input);
        assert_eq!(state.title, "My Daily Tasks");
    }

    #[test]
    fn test_delete_dialog_defaults_to_cancel() {
        let dialog = Dialog::delete_goal(GoalId::from("g1"));
        assert_eq!(dialog.title, "Delete Goal");
        assert_eq!(dialog.selected_action().unwrap().label, "Cancel");
        assert_eq!(dialog.pending_removal(), Some(&GoalId::from("g1")));
        assert_eq!(dialog.cancel_effect(), DialogEffect::Dismiss);
    }

    #[test]
    fn test_dialog_selection_wraps() {
        let mut dialog = Dialog::delete_goal(GoalId::from("g1"));
        dialog.select_next();
        assert_eq!(dialog.selected_action().unwrap().label, "Delete");
        dialog.select_next();
        assert_eq!(dialog.selected_action().unwrap().label, "Cancel");
        dialog.select_prev();
        assert_eq!(dialog.selected_action().unwrap().label, "Delete");

        dialog.select_style(ActionStyle::Cancel);
        assert_eq!(dialog.selected, 0);
    }

    #[test]
    fn test_empty_goal_alert() {
        let dialog = Dialog::empty_goal();
        assert_eq!(dialog.title, "Empty Goal");
        assert_eq!(dialog.actions.len(), 1);
        assert!(dialog.pending_removal().is_none());
    }

    #[test]
    fn test_selection_navigation() {
        let (mut state, ids) = state_with(&["A", "B", "C"]);
        assert_eq!(state.selected_index(), None);

        state.select_next();
        assert_eq!(state.selected, Some(ids[0].clone()));
        state.select_next();
        state.select_next();
        state.select_next(); // stays at end
        assert_eq!(state.selected_index(), Some(2));

        state.select_prev();
        assert_eq!(state.selected_index(), Some(1));
        state.select_first();
        state.select_prev(); // stays at start
        assert_eq!(state.selected_index(), Some(0));
        state.select_last();
        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn test_selection_follows_id() {
        let (mut state, ids) = state_with(&["A", "B", "C"]);
        state.selected = Some(ids[2].clone());

        state.goals.remove(&ids[0]);

        assert_eq!(state.selected, Some(ids[2].clone()));
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn test_reselect_after_removal() {
        let (mut state, ids) = state_with(&["A", "B", "C"]);
        state.selected = Some(ids[1].clone());
        state.goals.remove(&ids[1]);
        state.reselect_after_removal(&ids[1], 1);
        assert_eq!(state.selected, Some(ids[2].clone()));

        state.goals.remove(&ids[2]);
        state.reselect_after_removal(&ids[2], 1);
        assert_eq!(state.selected, Some(ids[0].clone()));

        state.goals.remove(&ids[0]);
        state.reselect_after_removal(&ids[0], 0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_reselect_ignores_other_rows() {
        let (mut state, ids) = state_with(&["A", "B"]);
        state.selected = Some(ids[0].clone());
        state.goals.remove(&ids[1]);
        state.reselect_after_removal(&ids[1], 1);
        assert_eq!(state.selected, Some(ids[0].clone()));
    }

    #[test]
    fn test_press_feedback_expires() {
        let (mut state, ids) = state_with(&["A"]);
        state.feedback_ticks = 2;
        state.press(ids[0].clone());
        assert!(state.is_pressed(&ids[0]));

        state.tick();
        assert!(state.is_pressed(&ids[0]));
        state.tick();
        assert!(!state.is_pressed(&ids[0]));
    }

    #[test]
    fn test_press_feedback_disabled() {
        let (mut state, ids) = state_with(&["A"]);
        state.feedback_ticks = 0;
        state.press(ids[0].clone());
        assert!(state.feedback.is_none());
    }

    #[test]
    fn test_hit_map_goal_index() {
        let hit_map = HitMap {
            list_body: Rect::new(2, 10, 20, 5),
            list_offset: 3,
            ..Default::default()
        };
        assert_eq!(hit_map.goal_index_at(5, 10, 10), Some(3));
        assert_eq!(hit_map.goal_index_at(5, 14, 10), Some(7));
        assert_eq!(hit_map.goal_index_at(5, 14, 6), None);
        assert_eq!(hit_map.goal_index_at(1, 10, 10), None);
        assert_eq!(hit_map.goal_index_at(5, 15, 10), None);
    }

    #[test]
    fn test_hit_map_dialog_buttons() {
        let hit_map = HitMap {
            dialog_buttons: vec![Rect::new(10, 5, 8, 1), Rect::new(22, 5, 8, 1)],
            ..Default::default()
        };
        assert_eq!(hit_map.dialog_button_at(12, 5), Some(0));
        assert_eq!(hit_map.dialog_button_at(29, 5), Some(1));
        assert_eq!(hit_map.dialog_button_at(19, 5), None);
    }
}
