//! Screen controller composing the search engine and the two time endpoints.
//!
//! The engines never see each other. The controller owns both, routes each
//! [`ScreenAction`] to the right one, keeps the small amount of navigation state
//! (focus, highlighted rows, active tab) and produces [`ScreenSnapshot`]s.

use crate::model::{Candidate, Clock, ClockMode, ScreenAction, SystemClock, TimeValue};
use crate::state::search::{EngineSettings, LoadStatus, SearchFilterEngine};
use crate::state::snapshot::{
    Endpoint, Focus, HistoryTab, PickerView, ScreenSnapshot, TimeFieldView,
};
use crate::state::time_model::TimeValueModel;
use crate::state::wheel::DEFAULT_ROW_HEIGHT;
use tracing::{debug, info};

/// What the surrounding event loop must do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffect {
    None,
    /// Start a new candidate load.
    Reload,
    /// Leave the screen.
    Quit,
}

/// Construction parameters for [`ScreenController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSettings {
    pub mode: ClockMode,
    pub default_start: Option<TimeValue>,
    pub default_end: Option<TimeValue>,
    pub row_height: u32,
    pub engine: EngineSettings,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            mode: ClockMode::TwelveHour,
            default_start: TimeValue::new(8, 0).ok(),
            default_end: TimeValue::new(17, 0).ok(),
            row_height: DEFAULT_ROW_HEIGHT,
            engine: EngineSettings::default(),
        }
    }
}

type SubmitAction = Box<dyn FnMut() + Send>;

pub struct ScreenController {
    search: SearchFilterEngine,
    start: TimeValueModel,
    end: TimeValueModel,
    tab: HistoryTab,
    focus: Focus,
    dropdown_cursor: usize,
    history_cursor: usize,
    clock: Box<dyn Clock>,
    on_submit: SubmitAction,
}

impl ScreenController {
    pub fn new(settings: ScreenSettings) -> Self {
        Self {
            search: SearchFilterEngine::with_settings(settings.engine),
            start: TimeValueModel::with_row_height(
                settings.default_start,
                settings.mode,
                settings.row_height,
            ),
            end: TimeValueModel::with_row_height(
                settings.default_end,
                settings.mode,
                settings.row_height,
            ),
            tab: HistoryTab::default(),
            focus: Focus::default(),
            dropdown_cursor: 0,
            history_cursor: 0,
            clock: Box::new(SystemClock),
            on_submit: Box::new(|| info!("Submit button pressed")),
        }
    }

    /// Replace the wall clock used for "now".
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the submit action.
    pub fn with_submit(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.on_submit = Box::new(action);
        self
    }

    // ===== Accessors =====

    pub fn search(&self) -> &SearchFilterEngine {
        &self.search
    }

    /// Mutable engine access, used by the event loop to apply load outcomes.
    pub fn search_mut(&mut self) -> &mut SearchFilterEngine {
        &mut self.search
    }

    pub fn time(&self, endpoint: Endpoint) -> &TimeValueModel {
        match endpoint {
            Endpoint::Start => &self.start,
            Endpoint::End => &self.end,
        }
    }

    fn time_mut(&mut self, endpoint: Endpoint) -> &mut TimeValueModel {
        match endpoint {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        }
    }

    pub fn tab(&self) -> HistoryTab {
        self.tab
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Endpoint whose picker is open, if any. At most one is open at a time.
    pub fn editing_endpoint(&self) -> Option<Endpoint> {
        [Endpoint::Start, Endpoint::End]
            .into_iter()
            .find(|&endpoint| self.time(endpoint).is_editing())
    }

    /// Loading and failed states block the interactive view.
    pub fn is_blocked(&self) -> bool {
        matches!(
            self.search.status(),
            LoadStatus::Loading(_) | LoadStatus::Failed(_)
        )
    }

    // ===== Commands =====

    /// Open the picker for `endpoint`, closing any other open picker.
    pub fn open_picker(&mut self, endpoint: Endpoint) {
        if let Some(open) = self.editing_endpoint().filter(|&open| open != endpoint) {
            self.time_mut(open).cancel();
        }
        let clock = &*self.clock;
        match endpoint {
            Endpoint::Start => self.start.open(clock),
            Endpoint::End => self.end.open(clock),
        }
        self.focus = match endpoint {
            Endpoint::Start => Focus::StartTime,
            Endpoint::End => Focus::EndTime,
        };
    }

    pub fn switch_tab(&mut self, tab: HistoryTab) {
        self.tab = tab;
        self.history_cursor = 0;
    }

    /// Invoke the submit action.
    pub fn submit(&mut self) {
        debug!(
            query = self.search.query(),
            start = ?self.start.value(),
            end = ?self.end.value(),
            "submit"
        );
        (self.on_submit)();
    }

    /// Route one user intent.
    pub fn apply(&mut self, action: ScreenAction) -> ScreenEffect {
        if self.is_blocked() && !action.allowed_while_blocked() {
            debug!(?action, "ignored while candidates unavailable");
            return ScreenEffect::None;
        }

        if let Some(endpoint) = self.editing_endpoint() {
            return self.apply_picker(endpoint, action);
        }

        match action {
            ScreenAction::InsertChar(ch) => {
                let mut query = self.search.query().to_string();
                query.push(ch);
                self.set_query(query);
            }
            ScreenAction::DeleteChar => {
                let mut query = self.search.query().to_string();
                query.pop();
                self.set_query(query);
            }
            ScreenAction::ClearQuery => self.set_query(String::new()),
            ScreenAction::CursorUp => self.move_cursor(-1),
            ScreenAction::CursorDown => self.move_cursor(1),
            ScreenAction::Activate => self.activate(),
            ScreenAction::ToggleFavorite => {
                if let Some(candidate) = self.highlighted() {
                    self.search.toggle_favorite(&candidate);
                    self.clamp_history_cursor();
                }
            }
            ScreenAction::RemoveHighlighted => self.remove_highlighted(),
            ScreenAction::CycleFocus => self.focus = self.focus.next(),
            ScreenAction::ShowRecent => self.switch_tab(HistoryTab::Recent),
            ScreenAction::ShowFavorites => self.switch_tab(HistoryTab::Favorites),
            ScreenAction::SwitchTab => self.switch_tab(self.tab.toggled()),
            ScreenAction::OpenStartPicker => self.open_picker(Endpoint::Start),
            ScreenAction::OpenEndPicker => self.open_picker(Endpoint::End),
            ScreenAction::Reload => {
                if matches!(self.search.status(), LoadStatus::Failed(_)) {
                    return ScreenEffect::Reload;
                }
            }
            ScreenAction::Submit => self.submit(),
            ScreenAction::Quit => return ScreenEffect::Quit,
            ScreenAction::WheelUp
            | ScreenAction::WheelDown
            | ScreenAction::WheelNextColumn
            | ScreenAction::WheelPrevColumn
            | ScreenAction::WheelSetAm
            | ScreenAction::WheelSetPm
            | ScreenAction::WheelNow
            | ScreenAction::WheelConfirm
            | ScreenAction::WheelCancel => {}
        }
        ScreenEffect::None
    }

    fn apply_picker(&mut self, endpoint: Endpoint, action: ScreenAction) -> ScreenEffect {
        match action {
            ScreenAction::Submit => {
                self.submit();
                return ScreenEffect::None;
            }
            ScreenAction::Quit => return ScreenEffect::Quit,
            _ => {}
        }

        let clock = &*self.clock;
        let model = match endpoint {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        };
        match action {
            ScreenAction::WheelUp => model.step(1),
            ScreenAction::WheelDown => model.step(-1),
            ScreenAction::WheelNextColumn => model.cycle_column(true),
            ScreenAction::WheelPrevColumn => model.cycle_column(false),
            ScreenAction::WheelSetAm => model.set_am(true),
            ScreenAction::WheelSetPm => model.set_am(false),
            ScreenAction::WheelNow => model.set_now(clock),
            ScreenAction::WheelConfirm => {
                model.confirm();
            }
            ScreenAction::WheelCancel => model.cancel(),
            // The modal captures everything else.
            _ => {}
        }
        ScreenEffect::None
    }

    fn set_query(&mut self, query: String) {
        self.focus = Focus::Search;
        self.search.set_query(query);
        self.dropdown_cursor = 0;
    }

    fn history_len(&self) -> usize {
        match self.tab {
            HistoryTab::Recent => self.search.recent().len(),
            HistoryTab::Favorites => self.search.favorites().len(),
        }
    }

    fn history_item(&self, index: usize) -> Option<Candidate> {
        let items = match self.tab {
            HistoryTab::Recent => self.search.recent().as_slice(),
            HistoryTab::Favorites => self.search.favorites().as_slice(),
        };
        items.get(index).cloned()
    }

    /// Entry under the highlight in the focused list.
    fn highlighted(&self) -> Option<Candidate> {
        match self.focus {
            Focus::Search if self.search.dropdown_visible() => {
                self.search.filtered().get(self.dropdown_cursor).cloned()
            }
            Focus::History => self.history_item(self.history_cursor),
            _ => None,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.focus {
            Focus::Search if self.search.dropdown_visible() => {
                (&mut self.dropdown_cursor, self.search.filtered().len())
            }
            Focus::History => {
                let len = self.history_len();
                (&mut self.history_cursor, len)
            }
            _ => return,
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn clamp_history_cursor(&mut self) {
        self.history_cursor = self.history_cursor.min(self.history_len().saturating_sub(1));
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Search | Focus::History => {
                if let Some(candidate) = self.highlighted() {
                    self.search.select(&candidate);
                    self.dropdown_cursor = 0;
                }
            }
            Focus::StartTime => self.open_picker(Endpoint::Start),
            Focus::EndTime => self.open_picker(Endpoint::End),
        }
    }

    fn remove_highlighted(&mut self) {
        if self.focus != Focus::History {
            return;
        }
        let Some(candidate) = self.history_item(self.history_cursor) else {
            return;
        };
        match self.tab {
            HistoryTab::Recent => self.search.remove_recent(&candidate),
            HistoryTab::Favorites => self.search.remove_favorite(&candidate),
        }
        self.clamp_history_cursor();
    }

    // ===== Snapshot =====

    fn field_view(&self, endpoint: Endpoint) -> TimeFieldView {
        let focused = matches!(
            (endpoint, self.focus),
            (Endpoint::Start, Focus::StartTime) | (Endpoint::End, Focus::EndTime)
        );
        TimeFieldView {
            endpoint,
            display: self.time(endpoint).display(),
            focused,
        }
    }

    fn picker_view(&self) -> Option<PickerView> {
        let endpoint = self.editing_endpoint()?;
        let model = self.time(endpoint);
        Some(PickerView {
            endpoint,
            mode: model.mode(),
            wheel: model.wheel()?,
            column: model.active_column()?,
            hour_offset: model.hour_offset()?,
            minute_offset: model.minute_offset()?,
            row_height: model.row_height(),
        })
    }

    /// Immutable view of the whole screen.
    pub fn snapshot(&self) -> ScreenSnapshot {
        let filtered = self.search.filtered().to_vec();
        let filtered_favorite = filtered
            .iter()
            .map(|candidate| self.search.is_favorite(candidate))
            .collect();
        ScreenSnapshot {
            status: self.search.status().clone(),
            query: self.search.query().to_string(),
            dropdown_visible: self.search.dropdown_visible(),
            filtered,
            filtered_favorite,
            dropdown_cursor: self.dropdown_cursor,
            recent: self.search.recent().as_slice().to_vec(),
            favorites: self.search.favorites().as_slice().to_vec(),
            tab: self.tab,
            history_cursor: self.history_cursor,
            focus: self.focus,
            start: self.field_view(Endpoint::Start),
            end: self.field_view(Endpoint::End),
            picker: self.picker_view(),
        }
    }
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
