//! Immutable views handed to the rendering layer.

use crate::model::{Candidate, ClockMode, WheelState};
use crate::state::search::LoadStatus;
use crate::state::time_model::PickerColumn;

/// Which history list is shown under the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryTab {
    #[default]
    Recent,
    Favorites,
}

impl HistoryTab {
    pub fn toggled(self) -> Self {
        match self {
            HistoryTab::Recent => HistoryTab::Favorites,
            HistoryTab::Favorites => HistoryTab::Recent,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            HistoryTab::Recent => "Recent",
            HistoryTab::Favorites => "Favorites",
        }
    }

    /// Message shown when the list is empty.
    pub fn empty_message(self) -> &'static str {
        match self {
            HistoryTab::Recent => "No recent searches",
            HistoryTab::Favorites => "No favorites yet",
        }
    }
}

/// Focusable regions of the screen, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    History,
    StartTime,
    EndTime,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::History,
            Focus::History => Focus::StartTime,
            Focus::StartTime => Focus::EndTime,
            Focus::EndTime => Focus::Search,
        }
    }
}

/// The two time endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Start => "Start Time",
            Endpoint::End => "End Time",
        }
    }
}

/// Closed time field as rendered on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFieldView {
    pub endpoint: Endpoint,
    /// Formatted committed value, or the placeholder.
    pub display: String,
    pub focused: bool,
}

/// Open picker modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub endpoint: Endpoint,
    pub mode: ClockMode,
    pub wheel: WheelState,
    pub column: PickerColumn,
    pub hour_offset: u32,
    pub minute_offset: u32,
    pub row_height: u32,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    pub status: LoadStatus,
    pub query: String,
    pub dropdown_visible: bool,
    pub filtered: Vec<Candidate>,
    /// Membership flags parallel to `filtered`.
    pub filtered_favorite: Vec<bool>,
    pub dropdown_cursor: usize,
    pub recent: Vec<Candidate>,
    pub favorites: Vec<Candidate>,
    pub tab: HistoryTab,
    pub history_cursor: usize,
    pub focus: Focus,
    pub start: TimeFieldView,
    pub end: TimeFieldView,
    pub picker: Option<PickerView>,
}

impl ScreenSnapshot {
    /// Entries of the active history tab.
    pub fn history_items(&self) -> &[Candidate] {
        match self.tab {
            HistoryTab::Recent => &self.recent,
            HistoryTab::Favorites => &self.favorites,
        }
    }

    /// Error message replacing the interactive view, if any.
    pub fn error_message(&self) -> Option<String> {
        match &self.status {
            LoadStatus::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading(_))
    }
}
