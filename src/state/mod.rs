//! UI state machines (pure).
//!
//! All state transitions are synchronous, total, and testable without a terminal.

pub mod history;
pub mod screen;
pub mod search;
pub mod snapshot;
pub mod time_model;
pub mod wheel;

// Re-export for convenience
pub use history::{FavoriteSet, RecentList};
pub use screen::{ScreenController, ScreenEffect, ScreenSettings};
pub use search::{EngineSettings, LoadStatus, LoadTicket, SearchFilterEngine, filter_candidates};
pub use snapshot::{Endpoint, Focus, HistoryTab, PickerView, ScreenSnapshot, TimeFieldView};
pub use time_model::{EditState, PickerColumn, TimeValueModel};
pub use wheel::{DEFAULT_ROW_HEIGHT, MAX_ROW_HEIGHT, WheelColumn};
