//! Layout dimension constants for TUI rendering.

/// Height of the search input (border + one text line).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Maximum number of dropdown rows shown before the list scrolls.
pub const DROPDOWN_MAX_ROWS: u16 = 6;

/// Height of the history tab bar (border + titles).
pub const HISTORY_TABS_HEIGHT: u16 = 3;

/// Height of one closed time field.
pub const TIME_FIELD_HEIGHT: u16 = 3;

/// Height of the key hint bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the time picker modal.
pub const PICKER_WIDTH: u16 = 34;

/// Wheel rows visible at once; the middle one is the selection row.
pub const PICKER_VISIBLE_ROWS: u16 = 5;

/// Picker chrome around the wheel: borders, title gap, footer.
pub const PICKER_CHROME_HEIGHT: u16 = 4;
