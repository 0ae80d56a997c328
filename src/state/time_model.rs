//! Per-endpoint time value with its editing session.
//!
//! State machine:
//!
//! ```text
//! Closed --open--> Editing(WheelState) --confirm--> Closed (value := to_canonical(wheel))
//!                                      --cancel---> Closed (value unchanged)
//! ```
//!
//! While editing, only the wheel mutates; the committed [`TimeValue`] is never
//! touched until confirm.

use crate::model::{Clock, ClockMode, TimeValue, WheelState};
use crate::state::wheel::{WheelColumn, DEFAULT_ROW_HEIGHT, MAX_ROW_HEIGHT};
use tracing::debug;

/// Text shown for an endpoint that has no value yet.
pub const PLACEHOLDER: &str = "Select Time";

/// Column of the wheel that receives step intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerColumn {
    #[default]
    Hour,
    Minute,
    /// AM/PM toggle. Skipped in 24h mode.
    Period,
}

/// Editing session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Closed,
    Editing {
        wheel: WheelState,
        column: PickerColumn,
    },
}

/// Canonical time for one endpoint plus its open/closed picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeValueModel {
    value: Option<TimeValue>,
    mode: ClockMode,
    row_height: u32,
    state: EditState,
}

impl TimeValueModel {
    pub fn new(value: Option<TimeValue>, mode: ClockMode) -> Self {
        Self::with_row_height(value, mode, DEFAULT_ROW_HEIGHT)
    }

    /// `row_height` is clamped into `1..=MAX_ROW_HEIGHT`.
    pub fn with_row_height(value: Option<TimeValue>, mode: ClockMode, row_height: u32) -> Self {
        Self {
            value,
            mode,
            row_height: row_height.clamp(1, MAX_ROW_HEIGHT),
            state: EditState::Closed,
        }
    }

    // ===== Session transitions =====

    /// Open the picker. Seeds the wheel from the current value, or from `clock`
    /// when there is none. Reopening while editing keeps the session.
    pub fn open(&mut self, clock: &dyn Clock) {
        if self.is_editing() {
            return;
        }
        let wheel = match self.value {
            Some(value) => WheelState::from_canonical(value, self.mode),
            None => WheelState::now_from(clock, self.mode),
        };
        debug!(seed = %wheel.to_canonical(), "time picker opened");
        self.state = EditState::Editing {
            wheel,
            column: PickerColumn::Hour,
        };
    }

    /// Commit the wheel. Returns the new value, or `None` if no session was open.
    pub fn confirm(&mut self) -> Option<TimeValue> {
        let EditState::Editing { wheel, .. } = self.state else {
            return None;
        };
        let committed = wheel.to_canonical();
        self.value = Some(committed);
        self.state = EditState::Closed;
        debug!(value = %committed, "time picker confirmed");
        Some(committed)
    }

    /// Discard the wheel; the committed value is unchanged.
    pub fn cancel(&mut self) {
        if self.is_editing() {
            debug!("time picker cancelled");
        }
        self.state = EditState::Closed;
    }

    // ===== Wheel edits (no-ops when closed) =====

    fn with_wheel(&mut self, edit: impl FnOnce(&mut WheelState, &mut PickerColumn)) {
        if let EditState::Editing { wheel, column } = &mut self.state {
            edit(wheel, column);
        }
    }

    pub fn set_hour(&mut self, display_hour: u8) {
        self.with_wheel(|wheel, _| wheel.set_display_hour(display_hour));
    }

    pub fn set_minute(&mut self, minute: u8) {
        self.with_wheel(|wheel, _| wheel.set_minute(minute));
    }

    pub fn set_am(&mut self, is_am: bool) {
        self.with_wheel(|wheel, _| wheel.set_am(is_am));
    }

    /// Reseed the wheel from `clock`, keeping the active column.
    pub fn set_now(&mut self, clock: &dyn Clock) {
        let mode = self.mode;
        self.with_wheel(|wheel, _| *wheel = WheelState::now_from(clock, mode));
    }

    /// Step the active column by `delta` slots, wrapping inside its domain.
    /// On the period column any step flips AM/PM.
    pub fn step(&mut self, delta: i32) {
        let mode = self.mode;
        self.with_wheel(|wheel, column| match column {
            PickerColumn::Hour => {
                let next = WheelColumn::Hour(mode).step(wheel.display_hour(), delta);
                wheel.set_display_hour(next);
            }
            PickerColumn::Minute => {
                let next = WheelColumn::Minute.step(wheel.minute(), delta);
                wheel.set_minute(next);
            }
            PickerColumn::Period => {
                if delta % 2 != 0 {
                    wheel.set_am(!wheel.is_am());
                }
            }
        });
    }

    /// Move focus to the next (`forward`) or previous column, wrapping.
    pub fn cycle_column(&mut self, forward: bool) {
        let columns: &[PickerColumn] = match self.mode {
            ClockMode::TwelveHour => &[PickerColumn::Hour, PickerColumn::Minute, PickerColumn::Period],
            ClockMode::TwentyFourHour => &[PickerColumn::Hour, PickerColumn::Minute],
        };
        self.with_wheel(|_, column| {
            let index = columns.iter().position(|c| c == column).unwrap_or(0);
            let next = if forward {
                (index + 1) % columns.len()
            } else {
                (index + columns.len() - 1) % columns.len()
            };
            *column = columns[next];
        });
    }

    /// Select the hour under a scroll offset (nearest slot).
    pub fn scroll_hour_to(&mut self, offset: u32) {
        let (mode, row_height) = (self.mode, self.row_height);
        self.with_wheel(|wheel, _| {
            wheel.set_display_hour(WheelColumn::Hour(mode).value_at_offset(offset, row_height));
        });
    }

    /// Select the minute under a scroll offset (nearest slot).
    pub fn scroll_minute_to(&mut self, offset: u32) {
        let row_height = self.row_height;
        self.with_wheel(|wheel, _| {
            wheel.set_minute(WheelColumn::Minute.value_at_offset(offset, row_height));
        });
    }

    // ===== Read-only views =====

    pub fn value(&self) -> Option<TimeValue> {
        self.value
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn wheel(&self) -> Option<WheelState> {
        match self.state {
            EditState::Editing { wheel, .. } => Some(wheel),
            EditState::Closed => None,
        }
    }

    pub fn active_column(&self) -> Option<PickerColumn> {
        match self.state {
            EditState::Editing { column, .. } => Some(column),
            EditState::Closed => None,
        }
    }

    /// Derived scroll offset of the hour column while editing.
    pub fn hour_offset(&self) -> Option<u32> {
        self.wheel().map(|wheel| {
            WheelColumn::Hour(self.mode).offset_for(wheel.display_hour(), self.row_height)
        })
    }

    /// Derived scroll offset of the minute column while editing.
    pub fn minute_offset(&self) -> Option<u32> {
        self.wheel()
            .map(|wheel| WheelColumn::Minute.offset_for(wheel.minute(), self.row_height))
    }

    /// Committed value formatted for the active mode, or the placeholder.
    pub fn display(&self) -> String {
        match self.value {
            Some(value) => value.format(self.mode),
            None => PLACEHOLDER.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "time_model_tests.rs"]
mod tests;
