//! Wheel columns and the value ↔ scroll-offset mapping.
//!
//! The selected value is authoritative. Scroll offsets are derived from it with
//! `offset = index * row_height`, where `index` is the value's position in the
//! column domain (`value - 1` for 12h hours, `value` otherwise). The reverse
//! mapping snaps an arbitrary offset to the nearest slot, clamped to the domain.

use crate::model::time::MINUTES_PER_HOUR;
use crate::model::ClockMode;

/// Height of one wheel row, in the renderer's units.
pub const DEFAULT_ROW_HEIGHT: u32 = 40;

/// Largest row height accepted from configuration.
pub const MAX_ROW_HEIGHT: u32 = 1_000;

/// One scrollable column of the time picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelColumn {
    Hour(ClockMode),
    Minute,
}

impl WheelColumn {
    /// First value of the domain.
    pub fn first(self) -> u8 {
        match self {
            WheelColumn::Hour(mode) => *mode.hour_domain().start(),
            WheelColumn::Minute => 0,
        }
    }

    /// Last value of the domain.
    pub fn last(self) -> u8 {
        match self {
            WheelColumn::Hour(mode) => *mode.hour_domain().end(),
            WheelColumn::Minute => MINUTES_PER_HOUR - 1,
        }
    }

    /// Number of slots.
    pub fn len(self) -> usize {
        usize::from(self.last() - self.first()) + 1
    }

    /// Values in wheel order.
    pub fn values(self) -> impl Iterator<Item = u8> {
        self.first()..=self.last()
    }

    /// Slot index of `value`, clamped into the domain.
    pub fn index_of(self, value: u8) -> usize {
        usize::from(value.clamp(self.first(), self.last()) - self.first())
    }

    /// Value at slot `index`, clamped to the last slot.
    pub fn value_at(self, index: usize) -> u8 {
        let index = index.min(self.len() - 1);
        self.first() + index as u8
    }

    /// Scroll offset that puts `value` at the selection row.
    pub fn offset_for(self, value: u8, row_height: u32) -> u32 {
        (self.index_of(value) as u32).saturating_mul(row_height)
    }

    /// Value whose slot is nearest to `offset`.
    pub fn value_at_offset(self, offset: u32, row_height: u32) -> u8 {
        let row_height = row_height.max(1);
        let index = offset.saturating_add(row_height / 2) / row_height;
        self.value_at(index as usize)
    }

    /// Move `delta` slots from `value`, wrapping around the domain.
    pub fn step(self, value: u8, delta: i32) -> u8 {
        let len = self.len() as i32;
        let index = self.index_of(value) as i32;
        let wrapped = (index + delta).rem_euclid(len);
        self.value_at(wrapped as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWELVE: WheelColumn = WheelColumn::Hour(ClockMode::TwelveHour);
    const TWENTY_FOUR: WheelColumn = WheelColumn::Hour(ClockMode::TwentyFourHour);

    #[test]
    fn domain_sizes() {
        assert_eq!(TWELVE.len(), 12);
        assert_eq!(TWENTY_FOUR.len(), 24);
        assert_eq!(WheelColumn::Minute.len(), 60);
    }

    #[test]
    fn twelve_hour_index_is_value_minus_one() {
        assert_eq!(TWELVE.index_of(1), 0);
        assert_eq!(TWELVE.index_of(12), 11);
        assert_eq!(TWELVE.offset_for(3, 40), 80);
    }

    #[test]
    fn twenty_four_hour_and_minute_index_is_value() {
        assert_eq!(TWENTY_FOUR.offset_for(0, 40), 0);
        assert_eq!(TWENTY_FOUR.offset_for(23, 40), 920);
        assert_eq!(WheelColumn::Minute.offset_for(59, 40), 2360);
    }

    #[test]
    fn offset_round_trips_for_every_value() {
        for column in [TWELVE, TWENTY_FOUR, WheelColumn::Minute] {
            for value in column.values() {
                let offset = column.offset_for(value, DEFAULT_ROW_HEIGHT);
                assert_eq!(column.value_at_offset(offset, DEFAULT_ROW_HEIGHT), value);
            }
        }
    }

    #[test]
    fn value_at_offset_snaps_to_nearest_slot() {
        assert_eq!(WheelColumn::Minute.value_at_offset(59, 40), 1);
        assert_eq!(WheelColumn::Minute.value_at_offset(60, 40), 2);
        assert_eq!(TWELVE.value_at_offset(19, 40), 1);
        assert_eq!(TWELVE.value_at_offset(20, 40), 2);
    }

    #[test]
    fn value_at_offset_clamps_past_the_end() {
        assert_eq!(TWELVE.value_at_offset(10_000, 40), 12);
        assert_eq!(WheelColumn::Minute.value_at_offset(u32::MAX / 2, 40), 59);
    }

    #[test]
    fn value_at_offset_handles_max_offset() {
        assert_eq!(WheelColumn::Minute.value_at_offset(u32::MAX, 40), 59);
        assert_eq!(TWELVE.value_at_offset(u32::MAX, u32::MAX), 2);
    }

    #[test]
    fn huge_row_height_saturates_offset() {
        assert_eq!(WheelColumn::Minute.offset_for(59, 100_000_000), u32::MAX);
        assert_eq!(WheelColumn::Minute.offset_for(0, u32::MAX), 0);
    }

    #[test]
    fn zero_row_height_does_not_divide_by_zero() {
        assert_eq!(WheelColumn::Minute.value_at_offset(5, 0), 5);
    }

    #[test]
    fn step_wraps_around() {
        assert_eq!(TWELVE.step(12, 1), 1);
        assert_eq!(TWELVE.step(1, -1), 12);
        assert_eq!(TWENTY_FOUR.step(23, 1), 0);
        assert_eq!(WheelColumn::Minute.step(0, -1), 59);
        assert_eq!(WheelColumn::Minute.step(30, 90), 0);
    }

    #[test]
    fn out_of_domain_values_clamp() {
        assert_eq!(TWELVE.index_of(0), 0);
        assert_eq!(WheelColumn::Minute.index_of(200), 59);
    }
}
