use time::Date;

use crate::{EffectiveShift, ShiftType, VisualType};

/// Default full-day shift window, used when no override supplies times.
pub const NORMAL_SHIFT_WINDOW: (&str, &str) = ("08:00", "17:00");

/// Default reduced-hours window for half shifts.
pub const HALF_SHIFT_WINDOW: (&str, &str) = ("08:00", "13:00");

/// A staff member's repeating on/off day pattern, anchored at `cycle_start`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rotation {
    pub cycle_start: Date,
    pub pattern_on: u32,
    pub pattern_off: u32,
}

impl Rotation {
    pub fn cycle_length(&self) -> u32 {
        self.pattern_on + self.pattern_off
    }

    /// Position of `target` within the cycle, always in `[0, cycle_length)`
    /// even when `target` precedes the anchor. Callers guarantee a positive
    /// cycle length; that invariant is enforced at data entry.
    pub fn day_in_cycle(&self, target: Date) -> u32 {
        let diff_days =
            i64::from(target.to_julian_day()) - i64::from(self.cycle_start.to_julian_day());

        diff_days.rem_euclid(i64::from(self.cycle_length())) as u32
    }

    pub fn is_working(&self, target: Date) -> bool {
        self.day_in_cycle(target) < self.pattern_on
    }
}

/// A manual exception to the computed pattern for one specific date.
#[derive(Clone, Debug, PartialEq)]
pub struct OverrideEntry {
    pub date: Date,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_day_off: bool,
    pub shift_type: Option<ShiftType>,
}

/// Computed state for a (staff, date) pair. Derived on every query, never
/// cached or persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ShiftState {
    pub is_working: bool,
    pub shift_type: EffectiveShift,
    pub visual: VisualType,
    pub label: &'static str,
}

pub fn shift_state(rotation: &Rotation, overrides: &[OverrideEntry], day: Date) -> ShiftState {
    // First match wins; the write side keeps (staff, date) unique.
    if let Some(entry) = overrides.iter().find(|o| o.date == day) {
        if entry.is_day_off {
            return ShiftState {
                is_working: false,
                shift_type: EffectiveShift::Off,
                visual: VisualType::Dash,
                label: "Day Off (Manual)",
            };
        }

        match entry.shift_type {
            Some(ShiftType::Half) => {
                return ShiftState {
                    is_working: true,
                    shift_type: EffectiveShift::Half,
                    visual: VisualType::Hollow,
                    label: "Half Shift (Manual)",
                };
            }
            Some(ShiftType::Normal) => {
                return ShiftState {
                    is_working: true,
                    shift_type: EffectiveShift::Normal,
                    visual: VisualType::Solid,
                    label: "Normal Shift (Manual)",
                };
            }
            None => {}
        }
    }

    if rotation.is_working(day) {
        ShiftState {
            is_working: true,
            shift_type: EffectiveShift::Normal,
            visual: VisualType::Solid,
            label: "Normal Shift",
        }
    } else {
        ShiftState {
            is_working: false,
            shift_type: EffectiveShift::Off,
            visual: VisualType::Dash,
            label: "Off",
        }
    }
}

/// Start/end window for a working day. An override carrying both times wins
/// verbatim; otherwise the fixed default window for `shift_type` applies.
pub fn resolve_shift_times(
    overrides: &[OverrideEntry],
    day: Date,
    shift_type: ShiftType,
) -> (String, String) {
    if let Some(entry) = overrides.iter().find(|o| o.date == day) {
        if let (Some(start), Some(end)) = (&entry.start_time, &entry.end_time) {
            return (start.to_owned(), end.to_owned());
        }
    }

    let (start, end) = match shift_type {
        ShiftType::Half => HALF_SHIFT_WINDOW,
        ShiftType::Normal => NORMAL_SHIFT_WINDOW,
    };

    (start.to_owned(), end.to_owned())
}

/// Target of the three-way manual toggle: Normal -> Half -> Off -> Normal.
/// A not-working day advances to Normal.
pub fn next_quick_state(current: &ShiftState) -> EffectiveShift {
    match current.shift_type {
        EffectiveShift::Normal if current.is_working => EffectiveShift::Half,
        EffectiveShift::Half if current.is_working => EffectiveShift::Off,
        _ => EffectiveShift::Normal,
    }
}

/// Display view of one calendar date in the roster grid.
#[derive(Clone, Debug)]
pub struct DayStatus {
    pub date: Date,
    pub iso: String,
    pub weekday: String,
    pub day: u8,
}

impl DayStatus {
    pub fn of(date: Date) -> Self {
        Self {
            date,
            iso: shiftboard_shared::format_date(date),
            weekday: date.weekday().to_string(),
            day: date.day(),
        }
    }
}
