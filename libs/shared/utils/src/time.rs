use chrono::NaiveDateTime;

/// 12-hour wall-clock format used on the booking confirmation and the
/// printed slip, e.g. `03:05 PM, 07-Jan-2026`. Existing printed slips
/// depend on this exact rendering.
pub const SLIP_TIME_FORMAT: &str = "%I:%M %p, %d-%b-%Y";

pub fn format_slip_time(time: NaiveDateTime) -> String {
    time.format(SLIP_TIME_FORMAT).to_string()
}
