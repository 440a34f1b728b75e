use time::{
    Date, Time,
    format_description::BorrowedFormatItem,
    macros::format_description,
};

/// Canonical date representation used across the application: `YYYY-MM-DD`.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Shift window times are stored and exchanged as `HH:MM`.
pub const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

pub fn parse_date(value: &str) -> crate::Result<Date> {
    match Date::parse(value, DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(_) => crate::bail!("invalid date '{value}', expected YYYY-MM-DD"),
    }
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .expect("date formats with the canonical description")
}

pub fn parse_hhmm(value: &str) -> crate::Result<Time> {
    match Time::parse(value, TIME_FORMAT) {
        Ok(time) => Ok(time),
        Err(_) => crate::bail!("invalid time '{value}', expected HH:MM"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_iso_dates() {
        let date = parse_date("2024-01-01").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(format_date(date), "2024-01-01");
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("01/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parses_hhmm_times() {
        assert!(parse_hhmm("08:00").is_ok());
        assert!(parse_hhmm("23:59").is_ok());
        assert!(parse_hhmm("8am").is_err());
        assert!(parse_hhmm("25:00").is_err());
    }
}
