//! Wall-clock readings and the US-English formats the shell displays them in.

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Local calendar time, broken down the way `Date` reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalDateTime {
    /// Full year.
    pub year: u32,
    /// Month, 1-based.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// Day of week, 0 = Sunday.
    pub weekday: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute, 0-59.
    pub minute: u32,
}

impl LocalDateTime {
    fn weekday_name(&self) -> &'static str {
        WEEKDAYS[(self.weekday % 7) as usize]
    }

    fn month_name(&self) -> &'static str {
        MONTHS[(self.month.clamp(1, 12) - 1) as usize]
    }

    /// `3:07 PM`
    pub fn format_time(&self) -> String {
        let (hour, meridiem) = match self.hour {
            0 => (12, "AM"),
            1..=11 => (self.hour, "AM"),
            12 => (12, "PM"),
            _ => (self.hour - 12, "PM"),
        };
        format!("{hour}:{:02} {meridiem}", self.minute)
    }

    /// `Saturday, March 14, 2026`
    pub fn format_long_date(&self) -> String {
        format!(
            "{}, {} {}, {}",
            self.weekday_name(),
            self.month_name(),
            self.day,
            self.year
        )
    }

    /// `Sat, Mar 14`
    pub fn format_short_date(&self) -> String {
        format!(
            "{}, {} {}",
            &self.weekday_name()[..3],
            &self.month_name()[..3],
            self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(hour: u32, minute: u32) -> LocalDateTime {
        LocalDateTime {
            year: 2026,
            month: 1,
            day: 5,
            weekday: 1,
            hour,
            minute,
        }
    }

    #[test]
    fn twelve_hour_clock_handles_midnight_and_noon() {
        assert_eq!(at(0, 4).format_time(), "12:04 AM");
        assert_eq!(at(9, 30).format_time(), "9:30 AM");
        assert_eq!(at(12, 0).format_time(), "12:00 PM");
        assert_eq!(at(23, 59).format_time(), "11:59 PM");
    }

    #[test]
    fn dates_use_english_names() {
        assert_eq!(at(8, 0).format_long_date(), "Monday, January 5, 2026");
        assert_eq!(at(8, 0).format_short_date(), "Mon, Jan 5");
    }
}
