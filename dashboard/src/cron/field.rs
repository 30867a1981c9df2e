// File: dashboard/src/cron/field.rs
use serde::Serialize;
use std::fmt;

/// Positional fields of a 5-field cron expression (minute hour day month dow).
///
/// The optional sixth (year) field has no variant: it is never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CronField {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl CronField {
    /// Fields in expression order.
    pub const ALL: [CronField; 5] = [
        CronField::Minute,
        CronField::Hour,
        CronField::DayOfMonth,
        CronField::Month,
        CronField::DayOfWeek,
    ];

    /// Inclusive value range accepted by this field.
    pub fn range(self) -> (u32, u32) {
        match self {
            CronField::Minute => (0, 59),
            CronField::Hour => (0, 23),
            CronField::DayOfMonth => (1, 31),
            CronField::Month => (1, 12),
            CronField::DayOfWeek => (0, 6),
        }
    }

    /// Name shown to dashboard users in validation messages.
    pub fn localized_name(self) -> &'static str {
        match self {
            CronField::Minute => "분",
            CronField::Hour => "시",
            CronField::DayOfMonth => "일",
            CronField::Month => "월",
            CronField::DayOfWeek => "요일",
        }
    }

    /// Check a raw field against `item(,item)*` where
    /// `item := ('*' | value ['-' value]) ['/' step]`.
    pub fn matches(self, raw: &str) -> bool {
        raw.split(',').all(|item| self.matches_item(item))
    }

    fn matches_item(self, item: &str) -> bool {
        let (base, step) = match item.split_once('/') {
            Some((base, step)) => (base, Some(step)),
            None => (item, None),
        };

        if let Some(step) = step {
            if !is_positive_count(step) {
                return false;
            }
        }

        if base == "*" {
            return true;
        }

        match base.split_once('-') {
            Some((start, end)) => match (self.parse_value(start), self.parse_value(end)) {
                (Some(start), Some(end)) => start <= end,
                _ => false,
            },
            None => self.parse_value(base).is_some(),
        }
    }

    /// Parse a canonical decimal value (no sign, no leading zeros) inside the field range.
    fn parse_value(self, raw: &str) -> Option<u32> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if raw.len() > 1 && raw.starts_with('0') {
            return None;
        }

        let value = raw.parse::<u32>().ok()?;
        let (min, max) = self.range();
        (min..=max).contains(&value).then_some(value)
    }
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CronField::Minute => "minute",
            CronField::Hour => "hour",
            CronField::DayOfMonth => "day",
            CronField::Month => "month",
            CronField::DayOfWeek => "weekday",
        };
        write!(f, "{}", name)
    }
}

// Step counts are unbounded digit runs; only zero is rejected.
fn is_positive_count(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) && raw.bytes().any(|b| b != b'0')
}
