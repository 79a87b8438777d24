//! Утилиты для форматирования даты и времени
//!
//! Метки времени приходят строками ISO-8601, со смещением
//! ("2024-03-15T14:02:26Z") или без него ("2024-03-15T14:02:26.123").
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

const DATETIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";
const TIME_FORMAT: &str = "%H:%M:%S";

enum Parsed {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

fn parse_timestamp(timestamp: &str) -> Option<Parsed> {
    let trimmed = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(Parsed::Zoned(dt));
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(Parsed::Naive)
}

/// Метки со смещением переводятся в `tz`, метки без смещения выводятся как есть
fn format_in<Tz>(timestamp: &str, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(timestamp) {
        Some(Parsed::Zoned(dt)) => dt.with_timezone(tz).format(pattern).to_string(),
        Some(Parsed::Naive(dt)) => dt.format(pattern).to_string(),
        None => timestamp.to_string(),
    }
}

/// Форматирует ISO дату-время в DD/MM/YYYY, HH:MM:SS (pt-BR) в локальном времени браузера
/// Пример: "2024-03-15T14:02:26.123" -> "15/03/2024, 14:02:26"
pub fn format_datetime(timestamp: &str) -> String {
    format_in(timestamp, &Local, DATETIME_FORMAT)
}

/// Форматирует ISO дату-время в HH:MM:SS в локальном времени браузера
pub fn format_time(timestamp: &str) -> String {
    format_in(timestamp, &Local, TIME_FORMAT)
}

/// Календарная дата (YYYY-MM-DD); для меток со смещением берётся UTC
pub fn date_part(timestamp: &str) -> Option<String> {
    let date = match parse_timestamp(timestamp)? {
        Parsed::Zoned(dt) => dt.with_timezone(&Utc).date_naive(),
        Parsed::Naive(dt) => dt.date(),
    };
    Some(date.format("%Y-%m-%d").to_string())
}

/// Корректная дата в формате `YYYY-MM-DD`
pub fn is_iso_date(value: &str) -> bool {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() && value.len() == 10
}
