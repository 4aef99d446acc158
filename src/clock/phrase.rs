/// Date and time phrases spoken as a Japanese announcer would read them
///
/// `HiraganaClock` turns a `TimePoint` into two sentences:
/// - きょうは<year><month>がつ<day><weekday>です。
/// - いまは<ごぜん|ごご><hour><minute>です。

use chrono::{Datelike, Timelike, Weekday};
use std::fmt;

use super::numbers::{number_to_hiragana, NumberCategory};
use crate::error::HiraganaError;

/// A calendar date and wall-clock minute, taken from a chrono date-time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePoint {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    weekday: Weekday,
}

impl TimePoint {
    /// Take the date and minute from any chrono date-time (seconds are dropped)
    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            weekday: dt.weekday(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// Which sentence a phrase is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseKind {
    Date,
    Time,
}

/// An immutable hiragana sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiraganaPhrase {
    kind: PhraseKind,
    text: String,
}

impl HiraganaPhrase {
    fn new(kind: PhraseKind, text: String) -> Self {
        Self { kind, text }
    }

    pub fn kind(&self) -> PhraseKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for HiraganaPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn weekday_reading(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "にちようび",
        Weekday::Mon => "げつようび",
        Weekday::Tue => "かようび",
        Weekday::Wed => "すいようび",
        Weekday::Thu => "もくようび",
        Weekday::Fri => "きんようび",
        Weekday::Sat => "どようび",
    }
}

/// Stateless formatter for the clock face
#[derive(Debug, Clone, Copy, Default)]
pub struct HiraganaClock;

impl HiraganaClock {
    pub fn new() -> Self {
        Self
    }

    /// Produce `(date_phrase, time_phrase)` for the given moment
    pub fn phrases(&self, at: &TimePoint) -> Result<(HiraganaPhrase, HiraganaPhrase), HiraganaError> {
        Ok((self.date_phrase(at)?, self.time_phrase(at)?))
    }

    pub fn date_phrase(&self, at: &TimePoint) -> Result<HiraganaPhrase, HiraganaError> {
        // Years before 1 CE have no reading
        let year_value = u32::try_from(at.year()).map_err(|_| HiraganaError::OutOfRange {
            category: NumberCategory::Year,
            value: i64::from(at.year()),
        })?;

        let year = number_to_hiragana(year_value, NumberCategory::Year)?;
        let month = number_to_hiragana(at.month(), NumberCategory::Default)?;
        let day = number_to_hiragana(at.day(), NumberCategory::Day)?;
        let weekday = weekday_reading(at.weekday());

        Ok(HiraganaPhrase::new(
            PhraseKind::Date,
            format!("きょうは{year}{month}がつ{day}{weekday}です。"),
        ))
    }

    pub fn time_phrase(&self, at: &TimePoint) -> Result<HiraganaPhrase, HiraganaError> {
        let is_pm = at.hour() >= 12;
        let hour = match at.hour() % 12 {
            0 => 12,
            h => h,
        };

        // Midnight and noon have fixed readings of their own
        if hour == 12 && at.minute() == 0 {
            let text = if is_pm {
                "いまはごごじゅうにじです。"
            } else {
                "いまはごぜんれいじです。"
            };
            return Ok(HiraganaPhrase::new(PhraseKind::Time, text.to_string()));
        }

        let meridiem = if is_pm { "ごご" } else { "ごぜん" };
        let hour_text = number_to_hiragana(hour, NumberCategory::Hour)?;
        let minute_text = if at.minute() == 0 {
            String::new()
        } else {
            number_to_hiragana(at.minute(), NumberCategory::Minute)?
        };

        Ok(HiraganaPhrase::new(
            PhraseKind::Time,
            format!("いまは{meridiem}{hour_text}{minute_text}です。"),
        ))
    }
}
