/// Number-to-hiragana transcription
///
/// Counters in Japanese change their sound depending on the number in front
/// of them (いっぷん, さんぷん, はつか...). Those readings cannot be derived
/// from the digits, so minutes, days, and hours are looked up in fixed
/// tables. Plain cardinals and years are composed digit by digit.

use crate::error::HiraganaError;

/// Which reading table a number is transcribed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberCategory {
    /// General cardinal, 0-99
    Default,
    /// Minutes with the ふん/ぷん counter, 0-59
    Minute,
    /// Day of the month, 1-31
    Day,
    /// Hour on a 12-hour dial, 0-12 (0 reads as 12)
    Hour,
    /// Calendar year with the ねん suffix, 1-9999. Composition only has
    /// thousands down to ones, so later years are out of range.
    Year,
}

/// Ones digits. Index 0 is empty so that 10, 20... read without a trailing digit.
const DIGITS: [&str; 10] = [
    "", "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
];

/// Minute readings, index = minute. Index 0 is unused.
const MINUTES: [&str; 60] = [
    "",
    "いっぷん", "にふん", "さんぷん", "よんぷん", "ごふん",
    "ろっぷん", "ななふん", "はっぷん", "きゅうふん", "じゅっぷん",
    "じゅういっぷん", "じゅうにふん", "じゅうさんぷん", "じゅうよんぷん", "じゅうごふん",
    "じゅうろっぷん", "じゅうななふん", "じゅうはっぷん", "じゅうきゅうふん", "にじゅっぷん",
    "にじゅういっぷん", "にじゅうにふん", "にじゅうさんぷん", "にじゅうよんぷん", "にじゅごふん",
    "にじゅうろっぷん", "にじゅうななふん", "にじゅうはっぷん", "にじゅうきゅうふん", "はん",
    "さんじゅういっぷん", "さんじゅうにふん", "さんじゅうさんぷん", "さんじゅうよんぷん", "さんじゅうごふん",
    "さんじゅうろっぷん", "さんじゅうななふん", "さんじゅうはっぷん", "さんじゅうきゅうふん", "よんじゅっぷん",
    "よんじゅういっぷん", "よんじゅうにふん", "よんじゅうさんぷん", "よんじゅうよんぷん", "よんじゅうごふん",
    "よんじゅうろっぷん", "よんじゅうななふん", "よんじゅうはっぷん", "よんじゅうきゅうふん", "ごじゅっぷん",
    "ごじゅういっぷん", "ごじゅうにふん", "ごじゅうさんぷん", "ごじゅうよんぷん", "ごじゅうごふん",
    "ごじゅうろっぷん", "ごじゅうななふん", "ごじゅうはっぷん", "ごじゅうきゅうふん",
];

/// Day-of-month readings, index = day - 1
const DAYS: [&str; 31] = [
    "ついたち", "ふつか", "みっか", "よっか", "いつか", "むいか", "なのか",
    "ようか", "ここのか", "とおか", "じゅういちにち", "じゅうににち", "じゅうさんにち",
    "じゅうよっか", "じゅうごにち", "じゅうろくにち", "じゅうしちにち", "じゅうはちにち",
    "じゅうくにち", "はつか", "にじゅういちにち", "にじゅうににち", "にじゅうさんにち",
    "にじゅうよっか", "にじゅうごにち", "にじゅうろくにち", "にじゅうしちにち",
    "にじゅうはちにち", "にじゅうくにち", "さんじゅうにち", "さんじゅういちにち",
];

/// Hour readings, index = hour on a 12-hour dial
const HOURS: [&str; 13] = [
    "じゅうにじ", "いちじ", "にじ", "さんじ", "よじ", "ごじ", "ろくじ",
    "しちじ", "はちじ", "くじ", "じゅうじ", "じゅういちじ", "じゅうにじ",
];

/// Positional suffixes for thousands, hundreds, tens, ones
const PLACES: [(u32, &str); 4] = [(1000, "せん"), (100, "ひゃく"), (10, "じゅう"), (1, "")];

/// Transcribe `n` into hiragana using the reading table for `category`
///
/// Values outside a category's table are a caller bug and return
/// `HiraganaError::OutOfRange`; nothing is silently clamped.
pub fn number_to_hiragana(n: u32, category: NumberCategory) -> Result<String, HiraganaError> {
    match category {
        NumberCategory::Default => cardinal(n),
        NumberCategory::Minute => minute(n),
        NumberCategory::Day => day(n),
        NumberCategory::Hour => hour(n),
        NumberCategory::Year => year(n),
    }
}

fn out_of_range(category: NumberCategory, value: u32) -> HiraganaError {
    HiraganaError::OutOfRange {
        category,
        value: i64::from(value),
    }
}

fn cardinal(n: u32) -> Result<String, HiraganaError> {
    let reading = match n {
        0..=9 => DIGITS[n as usize].to_string(),
        10..=19 => format!("じゅう{}", DIGITS[(n % 10) as usize]),
        20..=99 => format!(
            "{}じゅう{}",
            DIGITS[(n / 10) as usize],
            DIGITS[(n % 10) as usize]
        ),
        _ => return Err(out_of_range(NumberCategory::Default, n)),
    };
    Ok(reading)
}

fn minute(n: u32) -> Result<String, HiraganaError> {
    match n {
        1..=59 => Ok(MINUTES[n as usize].to_string()),
        // Only 0 lands here; it reads as a bare counter
        0 => Ok(format!("{}ふん", cardinal(n)?)),
        _ => Err(out_of_range(NumberCategory::Minute, n)),
    }
}

fn day(n: u32) -> Result<String, HiraganaError> {
    match n {
        1..=31 => Ok(DAYS[(n - 1) as usize].to_string()),
        _ => Err(out_of_range(NumberCategory::Day, n)),
    }
}

fn hour(n: u32) -> Result<String, HiraganaError> {
    HOURS
        .get(n as usize)
        .map(|reading| reading.to_string())
        .ok_or(out_of_range(NumberCategory::Hour, n))
}

/// Pure positional composition: no rendaku, so 300 reads さんひゃく.
fn year(n: u32) -> Result<String, HiraganaError> {
    if n == 0 || n > 9999 {
        return Err(out_of_range(NumberCategory::Year, n));
    }

    let mut reading = String::new();
    for (place, suffix) in PLACES {
        let digit = (n / place) % 10;
        if digit == 0 {
            continue;
        }
        reading.push_str(DIGITS[digit as usize]);
        reading.push_str(suffix);
    }
    reading.push_str("ねん");
    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(n: u32, category: NumberCategory) -> String {
        number_to_hiragana(n, category).unwrap()
    }

    #[test]
    fn test_cardinal_composition() {
        assert_eq!(read(0, NumberCategory::Default), "");
        assert_eq!(read(7, NumberCategory::Default), "なな");
        assert_eq!(read(10, NumberCategory::Default), "じゅう");
        assert_eq!(read(14, NumberCategory::Default), "じゅうよん");
        assert_eq!(read(20, NumberCategory::Default), "にじゅう");
        assert_eq!(read(99, NumberCategory::Default), "きゅうじゅうきゅう");
    }

    #[test]
    fn test_cardinal_rejects_three_digits() {
        assert_eq!(
            number_to_hiragana(100, NumberCategory::Default),
            Err(HiraganaError::OutOfRange {
                category: NumberCategory::Default,
                value: 100
            })
        );
    }

    #[test]
    fn test_minute_irregular_readings() {
        assert_eq!(read(1, NumberCategory::Minute), "いっぷん");
        assert_eq!(read(3, NumberCategory::Minute), "さんぷん");
        assert_eq!(read(10, NumberCategory::Minute), "じゅっぷん");
        assert_eq!(read(30, NumberCategory::Minute), "はん");
        assert_eq!(read(45, NumberCategory::Minute), "よんじゅうごふん");
        assert_eq!(read(59, NumberCategory::Minute), "ごじゅうきゅうふん");
    }

    #[test]
    fn test_minute_table_is_complete() {
        let expected = [
            "いっぷん", "にふん", "さんぷん", "よんぷん", "ごふん",
            "ろっぷん", "ななふん", "はっぷん", "きゅうふん", "じゅっぷん",
            "じゅういっぷん", "じゅうにふん", "じゅうさんぷん", "じゅうよんぷん", "じゅうごふん",
            "じゅうろっぷん", "じゅうななふん", "じゅうはっぷん", "じゅうきゅうふん", "にじゅっぷん",
            "にじゅういっぷん", "にじゅうにふん", "にじゅうさんぷん", "にじゅうよんぷん", "にじゅごふん",
            "にじゅうろっぷん", "にじゅうななふん", "にじゅうはっぷん", "にじゅうきゅうふん", "はん",
            "さんじゅういっぷん", "さんじゅうにふん", "さんじゅうさんぷん", "さんじゅうよんぷん", "さんじゅうごふん",
            "さんじゅうろっぷん", "さんじゅうななふん", "さんじゅうはっぷん", "さんじゅうきゅうふん", "よんじゅっぷん",
            "よんじゅういっぷん", "よんじゅうにふん", "よんじゅうさんぷん", "よんじゅうよんぷん", "よんじゅうごふん",
            "よんじゅうろっぷん", "よんじゅうななふん", "よんじゅうはっぷん", "よんじゅうきゅうふん", "ごじゅっぷん",
            "ごじゅういっぷん", "ごじゅうにふん", "ごじゅうさんぷん", "ごじゅうよんぷん", "ごじゅうごふん",
            "ごじゅうろっぷん", "ごじゅうななふん", "ごじゅうはっぷん", "ごじゅうきゅうふん",
        ];
        for (n, reading) in (1..=59).zip(expected) {
            assert_eq!(read(n, NumberCategory::Minute), reading, "minute {n}");
        }
        assert_eq!(read(0, NumberCategory::Minute), "ふん");
        assert!(number_to_hiragana(60, NumberCategory::Minute).is_err());
    }

    #[test]
    fn test_day_readings() {
        let expected = [
            "ついたち", "ふつか", "みっか", "よっか", "いつか", "むいか", "なのか",
            "ようか", "ここのか", "とおか", "じゅういちにち", "じゅうににち", "じゅうさんにち",
            "じゅうよっか", "じゅうごにち", "じゅうろくにち", "じゅうしちにち", "じゅうはちにち",
            "じゅうくにち", "はつか", "にじゅういちにち", "にじゅうににち", "にじゅうさんにち",
            "にじゅうよっか", "にじゅうごにち", "にじゅうろくにち", "にじゅうしちにち",
            "にじゅうはちにち", "にじゅうくにち", "さんじゅうにち", "さんじゅういちにち",
        ];
        for (n, reading) in (1..=31).zip(expected) {
            assert_eq!(read(n, NumberCategory::Day), reading, "day {n}");
        }
        assert!(number_to_hiragana(0, NumberCategory::Day).is_err());
        assert!(number_to_hiragana(32, NumberCategory::Day).is_err());
    }

    #[test]
    fn test_hour_readings() {
        let expected = [
            "じゅうにじ", "いちじ", "にじ", "さんじ", "よじ", "ごじ", "ろくじ",
            "しちじ", "はちじ", "くじ", "じゅうじ", "じゅういちじ", "じゅうにじ",
        ];
        for (n, reading) in (0..=12).zip(expected) {
            assert_eq!(read(n, NumberCategory::Hour), reading, "hour {n}");
        }
        assert!(number_to_hiragana(13, NumberCategory::Hour).is_err());
    }

    #[test]
    fn test_year_composition() {
        assert_eq!(read(2024, NumberCategory::Year), "にせんにじゅうよんねん");
        assert_eq!(read(1999, NumberCategory::Year), "いちせんきゅうひゃくきゅうじゅうきゅうねん");
        assert_eq!(read(2000, NumberCategory::Year), "にせんねん");
        assert_eq!(read(305, NumberCategory::Year), "さんひゃくごねん");
        assert_eq!(read(7, NumberCategory::Year), "ななねん");
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(number_to_hiragana(0, NumberCategory::Year).is_err());
        assert_eq!(
            number_to_hiragana(10_000, NumberCategory::Year),
            Err(HiraganaError::OutOfRange {
                category: NumberCategory::Year,
                value: 10_000
            })
        );
    }
}
