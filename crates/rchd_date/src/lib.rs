//! rchd_date - date parsing and normalization for legal citations
//!
//! Court rulings, statutes and consultation dates reach the citation engine as
//! free text. This crate recognizes the spellings that show up in Chilean
//! legal and bibliographic records and normalizes them to `dd/mm/yyyy`.
//! Anything it does not recognize is handed back untouched.

use std::fmt;

use winnow::ascii::space1;
use winnow::combinator::{alt, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

/// A validated day on the proleptic Gregorian calendar.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Build a date, rejecting impossible days such as 31/02.
    pub fn new(day: u32, month: u32, year: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(month, year) {
            return None;
        }
        Some(Self { year, month, day })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. Returns 0 for an invalid month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Spanish month names, lowercase. "setiembre" is the older spelling still
/// common in Chilean court records.
fn month_number(name: &str) -> Option<u32> {
    let month = match name {
        "enero" => 1,
        "febrero" => 2,
        "marzo" => 3,
        "abril" => 4,
        "mayo" => 5,
        "junio" => 6,
        "julio" => 7,
        "agosto" => 8,
        "septiembre" | "setiembre" => 9,
        "octubre" => 10,
        "noviembre" => 11,
        "diciembre" => 12,
        _ => return None,
    };
    Some(month)
}

/// The accepted input spellings, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `23/03/2021`, `3/3/2021`
    DaySlash,
    /// `23-03-2021`
    DayDash,
    /// `23.03.2021`
    DayDot,
    /// `2021-03-23`
    Iso,
    /// `2021/03/23`
    YearSlash,
    /// `23 de marzo de 2021`, `1° de mayo de 2020`, `23 marzo 2021`
    LongSpanish,
    /// `23/03/21`
    DaySlashShortYear,
    /// `23-03-21`
    DayDashShortYear,
}

pub const PATTERNS: [Pattern; 8] = [
    Pattern::DaySlash,
    Pattern::DayDash,
    Pattern::DayDot,
    Pattern::Iso,
    Pattern::YearSlash,
    Pattern::LongSpanish,
    Pattern::DaySlashShortYear,
    Pattern::DayDashShortYear,
];

type Dmy = (u32, u32, i32);

fn day_or_month(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    take_while(1..=2, |c: char| c.is_ascii_digit())
        .try_map(|s: &str| s.parse::<u32>())
        .parse_next(input)
}

fn full_year(input: &mut &str) -> Result<i32, ErrMode<ContextError>> {
    take_while(4, |c: char| c.is_ascii_digit())
        .try_map(|s: &str| s.parse::<i32>())
        .parse_next(input)
}

/// Two-digit years pivot the same way `strptime("%y")` does:
/// 69..=99 land in the 1900s, 00..=68 in the 2000s.
fn short_year(input: &mut &str) -> Result<i32, ErrMode<ContextError>> {
    let yy = take_while(2, |c: char| c.is_ascii_digit())
        .try_map(|s: &str| s.parse::<i32>())
        .parse_next(input)?;
    Ok(if yy >= 69 { 1900 + yy } else { 2000 + yy })
}

fn day_first(input: &mut &str, mut sep: char, short: bool) -> Result<Dmy, ErrMode<ContextError>> {
    let day = day_or_month.parse_next(input)?;
    let _ = sep.parse_next(input)?;
    let month = day_or_month.parse_next(input)?;
    let _ = sep.parse_next(input)?;
    let year = if short {
        short_year.parse_next(input)?
    } else {
        full_year.parse_next(input)?
    };
    Ok((day, month, year))
}

fn year_first(input: &mut &str, mut sep: char) -> Result<Dmy, ErrMode<ContextError>> {
    let year = full_year.parse_next(input)?;
    let _ = sep.parse_next(input)?;
    let month = day_or_month.parse_next(input)?;
    let _ = sep.parse_next(input)?;
    let day = day_or_month.parse_next(input)?;
    Ok((day, month, year))
}

fn month_name(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    take_while(1.., |c: char| c.is_alphabetic())
        .verify_map(month_number)
        .parse_next(input)
}

/// Expects lowercase input.
fn long_spanish(input: &mut &str) -> Result<Dmy, ErrMode<ContextError>> {
    let day = day_or_month.parse_next(input)?;
    let _ = opt(alt(('°', 'º'))).parse_next(input)?;
    let _ = space1.parse_next(input)?;
    let _ = opt(("de", space1)).parse_next(input)?;
    let month = month_name.parse_next(input)?;
    let _ = space1.parse_next(input)?;
    let _ = opt(("de", space1)).parse_next(input)?;
    let year = full_year.parse_next(input)?;
    Ok((day, month, year))
}

impl Pattern {
    fn run(self, input: &mut &str) -> Result<Dmy, ErrMode<ContextError>> {
        match self {
            Pattern::DaySlash => day_first(input, '/', false),
            Pattern::DayDash => day_first(input, '-', false),
            Pattern::DayDot => day_first(input, '.', false),
            Pattern::Iso => year_first(input, '-'),
            Pattern::YearSlash => year_first(input, '/'),
            Pattern::LongSpanish => long_spanish(input),
            Pattern::DaySlashShortYear => day_first(input, '/', true),
            Pattern::DayDashShortYear => day_first(input, '-', true),
        }
    }

    /// Parse the whole of `input` with this pattern.
    pub fn parse(self, input: &str) -> Option<CalendarDate> {
        let lowered = input.trim().to_lowercase();
        let mut rest = lowered.as_str();
        let (day, month, year) = self.run(&mut rest).ok()?;
        if !rest.is_empty() {
            return None;
        }
        CalendarDate::new(day, month, year)
    }
}

/// `ddmmyyyy` written without separators, e.g. `23081980`.
fn compact_digits(input: &str) -> Option<CalendarDate> {
    if input.len() != 8 || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let day = input[0..2].parse().ok()?;
    let month = input[2..4].parse().ok()?;
    let year = input[4..8].parse().ok()?;
    CalendarDate::new(day, month, year)
}

/// Parse a date written in any accepted spelling.
pub fn parse(input: &str) -> Option<CalendarDate> {
    PATTERNS
        .iter()
        .find_map(|pattern| pattern.parse(input))
        .or_else(|| compact_digits(input.trim()))
}

/// Normalize a date to `dd/mm/yyyy`, or return the input unchanged when it
/// cannot be parsed.
pub fn normalize(input: &str) -> String {
    match parse(input) {
        Some(date) => date.to_string(),
        None => input.to_string(),
    }
}

/// Year of a date string. Falls back to the first run of four digits for
/// partial dates like "marzo de 2021".
pub fn year_of(input: &str) -> Option<String> {
    if let Some(date) = parse(input) {
        return Some(format!("{:04}", date.year));
    }
    let chars: Vec<char> = input.chars().collect();
    chars
        .windows(4)
        .enumerate()
        .find(|(i, w)| {
            w.iter().all(|c| c.is_ascii_digit())
                && (*i == 0 || !chars[i - 1].is_ascii_digit())
                && chars.get(i + 4).map_or(true, |c| !c.is_ascii_digit())
        })
        .map(|(_, w)| w.iter().collect())
}
