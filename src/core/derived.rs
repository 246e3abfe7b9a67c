//! Presentation facts computed from raw entry text.

use crate::core::icons::Glyph;
use chrono::{Datelike, Local, NaiveDate};

/// Literal marking an ongoing role in a duration range.
pub const PRESENT: &str = "Present";

/// Separator between start and end in an experience duration field.
pub const RANGE_SEPARATOR: &str = " - ";

/// Elapsed time between two date tokens, measured against today.
pub fn duration(start: &str, end: Option<&str>) -> String {
    duration_at(start, end, Local::now().date_naive())
}

/// Elapsed time between two date tokens as `"<N> yr[s] <M> mo[s]"`.
///
/// `end` may be `None` or `"Present"`. Tokens that cannot be parsed count as
/// `today`. Spans under one calendar month, and spans whose end precedes
/// their start, read `"1 mo"`.
pub fn duration_at(start: &str, end: Option<&str>, today: NaiveDate) -> String {
    let start = parse_date_token(start).unwrap_or(today);
    let end = end.and_then(parse_date_token).unwrap_or(today);

    let total = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if total <= 0 {
        return "1 mo".to_string();
    }
    let (years, months) = (total / 12, total % 12);

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} yr{}", years, if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!("{} mo{}", months, if months > 1 { "s" } else { "" }));
    }

    parts.join(" ")
}

/// Splits `"Jan 2022 - Present"` into its start and end tokens.
///
/// A field without the separator is all start; its end is open.
pub fn split_range(range: &str) -> (&str, Option<&str>) {
    match range.split_once(RANGE_SEPARATOR) {
        Some((start, end)) => {
            let end = end.trim();
            (start.trim(), if end.is_empty() { None } else { Some(end) })
        }
        None => (range.trim(), None),
    }
}

pub fn is_current(range: &str) -> bool {
    range.contains(PRESENT)
}

/// Parses the date shapes people type into a duration field.
///
/// Returns `None` for `"Present"` and for anything unrecognized.
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let token = token.trim();
    if token.is_empty() || token.eq_ignore_ascii_case(PRESENT) {
        return None;
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(token, format) {
            return Some(date);
        }
    }

    // Month and year only: pin to the first of the month.
    let with_day = format!("1 {}", token);
    for format in ["%d %b %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&with_day, format) {
            return Some(date);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", token), "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1/{}", token), "%d/%m/%Y") {
        return Some(date);
    }

    // Bare year.
    match token.parse::<i32>() {
        Ok(year) if (1000..=9999).contains(&year) => NaiveDate::from_ymd_opt(year, 1, 1),
        _ => None,
    }
}

// First matching bucket wins.
const INDUSTRY_RULES: &[(Glyph, &[&str])] = &[
    (Glyph::Laptop, &["tech", "soft", "digital", "labs", "innovations"]),
    (Glyph::TrendingUp, &["startup", "xyz"]),
    (Glyph::Factory, &["factory", "manufacturing", "industrial"]),
];

const ACHIEVEMENT_RULES: &[(Glyph, &[&str])] = &[
    (Glyph::Users, &["user", "customer", "people"]),
    (Glyph::Zap, &["performance", "faster", "speed", "improve", "%"]),
    (Glyph::TrendingUp, &["growth", "increase", "revenue", "sales"]),
    (Glyph::Clock, &["time", "hour", "day", "save"]),
];

pub fn industry_icon(company: &str) -> Glyph {
    first_match(INDUSTRY_RULES, company).unwrap_or(Glyph::Building)
}

pub fn achievement_icon(achievement: &str) -> Glyph {
    first_match(ACHIEVEMENT_RULES, achievement).unwrap_or(Glyph::CheckCircle)
}

fn first_match(rules: &[(Glyph, &[&str])], text: &str) -> Option<Glyph> {
    let text = text.to_lowercase();
    rules
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| text.contains(m)))
        .map(|(glyph, _)| *glyph)
}
