use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NowReport {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub rfc3339: String,
}

pub fn now() -> Result<NowReport> {
    let now = OffsetDateTime::now_utc();
    Ok(NowReport {
        unix_seconds: now.unix_timestamp(),
        unix_millis: (now.unix_timestamp_nanos() / 1_000_000) as i64,
        rfc3339: now.format(&Rfc3339).context("format current time")?,
    })
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DateReport {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub rfc3339: String,
    pub utc: String,
    pub relative: String,
}

/// Converts a unix timestamp. Values at or above 10^12 are read as
/// milliseconds, smaller ones as seconds (a seconds value that large would
/// be past the year 33600).
pub fn epoch_to_date(value: i64) -> Result<DateReport> {
    let millis = if value.unsigned_abs() >= 1_000_000_000_000 {
        value
    } else {
        value
            .checked_mul(1000)
            .with_context(|| format!("timestamp {} out of range", value))?
    };
    let date = OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * 1_000_000)
        .with_context(|| format!("timestamp {} out of range", value))?;
    report(date, OffsetDateTime::now_utc())
}

pub fn date_to_epoch(input: &str) -> Result<DateReport> {
    let date = OffsetDateTime::parse(input.trim(), &Rfc3339)
        .with_context(|| format!("parse {:?} as RFC 3339", input.trim()))?;
    report(date, OffsetDateTime::now_utc())
}

fn report(date: OffsetDateTime, now: OffsetDateTime) -> Result<DateReport> {
    Ok(DateReport {
        unix_seconds: date.unix_timestamp(),
        unix_millis: (date.unix_timestamp_nanos() / 1_000_000) as i64,
        rfc3339: date.format(&Rfc3339).context("format rfc3339")?,
        utc: format_utc(date),
        relative: relative_to(date, now),
    })
}

fn format_utc(date: OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
        date.year(),
        u8::from(date.month()),
        date.day(),
        date.hour(),
        date.minute(),
        date.second()
    )
}

/// "N seconds/minutes/hours/days ago" (or "from now"), falling back to the
/// plain date once the distance passes 30 days.
fn relative_to(date: OffsetDateTime, now: OffsetDateTime) -> String {
    let diff_secs = (now - date).whole_seconds();
    let suffix = if diff_secs < 0 { "from now" } else { "ago" };

    let secs = diff_secs.abs();
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if secs < 60 {
        format!("{} seconds {}", secs, suffix)
    } else if mins < 60 {
        format!("{} minutes {}", mins, suffix)
    } else if hours < 24 {
        format!("{} hours {}", hours, suffix)
    } else if days < 30 {
        format!("{} days {}", days, suffix)
    } else {
        format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )
    }
}
