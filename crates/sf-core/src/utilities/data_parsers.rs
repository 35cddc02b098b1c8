//! Data parsing helpers.
//!
//! Provides functions to split date strings into their numeric components.
//! Range validation (month 1–12, day within the month) is left to the date
//! type that consumes the components.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// A trailing time component separated by `T` or a space
/// (`2024-07-08T13:45:00`, `2024-07-08 13:45`) is accepted and discarded.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let date_part = s.split(['T', ' ']).next()?;
    let parts: Vec<&str> = date_part.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 {
        return None;
    }
    let year: u16 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse a date string in `DD/MM/YYYY` format.
///
/// Returns `(year, month, day)` on success.
pub fn parse_date_slash(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u8 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let year: u16 = parts[2].parse().ok()?;
    Some((year, month, day))
}
