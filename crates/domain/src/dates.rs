// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

/// Parses the calendar date at the start of an ISO 8601 string.
///
/// Both plain dates (`2026-03-01`) and timestamps (`2026-03-01T09:30:00`)
/// are accepted; anything after the first ten characters is ignored.
///
/// # Errors
///
/// Returns [`DomainError::DateParseError`] if the string does not start
/// with a valid `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    let head: &str = trimmed.get(..10).unwrap_or(trimmed);
    Date::parse(head, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}
