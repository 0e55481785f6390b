// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use blood_bank_domain::parse_iso_date;
use std::borrow::Cow;
use std::cmp::Ordering;
use time::Date;
use time::macros::date;

/// Missing or unparseable dates sort as this day.
const EPOCH: Date = date!(1970 - 01 - 01);

/// A field's value as seen by search, filter and sort.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Free text, including ISO dates.
    Text(Cow<'a, str>),
    /// A number.
    Number(f64),
    /// An enumeration with a display label and a sort rank.
    Ranked(&'static str, f64),
    /// The record has no value for this field.
    Missing,
}

impl<'a> FieldValue<'a> {
    /// Wraps a borrowed string.
    #[must_use]
    pub const fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    /// Wraps an optional borrowed string, mapping `None` to [`FieldValue::Missing`].
    #[must_use]
    pub fn optional_text(value: Option<&'a str>) -> Self {
        value.map_or(Self::Missing, Self::text)
    }

    /// Wraps an integer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn integer(value: i64) -> Self {
        Self::Number(value as f64)
    }

    /// Renders the value as text for search and category matching.
    #[must_use]
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            Self::Number(number) => Cow::Owned(render_number(*number)),
            Self::Ranked(label, _) => Cow::Borrowed(*label),
            Self::Missing => Cow::Borrowed(""),
        }
    }

    fn as_number(&self) -> f64 {
        match self {
            Self::Number(number) | Self::Ranked(_, number) => *number,
            Self::Text(text) => text.trim().parse().unwrap_or(0.0),
            Self::Missing => 0.0,
        }
    }

    fn as_date(&self) -> Date {
        match self {
            Self::Text(text) => parse_iso_date(text).unwrap_or(EPOCH),
            _ => EPOCH,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

/// How a sortable field is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Comparator {
    /// Case-insensitive lexicographic.
    #[default]
    Text,
    /// Chronological on the leading `YYYY-MM-DD`.
    Date,
    /// Numeric.
    Numeric,
}

impl Comparator {
    /// Orders two field values in ascending order.
    ///
    /// Missing values compare as the empty string, zero or the epoch.
    #[must_use]
    pub fn compare(self, left: &FieldValue<'_>, right: &FieldValue<'_>) -> Ordering {
        match self {
            Self::Text => left
                .render()
                .to_lowercase()
                .cmp(&right.render().to_lowercase()),
            Self::Date => left.as_date().cmp(&right.as_date()),
            Self::Numeric => left.as_number().total_cmp(&right.as_number()),
        }
    }
}

/// A record that can appear on a list page.
pub trait ListItem {
    /// The record's addressable fields.
    type Field: Copy + Eq + std::fmt::Debug;

    /// Returns the value of `field` for this record.
    fn field_value(&self, field: Self::Field) -> FieldValue<'_>;
}
