//! Expense model and query filters
//!
//! An expense is one record of money spent. Its id is derived from the
//! expense date: the Unix timestamp of that date at local midnight. The id
//! doubles as the primary key, so two expenses recorded on the same calendar
//! date collide and the second insert is rejected. See DESIGN.md before
//! changing the id scheme.

use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
use std::fmt;

use super::money::Money;
use crate::error::{SpendlogError, SpendlogResult};

/// One recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Unique identifier: Unix timestamp of `date` at local midnight
    pub id: i64,

    /// Amount spent (two fractional digits)
    pub amount: Money,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// Free-text description, at most 255 characters
    pub description: String,
}

impl Expense {
    /// Maximum description length, matching the VARCHAR(255) column
    pub const MAX_DESCRIPTION_LEN: usize = 255;

    /// Create a new expense, deriving the id from the date
    ///
    /// # Errors
    ///
    /// Returns a validation error if the description exceeds 255 characters
    /// or the date has no representable local midnight.
    pub fn new(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> SpendlogResult<Self> {
        let description = description.into();
        if description.chars().count() > Self::MAX_DESCRIPTION_LEN {
            return Err(SpendlogError::Validation(format!(
                "Description is longer than {} characters",
                Self::MAX_DESCRIPTION_LEN
            )));
        }

        Ok(Self {
            id: Self::id_for_date(date)?,
            amount,
            date,
            description,
        })
    }

    /// Derive the expense id for a date: the Unix timestamp of that date at
    /// local midnight
    ///
    /// Deterministic per date, which is what makes same-date inserts collide
    /// on the primary key.
    pub fn id_for_date(date: NaiveDate) -> SpendlogResult<i64> {
        let midnight = date.and_time(NaiveTime::MIN);
        Local
            .from_local_datetime(&midnight)
            .earliest()
            .map(|dt| dt.timestamp())
            .ok_or_else(|| {
                SpendlogError::Validation(format!("No local midnight exists for {}", date))
            })
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.description
        )
    }
}

/// Query filter for viewing expenses
///
/// The three variants are mutually exclusive: an exact date, a calendar
/// month, or a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// All expenses on one calendar date
    Date(NaiveDate),
    /// All expenses within one calendar month
    Month { year: i32, month: u32 },
    /// All expenses within one calendar year
    Year(i32),
}

impl DateFilter {
    /// Parse an exact-date filter from "YYYY-MM-DD"
    pub fn exact(value: &str) -> SpendlogResult<Self> {
        let date = parse_date(value)?;
        Ok(Self::Date(date))
    }

    /// Parse a month filter from "YYYY-MM"
    pub fn month(value: &str) -> SpendlogResult<Self> {
        let invalid =
            || SpendlogError::Validation(format!("Invalid month: '{}'. Use YYYY-MM", value));

        let (year_str, month_str) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;

        // from_ymd_opt rejects month 0/13+; the year bound keeps range
        // arithmetic below NaiveDate::MAX
        if !(0..=9999).contains(&year) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(invalid());
        }

        Ok(Self::Month { year, month })
    }

    /// Parse a year filter from "YYYY"
    pub fn year(value: &str) -> SpendlogResult<Self> {
        let invalid = || SpendlogError::Validation(format!("Invalid year: '{}'. Use YYYY", value));

        let year: i32 = value.trim().parse().map_err(|_| invalid())?;
        if !(0..=9999).contains(&year) {
            return Err(invalid());
        }

        Ok(Self::Year(year))
    }

    /// The half-open date range [start, end) covered by this filter
    pub fn date_range(&self) -> SpendlogResult<(NaiveDate, NaiveDate)> {
        let (start, end) = match *self {
            Self::Date(date) => (Some(date), date.succ_opt()),
            Self::Month { year, month } => {
                let next = if month == 12 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(year, month + 1, 1)
                };
                (NaiveDate::from_ymd_opt(year, month, 1), next)
            }
            Self::Year(year) => (
                NaiveDate::from_ymd_opt(year, 1, 1),
                NaiveDate::from_ymd_opt(year + 1, 1, 1),
            ),
        };

        match (start, end) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(SpendlogError::Validation(format!(
                "Filter out of representable date range: {:?}",
                self
            ))),
        }
    }

    /// Short label for output headers ("date", "month", "year")
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Date(_) => "date",
            Self::Month { .. } => "month",
            Self::Year(_) => "year",
        }
    }
}

/// Parse a calendar date from "YYYY-MM-DD"
pub fn parse_date(value: &str) -> SpendlogResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        SpendlogError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", value))
    })
}
