//! Date keys: normalized user date input and the paths derived from it.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback asset for images that fail to resolve.
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";

/// A date as typed by the user, normalized for path building.
///
/// Normalization keeps only ASCII digits and `-`, then splits on `-` into
/// year, month and day. Missing parts become empty strings and extra parts
/// are dropped, so a malformed date yields a malformed path rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateKey {
    raw: String,
    year: String,
    month: String,
    day: String,
}

impl DateKey {
    pub fn parse(input: &str) -> Self {
        let normalized: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect();

        let mut parts = normalized.split('-');
        let mut next = || parts.next().unwrap_or_default().to_string();
        let (year, month, day) = (next(), next(), next());

        Self {
            raw: input.to_string(),
            year,
            month,
            day,
        }
    }

    /// Current UTC date.
    pub fn today() -> Self {
        Self::from_naive(Utc::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self::parse(&date.format("%Y-%m-%d").to_string())
    }

    /// The string the key was built from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `YYYYMM`, used for both the data and image directories.
    pub fn year_month(&self) -> String {
        format!("{}{}", self.year, self.month)
    }

    /// `YYYYMMDD`, the data file stem.
    pub fn file_date(&self) -> String {
        format!("{}{}{}", self.year, self.month, self.day)
    }

    /// `data/<YYYYMM>/<YYYYMMDD>.txt`
    pub fn data_path(&self) -> String {
        format!("data/{}", self.data_file())
    }

    /// Data path relative to the data root: `<YYYYMM>/<YYYYMMDD>.txt`.
    pub fn data_file(&self) -> String {
        format!("{}/{}.txt", self.year_month(), self.file_date())
    }

    /// `images/<YYYYMM>/<image>`
    pub fn image_path(&self, image: &str) -> String {
        format!("images/{}/{}", self.year_month(), image)
    }

    /// Whether the key names a real calendar date. Never required for a load.
    pub fn is_calendar_date(&self) -> bool {
        self.to_naive().is_some()
    }

    pub fn to_naive(&self) -> Option<NaiveDate> {
        if self.year.len() != 4 || self.month.len() != 2 || self.day.len() != 2 {
            return None;
        }
        NaiveDate::parse_from_str(
            &format!("{}-{}-{}", self.year, self.month, self.day),
            "%Y-%m-%d",
        )
        .ok()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}
