use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Taille d'une colonne de la timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
    Quarter,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown granularity `{0}` (expected day, week, month or quarter)")]
pub struct ParseGranularityError(String);

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "d" => Ok(Self::Day),
            "week" | "w" => Ok(Self::Week),
            "month" | "m" => Ok(Self::Month),
            "quarter" | "q" => Ok(Self::Quarter),
            other => Err(ParseGranularityError(other.to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        })
    }
}

impl Granularity {
    /// Début du bucket contenant `date` (semaines commençant le lundi).
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Day => date,
            Self::Week => start_of_week(date),
            Self::Month => start_of_month(date),
            Self::Quarter => start_of_quarter(date),
        }
    }

    /// Début du bucket suivant ; `None` au-delà de la plage de chrono.
    pub fn next_bucket(self, bucket_start: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Day => bucket_start.checked_add_signed(Duration::days(1)),
            Self::Week => bucket_start.checked_add_signed(Duration::days(7)),
            Self::Month => bucket_start.checked_add_months(Months::new(1)),
            Self::Quarter => bucket_start.checked_add_months(Months::new(3)),
        }
    }

    /// Déplace `date` de `steps` pas de navigation : 7 jours, 4 semaines,
    /// 3 mois ou 2 trimestres selon la granularité. Sature aux bornes de chrono.
    pub fn shift_by_steps(self, date: NaiveDate, steps: i64) -> NaiveDate {
        match self {
            Self::Day => add_days(date, steps.saturating_mul(7)),
            Self::Week => add_days(date, steps.saturating_mul(28)),
            Self::Month => add_months(date, steps.saturating_mul(3)),
            Self::Quarter => add_months(date, steps.saturating_mul(6)),
        }
    }
}

pub(crate) fn start_of_week(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.weekday().num_days_from_monday()))
}

pub(crate) fn start_of_month(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.day0()))
}

pub(crate) fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let first = start_of_month(date);
    first
        .checked_sub_months(Months::new(date.month0() % 3))
        .unwrap_or(first)
}

pub(crate) fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let fallback = if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX };
    Duration::try_days(days)
        .and_then(|d| date.checked_add_signed(d))
        .unwrap_or(fallback)
}

pub(crate) fn add_months(date: NaiveDate, months: i64) -> NaiveDate {
    let shifted = match u32::try_from(months.unsigned_abs()) {
        Ok(n) if months < 0 => date.checked_sub_months(Months::new(n)),
        Ok(n) => date.checked_add_months(Months::new(n)),
        Err(_) => None,
    };
    shifted.unwrap_or(if months < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}
