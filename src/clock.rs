use chrono::{NaiveDate, Utc};

/// Source de la date du jour, injectée dans le calcul de la timeline.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Date UTC courante.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Date figée (tests, option `--today` de la CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
