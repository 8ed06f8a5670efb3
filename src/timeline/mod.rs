//! Génération des colonnes de la timeline (jour, semaine, mois, trimestre).
//!
//! La plage par défaut est ancrée sur la date du jour, étendue par la
//! navigation (`offset`) puis par l'étendue des données si elle déborde.

mod column;
mod granularity;
mod position;

pub use column::{group_columns, Column, ColumnGroup};
pub use granularity::{Granularity, ParseGranularityError};
pub use position::{bar_position, bar_position_with_min, BarPosition, MIN_BAR_WIDTH};

use crate::clock::Clock;
use chrono::{Datelike, Duration, NaiveDate};
use granularity::{add_days, add_months};

/// Nombre maximal de colonnes générées, quels que soient l'offset et les données.
pub const MAX_COLUMNS: usize = 10_000;

/// Paramètres d'une vue de timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineRequest {
    pub granularity: Granularity,
    /// Pas de navigation appliqués ; 0 = vue par défaut.
    pub offset: i32,
    pub today: NaiveDate,
    /// `(date de début min, date de fin max)` des affectations, si il y en a.
    pub data_extent: Option<(NaiveDate, NaiveDate)>,
}

impl TimelineRequest {
    pub fn new(granularity: Granularity, today: NaiveDate) -> Self {
        Self {
            granularity,
            offset: 0,
            today,
            data_extent: None,
        }
    }

    /// Date du jour lue sur l'horloge injectée.
    pub fn from_clock(granularity: Granularity, clock: &dyn Clock) -> Self {
        Self::new(granularity, clock.today())
    }

    pub fn with_offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_data_extent(mut self, extent: Option<(NaiveDate, NaiveDate)>) -> Self {
        self.data_extent = extent;
        self
    }
}

/// Colonnes contiguës couvrant `[range_start, range_end]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub granularity: Granularity,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub columns: Vec<Column>,
}

impl Timeline {
    pub fn group_headers(&self) -> Vec<ColumnGroup> {
        group_columns(&self.columns)
    }

    pub fn today_column(&self, today: NaiveDate) -> Option<usize> {
        self.columns.iter().position(|c| c.is_today(today))
    }

    pub fn bar_position(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        column_width: f64,
        min_width: f64,
    ) -> BarPosition {
        bar_position_with_min(start, end, &self.columns, column_width, min_width)
    }

    pub fn total_days(&self) -> i64 {
        self.columns.iter().map(Column::width_in_days).sum()
    }
}

/// Plage par défaut avant prise en compte des données.
///
/// Un offset négatif ne recule que le début, un offset positif n'avance que la fin.
pub fn base_range(granularity: Granularity, today: NaiveDate, offset: i32) -> (NaiveDate, NaiveDate) {
    let (start, end) = match granularity {
        Granularity::Day => (
            granularity.bucket_start(add_days(today, -7)),
            add_days(today, 60),
        ),
        Granularity::Week => (
            granularity.bucket_start(add_days(today, -28)),
            add_days(today, 12 * 7),
        ),
        Granularity::Month => {
            let year_end = NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today);
            (
                granularity.bucket_start(add_months(today, -2)),
                add_months(today, 6).max(year_end),
            )
        }
        Granularity::Quarter => (
            granularity.bucket_start(add_months(today, -6)),
            add_months(today, 36),
        ),
    };

    let steps = i64::from(offset);
    if steps < 0 {
        (granularity.shift_by_steps(start, steps), end)
    } else if steps > 0 {
        (start, granularity.shift_by_steps(end, steps))
    } else {
        (start, end)
    }
}

/// Calcule les colonnes visibles pour une granularité, une navigation et une
/// étendue de données.
pub fn build_timeline(request: TimelineRequest) -> Timeline {
    let granularity = request.granularity;
    let (mut range_start, mut range_end) = base_range(granularity, request.today, request.offset);

    if let Some((data_min, data_max)) = request.data_extent {
        if data_min < range_start {
            range_start = granularity.bucket_start(data_min);
        }
        if data_max > range_end {
            range_end = data_max;
        }
    }

    let mut columns = Vec::new();
    let mut cursor = Some(granularity.bucket_start(range_start));
    // jour : s'arrête au bucket contenant `range_end` ; semaine, mois et
    // trimestre : un bucket de plus après celui-ci
    let trailing = usize::from(granularity != Granularity::Day);
    let mut past_end = 0usize;
    while let Some(start) = cursor {
        if start > range_end {
            if past_end == trailing {
                break;
            }
            past_end += 1;
        }
        if columns.len() == MAX_COLUMNS {
            tracing::warn!(
                %granularity,
                offset = request.offset,
                max_columns = MAX_COLUMNS,
                "timeline truncated"
            );
            break;
        }
        let next = granularity.next_bucket(start);
        let end = next
            .and_then(|n| n.checked_sub_signed(Duration::days(1)))
            .unwrap_or(NaiveDate::MAX);
        columns.push(Column {
            granularity,
            start,
            end,
        });
        cursor = next;
    }

    tracing::debug!(
        %granularity,
        offset = request.offset,
        %range_start,
        %range_end,
        columns = columns.len(),
        "timeline built"
    );

    Timeline {
        granularity,
        range_start,
        range_end,
        columns,
    }
}
