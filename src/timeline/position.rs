use super::Column;
use chrono::NaiveDate;

/// Largeur minimale d'une barre, en pixels.
pub const MIN_BAR_WIDTH: f64 = 8.0;

/// Position horizontale d'une barre, en pixels depuis le début de la timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPosition {
    pub left: f64,
    pub width: f64,
}

/// Projette `[start, end]` sur la timeline avec la largeur minimale par défaut.
pub fn bar_position(
    start: NaiveDate,
    end: NaiveDate,
    columns: &[Column],
    column_width: f64,
) -> BarPosition {
    bar_position_with_min(start, end, columns, column_width, MIN_BAR_WIDTH)
}

/// Densité = largeur totale / nombre total de jours ; la fin est incluse,
/// une barre d'un jour occupe donc un jour de largeur.
pub fn bar_position_with_min(
    start: NaiveDate,
    end: NaiveDate,
    columns: &[Column],
    column_width: f64,
    min_width: f64,
) -> BarPosition {
    let (Some(first), Some(last)) = (columns.first(), columns.last()) else {
        return BarPosition {
            left: 0.0,
            width: min_width,
        };
    };

    let total_days = ((last.end - first.start).num_days() + 1).max(1) as f64;
    let total_width = columns.len() as f64 * column_width;
    let px_per_day = total_width / total_days;

    let left = (start - first.start).num_days() as f64 * px_per_day;
    let width = ((end - start).num_days() + 1) as f64 * px_per_day;

    BarPosition {
        left,
        width: width.max(min_width),
    }
}
