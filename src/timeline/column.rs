use super::Granularity;
use chrono::{Datelike, NaiveDate};

/// Une colonne = un bucket de la timeline, bornes incluses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    pub granularity: Granularity,
    pub start: NaiveDate,
    /// Dernier jour du bucket.
    pub end: NaiveDate,
}

impl Column {
    /// Nombre de jours du bucket (28 à 31 pour un mois, 90 à 92 pour un trimestre).
    pub fn width_in_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Libellé court : jour du mois, `W<semaine ISO>`, mois abrégé ou `Q<n>`.
    pub fn label(&self) -> String {
        match self.granularity {
            Granularity::Day => self.start.day().to_string(),
            Granularity::Week => format!("W{}", self.start.iso_week().week()),
            Granularity::Month => self.start.format("%b").to_string(),
            Granularity::Quarter => format!("Q{}", self.start.month0() / 3 + 1),
        }
    }

    /// Libellé de regroupement : mois + année pour jour/semaine, année sinon.
    pub fn group_label(&self) -> String {
        match self.granularity {
            Granularity::Day | Granularity::Week => self.start.format("%b %Y").to_string(),
            Granularity::Month | Granularity::Quarter => self.start.year().to_string(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        match self.granularity {
            Granularity::Day => self.start == today,
            _ => self.contains(today),
        }
    }
}

/// En-tête regroupant des colonnes consécutives de même `group_label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    pub label: String,
    pub start: NaiveDate,
    /// Nombre de colonnes couvertes.
    pub span: usize,
}

pub fn group_columns(columns: &[Column]) -> Vec<ColumnGroup> {
    let mut groups: Vec<ColumnGroup> = Vec::new();
    for column in columns {
        let label = column.group_label();
        match groups.last_mut() {
            Some(last) if last.label == label => last.span += 1,
            _ => groups.push(ColumnGroup {
                label,
                start: column.start,
                span: 1,
            }),
        }
    }
    groups
}
