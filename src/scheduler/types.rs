use crate::model::{Assignment, AssignmentId, PersonId, ProjectId};
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;

/// Modification proposée d'une affectation existante ; `None` garde la valeur courante.
#[derive(Debug, Clone, Default)]
pub struct AssignmentChange {
    pub person: Option<PersonId>,
    pub project: Option<ProjectId>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl AssignmentChange {
    pub fn dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    /// Valeur post-modification, sans toucher à l'original.
    pub fn apply_to(&self, current: &Assignment) -> Assignment {
        Assignment {
            id: current.id.clone(),
            person: self.person.clone().unwrap_or_else(|| current.person.clone()),
            project: self.project.clone().unwrap_or_else(|| current.project.clone()),
            start: self.start.unwrap_or(current.start),
            end: self.end.unwrap_or(current.end),
        }
    }
}

/// Paire d'affectations qui se chevauchent pour une même personne.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub person: PersonId,
    pub assignment_a: AssignmentId,
    pub assignment_b: AssignmentId,
}

/// Résultat du placement en lanes d'une ligne d'affichage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneAssignment {
    pub lanes: HashMap<AssignmentId, usize>,
    /// Toujours >= 1, même pour une ligne vide.
    pub lane_count: usize,
}

impl LaneAssignment {
    pub fn lane_of(&self, id: &AssignmentId) -> Option<usize> {
        self.lanes.get(id).copied()
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid date range: end date must not precede start date")]
    InvalidDateRange,
    #[error("unknown person: {0}")]
    UnknownPerson(String),
    #[error("unknown project: {0}")]
    UnknownProject(String),
    #[error("unknown assignment: {0}")]
    UnknownAssignment(String),
    #[error("scheduling conflict with {} existing assignment(s)", .conflicting.len())]
    Conflict { conflicting: Vec<Assignment> },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
