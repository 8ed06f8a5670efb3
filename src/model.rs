use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Person
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(String);

impl PersonId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour Project
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour Assignment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssignmentId(String);

impl AssignmentId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Personne affectable à des projets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub handle: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl Person {
    pub fn new<H: Into<String>, D: Into<String>>(handle: H, display_name: D) -> Self {
        Self {
            id: PersonId::random(),
            handle: handle.into(),
            display_name: display_name.into(),
            team: None,
        }
    }
}

/// Projet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl Project {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: ProjectId::random(),
            name: name.into(),
            team: None,
        }
    }
}

/// Intervalle de dates calendaires fermé `[start, end]` (les deux bornes incluses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, String> {
        if end < start {
            return Err("end date must not precede start date".to_string());
        }
        Ok(Self { start, end })
    }

    /// Deux intervalles fermés se chevauchent ssi `s1 <= e2 && s2 <= e1`.
    /// Des intervalles qui se touchent (fin == début) se chevauchent.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Nombre de jours couverts, bornes incluses.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Affectation d'une personne à un projet sur des jours entiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub person: PersonId,
    pub project: ProjectId,
    #[serde(rename = "start_date")]
    pub start: NaiveDate,
    #[serde(rename = "end_date")]
    pub end: NaiveDate,
}

impl Assignment {
    /// Crée une affectation en validant que `start <= end`.
    pub fn new(
        person: PersonId,
        project: ProjectId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, String> {
        if end < start {
            return Err("end date must not precede start date".to_string());
        }
        Ok(Self {
            id: AssignmentId::random(),
            person,
            project,
            start,
            end,
        })
    }

    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start,
            end: self.end,
        }
    }

    /// Durée en jours, bornes incluses.
    pub fn duration_days(&self) -> i64 {
        self.range().len_days()
    }
}

/// Instantané complet : personnes, projets et affectations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Plan {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Plan {
    pub fn find_person_by_handle<'a>(&'a self, handle: &str) -> Option<&'a Person> {
        self.people.iter().find(|p| p.handle == handle)
    }
    pub fn find_person_by_id<'a>(&'a self, id: &PersonId) -> Option<&'a Person> {
        self.people.iter().find(|p| &p.id == id)
    }
    pub fn find_project_by_name<'a>(&'a self, name: &str) -> Option<&'a Project> {
        self.projects.iter().find(|p| p.name == name)
    }
    pub fn find_project_by_id<'a>(&'a self, id: &ProjectId) -> Option<&'a Project> {
        self.projects.iter().find(|p| &p.id == id)
    }
    pub fn find_assignment(&self, id: &AssignmentId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| &a.id == id)
    }

    /// Plus petite date de début et plus grande date de fin, `None` sans affectation.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.assignments.iter().map(|a| a.start).min()?;
        let max = self.assignments.iter().map(|a| a.end).max()?;
        Some((min, max))
    }
}
