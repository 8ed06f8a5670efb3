mod assignment;
mod conflicts;
mod lanes;
mod mutate;
mod types;
mod util;

pub use conflicts::{detect_conflicts, find_conflicts};
pub use lanes::assign_lanes;
pub use types::{AssignmentChange, Conflict, LaneAssignment, SchedError};

use crate::model::{Assignment, AssignmentId, Person, PersonId, Plan, Project, ProjectId};
use chrono::NaiveDate;

/// Scheduler : encapsule un Plan et applique le protocole de commit
/// (vérification des conflits avant toute création ou modification).
#[derive(Debug, Default)]
pub struct Scheduler {
    plan: Plan,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            plan: Plan::default(),
        }
    }

    pub fn from_plan(plan: Plan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }
    pub fn plan_mut(&mut self) -> &mut Plan {
        &mut self.plan
    }
    pub fn into_plan(self) -> Plan {
        self.plan
    }

    pub fn add_people(&mut self, people: Vec<Person>) {
        self.plan.people.extend(people);
    }

    pub fn add_projects(&mut self, projects: Vec<Project>) {
        self.plan.projects.extend(projects);
    }

    /// Crée une affectation ; refusée si elle chevauche une affectation de la même personne.
    pub fn create_assignment(
        &mut self,
        person: &PersonId,
        project: &ProjectId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AssignmentId, SchedError> {
        assignment::create_assignment(self, person, project, start, end)
    }

    /// Modifie une affectation ; en cas de conflit rien n'est changé.
    /// Retourne la valeur d'avant modification.
    pub fn update_assignment(
        &mut self,
        id: &AssignmentId,
        change: &AssignmentChange,
    ) -> Result<Assignment, SchedError> {
        mutate::update_assignment(self, id, change)
    }

    pub fn delete_assignment(&mut self, id: &AssignmentId) -> Result<Assignment, SchedError> {
        mutate::delete_assignment(self, id)
    }

    pub fn find_conflicts(
        &self,
        person: &PersonId,
        start: NaiveDate,
        end: NaiveDate,
        exclude: Option<&AssignmentId>,
    ) -> Vec<&Assignment> {
        conflicts::find_conflicts(&self.plan.assignments, person, start, end, exclude)
    }

    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        conflicts::detect_conflicts(&self.plan)
    }

    /// Une ligne par conflit : `<projet> (<début> → <fin>)`.
    pub fn describe_conflicts(&self, conflicting: &[Assignment]) -> Vec<String> {
        conflicting
            .iter()
            .map(|a| {
                let project = self
                    .plan
                    .find_project_by_id(&a.project)
                    .map(|p| p.name.as_str())
                    .unwrap_or(a.project.as_str());
                format!("{project} ({} → {})", a.start, a.end)
            })
            .collect()
    }
}
