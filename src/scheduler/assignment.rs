use super::{conflicts, types::SchedError, Scheduler};
use crate::model::{Assignment, AssignmentId, PersonId, ProjectId};
use chrono::NaiveDate;

pub(super) fn create_assignment(
    scheduler: &mut Scheduler,
    person: &PersonId,
    project: &ProjectId,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<AssignmentId, SchedError> {
    if end < start {
        return Err(SchedError::InvalidDateRange);
    }
    scheduler.ensure_known(person, project)?;

    let conflicting = conflicts::find_conflicts(
        &scheduler.plan.assignments,
        person,
        start,
        end,
        None,
    );
    if !conflicting.is_empty() {
        tracing::warn!(
            person = person.as_str(),
            %start,
            %end,
            conflicts = conflicting.len(),
            "assignment rejected"
        );
        return Err(SchedError::Conflict {
            conflicting: conflicting.into_iter().cloned().collect(),
        });
    }

    let assignment = Assignment::new(person.clone(), project.clone(), start, end)
        .map_err(|_| SchedError::InvalidDateRange)?;
    let id = assignment.id.clone();
    tracing::debug!(id = id.as_str(), person = person.as_str(), %start, %end, "assignment created");
    scheduler.plan.assignments.push(assignment);
    Ok(id)
}

impl Scheduler {
    pub(super) fn ensure_known(
        &self,
        person: &PersonId,
        project: &ProjectId,
    ) -> Result<(), SchedError> {
        if self.plan.find_person_by_id(person).is_none() {
            return Err(SchedError::UnknownPerson(person.as_str().to_string()));
        }
        if self.plan.find_project_by_id(project).is_none() {
            return Err(SchedError::UnknownProject(project.as_str().to_string()));
        }
        Ok(())
    }
}
