use super::{conflicts, util, AssignmentChange, SchedError, Scheduler};
use crate::model::{Assignment, AssignmentId};

pub(super) fn update_assignment(
    scheduler: &mut Scheduler,
    id: &AssignmentId,
    change: &AssignmentChange,
) -> Result<Assignment, SchedError> {
    let Some(pos) = util::find_assignment_index(&scheduler.plan.assignments, id) else {
        return Err(SchedError::UnknownAssignment(id.as_str().to_string()));
    };

    let proposed = change.apply_to(&scheduler.plan.assignments[pos]);
    if proposed.end < proposed.start {
        return Err(SchedError::InvalidDateRange);
    }
    scheduler.ensure_known(&proposed.person, &proposed.project)?;

    let conflicting = conflicts::find_conflicts(
        &scheduler.plan.assignments,
        &proposed.person,
        proposed.start,
        proposed.end,
        Some(id),
    );
    if !conflicting.is_empty() {
        // l'original reste en place : l'appelant revient à l'état d'avant
        tracing::warn!(
            id = id.as_str(),
            conflicts = conflicting.len(),
            "assignment update rejected"
        );
        return Err(SchedError::Conflict {
            conflicting: conflicting.into_iter().cloned().collect(),
        });
    }

    let previous = std::mem::replace(&mut scheduler.plan.assignments[pos], proposed);
    tracing::debug!(
        id = id.as_str(),
        start = %scheduler.plan.assignments[pos].start,
        end = %scheduler.plan.assignments[pos].end,
        "assignment updated"
    );
    Ok(previous)
}

pub(super) fn delete_assignment(
    scheduler: &mut Scheduler,
    id: &AssignmentId,
) -> Result<Assignment, SchedError> {
    let Some(pos) = util::find_assignment_index(&scheduler.plan.assignments, id) else {
        return Err(SchedError::UnknownAssignment(id.as_str().to_string()));
    };
    let removed = scheduler.plan.assignments.remove(pos);
    tracing::debug!(id = id.as_str(), "assignment deleted");
    Ok(removed)
}
