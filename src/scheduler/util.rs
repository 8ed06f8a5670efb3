use crate::model::{Assignment, AssignmentId, DateRange};
use chrono::NaiveDate;

/// Chevauchement fermé, via `DateRange::overlaps`.
pub(super) fn overlaps(assignment: &Assignment, start: NaiveDate, end: NaiveDate) -> bool {
    assignment.range().overlaps(&DateRange { start, end })
}

pub(super) fn find_assignment_index(
    assignments: &[Assignment],
    id: &AssignmentId,
) -> Option<usize> {
    assignments.iter().position(|a| &a.id == id)
}
