use super::{util, Conflict};
use crate::model::{Assignment, AssignmentId, PersonId, Plan};
use chrono::NaiveDate;

/// Affectations de `person` qui chevauchent `[start, end]`, hors `exclude`.
///
/// L'appelant garantit `start <= end`. Liste vide si aucun conflit.
pub fn find_conflicts<'a>(
    assignments: &'a [Assignment],
    person: &PersonId,
    start: NaiveDate,
    end: NaiveDate,
    exclude: Option<&AssignmentId>,
) -> Vec<&'a Assignment> {
    assignments
        .iter()
        .filter(|a| &a.person == person)
        .filter(|a| exclude != Some(&a.id))
        .filter(|a| util::overlaps(a, start, end))
        .collect()
}

/// Audit complet : toutes les paires qui se chevauchent, personne par personne.
pub fn detect_conflicts(plan: &Plan) -> Vec<Conflict> {
    let mut out = Vec::new();

    let mut people: Vec<&PersonId> = plan.assignments.iter().map(|a| &a.person).collect();
    people.sort();
    people.dedup();

    for person in people {
        let mut mine: Vec<&Assignment> = plan
            .assignments
            .iter()
            .filter(|a| &a.person == person)
            .collect();
        mine.sort_by(|a, b| (a.start, a.end).cmp(&(b.start, b.end)));

        for (idx, a) in mine.iter().enumerate() {
            for b in mine.iter().skip(idx + 1) {
                // trié par début : plus rien ne peut chevaucher `a`
                if !a.range().overlaps(&b.range()) {
                    break;
                }
                out.push(Conflict {
                    person: person.clone(),
                    assignment_a: a.id.clone(),
                    assignment_b: b.id.clone(),
                });
            }
        }
    }

    out
}
