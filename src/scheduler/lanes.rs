use super::LaneAssignment;
use crate::model::Assignment;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Répartit les affectations d'une ligne en lanes sans chevauchement.
///
/// Glouton par ordre `(start, end)` croissant : chaque affectation prend la
/// première lane dont la dernière fin est strictement avant son début, sinon
/// ouvre une nouvelle lane. L'id départage les doublons exacts, ce qui rend le
/// résultat indépendant de l'ordre d'entrée.
pub fn assign_lanes<'a, I>(assignments: I) -> LaneAssignment
where
    I: IntoIterator<Item = &'a Assignment>,
{
    let mut sorted: Vec<&Assignment> = assignments.into_iter().collect();
    sorted.sort_by(|a, b| (a.start, a.end, &a.id).cmp(&(b.start, b.end, &b.id)));

    let mut lane_ends: Vec<NaiveDate> = Vec::new();
    let mut lanes = HashMap::with_capacity(sorted.len());

    for a in sorted {
        let lane = match lane_ends.iter().position(|end| *end < a.start) {
            Some(lane) => {
                lane_ends[lane] = a.end;
                lane
            }
            None => {
                lane_ends.push(a.end);
                lane_ends.len() - 1
            }
        };
        lanes.insert(a.id.clone(), lane);
    }

    let lane_count = lane_ends.len().max(1);
    tracing::trace!(items = lanes.len(), lane_count, "lanes assigned");

    LaneAssignment { lanes, lane_count }
}
