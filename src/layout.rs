use crate::model::{Assignment, AssignmentId, Plan};
use crate::scheduler::assign_lanes;
use crate::timeline::Timeline;

/// Dimensions d'affichage (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub column_width: f64,
    pub lane_height: f64,
    pub lane_gap: f64,
    pub min_bar_width: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            column_width: 40.0,
            lane_height: 24.0,
            lane_gap: 4.0,
            min_bar_width: 8.0,
        }
    }
}

/// Regroupement des affectations en lignes d'affichage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKey {
    Person,
    Project,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub assignment: AssignmentId,
    pub lane: usize,
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// Id de la personne ou du projet.
    pub key: String,
    pub label: String,
    pub lane_count: usize,
    pub height: f64,
    pub bars: Vec<BarLayout>,
}

/// Une ligne par personne (ou projet) connu, dans l'ordre du plan, même sans affectation.
pub fn build_rows(
    plan: &Plan,
    key: RowKey,
    timeline: &Timeline,
    options: &LayoutOptions,
) -> Vec<RowLayout> {
    let rows: Vec<(String, String)> = match key {
        RowKey::Person => plan
            .people
            .iter()
            .map(|p| (p.id.as_str().to_string(), p.display_name.clone()))
            .collect(),
        RowKey::Project => plan
            .projects
            .iter()
            .map(|p| (p.id.as_str().to_string(), p.name.clone()))
            .collect(),
    };

    rows.into_iter()
        .map(|(id, label)| {
            let members: Vec<&Assignment> = plan
                .assignments
                .iter()
                .filter(|a| match key {
                    RowKey::Person => a.person.as_str() == id,
                    RowKey::Project => a.project.as_str() == id,
                })
                .collect();
            layout_row(id, label, &members, timeline, options)
        })
        .collect()
}

pub fn layout_row(
    key: String,
    label: String,
    assignments: &[&Assignment],
    timeline: &Timeline,
    options: &LayoutOptions,
) -> RowLayout {
    let lanes = assign_lanes(assignments.iter().copied());
    let pitch = options.lane_height + options.lane_gap;

    let mut bars: Vec<BarLayout> = assignments
        .iter()
        .map(|a| {
            let lane = lanes.lane_of(&a.id).unwrap_or(0);
            let pos = timeline.bar_position(a.start, a.end, options.column_width, options.min_bar_width);
            BarLayout {
                assignment: a.id.clone(),
                lane,
                top: lane as f64 * pitch,
                left: pos.left,
                width: pos.width,
            }
        })
        .collect();
    bars.sort_by(|a, b| a.lane.cmp(&b.lane).then(a.left.total_cmp(&b.left)));

    let height = lanes.lane_count as f64 * pitch - options.lane_gap;

    RowLayout {
        key,
        label,
        lane_count: lanes.lane_count,
        height,
        bars,
    }
}
