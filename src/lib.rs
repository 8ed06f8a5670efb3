#![forbid(unsafe_code)]
//! Affectation — planification de personnes sur des projets, rendue en Gantt.
//!
//! - Détection de conflits (une seule affectation par personne et par jour).
//! - Placement en lanes des affectations qui se chevauchent sur une ligne.
//! - Colonnes de timeline jour/semaine/mois/trimestre, navigation et zoom.
//! - Dates calendaires uniquement, bornes incluses ; la date du jour est injectée.

pub mod clock;
pub mod layout;
pub mod model;
pub mod scheduler;
pub mod storage;
pub mod timeline;

pub use clock::{Clock, FixedClock, SystemClock};
pub use layout::{build_rows, layout_row, BarLayout, LayoutOptions, RowKey, RowLayout};
pub use model::{
    Assignment, AssignmentId, DateRange, Person, PersonId, Plan, Project, ProjectId,
};
pub use scheduler::{
    assign_lanes, detect_conflicts, find_conflicts, AssignmentChange, Conflict, LaneAssignment,
    SchedError, Scheduler,
};
pub use storage::{JsonStorage, MemoryStorage, Storage};
pub use timeline::{
    bar_position, build_timeline, BarPosition, Column, ColumnGroup, Granularity, Timeline,
    TimelineRequest,
};
