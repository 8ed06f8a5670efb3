#![forbid(unsafe_code)]
use affectation::{
    clock::{Clock, FixedClock, SystemClock},
    layout::{build_rows, LayoutOptions, RowKey},
    model::{AssignmentId, Person, Project},
    scheduler::{AssignmentChange, SchedError, Scheduler},
    storage::{JsonStorage, Storage},
    timeline::{build_timeline, Granularity, TimelineRequest},
};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI d'affectation de personnes à des projets
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du plan
    #[arg(long, global = true, default_value = "plan.json")]
    plan: String,

    /// Date du jour (YYYY-MM-DD), par défaut la date UTC courante
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter une personne
    AddPerson {
        #[arg(long)]
        handle: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        team: Option<String>,
    },

    /// Ajouter un projet
    AddProject {
        #[arg(long)]
        name: String,
        #[arg(long)]
        team: Option<String>,
    },

    /// Affecter une personne à un projet (refusé en cas de conflit)
    Assign {
        /// handle de la personne
        #[arg(long)]
        person: String,
        /// nom du projet
        #[arg(long)]
        project: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// YYYY-MM-DD (inclus)
        #[arg(long)]
        end: NaiveDate,
    },

    /// Modifier une affectation (dates, personne ou projet)
    Move {
        #[arg(long)]
        id: String,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(long)]
        person: Option<String>,
        #[arg(long)]
        project: Option<String>,
    },

    /// Supprimer une affectation
    Remove {
        #[arg(long)]
        id: String,
    },

    /// Lister les affectations
    List,

    /// Vérifier les conflits
    Check {
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Afficher le placement en lanes de chaque ligne
    Lanes {
        #[arg(long, value_enum, default_value_t = RowBy::Person)]
        by: RowBy,
        #[arg(long, default_value = "month")]
        granularity: Granularity,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
        #[arg(long, default_value_t = 40.0)]
        column_width: f64,
        #[arg(long, default_value_t = 24.0)]
        lane_height: f64,
        #[arg(long, default_value_t = 4.0)]
        lane_gap: f64,
        #[arg(long, default_value_t = 8.0)]
        min_bar_width: f64,
    },

    /// Afficher les colonnes de la timeline
    Timeline {
        #[arg(long, default_value = "month")]
        granularity: Granularity,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RowBy {
    Person,
    Project,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };

    let storage = JsonStorage::open(&cli.plan)?;
    let mut scheduler = Scheduler::from_plan(storage.load()?);

    let code = match cli.cmd {
        Commands::AddPerson { handle, name, team } => {
            if scheduler.plan().find_person_by_handle(&handle).is_some() {
                return Err(anyhow!("person already exists: {handle}"));
            }
            let mut person = Person::new(handle, name);
            person.team = team;
            println!("{}", person.id.as_str());
            scheduler.add_people(vec![person]);
            storage.save(scheduler.plan())?;
            0
        }
        Commands::AddProject { name, team } => {
            if scheduler.plan().find_project_by_name(&name).is_some() {
                return Err(anyhow!("project already exists: {name}"));
            }
            let mut project = Project::new(name);
            project.team = team;
            println!("{}", project.id.as_str());
            scheduler.add_projects(vec![project]);
            storage.save(scheduler.plan())?;
            0
        }
        Commands::Assign {
            person,
            project,
            start,
            end,
        } => {
            let person_id = scheduler
                .plan()
                .find_person_by_handle(&person)
                .map(|p| p.id.clone())
                .ok_or_else(|| anyhow!("unknown person: {}", person))?;
            let project_id = scheduler
                .plan()
                .find_project_by_name(&project)
                .map(|p| p.id.clone())
                .ok_or_else(|| anyhow!("unknown project: {}", project))?;
            match scheduler.create_assignment(&person_id, &project_id, start, end) {
                Ok(id) => {
                    storage.save(scheduler.plan())?;
                    println!("{}", id.as_str());
                    0
                }
                Err(SchedError::Conflict { conflicting }) => {
                    report_conflicts(&scheduler, &person, &conflicting);
                    2
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Move {
            id,
            start,
            end,
            person,
            project,
        } => {
            let person = person
                .map(|h| {
                    scheduler
                        .plan()
                        .find_person_by_handle(&h)
                        .map(|p| p.id.clone())
                        .ok_or_else(|| anyhow!("unknown person: {}", h))
                })
                .transpose()?;
            let project = project
                .map(|n| {
                    scheduler
                        .plan()
                        .find_project_by_name(&n)
                        .map(|p| p.id.clone())
                        .ok_or_else(|| anyhow!("unknown project: {}", n))
                })
                .transpose()?;
            let change = AssignmentChange {
                person,
                project,
                start,
                end,
            };
            let aid = AssignmentId::new(&id);
            match scheduler.update_assignment(&aid, &change) {
                Ok(_) => {
                    storage.save(scheduler.plan())?;
                    0
                }
                Err(SchedError::Conflict { conflicting }) => {
                    report_conflicts(&scheduler, &id, &conflicting);
                    2
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Remove { id } => {
            scheduler.delete_assignment(&AssignmentId::new(id))?;
            storage.save(scheduler.plan())?;
            0
        }
        Commands::List => {
            let plan = scheduler.plan();
            for a in &plan.assignments {
                let person = plan
                    .find_person_by_id(&a.person)
                    .map(|p| p.handle.as_str())
                    .unwrap_or("-");
                let project = plan
                    .find_project_by_id(&a.project)
                    .map(|p| p.name.as_str())
                    .unwrap_or("-");
                println!(
                    "{} | {} → {} | {} | {}",
                    a.id.as_str(),
                    a.start,
                    a.end,
                    person,
                    project
                );
            }
            0
        }
        Commands::Check { report } => {
            let conflicts = scheduler.detect_conflicts();
            if conflicts.is_empty() {
                println!("OK: no conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                if let Some(path) = report {
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["person_id", "assignment_a", "assignment_b"])?;
                    for c in &conflicts {
                        w.write_record([
                            c.person.as_str(),
                            c.assignment_a.as_str(),
                            c.assignment_b.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = conflits
                2
            }
        }
        Commands::Lanes {
            by,
            granularity,
            offset,
            column_width,
            lane_height,
            lane_gap,
            min_bar_width,
        } => {
            let plan = scheduler.plan();
            let timeline = build_timeline(
                TimelineRequest::from_clock(granularity, clock.as_ref())
                    .with_offset(offset)
                    .with_data_extent(plan.date_extent()),
            );
            let options = LayoutOptions {
                column_width,
                lane_height,
                lane_gap,
                min_bar_width,
            };
            let key = match by {
                RowBy::Person => RowKey::Person,
                RowBy::Project => RowKey::Project,
            };
            for row in build_rows(plan, key, &timeline, &options) {
                println!("{} ({} lane(s), {}px)", row.label, row.lane_count, row.height);
                for bar in &row.bars {
                    println!(
                        "  lane {} | {} | left={:.1} top={:.1} width={:.1}",
                        bar.lane,
                        bar.assignment.as_str(),
                        bar.left,
                        bar.top,
                        bar.width
                    );
                }
            }
            0
        }
        Commands::Timeline {
            granularity,
            offset,
        } => {
            let timeline = build_timeline(
                TimelineRequest::from_clock(granularity, clock.as_ref())
                    .with_offset(offset)
                    .with_data_extent(scheduler.plan().date_extent()),
            );
            println!(
                "{} → {} ({} column(s))",
                timeline.range_start,
                timeline.range_end,
                timeline.columns.len()
            );
            for group in timeline.group_headers() {
                println!("[{}] x{}", group.label, group.span);
            }
            for column in &timeline.columns {
                let marker = if column.is_today(clock.today()) { " *" } else { "" };
                println!(
                    "{} | {} | {}d{}",
                    column.start,
                    column.label(),
                    column.width_in_days(),
                    marker
                );
            }
            0
        }
    };

    std::process::exit(code);
}

fn report_conflicts(scheduler: &Scheduler, subject: &str, conflicting: &[affectation::Assignment]) {
    eprintln!("Conflict for {subject}:");
    for line in scheduler.describe_conflicts(conflicting) {
        eprintln!("  - {line}");
    }
}
