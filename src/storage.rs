use crate::model::{Assignment, Plan};
use anyhow::Context;
use std::cell::RefCell;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge un plan depuis un support.
    fn load(&self) -> anyhow::Result<Plan>;
    /// Sauvegarde de manière atomique.
    fn save(&self, plan: &Plan) -> anyhow::Result<()>;

    fn load_assignments(&self) -> anyhow::Result<Vec<Assignment>> {
        Ok(self.load()?.assignments)
    }

    /// Remplace les affectations en conservant personnes et projets.
    fn save_assignments(&self, assignments: &[Assignment]) -> anyhow::Result<()> {
        let mut plan = self.load()?;
        plan.assignments = assignments.to_vec();
        self.save(&plan)
    }
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self { path: path.as_ref().to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    /// Un fichier absent donne un plan vide.
    fn load(&self) -> anyhow::Result<Plan> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Plan::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let plan: Plan = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        tracing::debug!(
            path = %self.path.display(),
            assignments = plan.assignments.len(),
            "plan loaded"
        );
        Ok(plan)
    }

    fn save(&self, plan: &Plan) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(plan)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        tracing::debug!(path = %self.path.display(), "plan saved");
        Ok(())
    }
}

/// Stockage en mémoire, sans persistance.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    plan: RefCell<Plan>,
}

impl MemoryStorage {
    pub fn new(plan: Plan) -> Self {
        Self { plan: RefCell::new(plan) }
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> anyhow::Result<Plan> {
        Ok(self.plan.borrow().clone())
    }

    fn save(&self, plan: &Plan) -> anyhow::Result<()> {
        *self.plan.borrow_mut() = plan.clone();
        Ok(())
    }
}
