use crate::model::Roster;
use anyhow::{bail, Context};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Accès au document d'une équipe. Une implémentation couvre exactement un
/// tenant ; deux scopes distincts sont indépendants (parallélisables), la
/// sérialisation de runs concurrents sur un même scope reste à l'appelant.
pub trait Storage {
    /// Charge le document du scope.
    fn load(&self) -> anyhow::Result<Roster>;
    /// Sauvegarde atomique : le remplacement delete-then-insert du planning
    /// ne devient visible qu'avec ce commit unique.
    fn save(&self, roster: &Roster) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Un fichier `<dir>/<scope>.json` par équipe.
    pub fn open_scope<P: AsRef<Path>>(dir: P, scope: &str) -> anyhow::Result<Self> {
        if scope.is_empty() || scope.contains(['/', '\\']) {
            bail!("invalid scope name: {scope:?}");
        }
        Ok(Self {
            path: dir.as_ref().join(format!("{scope}.json")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Roster> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let roster: Roster = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(roster)
    }

    fn save(&self, roster: &Roster) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(roster)?;
        let mut tmp = NamedTempFile::new_in(self.path.parent().unwrap_or_else(|| Path::new(".")))
            .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
