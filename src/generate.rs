use crate::calendar::CalendarSpan;
use crate::engine::{self, Warning};
use crate::model::{PreferenceIndex, ScheduleEntry};
use crate::storage::Storage;
use anyhow::Result;
use tracing::info;

/// Bilan d'un run de génération.
#[derive(Debug)]
pub struct RunReport {
    pub total_slots: usize,
    pub filled: usize,
    pub locked: usize,
    pub warnings: Vec<Warning>,
}

impl RunReport {
    /// Un planning (presque) entièrement vide signale des données roster ou
    /// préférences à inspecter, pas un succès silencieux.
    pub fn is_degenerate(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Génère le planning d'un scope : charge le document, déroule la période,
/// affecte, remplace les lignes non verrouillées et sauvegarde.
///
/// Les échecs d'E/S remontent tels quels ; aucun commit partiel, la seule
/// écriture est le `save` atomique final.
pub fn generate_schedule(storage: &dyn Storage, span: &CalendarSpan) -> Result<RunReport> {
    let mut roster = storage.load()?;
    roster.sort_staff();

    let slots = span.expand();
    let locks: Vec<ScheduleEntry> = roster.locked_entries().cloned().collect();
    let prefs = PreferenceIndex::from_records(&roster.preferences);

    let outcome = engine::assign(&slots, &roster.staff, &prefs, &locks);

    let report = RunReport {
        total_slots: outcome.entries.len(),
        filled: outcome.entries.iter().filter(|e| e.staff.is_some()).count(),
        locked: locks.len(),
        warnings: outcome.warnings,
    };

    roster.replace_unlocked(outcome.entries);
    storage.save(&roster)?;

    info!(
        total = report.total_slots,
        filled = report.filled,
        locked = report.locked,
        warnings = report.warnings.len(),
        "schedule generated"
    );
    Ok(report)
}
