use super::state::WorkloadState;
use crate::model::{ScheduleEntry, ShiftKind, StaffId};
use chrono::NaiveDate;

/// Diagnostics non fatals d'un run. Remontés dans le résultat (et tracés),
/// jamais convertis en erreur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Aucun membre éligible pour le scope : planning généré entièrement vide.
    EmptyRoster,
    /// Aucun candidat pour ce créneau ; il reste non pourvu.
    UnfilledSlot { date: NaiveDate, kind: ShiftKind },
}

/// Résultat d'une passe d'affectation : lignes verrouillées reprises telles
/// quelles + lignes calculées, triées par (date, kind).
#[derive(Debug)]
pub struct RunOutcome {
    pub entries: Vec<ScheduleEntry>,
    pub warnings: Vec<Warning>,
    /// État de charge final par membre (verrous inclus), dans l'ordre du
    /// roster fourni. Utile aux tests de runs partiels et au tally.
    pub workloads: Vec<(StaffId, WorkloadState)>,
}
