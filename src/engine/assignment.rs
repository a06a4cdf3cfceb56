use super::types::{RunOutcome, Warning};
use super::{scoring, state::WorkloadState};
use crate::model::{PrefStatus, PreferenceIndex, ScheduleEntry, ShiftKind, ShiftSlot, StaffMember};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, warn};

pub(super) fn assign(
    slots: &[ShiftSlot],
    staff: &[StaffMember],
    prefs: &PreferenceIndex,
    locks: &[ScheduleEntry],
) -> RunOutcome {
    let mut warnings = Vec::new();
    let mut states: Vec<WorkloadState> = vec![WorkloadState::default(); staff.len()];
    let mut entries: Vec<ScheduleEntry> = Vec::with_capacity(slots.len());

    // Amorçage : les verrous comptent dans la charge de leur titulaire et
    // leurs créneaux ne sont jamais revisités.
    let mut fixed: HashSet<(NaiveDate, ShiftKind)> = HashSet::new();
    for lock in locks {
        fixed.insert((lock.date, lock.kind));
        if let Some(holder) = &lock.staff {
            if let Some(i) = staff.iter().position(|m| &m.id == holder) {
                states[i].record(lock.date, lock.kind);
            }
        }
        entries.push(lock.clone());
    }

    if staff.is_empty() {
        warn!("empty roster: schedule generated fully unassigned");
        warnings.push(Warning::EmptyRoster);
    }

    // Les créneaux les plus contraints d'abord ; le tri stable préserve
    // l'ordre des dates au sein d'une même catégorie.
    let mut open: Vec<&ShiftSlot> = slots
        .iter()
        .filter(|s| !fixed.contains(&(s.date, s.kind)))
        .collect();
    open.sort_by_key(|s| s.kind.fill_priority());

    for slot in open {
        let candidates: Vec<usize> = (0..staff.len())
            .filter(|&i| {
                !states[i].holds(slot.date)
                    && prefs.status_for(&staff[i].id, slot.date) != PrefStatus::Excused
            })
            .collect();

        // min_by_key retient le premier minimum : à score égal, l'ordre du
        // roster (id croissant, trié au chargement) départage.
        let winner = candidates.into_iter().min_by_key(|&i| {
            scoring::score(
                slot,
                prefs.status_for(&staff[i].id, slot.date),
                &states[i],
                staff[i].handicap,
            )
        });

        match winner {
            Some(i) => {
                debug!(date = %slot.date, kind = %slot.kind, staff = %staff[i].handle, "slot assigned");
                states[i].record(slot.date, slot.kind);
                entries.push(ScheduleEntry {
                    date: slot.date,
                    kind: slot.kind,
                    staff: Some(staff[i].id.clone()),
                    locked: false,
                });
            }
            None => {
                warn!(date = %slot.date, kind = %slot.kind, "no eligible candidate, slot left open");
                warnings.push(Warning::UnfilledSlot {
                    date: slot.date,
                    kind: slot.kind,
                });
                entries.push(ScheduleEntry {
                    date: slot.date,
                    kind: slot.kind,
                    staff: None,
                    locked: false,
                });
            }
        }
    }

    entries.sort_by_key(|e| (e.date, e.kind));

    let workloads = staff
        .iter()
        .map(|m| m.id.clone())
        .zip(states)
        .collect();

    RunOutcome {
        entries,
        warnings,
        workloads,
    }
}
