mod assignment;
mod scoring;
mod state;
mod types;

pub use state::WorkloadState;
pub use types::{RunOutcome, Warning};

use crate::model::{PreferenceIndex, ScheduleEntry, ShiftSlot, StaffMember};

/// Passe d'affectation unique : consomme les créneaux, le roster, les
/// préférences et les verrous, et produit le planning complet.
///
/// Pur et synchrone ; tout l'état de travail vit dans l'appel. Un créneau
/// impossible à pourvoir n'est jamais fatal (il reste vide, avec warning) ;
/// un roster vide produit un planning entièrement vide, pas une erreur.
pub fn assign(
    slots: &[ShiftSlot],
    staff: &[StaffMember],
    prefs: &PreferenceIndex,
    locks: &[ScheduleEntry],
) -> RunOutcome {
    assignment::assign(slots, staff, prefs, locks)
}
