use super::state::WorkloadState;
use crate::model::{PrefStatus, ShiftSlot};

const KIND_WEIGHT: i64 = 10;
const LOAD_WEIGHT: i64 = 2;
const PREFER_NOT_PENALTY: i64 = 100;
const STRONGLY_PREFER_NOT_PENALTY: i64 = 500;
const ADJACENT_DAY_PENALTY: i64 = 500;

/// Score d'un candidat pour un créneau (plus bas = meilleur).
///
/// Le terme de charge vaut `2 × (total − handicap)` : un handicap positif
/// ABAISSE donc le score et attire des créneaux, à rebours de l'intitulé
/// côté admin ("positif = moins de gardes"). Formule conservée telle quelle
/// pour rester compatible avec les valeurs de handicap déjà stockées ; ne
/// pas l'inverser sans migrer ces données.
pub(super) fn score(slot: &ShiftSlot, status: PrefStatus, state: &WorkloadState, handicap: i32) -> i64 {
    let mut score = KIND_WEIGHT * i64::from(state.count_for(slot.kind));
    score += LOAD_WEIGHT * (i64::from(state.total()) - i64::from(handicap));

    score += match status {
        PrefStatus::Available => 0,
        PrefStatus::PreferNot => PREFER_NOT_PENALTY,
        PrefStatus::StronglyPreferNot => STRONGLY_PREFER_NOT_PENALTY,
        // Excused est filtré avant le scoring ; jamais atteint en pratique.
        PrefStatus::Excused => 0,
    };

    // Veille et lendemain pénalisés indépendamment (cumulables).
    if let Some(prev) = slot.date.pred_opt() {
        if state.holds(prev) {
            score += ADJACENT_DAY_PENALTY;
        }
    }
    if let Some(next) = slot.date.succ_opt() {
        if state.holds(next) {
            score += ADJACENT_DAY_PENALTY;
        }
    }

    score
}
