#![forbid(unsafe_code)]
//! Rota — bibliothèque de génération de plannings d'astreinte locale (sans BD).
//!
//! - Stockage fichiers (JSON/CSV), un fichier par équipe.
//! - Déroulé calendaire : paire week-end vendredi/samedi, `weekday` sinon.
//! - Affectation gloutonne en une passe : équilibre de charge, handicaps,
//!   préférences par date, pénalité d'adjacence, verrous préservés.
//! - Dates calendaires pures (`NaiveDate`) ; aucun fuseau en jeu.

pub mod calendar;
pub mod engine;
pub mod generate;
pub mod io;
pub mod model;
pub mod storage;

pub use calendar::CalendarSpan;
pub use engine::{assign, RunOutcome, Warning, WorkloadState};
pub use generate::{generate_schedule, RunReport};
pub use model::{
    PrefStatus, PreferenceIndex, PreferenceRecord, Roster, RotaError, ScheduleEntry, ShiftKind,
    ShiftSlot, StaffId, StaffMember,
};
pub use storage::{JsonStorage, Storage};
