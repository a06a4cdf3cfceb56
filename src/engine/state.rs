use crate::model::ShiftKind;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Charge accumulée par un membre au fil d'un run : compteurs par catégorie
/// et dates déjà tenues (exclusivité journalière, pénalité d'adjacence).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadState {
    pub weekday: u32,
    pub weekend_primary: u32,
    pub weekend_secondary: u32,
    pub dates: BTreeSet<NaiveDate>,
}

impl WorkloadState {
    pub fn count_for(&self, kind: ShiftKind) -> u32 {
        match kind {
            ShiftKind::Weekday => self.weekday,
            ShiftKind::WeekendPrimary => self.weekend_primary,
            ShiftKind::WeekendSecondary => self.weekend_secondary,
        }
    }

    pub fn total(&self) -> u32 {
        self.weekday + self.weekend_primary + self.weekend_secondary
    }

    pub fn holds(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn record(&mut self, date: NaiveDate, kind: ShiftKind) {
        self.dates.insert(date);
        match kind {
            ShiftKind::Weekday => self.weekday += 1,
            ShiftKind::WeekendPrimary => self.weekend_primary += 1,
            ShiftKind::WeekendSecondary => self.weekend_secondary += 1,
        }
    }
}
