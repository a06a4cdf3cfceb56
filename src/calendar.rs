use crate::model::{RotaError, ShiftKind, ShiftSlot};
use chrono::{Datelike, NaiveDate, Weekday};

/// Période à planifier (bornes incluses), avec fenêtre d'exclusion
/// optionnelle (vacances, fermeture). Paramètre explicite de chaque run,
/// jamais persistée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarSpan {
    start: NaiveDate,
    end: NaiveDate,
    exclusion: Option<(NaiveDate, NaiveDate)>,
}

impl CalendarSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RotaError> {
        if end < start {
            return Err(RotaError::InvalidDateRange);
        }
        Ok(Self {
            start,
            end,
            exclusion: None,
        })
    }

    /// Ajoute une fenêtre d'exclusion (bornes incluses).
    pub fn with_exclusion(mut self, from: NaiveDate, to: NaiveDate) -> Result<Self, RotaError> {
        if to < from {
            return Err(RotaError::InvalidExclusionWindow);
        }
        self.exclusion = Some((from, to));
        Ok(self)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    fn is_excluded(&self, day: NaiveDate) -> bool {
        match self.exclusion {
            Some((from, to)) => from <= day && day <= to,
            None => false,
        }
    }

    /// Déroule la période en créneaux, par date croissante : vendredi et
    /// samedi produisent la paire week-end (primary + secondary), tout
    /// autre jour un créneau `weekday`. Les jours exclus ne produisent rien.
    pub fn expand(&self) -> Vec<ShiftSlot> {
        let mut slots = Vec::new();
        let mut day = self.start;
        while day <= self.end {
            if !self.is_excluded(day) {
                match day.weekday() {
                    Weekday::Fri | Weekday::Sat => {
                        slots.push(ShiftSlot {
                            date: day,
                            kind: ShiftKind::WeekendPrimary,
                        });
                        slots.push(ShiftSlot {
                            date: day,
                            kind: ShiftKind::WeekendSecondary,
                        });
                    }
                    _ => slots.push(ShiftSlot {
                        date: day,
                        kind: ShiftKind::Weekday,
                    }),
                }
            }
            let Some(next) = day.succ_opt() else { break };
            day = next;
        }
        slots
    }
}
