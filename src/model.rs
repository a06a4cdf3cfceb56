use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Identifiant fort pour StaffMember
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StaffId(String);

impl StaffId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Membre du roster. `handicap` est le biais de charge fixé par l'admin
/// (entier, éventuellement négatif) injecté tel quel dans le score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub handle: String,
    pub name: String,
    #[serde(default)]
    pub handicap: i32,
}

impl StaffMember {
    pub fn new<H: Into<String>, N: Into<String>>(handle: H, name: N) -> Self {
        Self {
            id: StaffId::random(),
            handle: handle.into(),
            name: name.into(),
            handicap: 0,
        }
    }
}

/// Statut de disponibilité pour une date. Les codes numériques font partie
/// du contrat de stockage (UI, export CSV) : sérialisés bit-à-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PrefStatus {
    Available,
    PreferNot,
    StronglyPreferNot,
    Excused,
}

impl From<PrefStatus> for u8 {
    fn from(s: PrefStatus) -> u8 {
        match s {
            PrefStatus::Available => 0,
            PrefStatus::PreferNot => 1,
            PrefStatus::StronglyPreferNot => 2,
            PrefStatus::Excused => 3,
        }
    }
}

impl TryFrom<u8> for PrefStatus {
    type Error = String;
    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(PrefStatus::Available),
            1 => Ok(PrefStatus::PreferNot),
            2 => Ok(PrefStatus::StronglyPreferNot),
            3 => Ok(PrefStatus::Excused),
            other => Err(format!("invalid preference status: {other}")),
        }
    }
}

/// Préférence d'une personne pour une date (absence de ligne = Available).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub staff: StaffId,
    pub date: NaiveDate,
    pub status: PrefStatus,
}

/// Index staff → date → statut, construit une fois par run.
#[derive(Debug, Default)]
pub struct PreferenceIndex(HashMap<StaffId, HashMap<NaiveDate, PrefStatus>>);

impl PreferenceIndex {
    /// En cas de doublon (staff, date), la dernière ligne gagne.
    pub fn from_records(records: &[PreferenceRecord]) -> Self {
        let mut map: HashMap<StaffId, HashMap<NaiveDate, PrefStatus>> = HashMap::new();
        for rec in records {
            map.entry(rec.staff.clone())
                .or_default()
                .insert(rec.date, rec.status);
        }
        Self(map)
    }

    pub fn status_for(&self, staff: &StaffId, date: NaiveDate) -> PrefStatus {
        self.0
            .get(staff)
            .and_then(|by_date| by_date.get(&date))
            .copied()
            .unwrap_or(PrefStatus::Available)
    }
}

/// Catégorie d'un créneau. Les tags texte sont exposés aux consommateurs
/// (rendu calendrier, export) et doivent rester stables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    Weekday,
    WeekendPrimary,
    WeekendSecondary,
}

impl ShiftKind {
    /// Ordre de remplissage : le pool le plus contraint d'abord.
    pub fn fill_priority(self) -> u8 {
        match self {
            ShiftKind::WeekendPrimary => 0,
            ShiftKind::WeekendSecondary => 1,
            ShiftKind::Weekday => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShiftKind::Weekday => "weekday",
            ShiftKind::WeekendPrimary => "weekend_primary",
            ShiftKind::WeekendSecondary => "weekend_secondary",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ShiftKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekday" => Ok(ShiftKind::Weekday),
            "weekend_primary" => Ok(ShiftKind::WeekendPrimary),
            "weekend_secondary" => Ok(ShiftKind::WeekendSecondary),
            other => Err(format!("unknown shift kind: {other}")),
        }
    }
}

/// Un créneau à pourvoir (une date, une catégorie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShiftSlot {
    pub date: NaiveDate,
    pub kind: ShiftKind,
}

/// Ligne de planning persistée. `staff = None` encode un créneau non pourvu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub kind: ShiftKind,
    #[serde(default)]
    pub staff: Option<StaffId>,
    #[serde(default)]
    pub locked: bool,
}

#[derive(Error, Debug)]
pub enum RotaError {
    #[error("invalid date range: end must not precede start")]
    InvalidDateRange,
    #[error("invalid exclusion window: end must not precede start")]
    InvalidExclusionWindow,
    #[error("unknown staff handle: {0}")]
    UnknownStaff(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Document complet d'une équipe (un fichier par tenant).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub preferences: Vec<PreferenceRecord>,
    #[serde(default)]
    pub schedule: Vec<ScheduleEntry>,
}

impl Roster {
    pub fn find_staff_by_handle<'a>(&'a self, handle: &str) -> Option<&'a StaffMember> {
        self.staff.iter().find(|m| m.handle == handle)
    }
    pub fn find_staff_by_id<'a>(&'a self, id: &StaffId) -> Option<&'a StaffMember> {
        self.staff.iter().find(|m| &m.id == id)
    }

    pub fn require_handle<'a>(&'a self, handle: &str) -> Result<&'a StaffMember, RotaError> {
        self.find_staff_by_handle(handle)
            .ok_or_else(|| RotaError::UnknownStaff(handle.to_string()))
    }

    /// Ordre de parcours canonique : id croissant. C'est ce qui rend le
    /// départage des ex æquo du moteur déterministe.
    pub fn sort_staff(&mut self) {
        self.staff.sort_by(|a, b| a.id.cmp(&b.id));
    }

    pub fn locked_entries(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.schedule.iter().filter(|e| e.locked)
    }

    /// Upsert d'une préférence ; `Available` supprime la ligne (même
    /// convention que le stockage d'origine).
    pub fn set_preference(&mut self, staff: &StaffId, date: NaiveDate, status: PrefStatus) {
        self.preferences
            .retain(|p| !(&p.staff == staff && p.date == date));
        if status != PrefStatus::Available {
            self.preferences.push(PreferenceRecord {
                staff: staff.clone(),
                date,
                status,
            });
        }
    }

    /// Fixe (ou crée) l'affectation d'un créneau et la marque verrouillée.
    pub fn pin(&mut self, date: NaiveDate, kind: ShiftKind, staff: StaffId) {
        match self
            .schedule
            .iter_mut()
            .find(|e| e.date == date && e.kind == kind)
        {
            Some(entry) => {
                entry.staff = Some(staff);
                entry.locked = true;
            }
            None => {
                self.schedule.push(ScheduleEntry {
                    date,
                    kind,
                    staff: Some(staff),
                    locked: true,
                });
                self.schedule.sort_by_key(|e| (e.date, e.kind));
            }
        }
    }

    /// Déverrouille un créneau (il redevient régénérable).
    pub fn unpin(&mut self, date: NaiveDate, kind: ShiftKind) {
        if let Some(entry) = self
            .schedule
            .iter_mut()
            .find(|e| e.date == date && e.kind == kind)
        {
            entry.locked = false;
        }
    }

    /// Contrat du writer : toutes les lignes non verrouillées sont jetées et
    /// remplacées d'un bloc ; les lignes verrouillées ne sont jamais touchées.
    pub fn replace_unlocked(&mut self, fresh: Vec<ScheduleEntry>) {
        self.schedule.retain(|e| e.locked);
        self.schedule
            .extend(fresh.into_iter().filter(|e| !e.locked));
        self.schedule.sort_by_key(|e| (e.date, e.kind));
    }
}
