use crate::model::{PrefStatus, PreferenceRecord, Roster, ShiftKind, StaffMember};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de membres depuis CSV : header `handle,name[,handicap]`.
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StaffMember>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let handle = rec.get(0).context("missing handle")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        if handle.is_empty() || name.is_empty() {
            bail!("invalid staff row (empty)");
        }
        let mut member = StaffMember::new(handle, name);
        if let Some(raw) = rec.get(2) {
            let raw = raw.trim();
            if !raw.is_empty() {
                member.handicap = raw
                    .parse::<i32>()
                    .with_context(|| format!("invalid handicap for handle {handle}"))?;
            }
        }
        out.push(member);
    }
    Ok(out)
}

/// Import de préférences : header `handle,date,status` (date `YYYY-MM-DD`,
/// status 0..=3). Les handles sont résolus contre le roster fourni.
pub fn import_preferences_csv<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
) -> anyhow::Result<Vec<PreferenceRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let handle = rec.get(0).context("missing handle")?.trim();
        let date = rec.get(1).context("missing date")?.trim();
        let status = rec.get(2).context("missing status")?.trim();

        let member = roster.require_handle(handle)?;
        let date: NaiveDate = date
            .parse()
            .with_context(|| format!("invalid date for handle {handle}: {date}"))?;
        let code: u8 = status
            .parse()
            .with_context(|| format!("invalid status for handle {handle}: {status}"))?;
        let status = PrefStatus::try_from(code).map_err(anyhow::Error::msg)?;

        out.push(PreferenceRecord {
            staff: member.id.clone(),
            date,
            status,
        });
    }
    Ok(out)
}

/// Export JSON du document (jolie mise en forme).
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning au format d'import générique MS Teams Shifts.
/// Garde de 21:00 à 09:00 le lendemain ; thème et note dépendent de la
/// catégorie. Les créneaux non pourvus sont omis.
pub fn export_teams_csv<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    domain: Option<&str>,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;
    w.write_record([
        "Team Member",
        "Shift Start Date",
        "Shift Start Time",
        "Shift End Date",
        "Shift End Time",
        "Theme",
        "Shift Note",
    ])?;

    for entry in &roster.schedule {
        let Some(id) = &entry.staff else { continue };
        let Some(member) = roster.find_staff_by_id(id) else {
            bail!("schedule references unknown staff id: {}", id.as_str());
        };
        let member_cell = match domain {
            Some(domain) => format!("{}@{}", member.handle, domain),
            None => member.name.clone(),
        };
        let end_date = entry
            .date
            .succ_opt()
            .context("shift end date overflow")?;
        let (theme, note) = match entry.kind {
            ShiftKind::Weekday => ("Blue", "Weekday On-Call"),
            ShiftKind::WeekendPrimary => ("Purple", "Weekend Primary"),
            ShiftKind::WeekendSecondary => ("Pink", "Weekend Secondary"),
        };
        w.write_record([
            member_cell.as_str(),
            entry.date.to_string().as_str(),
            "21:00",
            end_date.to_string().as_str(),
            "09:00",
            theme,
            note,
        ])?;
    }
    w.flush()?;
    Ok(())
}
