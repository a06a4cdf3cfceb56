#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rota::{
    generate_schedule, io,
    model::{PrefStatus, Roster, ShiftKind},
    storage::{JsonStorage, Storage},
    CalendarSpan,
};
use std::collections::HashMap;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de génération d'astreintes (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Répertoire des fichiers d'équipe
    #[arg(long, global = true, default_value = ".")]
    data_dir: String,

    /// Équipe (scope) : un fichier JSON par équipe
    #[arg(long, global = true, default_value = "default")]
    team: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer des membres depuis un CSV (`handle,name[,handicap]`)
    ImportStaff {
        #[arg(long)]
        csv: String,
    },

    /// Importer des préférences depuis un CSV (`handle,date,status`)
    ImportPrefs {
        #[arg(long)]
        csv: String,
    },

    /// Fixer la préférence d'un membre pour une date (0..=3, 0 efface)
    SetPref {
        #[arg(long)]
        handle: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        status: u8,
    },

    /// Épingler un créneau sur un membre (verrouillé, survit aux runs)
    Pin {
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// weekday | weekend_primary | weekend_secondary
        #[arg(long)]
        kind: String,
        #[arg(long)]
        handle: String,
    },

    /// Déverrouiller un créneau
    Unpin {
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        kind: String,
    },

    /// Générer le planning sur une période
    Generate {
        /// YYYY-MM-DD (inclus)
        #[arg(long)]
        start: NaiveDate,
        /// YYYY-MM-DD (inclus)
        #[arg(long)]
        end: NaiveDate,
        /// Début de fenêtre d'exclusion (optionnel, inclus)
        #[arg(long)]
        break_start: Option<NaiveDate>,
        /// Fin de fenêtre d'exclusion (optionnel, inclus)
        #[arg(long)]
        break_end: Option<NaiveDate>,
    },

    /// Lister le planning courant
    List {
        /// Export JSON du document complet (optionnel)
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Compteurs de gardes par membre
    Tally,

    /// Exporter le planning en CSV (format import MS Teams Shifts)
    ExportCsv {
        #[arg(long)]
        out: String,
        /// Domaine mail : la colonne membre devient `handle@domaine`
        #[arg(long)]
        domain: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open_scope(&cli.data_dir, &cli.team)?;
    let mut roster = storage.load().unwrap_or_else(|_| Roster::default());

    let code = match cli.cmd {
        Commands::ImportStaff { csv } => {
            let staff = io::import_staff_csv(csv)?;
            roster.staff.extend(staff);
            storage.save(&roster)?;
            0
        }
        Commands::ImportPrefs { csv } => {
            let prefs = io::import_preferences_csv(csv, &roster)?;
            for p in prefs {
                roster.set_preference(&p.staff, p.date, p.status);
            }
            storage.save(&roster)?;
            0
        }
        Commands::SetPref {
            handle,
            date,
            status,
        } => {
            let status = PrefStatus::try_from(status).map_err(anyhow::Error::msg)?;
            let id = roster.require_handle(&handle)?.id.clone();
            roster.set_preference(&id, date, status);
            storage.save(&roster)?;
            0
        }
        Commands::Pin { date, kind, handle } => {
            let kind: ShiftKind = kind.parse().map_err(anyhow::Error::msg)?;
            let id = roster.require_handle(&handle)?.id.clone();
            roster.pin(date, kind, id);
            storage.save(&roster)?;
            0
        }
        Commands::Unpin { date, kind } => {
            let kind: ShiftKind = kind.parse().map_err(anyhow::Error::msg)?;
            roster.unpin(date, kind);
            storage.save(&roster)?;
            0
        }
        Commands::Generate {
            start,
            end,
            break_start,
            break_end,
        } => {
            let mut span = CalendarSpan::new(start, end)?;
            if let (Some(from), Some(to)) = (break_start, break_end) {
                span = span.with_exclusion(from, to)?;
            }
            let report = generate_schedule(&storage, &span)?;
            println!(
                "{} slots, {} filled, {} locked",
                report.total_slots, report.filled, report.locked
            );
            if report.is_degenerate() {
                for w in &report.warnings {
                    eprintln!("warning: {w:?}");
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            } else {
                0
            }
        }
        Commands::List { out_json } => {
            if let Some(path) = out_json {
                io::export_roster_json(path, &roster)?;
            }
            for e in &roster.schedule {
                let holder = e
                    .staff
                    .as_ref()
                    .and_then(|id| roster.find_staff_by_id(id))
                    .map(|m| m.handle.as_str())
                    .unwrap_or("-");
                let lock = if e.locked { " [locked]" } else { "" };
                println!("{} | {:<17} | {}{}", e.date, e.kind, holder, lock);
            }
            0
        }
        Commands::Tally => {
            let mut counts: HashMap<&str, [u32; 3]> = HashMap::new();
            for e in &roster.schedule {
                let Some(member) = e.staff.as_ref().and_then(|id| roster.find_staff_by_id(id))
                else {
                    continue;
                };
                let tally = counts.entry(member.handle.as_str()).or_default();
                match e.kind {
                    ShiftKind::Weekday => tally[0] += 1,
                    ShiftKind::WeekendPrimary => tally[1] += 1,
                    ShiftKind::WeekendSecondary => tally[2] += 1,
                }
            }
            let mut rows: Vec<_> = counts.into_iter().collect();
            rows.sort_by_key(|(handle, _)| handle.to_string());
            println!("handle | weekday | weekend_pri | weekend_sec | total");
            for (handle, [wd, pri, sec]) in rows {
                println!("{handle} | {wd} | {pri} | {sec} | {}", wd + pri + sec);
            }
            0
        }
        Commands::ExportCsv { out, domain } => {
            io::export_teams_csv(out, &roster, domain.as_deref())?;
            0
        }
    };

    std::process::exit(code);
}
