//! Team lists read from JSON files, for previewing schedules without a database.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use storage::models::Blanket;
use storage::services::fixture_generator::{RosterEntry, Side};
use tracing::warn;
use uuid::Uuid;

use crate::{Result, SchedulerError};

/// One team as written in a roster file. Only `name` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    pub id: Option<Uuid>,
    pub name: String,
    pub home_kit: Option<String>,
    pub away_kit: Option<String>,
    pub logo_url: Option<String>,
    pub coach_name: Option<String>,
}

/// An ordered team list. Entries without an `id` get one from their position.
#[derive(Debug, Clone)]
pub struct RosterFile {
    teams: Vec<RosterTeam>,
}

#[derive(Debug, Clone)]
pub struct RosterTeam {
    id: Uuid,
    entry: TeamEntry,
}

impl RosterTeam {
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}

impl RosterEntry for RosterTeam {
    fn team_id(&self) -> Uuid {
        self.id
    }

    fn blanket(&self, side: Side) -> Blanket {
        let kit = match side {
            Side::Home => self.entry.home_kit.as_deref(),
            Side::Away => self.entry.away_kit.as_deref(),
        };

        Blanket::snapshot(
            &self.entry.name,
            kit,
            self.entry.logo_url.as_deref(),
            self.entry.coach_name.as_deref(),
        )
    }
}

impl RosterFile {
    pub fn from_entries(entries: Vec<TeamEntry>) -> Self {
        let teams = entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| RosterTeam {
                id: entry.id.unwrap_or_else(|| Uuid::from_u128(idx as u128 + 1)),
                entry,
            })
            .collect();

        Self { teams }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<TeamEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json(&content)
    }

    pub fn teams(&self) -> &[RosterTeam] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

pub struct RosterValidator;

impl RosterValidator {
    pub fn validate(roster: &RosterFile) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if roster.len() < 2 {
            report.errors.push(format!(
                "At least two teams are required, found {}",
                roster.len()
            ));
        }

        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for (idx, team) in roster.teams().iter().enumerate() {
            let label = format!("{}. {}", idx + 1, team.name());

            if team.name().trim().is_empty() {
                report
                    .errors
                    .push(format!("Team #{} has an empty name", idx + 1));
            }
            if !names.insert(team.name().to_lowercase()) {
                report
                    .errors
                    .push(format!("Duplicate team name: '{}'", team.name()));
            }
            if !ids.insert(team.id) {
                report
                    .errors
                    .push(format!("Team '{}' reuses id {}", label, team.id));
            }

            if team.entry.home_kit.is_none() {
                report
                    .warnings
                    .push(format!("Team '{}' has no home kit", label));
            }
            if team.entry.away_kit.is_none() {
                report
                    .warnings
                    .push(format!("Team '{}' has no away kit", label));
            }
        }

        if roster.len() % 2 != 0 && roster.len() > 1 {
            report.warnings.push(format!(
                "Odd number of teams ({}): one team is idle on every gameday",
                roster.len()
            ));
        }

        if !report.errors.is_empty() {
            Err(SchedulerError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}
