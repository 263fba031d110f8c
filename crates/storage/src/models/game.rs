use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scheduled fixture between two teams of a season
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub match_id: Uuid,
    pub season_id: Uuid,
    pub gameday: i32,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    #[sqlx(json)]
    pub home_blanket: Blanket,
    #[sqlx(json)]
    pub away_blanket: Blanket,
    pub home_score: i32,
    pub away_score: i32,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

/// Snapshot of how a team presents itself in one match.
///
/// Copied from the team record when the fixture is created and stored with the
/// match, so later edits to the team leave played and scheduled matches alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Blanket {
    pub team_name: String,
    pub kit: Option<String>,
    pub logo_url: Option<String>,
    pub coach_name: Option<String>,
    #[serde(default)]
    pub players: Vec<Uuid>,
}

impl Blanket {
    /// Fresh snapshot with an empty player list
    pub fn snapshot(
        team_name: &str,
        kit: Option<&str>,
        logo_url: Option<&str>,
        coach_name: Option<&str>,
    ) -> Self {
        Self {
            team_name: team_name.to_string(),
            kit: kit.map(str::to_string),
            logo_url: logo_url.map(str::to_string),
            coach_name: coach_name.map(str::to_string),
            players: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Score {
    pub home: i32,
    pub away: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Pending,
    Live,
    Finished,
    Postponed,
    Cancelled,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 5] = [
        Self::Pending,
        Self::Live,
        Self::Finished,
        Self::Postponed,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Live => "live",
            Self::Finished => "finished",
            Self::Postponed => "postponed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown match status: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("pending".parse::<MatchStatus>(), Ok(MatchStatus::Pending));
        assert_eq!("finished".parse::<MatchStatus>(), Ok(MatchStatus::Finished));
        assert!("Pending".parse::<MatchStatus>().is_err());
        assert!("abandoned".parse::<MatchStatus>().is_err());
    }

    #[test]
    fn test_status_round_trips_through_display() {
        for status in MatchStatus::ALL {
            assert_eq!(status.to_string().parse::<MatchStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_blanket_players_default_to_empty() {
        let blanket: Blanket = serde_json::from_str(
            r#"{"team_name":"FC Nord","kit":"red","logo_url":null,"coach_name":null}"#,
        )
        .unwrap();

        assert_eq!(blanket.team_name, "FC Nord");
        assert!(blanket.players.is_empty());
    }

    #[test]
    fn test_snapshot_copies_presentation_fields() {
        let blanket = Blanket::snapshot("FC Nord", Some("red"), None, Some("K. Berg"));

        assert_eq!(blanket.team_name, "FC Nord");
        assert_eq!(blanket.kit.as_deref(), Some("red"));
        assert_eq!(blanket.logo_url, None);
        assert_eq!(blanket.coach_name.as_deref(), Some("K. Berg"));
        assert!(blanket.players.is_empty());
    }
}
