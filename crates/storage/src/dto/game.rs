use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::PaginationParams;
use crate::models::{Blanket, MatchStatus, Score};

/// Query parameters for listing the matches of a season
#[derive(Debug, Clone, Copy, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MatchListQuery {
    /// Restrict the listing to one gameday
    pub gameday: Option<i32>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    50
}

impl MatchListQuery {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Request payload for recording a result or changing a match's status
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchRequest {
    #[validate(range(min = 0, message = "Scores cannot be negative"))]
    pub home_score: Option<i32>,

    #[validate(range(min = 0, message = "Scores cannot be negative"))]
    pub away_score: Option<i32>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    status
        .parse::<MatchStatus>()
        .map(|_| ())
        .map_err(|_| validator::ValidationError::new("invalid_status"))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub season_id: Uuid,
    pub gameday: i32,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home: Blanket,
    pub away: Blanket,
    pub score: Score,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Match> for MatchResponse {
    fn from(game: crate::models::Match) -> Self {
        Self {
            match_id: game.match_id,
            season_id: game.season_id,
            gameday: game.gameday,
            home_team_id: game.home_team_id,
            away_team_id: game.away_team_id,
            home: game.home_blanket,
            away: game.away_blanket,
            score: Score {
                home: game.home_score,
                away: game.away_score,
            },
            status: game.status,
            created_at: game.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_score_rejected() {
        let req = UpdateMatchRequest {
            home_score: Some(-1),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let req = UpdateMatchRequest {
            status: Some("abandoned".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_result_update_valid() {
        let req = UpdateMatchRequest {
            home_score: Some(2),
            away_score: Some(1),
            status: Some("finished".to_string()),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_list_query_defaults() {
        let query: MatchListQuery = serde_json::from_str(r#"{"gameday":3}"#).unwrap();
        assert_eq!(query.gameday, Some(3));
        assert_eq!(query.pagination().offset(), 0);
        assert_eq!(query.pagination().limit(), 50);
    }
}
