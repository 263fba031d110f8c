use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_slug;

/// Request payload for creating a new league
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLeagueRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Slug must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "validate_slug"))]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeagueResponse {
    pub league_id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::League> for LeagueResponse {
    fn from(league: crate::models::League) -> Self {
        Self {
            league_id: league.league_id,
            name: league.name,
            slug: league.slug,
            created_at: league.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_slug() {
        let req = CreateLeagueRequest {
            name: "Kreisliga Nord".to_string(),
            slug: "Kreisliga Nord".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_accepts_valid_request() {
        let req = CreateLeagueRequest {
            name: "Kreisliga Nord".to_string(),
            slug: "kreisliga-nord".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
