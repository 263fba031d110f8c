use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for registering a team in a league
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 255))]
    pub home_kit: Option<String>,

    #[validate(length(max = 255))]
    pub away_kit: Option<String>,

    #[validate(url(message = "Logo must be a valid URL"))]
    pub logo_url: Option<String>,

    #[validate(length(max = 255))]
    pub coach_name: Option<String>,
}

/// Request payload for updating a team. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 255))]
    pub home_kit: Option<String>,

    #[validate(length(max = 255))]
    pub away_kit: Option<String>,

    #[validate(url(message = "Logo must be a valid URL"))]
    pub logo_url: Option<String>,

    #[validate(length(max = 255))]
    pub coach_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub team_id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    pub home_kit: Option<String>,
    pub away_kit: Option<String>,
    pub logo_url: Option<String>,
    pub coach_name: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Team> for TeamResponse {
    fn from(team: crate::models::Team) -> Self {
        Self {
            team_id: team.team_id,
            league_id: team.league_id,
            name: team.name,
            home_kit: team.home_kit,
            away_kit: team.away_kit,
            logo_url: team.logo_url,
            coach_name: team.coach_name,
            created_at: team.created_at,
        }
    }
}
