use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Largest number of rounds accepted over the API
pub const MAX_ROUNDS: u32 = 10;

/// Request payload for creating a season and scheduling its fixtures
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSeasonRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, max = MAX_ROUNDS, message = "Number of rounds must be between 1 and 10"))]
    #[serde(default = "default_rounds")]
    pub number_of_rounds: u32,

    #[serde(default)]
    pub alternate_home_away: bool,

    #[serde(default)]
    pub is_primary: bool,
}

/// Request payload for appending fixtures to an existing season
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExtendSeasonRequest {
    #[validate(range(min = 1, max = MAX_ROUNDS, message = "Number of rounds must be between 1 and 10"))]
    #[serde(default = "default_rounds")]
    pub number_of_rounds: u32,

    #[serde(default)]
    pub alternate_home_away: bool,
}

fn default_rounds() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SeasonResponse {
    pub season_id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    pub is_primary: bool,
    pub current_gameday: i32,
    pub number_of_rounds: i32,
    pub alternate_home_away: bool,
    pub created_at: NaiveDateTime,
}

impl From<crate::models::Season> for SeasonResponse {
    fn from(season: crate::models::Season) -> Self {
        Self {
            season_id: season.season_id,
            league_id: season.league_id,
            name: season.name,
            is_primary: season.is_primary,
            current_gameday: season.current_gameday,
            number_of_rounds: season.number_of_rounds,
            alternate_home_away: season.alternate_home_away,
            created_at: season.created_at,
        }
    }
}

/// Result of a scheduling run: the season plus how many fixtures were created
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduledSeasonResponse {
    pub season: SeasonResponse,
    pub fixtures_created: u64,
    pub first_gameday: Option<i32>,
    pub last_gameday: Option<i32>,
}

impl From<crate::services::season_scheduling::ScheduledSeason> for ScheduledSeasonResponse {
    fn from(scheduled: crate::services::season_scheduling::ScheduledSeason) -> Self {
        Self {
            season: SeasonResponse::from(scheduled.season),
            fixtures_created: scheduled.fixtures_created,
            first_gameday: scheduled.first_gameday,
            last_gameday: scheduled.last_gameday,
        }
    }
}
