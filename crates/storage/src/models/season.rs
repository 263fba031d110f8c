use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Season {
    pub season_id: Uuid,
    pub league_id: Uuid,
    pub name: String,
    /// Only one season per league carries this flag
    pub is_primary: bool,
    pub current_gameday: i32,
    pub number_of_rounds: i32,
    pub alternate_home_away: bool,
    pub created_at: chrono::NaiveDateTime,
}
