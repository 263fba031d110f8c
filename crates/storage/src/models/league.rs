use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct League {
    pub league_id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: chrono::NaiveDateTime,
}
