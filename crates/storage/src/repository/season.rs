use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Season;

const SEASON_COLUMNS: &str = "season_id, league_id, name, is_primary, current_gameday, \
                              number_of_rounds, alternate_home_away, created_at";

/// Repository for Season database operations
pub struct SeasonRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the seasons of a league, newest first
    pub async fn list_by_league(&self, league_id: Uuid) -> Result<Vec<Season>> {
        let seasons = sqlx::query_as::<_, Season>(&format!(
            "SELECT {SEASON_COLUMNS} FROM seasons WHERE league_id = $1 ORDER BY created_at DESC"
        ))
        .bind(league_id)
        .fetch_all(self.pool)
        .await?;

        Ok(seasons)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Season> {
        let season = sqlx::query_as::<_, Season>(&format!(
            "SELECT {SEASON_COLUMNS} FROM seasons WHERE season_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(season)
    }

    /// Move the season to its next gameday, stopping at the last scheduled one
    pub async fn advance_gameday(&self, id: Uuid) -> Result<Season> {
        let advanced = sqlx::query_as::<_, Season>(&format!(
            r#"
            UPDATE seasons
            SET current_gameday = current_gameday + 1
            WHERE season_id = $1
              AND current_gameday < (
                  SELECT COALESCE(MAX(gameday), 0) FROM matches WHERE season_id = $1
              )
            RETURNING {SEASON_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        match advanced {
            Some(season) => Ok(season),
            None => {
                // distinguish a missing season from one that is already at the end
                self.find_by_id(id).await?;
                Err(StorageError::ConstraintViolation(
                    "Season is already at its last scheduled gameday".to_string(),
                ))
            }
        }
    }

    pub async fn insert(
        conn: &mut PgConnection,
        league_id: Uuid,
        name: &str,
        number_of_rounds: u32,
        alternate_home_away: bool,
        is_primary: bool,
    ) -> Result<Season> {
        let season = sqlx::query_as::<_, Season>(&format!(
            r#"
            INSERT INTO seasons (league_id, name, number_of_rounds, alternate_home_away, is_primary)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SEASON_COLUMNS}
            "#
        ))
        .bind(league_id)
        .bind(name)
        .bind(number_of_rounds as i32)
        .bind(alternate_home_away)
        .bind(is_primary)
        .fetch_one(conn)
        .await?;

        Ok(season)
    }

    /// Lock the season row for the rest of the transaction
    pub async fn lock(conn: &mut PgConnection, id: Uuid) -> Result<Season> {
        let season = sqlx::query_as::<_, Season>(&format!(
            "SELECT {SEASON_COLUMNS} FROM seasons WHERE season_id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(season)
    }

    /// Drop the primary flag from every season of the league
    pub async fn clear_primary(conn: &mut PgConnection, league_id: Uuid) -> Result<()> {
        sqlx::query("UPDATE seasons SET is_primary = FALSE WHERE league_id = $1 AND is_primary")
            .bind(league_id)
            .execute(conn)
            .await?;

        Ok(())
    }

    pub async fn mark_primary(conn: &mut PgConnection, id: Uuid) -> Result<Season> {
        let season = sqlx::query_as::<_, Season>(&format!(
            "UPDATE seasons SET is_primary = TRUE WHERE season_id = $1 RETURNING {SEASON_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(season)
    }

    /// Record that more rounds were scheduled for the season
    pub async fn add_rounds(conn: &mut PgConnection, id: Uuid, rounds: u32) -> Result<Season> {
        let season = sqlx::query_as::<_, Season>(&format!(
            r#"
            UPDATE seasons
            SET number_of_rounds = number_of_rounds + $2
            WHERE season_id = $1
            RETURNING {SEASON_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(rounds as i32)
        .fetch_optional(conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(season)
    }
}
