use sqlx::PgPool;

use crate::dto::league::CreateLeagueRequest;
use crate::error::{Result, StorageError};
use crate::models::League;

/// Repository for League database operations
pub struct LeagueRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LeagueRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all leagues
    pub async fn list(&self) -> Result<Vec<League>> {
        let leagues = sqlx::query_as::<_, League>(
            r#"
            SELECT league_id, name, slug, created_at
            FROM leagues
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(leagues)
    }

    /// Get a league by slug
    pub async fn find_by_slug(&self, slug: &str) -> Result<League> {
        let league = sqlx::query_as::<_, League>(
            r#"
            SELECT league_id, name, slug, created_at
            FROM leagues
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(league)
    }

    /// Create a new league
    pub async fn create(&self, req: &CreateLeagueRequest) -> Result<League> {
        let league = sqlx::query_as::<_, League>(
            r#"
            INSERT INTO leagues (name, slug)
            VALUES ($1, $2)
            RETURNING league_id, name, slug, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.slug)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation("Slug already exists"))?;

        Ok(league)
    }

    /// Delete a league by slug, together with its teams, seasons and matches
    pub async fn delete(&self, slug: &str) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM leagues
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
