use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::team::{CreateTeamRequest, UpdateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::Team;

const TEAM_COLUMNS: &str =
    "team_id, league_id, name, home_kit, away_kit, logo_url, coach_name, created_at";

/// Repository for Team database operations
pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the teams of a league in registration order.
    ///
    /// The order is stable, which keeps fixture generation deterministic.
    pub async fn list_by_league(&self, league_id: Uuid) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE league_id = $1 ORDER BY created_at, team_id"
        ))
        .bind(league_id)
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Same order as `list_by_league`; the rows stay share-locked until the
    /// transaction ends
    pub async fn lock_roster(conn: &mut PgConnection, league_id: Uuid) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE league_id = $1 \
             ORDER BY created_at, team_id FOR SHARE"
        ))
        .bind(league_id)
        .fetch_all(conn)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(&format!(
            "SELECT {TEAM_COLUMNS} FROM teams WHERE team_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    pub async fn create(&self, league_id: Uuid, req: &CreateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(&format!(
            r#"
            INSERT INTO teams (league_id, name, home_kit, away_kit, logo_url, coach_name)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(league_id)
        .bind(&req.name)
        .bind(&req.home_kit)
        .bind(&req.away_kit)
        .bind(&req.logo_url)
        .bind(&req.coach_name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation("A team with this name already exists in the league")
        })?;

        Ok(team)
    }

    /// Apply a partial update on top of the existing record
    pub async fn update(&self, existing: &Team, req: &UpdateTeamRequest) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(&format!(
            r#"
            UPDATE teams
            SET name = $2, home_kit = $3, away_kit = $4, logo_url = $5, coach_name = $6
            WHERE team_id = $1
            RETURNING {TEAM_COLUMNS}
            "#
        ))
        .bind(existing.team_id)
        .bind(req.name.as_ref().unwrap_or(&existing.name))
        .bind(req.home_kit.as_ref().or(existing.home_kit.as_ref()))
        .bind(req.away_kit.as_ref().or(existing.away_kit.as_ref()))
        .bind(req.logo_url.as_ref().or(existing.logo_url.as_ref()))
        .bind(req.coach_name.as_ref().or(existing.coach_name.as_ref()))
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).on_unique_violation("A team with this name already exists in the league")
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Delete a team. Fails with a constraint violation while matches reference it.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM teams WHERE team_id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                let err = StorageError::from(e);
                if err.is_foreign_key_violation() {
                    StorageError::ConstraintViolation("Team still has scheduled matches".to_string())
                } else {
                    err
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
