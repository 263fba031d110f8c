use sqlx::types::Json;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::dto::game::UpdateMatchRequest;
use crate::error::{Result, StorageError};
use crate::models::Match;
use crate::services::fixture_generator::MatchDraft;

const MATCH_COLUMNS: &str = "match_id, season_id, gameday, home_team_id, away_team_id, \
                             home_blanket, away_blanket, home_score, away_score, status, created_at";

/// Rows per INSERT statement; keeps bind parameters well below the Postgres limit
const INSERT_CHUNK_SIZE: usize = 1000;

/// Repository for Match database operations
pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Page through a season's matches ordered by gameday, optionally for one gameday only
    pub async fn list_by_season(
        &self,
        season_id: Uuid,
        gameday: Option<i32>,
        pagination: &PaginationParams,
    ) -> Result<(Vec<Match>, i64)> {
        let (limit, offset) = (pagination.limit(), pagination.offset());

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM matches WHERE season_id = ");
        count.push_bind(season_id);
        if let Some(gameday) = gameday {
            count.push(" AND gameday = ");
            count.push_bind(gameday);
        }

        let total_items = count.build_query_scalar::<i64>().fetch_one(self.pool).await?;

        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE season_id = "
        ));
        query.push_bind(season_id);
        if let Some(gameday) = gameday {
            query.push(" AND gameday = ");
            query.push_bind(gameday);
        }
        query.push(" ORDER BY gameday, created_at, match_id LIMIT ");
        query.push_bind(limit);
        query.push(" OFFSET ");
        query.push_bind(offset);

        let matches = query.build_query_as::<Match>().fetch_all(self.pool).await?;

        Ok((matches, total_items))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Match> {
        let game = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(game)
    }

    /// Record scores and/or a status change on top of the existing match
    pub async fn update(&self, existing: &Match, req: &UpdateMatchRequest) -> Result<Match> {
        let game = sqlx::query_as::<_, Match>(&format!(
            r#"
            UPDATE matches
            SET home_score = $2, away_score = $3, status = $4
            WHERE match_id = $1
            RETURNING {MATCH_COLUMNS}
            "#
        ))
        .bind(existing.match_id)
        .bind(req.home_score.unwrap_or(existing.home_score))
        .bind(req.away_score.unwrap_or(existing.away_score))
        .bind(req.status.as_ref().unwrap_or(&existing.status))
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(game)
    }

    /// Highest scheduled gameday of a season, 0 when nothing is scheduled yet
    pub async fn max_gameday(conn: &mut PgConnection, season_id: Uuid) -> Result<i32> {
        let max = sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(gameday) FROM matches WHERE season_id = $1",
        )
        .bind(season_id)
        .fetch_one(conn)
        .await?;

        Ok(max.unwrap_or(0))
    }

    /// Bulk insert generated fixtures for a season. Returns the number of rows written.
    pub async fn insert_drafts(
        conn: &mut PgConnection,
        season_id: Uuid,
        drafts: &[MatchDraft],
    ) -> Result<u64> {
        let mut inserted = 0;

        for chunk in drafts.chunks(INSERT_CHUNK_SIZE) {
            let mut query = QueryBuilder::<Postgres>::new(
                "INSERT INTO matches (season_id, gameday, home_team_id, away_team_id, \
                 home_blanket, away_blanket, home_score, away_score, status) ",
            );

            query.push_values(chunk, |mut row, draft| {
                row.push_bind(season_id)
                    .push_bind(draft.gameday)
                    .push_bind(draft.home_team_id)
                    .push_bind(draft.away_team_id)
                    .push_bind(Json(draft.home_blanket.clone()))
                    .push_bind(Json(draft.away_blanket.clone()))
                    .push_bind(draft.score.home)
                    .push_bind(draft.score.away)
                    .push_bind(draft.status.as_str());
            });

            let result = query.build().execute(&mut *conn).await?;
            inserted += result.rows_affected();
        }

        tracing::debug!(%season_id, inserted, "Inserted fixtures");

        Ok(inserted)
    }
}
