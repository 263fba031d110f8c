use sqlx::PgPool;
use storage::{
    dto::game::{MatchListQuery, UpdateMatchRequest},
    error::Result,
    models::Match,
    repository::{game::MatchRepository, season::SeasonRepository},
};
use uuid::Uuid;

/// Page through a season's fixtures
pub async fn list_matches(
    pool: &PgPool,
    season_id: Uuid,
    query: &MatchListQuery,
) -> Result<(Vec<Match>, i64)> {
    // 404 for unknown seasons rather than an empty page
    SeasonRepository::new(pool).find_by_id(season_id).await?;

    MatchRepository::new(pool)
        .list_by_season(season_id, query.gameday, &query.pagination())
        .await
}

pub async fn get_match(pool: &PgPool, match_id: Uuid) -> Result<Match> {
    MatchRepository::new(pool).find_by_id(match_id).await
}

/// Record a result or status change
pub async fn update_match(
    pool: &PgPool,
    match_id: Uuid,
    request: &UpdateMatchRequest,
) -> Result<Match> {
    let repo = MatchRepository::new(pool);

    let existing = repo.find_by_id(match_id).await?;
    let updated = repo.update(&existing, request).await?;

    tracing::info!(
        %match_id,
        status = %updated.status,
        home_score = updated.home_score,
        away_score = updated.away_score,
        "Match updated"
    );

    Ok(updated)
}
