use sqlx::PgPool;
use storage::{
    dto::league::CreateLeagueRequest, error::Result, models::League,
    repository::league::LeagueRepository,
};

/// List all leagues
pub async fn list_leagues(pool: &PgPool) -> Result<Vec<League>> {
    let repo = LeagueRepository::new(pool);
    repo.list().await
}

/// Get league by slug
pub async fn get_league_by_slug(pool: &PgPool, slug: &str) -> Result<League> {
    let repo = LeagueRepository::new(pool);
    repo.find_by_slug(slug).await
}

/// Create a new league
pub async fn create_league(pool: &PgPool, request: &CreateLeagueRequest) -> Result<League> {
    let repo = LeagueRepository::new(pool);
    let league = repo.create(request).await?;
    tracing::info!(league_id = %league.league_id, slug = %league.slug, "League created");
    Ok(league)
}

/// Delete a league
pub async fn delete_league(pool: &PgPool, slug: &str) -> Result<()> {
    let repo = LeagueRepository::new(pool);
    repo.delete(slug).await
}
