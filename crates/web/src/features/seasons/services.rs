use sqlx::PgPool;
use storage::{
    dto::season::{CreateSeasonRequest, ExtendSeasonRequest},
    error::Result,
    models::Season,
    repository::{league::LeagueRepository, season::SeasonRepository},
    services::season_scheduling::{self, ScheduledSeason},
};
use uuid::Uuid;

/// List the seasons of a league
pub async fn list_seasons(pool: &PgPool, league_slug: &str) -> Result<Vec<Season>> {
    let league = LeagueRepository::new(pool).find_by_slug(league_slug).await?;
    SeasonRepository::new(pool).list_by_league(league.league_id).await
}

pub async fn get_season(pool: &PgPool, season_id: Uuid) -> Result<Season> {
    SeasonRepository::new(pool).find_by_id(season_id).await
}

/// Create a season and schedule all of its fixtures
pub async fn create_season(
    pool: &PgPool,
    league_slug: &str,
    request: &CreateSeasonRequest,
) -> Result<ScheduledSeason> {
    let league = LeagueRepository::new(pool).find_by_slug(league_slug).await?;
    season_scheduling::create_scheduled_season(pool, league.league_id, request).await
}

/// Append further rounds to a season
pub async fn extend_season(
    pool: &PgPool,
    season_id: Uuid,
    request: &ExtendSeasonRequest,
) -> Result<ScheduledSeason> {
    season_scheduling::extend_season(pool, season_id, request).await
}

pub async fn set_primary_season(pool: &PgPool, season_id: Uuid) -> Result<Season> {
    season_scheduling::set_primary_season(pool, season_id).await
}

pub async fn advance_gameday(pool: &PgPool, season_id: Uuid) -> Result<Season> {
    let season = SeasonRepository::new(pool).advance_gameday(season_id).await?;
    tracing::info!(%season_id, gameday = season.current_gameday, "Season advanced");
    Ok(season)
}
