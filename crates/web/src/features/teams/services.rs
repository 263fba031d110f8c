use sqlx::PgPool;
use storage::{
    dto::team::{CreateTeamRequest, UpdateTeamRequest},
    error::Result,
    models::Team,
    repository::{league::LeagueRepository, team::TeamRepository},
};
use uuid::Uuid;

/// List the teams of a league in scheduling order
pub async fn list_teams(pool: &PgPool, league_slug: &str) -> Result<Vec<Team>> {
    let league = LeagueRepository::new(pool).find_by_slug(league_slug).await?;
    TeamRepository::new(pool).list_by_league(league.league_id).await
}

pub async fn get_team(pool: &PgPool, team_id: Uuid) -> Result<Team> {
    TeamRepository::new(pool).find_by_id(team_id).await
}

/// Register a team in a league
pub async fn create_team(
    pool: &PgPool,
    league_slug: &str,
    request: &CreateTeamRequest,
) -> Result<Team> {
    let league = LeagueRepository::new(pool).find_by_slug(league_slug).await?;
    let team = TeamRepository::new(pool)
        .create(league.league_id, request)
        .await?;

    tracing::info!(team_id = %team.team_id, league = %league.slug, "Team registered");

    Ok(team)
}

/// Update a team. Already scheduled matches keep their blankets.
pub async fn update_team(
    pool: &PgPool,
    team_id: Uuid,
    request: &UpdateTeamRequest,
) -> Result<Team> {
    let repo = TeamRepository::new(pool);

    let existing = repo.find_by_id(team_id).await?;
    repo.update(&existing, request).await
}

pub async fn delete_team(pool: &PgPool, team_id: Uuid) -> Result<()> {
    TeamRepository::new(pool).delete(team_id).await
}
