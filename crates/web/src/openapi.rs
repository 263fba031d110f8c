use utoipa::OpenApi;

use crate::features::{leagues, matches, seasons, teams};

#[derive(OpenApi)]
#[openapi(
    paths(
        leagues::handlers::list_leagues,
        leagues::handlers::get_league,
        leagues::handlers::create_league,
        leagues::handlers::delete_league,
        teams::handlers::list_teams,
        teams::handlers::create_team,
        teams::handlers::get_team,
        teams::handlers::update_team,
        teams::handlers::delete_team,
        seasons::handlers::list_seasons,
        seasons::handlers::create_season,
        seasons::handlers::get_season,
        seasons::handlers::extend_season,
        seasons::handlers::set_primary_season,
        seasons::handlers::advance_gameday,
        matches::handlers::list_matches,
        matches::handlers::get_match,
        matches::handlers::update_match,
    ),
    components(
        schemas(
            storage::dto::league::CreateLeagueRequest,
            storage::dto::league::LeagueResponse,
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::UpdateTeamRequest,
            storage::dto::team::TeamResponse,
            storage::dto::season::CreateSeasonRequest,
            storage::dto::season::ExtendSeasonRequest,
            storage::dto::season::SeasonResponse,
            storage::dto::season::ScheduledSeasonResponse,
            storage::dto::game::UpdateMatchRequest,
            storage::dto::game::MatchResponse,
            storage::dto::common::PaginationMeta,
            storage::models::Blanket,
            storage::models::Score,
            storage::models::MatchStatus,
        )
    ),
    tags(
        (name = "leagues", description = "League management"),
        (name = "teams", description = "Team registration"),
        (name = "seasons", description = "Season creation and fixture scheduling"),
        (name = "matches", description = "Fixtures and results"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_scheduling_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/leagues/{slug}/seasons"));
        assert!(doc.paths.paths.contains_key("/api/seasons/{season_id}/fixtures"));
        assert!(doc.paths.paths.contains_key("/api/seasons/{season_id}/matches"));
    }
}
