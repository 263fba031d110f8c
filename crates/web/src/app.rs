use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{leagues, matches, seasons, teams};
use crate::openapi::ApiDoc;

/// All `/api` routes, without documentation or middleware
pub fn api_routes() -> Router<Database> {
    let league_scoped = leagues::routes::routes()
        .merge(teams::routes::league_routes())
        .merge(seasons::routes::league_routes());

    let season_scoped = seasons::routes::routes().merge(matches::routes::season_routes());

    Router::new()
        .nest("/api/leagues", league_scoped)
        .nest("/api/teams", teams::routes::routes())
        .nest("/api/seasons", season_scoped)
        .nest("/api/matches", matches::routes::routes())
}

pub fn build_router(db: Database) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
