use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::season::{CreateSeasonRequest, ExtendSeasonRequest};
use crate::error::Result;
use crate::models::{Season, Team};
use crate::repository::game::MatchRepository;
use crate::repository::season::SeasonRepository;
use crate::repository::team::TeamRepository;
use crate::services::fixture_generator::{self, MatchDraft, ScheduleError};

/// A season together with the fixtures a scheduling run just created for it
#[derive(Debug, Clone)]
pub struct ScheduledSeason {
    pub season: Season,
    pub fixtures_created: u64,
    pub first_gameday: Option<i32>,
    pub last_gameday: Option<i32>,
}

impl ScheduledSeason {
    fn new(season: Season, fixtures_created: u64, drafts: &[MatchDraft]) -> Self {
        Self {
            season,
            fixtures_created,
            first_gameday: drafts.first().map(|d| d.gameday),
            last_gameday: drafts.last().map(|d| d.gameday),
        }
    }
}

/// Create a season for a league and schedule its complete fixture list.
///
/// The season row and every match are written in one transaction; if any
/// insert fails nothing is kept.
pub async fn create_scheduled_season(
    pool: &PgPool,
    league_id: Uuid,
    request: &CreateSeasonRequest,
) -> Result<ScheduledSeason> {
    let teams = TeamRepository::new(pool).list_by_league(league_id).await?;

    let drafts = fixture_generator::generate_fixtures(
        &teams,
        request.number_of_rounds,
        request.alternate_home_away,
    )?;

    let mut tx = pool.begin().await?;

    if request.is_primary {
        SeasonRepository::clear_primary(&mut tx, league_id).await?;
    }

    let season = SeasonRepository::insert(
        &mut tx,
        league_id,
        &request.name,
        request.number_of_rounds,
        request.alternate_home_away,
        request.is_primary,
    )
    .await?;

    let created = MatchRepository::insert_drafts(&mut tx, season.season_id, &drafts).await?;

    tx.commit().await?;

    tracing::info!(
        season_id = %season.season_id,
        %league_id,
        teams = teams.len(),
        rounds = request.number_of_rounds,
        fixtures = created,
        "Scheduled new season"
    );

    Ok(ScheduledSeason::new(season, created, &drafts))
}

/// Append more rounds to an existing season using the league's current roster.
///
/// Numbering continues after the season's last scheduled gameday. Existing
/// matches are left untouched.
pub async fn extend_season(
    pool: &PgPool,
    season_id: Uuid,
    request: &ExtendSeasonRequest,
) -> Result<ScheduledSeason> {
    let mut tx = pool.begin().await?;

    let locked = SeasonRepository::lock(&mut tx, season_id).await?;
    let teams = TeamRepository::lock_roster(&mut tx, locked.league_id).await?;
    let last_gameday = MatchRepository::max_gameday(&mut tx, season_id).await?;

    let drafts = plan_extension(&locked, &teams, last_gameday, request)?;

    let created = MatchRepository::insert_drafts(&mut tx, season_id, &drafts).await?;
    let season = SeasonRepository::add_rounds(&mut tx, season_id, request.number_of_rounds).await?;

    tx.commit().await?;

    tracing::info!(
        %season_id,
        teams = teams.len(),
        after_gameday = last_gameday,
        completed_rotations = locked.number_of_rounds,
        fixtures = created,
        "Extended season"
    );

    Ok(ScheduledSeason::new(season, created, &drafts))
}

/// Fixtures that continue `season` after `last_gameday`, picking up home/away
/// alternation from the rotations it already holds
fn plan_extension(
    season: &Season,
    teams: &[Team],
    last_gameday: i32,
    request: &ExtendSeasonRequest,
) -> std::result::Result<Vec<MatchDraft>, ScheduleError> {
    fixture_generator::extend_fixtures(
        teams,
        last_gameday,
        u32::try_from(season.number_of_rounds).unwrap_or(0),
        request.number_of_rounds,
        request.alternate_home_away,
    )
}

/// Make a season the primary one of its league
pub async fn set_primary_season(pool: &PgPool, season_id: Uuid) -> Result<Season> {
    let mut tx = pool.begin().await?;

    let season = SeasonRepository::lock(&mut tx, season_id).await?;
    SeasonRepository::clear_primary(&mut tx, season.league_id).await?;
    let season = SeasonRepository::mark_primary(&mut tx, season_id).await?;

    tx.commit().await?;

    tracing::info!(%season_id, league_id = %season.league_id, "Primary season changed");

    Ok(season)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::NaiveDate;

    use super::*;

    fn created_at() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn roster(count: usize) -> Vec<Team> {
        (0..count)
            .map(|i| Team {
                team_id: Uuid::from_u128(i as u128 + 1),
                league_id: Uuid::from_u128(99),
                name: format!("Club {}", i),
                home_kit: None,
                away_kit: None,
                logo_url: None,
                coach_name: None,
                created_at: created_at(),
            })
            .collect()
    }

    fn season(number_of_rounds: i32) -> Season {
        Season {
            season_id: Uuid::from_u128(7),
            league_id: Uuid::from_u128(99),
            name: "2025/26".to_string(),
            is_primary: true,
            current_gameday: 1,
            number_of_rounds,
            alternate_home_away: true,
            created_at: created_at(),
        }
    }

    fn request(number_of_rounds: u32) -> ExtendSeasonRequest {
        ExtendSeasonRequest {
            number_of_rounds,
            alternate_home_away: true,
        }
    }

    fn home_by_pair(drafts: &[MatchDraft]) -> HashMap<(Uuid, Uuid), Uuid> {
        drafts
            .iter()
            .map(|d| {
                let key = if d.home_team_id < d.away_team_id {
                    (d.home_team_id, d.away_team_id)
                } else {
                    (d.away_team_id, d.home_team_id)
                };
                (key, d.home_team_id)
            })
            .collect()
    }

    #[test]
    fn test_extension_flips_venues_after_single_round_season() {
        let teams = roster(4);
        let existing = fixture_generator::generate_fixtures(&teams, 1, true).unwrap();

        let extension = plan_extension(&season(1), &teams, 3, &request(1)).unwrap();

        let before = home_by_pair(&existing);
        let after = home_by_pair(&extension);
        assert_eq!(after.len(), 6);
        for (pair, home) in &after {
            assert_ne!(before[pair], *home);
        }
        assert!(extension.iter().all(|d| d.gameday > 3));
    }

    #[test]
    fn test_extension_after_even_rounds_starts_unflipped() {
        let teams = roster(4);
        let existing = fixture_generator::generate_fixtures(&teams, 2, true).unwrap();

        let extension = plan_extension(&season(2), &teams, 6, &request(1)).unwrap();

        assert_eq!(home_by_pair(&existing[..6]), home_by_pair(&extension));
    }

    #[test]
    fn test_extension_surfaces_schedule_errors() {
        assert_eq!(
            plan_extension(&season(1), &roster(1), 1, &request(1)),
            Err(ScheduleError::InsufficientTeams { found: 1 })
        );
    }
}
