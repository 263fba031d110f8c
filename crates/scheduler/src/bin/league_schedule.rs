use clap::{Parser, Subcommand};
use scheduler::{RosterFile, RosterValidator, SchedulerError, render};
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;
use storage::dto::season::{ExtendSeasonRequest, MAX_ROUNDS};
use storage::services::{fixture_generator, season_scheduling};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "league-schedule")]
#[command(about = "Round-robin fixture scheduling for league seasons", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fixtures for a team list without touching the database
    Preview {
        #[arg(long)]
        teams: PathBuf,

        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_ROUNDS as i64))]
        rounds: u32,

        #[arg(long)]
        alternate: bool,

        /// Continue numbering after this gameday
        #[arg(long)]
        start_after: Option<i32>,

        /// Rounds already played before --start-after; continues home/away alternation
        #[arg(long, default_value_t = 0, requires = "start_after")]
        completed_rounds: u32,

        #[arg(long)]
        json: bool,
    },
    /// Append rounds to an existing season
    Extend {
        #[arg(long)]
        season: Uuid,

        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_ROUNDS as i64))]
        rounds: u32,

        #[arg(long)]
        alternate: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "league_schedule={},scheduler={},storage={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Preview {
            teams,
            rounds,
            alternate,
            start_after,
            completed_rounds,
            json,
        } => {
            let start = start_after.map(|last_gameday| (last_gameday, completed_rounds));
            handle_preview(teams, rounds, alternate, start, json).await?;
        }
        Commands::Extend {
            season,
            rounds,
            alternate,
        } => {
            let database_url = cli.database_url.ok_or_else(|| {
                SchedulerError::ConfigError(
                    "--database-url or DATABASE_URL is required for extend".to_string(),
                )
            })?;
            handle_extend(season, rounds, alternate, &database_url).await?;
        }
    }

    Ok(())
}

async fn handle_preview(
    teams: PathBuf,
    rounds: u32,
    alternate: bool,
    start: Option<(i32, u32)>,
    json: bool,
) -> Result<(), SchedulerError> {
    tracing::info!("Loading teams from {}", teams.display());
    let roster = RosterFile::load(&teams).await?;

    let report = RosterValidator::validate(&roster)?;
    report.log_warnings();

    let drafts = match start {
        Some((last_gameday, completed_rounds)) => fixture_generator::extend_fixtures(
            roster.teams(),
            last_gameday,
            completed_rounds,
            rounds,
            alternate,
        )?,
        None => fixture_generator::generate_fixtures(roster.teams(), rounds, alternate)?,
    };

    tracing::info!(
        teams = roster.len(),
        rounds,
        gamedays = fixture_generator::gamedays_per_rotation(roster.len()) * rounds as usize,
        fixtures = drafts.len(),
        "Generated preview"
    );

    if json {
        println!("{}", render::render_json(&drafts)?);
    } else {
        print!("{}", render::render_text(&drafts));
    }

    Ok(())
}

async fn handle_extend(
    season_id: Uuid,
    rounds: u32,
    alternate: bool,
    database_url: &str,
) -> Result<(), SchedulerError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .map_err(storage::error::StorageError::from)?;

    let request = ExtendSeasonRequest {
        number_of_rounds: rounds,
        alternate_home_away: alternate,
    };

    let scheduled = season_scheduling::extend_season(&pool, season_id, &request).await?;

    match (scheduled.first_gameday, scheduled.last_gameday) {
        (Some(first), Some(last)) => tracing::info!(
            "Season '{}' extended with {} fixtures on gamedays {}-{}",
            scheduled.season.name,
            scheduled.fixtures_created,
            first,
            last
        ),
        _ => tracing::info!("Season '{}' unchanged", scheduled.season.name),
    }

    Ok(())
}
