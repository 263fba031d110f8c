pub mod fixture_generator;
pub mod season_scheduling;
