pub mod common;
pub mod game;
pub mod league;
pub mod season;
pub mod team;
