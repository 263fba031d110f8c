pub mod leagues;
pub mod matches;
pub mod seasons;
pub mod teams;
