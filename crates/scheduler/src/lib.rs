pub mod error;
pub mod render;
pub mod roster;

pub use error::{Result, SchedulerError};
pub use roster::{RosterFile, RosterValidator, TeamEntry, ValidationReport};
