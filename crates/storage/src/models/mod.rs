mod game;
mod league;
mod season;
mod team;

pub use game::{Blanket, Match, MatchStatus, Score};
pub use league::League;
pub use season::Season;
pub use team::Team;
