//! Round-robin fixture generation using the circle method.
//!
//! Slots `0..N-1` rotate around the pivot slot `N-1`. For odd team counts a bye
//! slot pads the field to an even size; pairings against it are dropped, which
//! leaves one team idle on every gameday.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Blanket, MatchStatus, Score, Team};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("A league needs at least two teams before a season can be scheduled (found {found})")]
    InsufficientTeams { found: usize },

    #[error("Number of rounds must be at least 1 (got {0})")]
    InvalidRounds(u32),

    #[error("Schedule would run past the last representable gameday (starting after {last_gameday})")]
    GamedayOverflow { last_gameday: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Anything that can take part in a schedule
pub trait RosterEntry {
    fn team_id(&self) -> Uuid;

    /// Presentation data captured into a match when the fixture is created
    fn blanket(&self, side: Side) -> Blanket;
}

impl RosterEntry for Team {
    fn team_id(&self) -> Uuid {
        self.team_id
    }

    fn blanket(&self, side: Side) -> Blanket {
        let kit = match side {
            Side::Home => self.home_kit.as_deref(),
            Side::Away => self.away_kit.as_deref(),
        };

        Blanket::snapshot(
            &self.name,
            kit,
            self.logo_url.as_deref(),
            self.coach_name.as_deref(),
        )
    }
}

/// A fixture that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchDraft {
    pub gameday: i32,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_blanket: Blanket,
    pub away_blanket: Blanket,
    pub score: Score,
    pub status: MatchStatus,
}

impl MatchDraft {
    fn new<T: RosterEntry>(gameday: i32, home: &T, away: &T) -> Self {
        Self {
            gameday,
            home_team_id: home.team_id(),
            away_team_id: away.team_id(),
            home_blanket: home.blanket(Side::Home),
            away_blanket: away.blanket(Side::Away),
            score: Score::default(),
            status: MatchStatus::Pending,
        }
    }
}

enum Slot<'a, T> {
    Team(&'a T),
    Bye,
}

/// Generate the full fixture list for a new season, starting at gameday 1.
///
/// Every pair of teams meets `number_of_rounds` times. With
/// `alternate_home_away`, every second rotation swaps home and away so that
/// consecutive meetings of the same pair change venue.
pub fn generate_fixtures<T: RosterEntry>(
    teams: &[T],
    number_of_rounds: u32,
    alternate_home_away: bool,
) -> Result<Vec<MatchDraft>, ScheduleError> {
    schedule(teams, number_of_rounds, alternate_home_away, 0, 0)
}

/// Generate more fixtures for a season whose last scheduled gameday is
/// `last_gameday`. Numbering continues at `last_gameday + 1`.
///
/// `completed_rotations` is how many rotations the season already played; it
/// keeps home/away alternation going where the existing fixtures left off.
pub fn extend_fixtures<T: RosterEntry>(
    teams: &[T],
    last_gameday: i32,
    completed_rotations: u32,
    number_of_rounds: u32,
    alternate_home_away: bool,
) -> Result<Vec<MatchDraft>, ScheduleError> {
    schedule(
        teams,
        number_of_rounds,
        alternate_home_away,
        last_gameday.max(0),
        completed_rotations,
    )
}

/// Number of fixtures a schedule for `team_count` teams produces
pub fn expected_fixture_count(team_count: usize, number_of_rounds: u32) -> usize {
    team_count * team_count.saturating_sub(1) / 2 * number_of_rounds as usize
}

/// Number of gamedays one full rotation takes, including the bye for odd counts
pub fn gamedays_per_rotation(team_count: usize) -> usize {
    padded_len(team_count).saturating_sub(1)
}

fn padded_len(team_count: usize) -> usize {
    team_count + team_count % 2
}

fn schedule<T: RosterEntry>(
    teams: &[T],
    number_of_rounds: u32,
    alternate_home_away: bool,
    last_gameday: i32,
    completed_rotations: u32,
) -> Result<Vec<MatchDraft>, ScheduleError> {
    if teams.len() < 2 {
        return Err(ScheduleError::InsufficientTeams { found: teams.len() });
    }
    if number_of_rounds < 1 {
        return Err(ScheduleError::InvalidRounds(number_of_rounds));
    }

    let total_gamedays = gamedays_per_rotation(teams.len()) as i64 * number_of_rounds as i64;
    if i64::from(last_gameday) + total_gamedays > i64::from(i32::MAX) {
        return Err(ScheduleError::GamedayOverflow { last_gameday });
    }
    let first_gameday = last_gameday + 1;

    let mut slots: Vec<Slot<'_, T>> = teams.iter().map(Slot::Team).collect();
    if slots.len() % 2 != 0 {
        slots.push(Slot::Bye);
    }

    let per_rotation = slots.len() - 1;
    let mut drafts = Vec::with_capacity(expected_fixture_count(teams.len(), number_of_rounds));

    for cycle in 0..number_of_rounds as usize {
        let flipped = alternate_home_away && (completed_rotations as usize + cycle) % 2 == 1;

        for round in 0..per_rotation {
            let gameday = first_gameday + (cycle * per_rotation + round) as i32;

            for (home, away) in round_pairings(slots.len(), round) {
                let (home, away) = if flipped { (away, home) } else { (home, away) };

                if let (Slot::Team(home), Slot::Team(away)) = (&slots[home], &slots[away]) {
                    drafts.push(MatchDraft::new(gameday, *home, *away));
                }
            }
        }
    }

    tracing::debug!(
        teams = teams.len(),
        rounds = number_of_rounds,
        first_gameday,
        completed_rotations,
        fixtures = drafts.len(),
        "Generated round-robin fixtures"
    );

    Ok(drafts)
}

/// Slot index pairs `(home, away)` for one gameday of a rotation over `n` slots
fn round_pairings(n: usize, round: usize) -> impl Iterator<Item = (usize, usize)> {
    let pivot = n - 1;

    (0..n / 2).map(move |slot| {
        let home = (round + slot) % pivot;
        let away = if slot == 0 {
            pivot
        } else {
            (pivot - slot + round) % pivot
        };
        (home, away)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use chrono::NaiveDate;

    use super::*;

    fn team(index: usize) -> Team {
        Team {
            team_id: Uuid::from_u128(index as u128 + 1),
            league_id: Uuid::from_u128(1000),
            name: format!("Team {}", index),
            home_kit: Some(format!("home-{}", index)),
            away_kit: Some(format!("away-{}", index)),
            logo_url: None,
            coach_name: Some(format!("Coach {}", index)),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    fn teams(count: usize) -> Vec<Team> {
        (0..count).map(team).collect()
    }

    fn pair_key(draft: &MatchDraft) -> (Uuid, Uuid) {
        if draft.home_team_id < draft.away_team_id {
            (draft.home_team_id, draft.away_team_id)
        } else {
            (draft.away_team_id, draft.home_team_id)
        }
    }

    fn pair_counts(drafts: &[MatchDraft]) -> HashMap<(Uuid, Uuid), u32> {
        let mut counts = HashMap::new();
        for draft in drafts {
            *counts.entry(pair_key(draft)).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_four_teams_single_round() {
        let drafts = generate_fixtures(&teams(4), 1, false).unwrap();

        assert_eq!(drafts.len(), 6);

        let counts = pair_counts(&drafts);
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 1));

        for gameday in 1..=3 {
            let on_day = drafts.iter().filter(|d| d.gameday == gameday).count();
            assert_eq!(on_day, 2, "gameday {}", gameday);
        }
    }

    #[test]
    fn test_five_teams_use_bye_internally() {
        let input = teams(5);
        let drafts = generate_fixtures(&input, 1, false).unwrap();

        assert_eq!(drafts.len(), 10);

        let ids: HashSet<Uuid> = input.iter().map(|t| t.team_id).collect();
        for draft in &drafts {
            assert!(ids.contains(&draft.home_team_id));
            assert!(ids.contains(&draft.away_team_id));
        }

        let gamedays: HashSet<i32> = drafts.iter().map(|d| d.gameday).collect();
        assert_eq!(gamedays, (1..=5).collect());

        // one team sits out each gameday
        for gameday in 1..=5 {
            let playing: HashSet<Uuid> = drafts
                .iter()
                .filter(|d| d.gameday == gameday)
                .flat_map(|d| [d.home_team_id, d.away_team_id])
                .collect();
            assert_eq!(playing.len(), 4);
        }
    }

    #[test]
    fn test_alternation_flips_second_meeting() {
        let drafts = generate_fixtures(&teams(4), 2, true).unwrap();

        assert_eq!(drafts.len(), 12);

        let mut orientations: HashMap<(Uuid, Uuid), Vec<(Uuid, i32)>> = HashMap::new();
        for draft in &drafts {
            orientations
                .entry(pair_key(draft))
                .or_default()
                .push((draft.home_team_id, draft.gameday));
        }

        assert_eq!(orientations.len(), 6);
        for meetings in orientations.values() {
            assert_eq!(meetings.len(), 2);
            assert_ne!(meetings[0].0, meetings[1].0);
            assert!(meetings[0].1 <= 3 && meetings[1].1 > 3);
        }
    }

    #[test]
    fn test_without_alternation_orientation_repeats() {
        let drafts = generate_fixtures(&teams(4), 2, false).unwrap();
        let (first, second) = drafts.split_at(6);

        for (a, b) in first.iter().zip(second) {
            assert_eq!(a.home_team_id, b.home_team_id);
            assert_eq!(a.away_team_id, b.away_team_id);
            assert_eq!(a.gameday + 3, b.gameday);
        }
    }

    #[test]
    fn test_two_teams_three_rounds() {
        let input = teams(2);
        let drafts = generate_fixtures(&input, 3, false).unwrap();

        assert_eq!(drafts.len(), 3);
        assert_eq!(
            drafts.iter().map(|d| d.gameday).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        for draft in &drafts {
            assert_eq!(
                pair_key(draft),
                (input[0].team_id, input[1].team_id)
            );
        }
    }

    #[test]
    fn test_rejects_too_few_teams() {
        assert_eq!(
            generate_fixtures(&teams(1), 1, false),
            Err(ScheduleError::InsufficientTeams { found: 1 })
        );
        assert_eq!(
            generate_fixtures(&teams(0), 1, false),
            Err(ScheduleError::InsufficientTeams { found: 0 })
        );
    }

    #[test]
    fn test_rejects_zero_rounds() {
        assert_eq!(
            generate_fixtures(&teams(4), 0, false),
            Err(ScheduleError::InvalidRounds(0))
        );
    }

    #[test]
    fn test_team_check_runs_before_rounds_check() {
        assert_eq!(
            generate_fixtures(&teams(1), 0, true),
            Err(ScheduleError::InsufficientTeams { found: 1 })
        );
    }

    #[test]
    fn test_schedule_properties_across_sizes() {
        for count in 2..=12 {
            let input = teams(count);
            let ids: HashSet<Uuid> = input.iter().map(|t| t.team_id).collect();
            let per_rotation = gamedays_per_rotation(count) as i32;

            for rounds in 1..=3u32 {
                for alternate in [false, true] {
                    let drafts = generate_fixtures(&input, rounds, alternate).unwrap();
                    let label = format!("{} teams, {} rounds, alternate={}", count, rounds, alternate);

                    assert_eq!(drafts.len(), expected_fixture_count(count, rounds), "{}", label);

                    let counts = pair_counts(&drafts);
                    assert_eq!(counts.len(), count * (count - 1) / 2, "{}", label);
                    assert!(counts.values().all(|&c| c == rounds), "{}", label);

                    let mut booked: HashSet<(i32, Uuid)> = HashSet::new();
                    for draft in &drafts {
                        assert_ne!(draft.home_team_id, draft.away_team_id, "{}", label);
                        assert!(ids.contains(&draft.home_team_id), "{}", label);
                        assert!(ids.contains(&draft.away_team_id), "{}", label);
                        assert!(
                            draft.gameday >= 1 && draft.gameday <= per_rotation * rounds as i32,
                            "{}: gameday {}",
                            label,
                            draft.gameday
                        );
                        assert!(booked.insert((draft.gameday, draft.home_team_id)), "{}", label);
                        assert!(booked.insert((draft.gameday, draft.away_team_id)), "{}", label);
                    }

                    assert!(
                        drafts.windows(2).all(|w| w[0].gameday <= w[1].gameday),
                        "{}",
                        label
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_round_home_counts_stay_close() {
        for count in 2..=12 {
            let drafts = generate_fixtures(&teams(count), 1, false).unwrap();
            let mut homes: HashMap<Uuid, usize> = HashMap::new();
            for draft in &drafts {
                *homes.entry(draft.home_team_id).or_insert(0) += 1;
            }

            // the pivot team is always away in slot 0; the rest are within one game of each other
            let rotating: Vec<usize> = teams(count)
                .iter()
                .take(gamedays_per_rotation(count))
                .map(|t| homes.get(&t.team_id).copied().unwrap_or(0))
                .collect();
            let max = rotating.iter().max().copied().unwrap_or(0);
            let min = rotating.iter().min().copied().unwrap_or(0);
            assert!(max - min <= 1, "{} teams: {:?}", count, rotating);
        }
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let input = teams(7);
        let first = generate_fixtures(&input, 2, true).unwrap();
        let second = generate_fixtures(&input, 2, true).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_drafts_start_pending_and_scoreless() {
        let drafts = generate_fixtures(&teams(3), 1, false).unwrap();

        for draft in &drafts {
            assert_eq!(draft.status, MatchStatus::Pending);
            assert_eq!(draft.score, Score { home: 0, away: 0 });
            assert!(draft.home_blanket.players.is_empty());
            assert!(draft.away_blanket.players.is_empty());
        }
    }

    #[test]
    fn test_blankets_use_side_specific_kits() {
        let input = teams(4);
        let drafts = generate_fixtures(&input, 1, false).unwrap();
        let by_id: HashMap<Uuid, &Team> = input.iter().map(|t| (t.team_id, t)).collect();

        for draft in &drafts {
            let home = by_id[&draft.home_team_id];
            let away = by_id[&draft.away_team_id];

            assert_eq!(draft.home_blanket.team_name, home.name);
            assert_eq!(draft.home_blanket.kit, home.home_kit);
            assert_eq!(draft.home_blanket.coach_name, home.coach_name);
            assert_eq!(draft.away_blanket.team_name, away.name);
            assert_eq!(draft.away_blanket.kit, away.away_kit);
        }
    }

    #[test]
    fn test_blanket_is_a_snapshot() {
        let mut input = teams(2);
        let drafts = generate_fixtures(&input, 1, false).unwrap();

        input[0].name = "Renamed".to_string();
        input[1].name = "Renamed too".to_string();

        assert!(drafts[0].home_blanket.team_name.starts_with("Team "));
        assert!(drafts[0].away_blanket.team_name.starts_with("Team "));
    }

    #[test]
    fn test_extension_continues_after_last_gameday() {
        let drafts = extend_fixtures(&teams(4), 6, 2, 1, false).unwrap();

        assert_eq!(drafts.len(), 6);
        let gamedays: HashSet<i32> = drafts.iter().map(|d| d.gameday).collect();
        assert_eq!(gamedays, (7..=9).collect());
    }

    #[test]
    fn test_extension_with_changed_roster() {
        let mut roster = teams(4);
        let original = generate_fixtures(&roster, 1, false).unwrap();
        let last = original.iter().map(|d| d.gameday).max().unwrap();

        roster.remove(1);
        roster.push(team(10));
        roster.push(team(11));

        let extension = extend_fixtures(&roster, last, 1, 1, false).unwrap();
        let removed = team(1).team_id;

        assert_eq!(extension.len(), expected_fixture_count(5, 1));
        assert!(extension.iter().all(|d| d.gameday > last));
        assert!(
            extension
                .iter()
                .all(|d| d.home_team_id != removed && d.away_team_id != removed)
        );
    }

    #[test]
    fn test_extension_from_empty_season_starts_at_one() {
        let drafts = extend_fixtures(&teams(2), 0, 0, 1, false).unwrap();
        assert_eq!(drafts[0].gameday, 1);
    }

    #[test]
    fn test_extension_validates_inputs() {
        assert_eq!(
            extend_fixtures(&teams(1), 3, 1, 1, false),
            Err(ScheduleError::InsufficientTeams { found: 1 })
        );
        assert_eq!(
            extend_fixtures(&teams(3), 3, 1, 0, false),
            Err(ScheduleError::InvalidRounds(0))
        );
    }

    #[test]
    fn test_extension_keeps_alternating_after_one_rotation() {
        let input = teams(4);
        let original = generate_fixtures(&input, 1, true).unwrap();
        let extension = extend_fixtures(&input, 3, 1, 1, true).unwrap();

        let first_home: HashMap<(Uuid, Uuid), Uuid> = original
            .iter()
            .map(|d| (pair_key(d), d.home_team_id))
            .collect();

        assert_eq!(extension.len(), 6);
        for draft in &extension {
            assert_ne!(first_home[&pair_key(draft)], draft.home_team_id);
        }
    }

    #[test]
    fn test_extension_after_two_rotations_matches_first_orientation() {
        let input = teams(4);
        let original = generate_fixtures(&input, 2, true).unwrap();
        let extension = extend_fixtures(&input, 6, 2, 1, true).unwrap();

        for (first, extra) in original[..6].iter().zip(&extension) {
            assert_eq!(first.home_team_id, extra.home_team_id);
            assert_eq!(first.gameday + 6, extra.gameday);
        }
    }

    #[test]
    fn test_extension_rejects_gameday_overflow() {
        assert_eq!(
            extend_fixtures(&teams(4), i32::MAX, 1, 1, false),
            Err(ScheduleError::GamedayOverflow { last_gameday: i32::MAX })
        );
        assert_eq!(
            extend_fixtures(&teams(4), i32::MAX - 2, 1, 1, false),
            Err(ScheduleError::GamedayOverflow { last_gameday: i32::MAX - 2 })
        );
    }

    #[test]
    fn test_extension_may_end_on_last_gameday() {
        let drafts = extend_fixtures(&teams(4), i32::MAX - 3, 1, 1, false).unwrap();
        assert_eq!(drafts.last().map(|d| d.gameday), Some(i32::MAX));
    }

    #[test]
    fn test_huge_round_count_is_rejected_before_allocating() {
        assert_eq!(
            generate_fixtures(&teams(12), u32::MAX, false),
            Err(ScheduleError::GamedayOverflow { last_gameday: 0 })
        );
    }

    #[test]
    fn test_round_pairings_cover_every_slot_once() {
        for n in (2..=16).step_by(2) {
            for round in 0..n - 1 {
                let mut seen = HashSet::new();
                for (home, away) in round_pairings(n, round) {
                    assert!(seen.insert(home));
                    assert!(seen.insert(away));
                }
                assert_eq!(seen.len(), n);
            }
        }
    }
}
