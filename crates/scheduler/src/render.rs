use std::fmt::Write;

use storage::services::fixture_generator::MatchDraft;

/// Plain-text fixture list, one block per gameday.
pub fn render_text(drafts: &[MatchDraft]) -> String {
    let mut out = String::new();
    let mut current = None;

    for draft in drafts {
        if current != Some(draft.gameday) {
            if current.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "Gameday {}", draft.gameday);
            current = Some(draft.gameday);
        }

        let _ = writeln!(
            out,
            "  {} vs {}",
            draft.home_blanket.team_name, draft.away_blanket.team_name
        );
    }

    out
}

pub fn render_json(drafts: &[MatchDraft]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RosterFile;
    use storage::services::fixture_generator::generate_fixtures;

    fn drafts() -> Vec<MatchDraft> {
        let roster = RosterFile::from_json(
            r#"[{"name": "A"}, {"name": "B"}, {"name": "C"}, {"name": "D"}]"#,
        )
        .unwrap();
        generate_fixtures(roster.teams(), 1, false).unwrap()
    }

    #[test]
    fn test_text_groups_by_gameday() {
        let text = render_text(&drafts());

        assert_eq!(text.matches("Gameday ").count(), 3);
        assert_eq!(text.matches(" vs ").count(), 6);
        assert!(text.starts_with("Gameday 1\n"));
        assert!(text.contains("\nGameday 3\n"));
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn test_json_is_array_of_drafts() {
        let json = render_json(&drafts()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0]["gameday"], 1);
        assert_eq!(items[0]["status"], "pending");
    }
}
