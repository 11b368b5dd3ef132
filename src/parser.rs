use csv::Reader;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::teams::{Level, Participant};

/// Errors produced while loading a roster file
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Csv(#[from] csv::Error),

    #[error("roster is missing a '{0}' column")]
    MissingColumn(&'static str),

    #[error("unknown level '{value}' for player '{name}' (row {row})")]
    UnknownLevel {
        name: String,
        value: String,
        row: usize,
    },
}

/// Parses a level tag, case-insensitively. The Portuguese tags used by older
/// rosters are accepted as aliases.
fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "beginner" | "iniciante" => Some(Level::Beginner),
        "intermediate" | "intermediario" | "intermediário" => Some(Level::Intermediate),
        "advanced" | "avancado" | "avançado" => Some(Level::Advanced),
        _ => None,
    }
}

/// Loads a roster from a CSV file with `name` and `level` columns.
///
/// Column positions are found by header name, so extra columns are ignored.
/// Rows with an empty name are skipped. Duplicate names (case-insensitive)
/// keep the last row, so a re-submitted player simply replaces the earlier
/// entry. A row with an unrecognized level tag aborts the whole load - a
/// misspelled level should surface as an error, not silently count as a
/// beginner.
pub fn load_roster<P: AsRef<Path>>(csv_path: P) -> Result<Vec<Participant>, RosterError> {
    let mut reader = Reader::from_path(csv_path)?;

    let headers = reader.headers()?;
    let name_col = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("name"))
        .ok_or(RosterError::MissingColumn("name"))?;
    let level_col = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("level"))
        .ok_or(RosterError::MissingColumn("level"))?;

    // Track entries by lowercased name for the replace-on-duplicate rule,
    // keeping first-seen order for the output
    let mut order: Vec<String> = Vec::new();
    let mut entries: HashMap<String, Participant> = HashMap::new();

    for (row_index, result) in reader.records().enumerate() {
        let record = result?;

        let name = record.get(name_col).unwrap_or("").trim().to_string();
        if name.is_empty() {
            continue; // Skip incomplete records
        }

        let level_value = record.get(level_col).unwrap_or("").trim();
        let level = parse_level(level_value).ok_or_else(|| RosterError::UnknownLevel {
            name: name.clone(),
            value: level_value.to_string(),
            row: row_index + 2, // 1-based, counting the header row
        })?;

        let key = name.to_lowercase();
        if !entries.contains_key(&key) {
            order.push(key.clone());
        }
        entries.insert(key, Participant { name, level });
    }

    Ok(order
        .into_iter()
        .filter_map(|key| entries.remove(&key))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(file_name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("volley-teams-{}", file_name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_players_in_file_order() {
        let path = write_temp(
            "basic.csv",
            "name,level\nAna,advanced\nBia,beginner\nCaio,intermediate\n",
        );
        let roster = load_roster(&path).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].name, "Ana");
        assert_eq!(roster[0].level, Level::Advanced);
        assert_eq!(roster[2].name, "Caio");
        assert_eq!(roster[2].level, Level::Intermediate);
    }

    #[test]
    fn duplicate_names_keep_the_last_row() {
        let path = write_temp(
            "dupes.csv",
            "name,level\nAna,beginner\nBia,beginner\nANA,advanced\n",
        );
        let roster = load_roster(&path).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "ANA");
        assert_eq!(roster[0].level, Level::Advanced);
        assert_eq!(roster[1].name, "Bia");
    }

    #[test]
    fn portuguese_level_tags_are_accepted() {
        let path = write_temp(
            "pt.csv",
            "name,level\nAna,iniciante\nBia,intermediario\nCaio,avancado\n",
        );
        let roster = load_roster(&path).unwrap();

        assert_eq!(roster[0].level, Level::Beginner);
        assert_eq!(roster[1].level, Level::Intermediate);
        assert_eq!(roster[2].level, Level::Advanced);
    }

    #[test]
    fn unknown_level_tags_abort_the_load() {
        let path = write_temp("bad-level.csv", "name,level\nAna,expert\n");
        let result = load_roster(&path);

        match result {
            Err(RosterError::UnknownLevel { name, value, row }) => {
                assert_eq!(name, "Ana");
                assert_eq!(value, "expert");
                assert_eq!(row, 2);
            }
            other => panic!("expected UnknownLevel, got {:?}", other),
        }
    }

    #[test]
    fn rows_without_a_name_are_skipped() {
        let path = write_temp("blank.csv", "name,level\nAna,beginner\n,advanced\n");
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn missing_columns_are_reported() {
        let path = write_temp("no-level.csv", "name,skill\nAna,beginner\n");
        assert!(matches!(
            load_roster(&path),
            Err(RosterError::MissingColumn("level"))
        ));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let path = write_temp(
            "extra.csv",
            "id,Name,phone,Level\n1,Ana,555,advanced\n",
        );
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster[0].name, "Ana");
        assert_eq!(roster[0].level, Level::Advanced);
    }
}
